//! Validation interface: raw payload -> validated instance
//!
//! Whole-object validation is first-error-wins:
//! 1. a non-object payload is rejected outright
//! 2. keys that no field declares reject the object (whitelist); the first
//!    such key in payload order is reported
//! 3. fields are parsed then validated in declaration order, and the first
//!    failing field determines the single surfaced error
//!
//! Copyright (c) 2025 Dtospec Team
//! Licensed under the Apache-2.0 license

use super::descriptor::DtoDescriptor;
use super::instance::DtoInstance;
use crate::error::{Error, InputError, Result};
use serde_json::Value;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Validate one raw payload against a declared shape
pub fn input(descriptor: &DtoDescriptor, raw: &Value) -> std::result::Result<DtoInstance, InputError> {
    let Value::Object(object) = raw else {
        tracing::debug!(dto = descriptor.name(), "rejected non-object payload");
        return Err(InputError::NotAnObject);
    };

    if let Some(property) = object.keys().find(|key| !descriptor.contains(key)) {
        tracing::debug!(dto = descriptor.name(), property = %property, "rejected undeclared property");
        return Err(InputError::NotWhitelisted {
            property: property.clone(),
        });
    }

    let mut instance = DtoInstance::new();
    for binding in descriptor.fields() {
        let accepted = binding
            .kind()
            .accept(binding.name(), object.get(binding.name()))
            .map_err(|err| {
                tracing::debug!(dto = descriptor.name(), field = binding.name(), "field rejected");
                err
            })?;
        if let Some(value) = accepted {
            instance.set(binding.name(), value);
        }
    }

    tracing::debug!(dto = descriptor.name(), fields = instance.len(), "payload accepted");
    Ok(instance)
}

/// Asynchronous form of [`input`]
///
/// No individual field suspends; this exists so callers composing many
/// validations can stay inside async code.
pub async fn input_async(
    descriptor: &DtoDescriptor,
    raw: &Value,
) -> std::result::Result<DtoInstance, InputError> {
    input(descriptor, raw)
}

/// Validate many payloads concurrently, returning outcomes in input order
///
/// Must be called from within a tokio runtime.
pub async fn validate_batch(
    descriptor: Arc<DtoDescriptor>,
    payloads: Vec<Value>,
) -> Result<Vec<std::result::Result<DtoInstance, InputError>>> {
    let count = payloads.len();
    let mut tasks = JoinSet::new();

    for (index, payload) in payloads.into_iter().enumerate() {
        let descriptor = Arc::clone(&descriptor);
        tasks.spawn(async move { (index, input(&descriptor, &payload)) });
    }

    let mut outcomes: Vec<Option<std::result::Result<DtoInstance, InputError>>> =
        (0..count).map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (index, outcome) = joined.map_err(|e| Error::Runtime {
            message: format!("validation task failed: {}", e),
        })?;
        outcomes[index] = Some(outcome);
    }

    Ok(outcomes.into_iter().flatten().collect())
}
