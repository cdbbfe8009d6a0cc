//! JSON Schema conformance checks for generated object schemas
//!
//! A [`ConformanceChecker`] compiles one generated object schema with the
//! `jsonschema` crate and answers whether a raw payload conforms to it. The
//! generated schema does not forbid additional properties, so conformance
//! checks shape only; the whitelist is enforced by the validator alone.
//!
//! Copyright (c) 2025 Dtospec Team
//! Licensed under the Apache-2.0 license

use crate::document::{ObjectSchema, SchemaDocument};
use crate::error::{SchemaError, SchemaResult};
use jsonschema::Validator;
use serde_json::Value;

/// Compiled JSON Schema validator for one DTO shape
pub struct ConformanceChecker {
    name: String,
    validator: Validator,
}

impl std::fmt::Debug for ConformanceChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConformanceChecker")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl ConformanceChecker {
    /// Compile the object schema generated for `name`
    pub fn new(name: impl Into<String>, schema: &ObjectSchema) -> SchemaResult<Self> {
        let name = name.into();
        let schema = schema.to_value()?;
        let validator = jsonschema::validator_for(&schema).map_err(|e| SchemaError::Compile {
            name: name.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!(dto = %name, "compiled conformance checker");
        Ok(Self { name, validator })
    }

    /// Compile the checker for one shape of a schema document
    pub fn from_document(document: &SchemaDocument, name: &str) -> SchemaResult<Self> {
        Self::new(name, document.require(name)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `payload` conforms to the schema
    pub fn conforms(&self, payload: &Value) -> bool {
        self.validator.is_valid(payload)
    }

    /// Every schema violation for `payload`, as messages
    pub fn violations(&self, payload: &Value) -> Vec<String> {
        self.validator
            .iter_errors(payload)
            .map(|error| error.to_string())
            .collect()
    }
}
