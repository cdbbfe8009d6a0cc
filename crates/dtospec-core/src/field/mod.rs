//! Field kinds and the capability interface they implement
//!
//! A field kind bundles the three artifacts one declaration produces:
//! a validation rule, a transform pair (wire <-> model) and a schema
//! fragment. The composer in [`crate::dto`] only talks to fields through
//! [`FieldKind`], so the artifacts of one field are always derived from the
//! same resolved configuration.
//!
//! The module is organized into:
//! - [`schema`]: schema fragment types shared by all kinds
//! - [`boolean`]: the boolean field kind (options, rule, transform, emitter)
//!
//! Copyright (c) 2025 Dtospec Team
//! Licensed under the Apache-2.0 license

pub mod boolean;
pub mod schema;

use crate::error::FieldValidationError;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

pub use boolean::{BooleanField, BooleanOptions, FieldConfiguration};
pub use schema::{SchemaFragment, SchemaType};

/// Validated, strongly-typed in-memory value of a field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModelValue {
    Boolean(bool),
}

impl ModelValue {
    /// The boolean payload, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ModelValue::Boolean(value) => Some(*value),
        }
    }

    /// Model value as plain JSON (no wire encoding applied)
    pub fn to_json(&self) -> Value {
        match self {
            ModelValue::Boolean(value) => Value::Bool(*value),
        }
    }
}

impl From<bool> for ModelValue {
    fn from(value: bool) -> Self {
        ModelValue::Boolean(value)
    }
}

impl fmt::Display for ModelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelValue::Boolean(value) => write!(f, "{}", value),
        }
    }
}

/// Capability interface implemented once per field kind
///
/// `candidate` is `None` when the key is absent from the payload. `parse`
/// must run before `validate`; [`FieldKind::accept`] does both in order.
pub trait FieldKind: fmt::Debug + Send + Sync {
    /// Short kind name used in declarations and logs
    fn kind(&self) -> &'static str;

    /// Whether an absent value is accepted
    fn is_optional(&self) -> bool;

    /// Wire -> model direction; values outside the accepted domain pass
    /// through unchanged so that `validate` rejects them
    fn parse(&self, raw: &Value) -> Value;

    /// Decide acceptance of a (parsed) candidate
    fn validate(
        &self,
        field: &str,
        candidate: Option<&Value>,
    ) -> Result<Option<ModelValue>, FieldValidationError>;

    /// Model -> wire direction
    fn serialize(&self, model: &ModelValue) -> Value;

    /// Schema fragment describing the accepted logical shape
    fn schema(&self) -> SchemaFragment;

    /// Parse then validate a raw candidate
    fn accept(
        &self,
        field: &str,
        raw: Option<&Value>,
    ) -> Result<Option<ModelValue>, FieldValidationError> {
        match raw {
            Some(raw) => {
                let parsed = self.parse(raw);
                self.validate(field, Some(&parsed))
            }
            None => self.validate(field, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_value_conversions() {
        let value = ModelValue::from(true);
        assert_eq!(value.as_bool(), Some(true));
        assert_eq!(value.to_json(), Value::Bool(true));
        assert_eq!(value.to_string(), "true");
    }

    #[test]
    fn test_model_value_serializes_untagged() {
        let json = serde_json::to_value(ModelValue::Boolean(false)).unwrap();
        assert_eq!(json, Value::Bool(false));
    }
}
