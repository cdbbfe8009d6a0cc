//! Validation rule for boolean fields
//!
//! Copyright (c) 2025 Dtospec Team
//! Licensed under the Apache-2.0 license

use super::options::FieldConfiguration;
use super::transform::parse_literal;
use crate::error::FieldValidationError;
use serde_json::Value;

/// Expectation text shared by every boolean rejection
pub const EXPECTATION: &str = "a boolean value";

/// Acceptance predicate of a boolean field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanRule {
    config: FieldConfiguration,
}

impl BooleanRule {
    pub fn new(config: &FieldConfiguration) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Check one candidate; `None` means the key was absent
    ///
    /// Every failure yields the same message for a given field.
    pub fn check(
        &self,
        field: &str,
        candidate: Option<&Value>,
    ) -> Result<Option<bool>, FieldValidationError> {
        let Some(candidate) = candidate else {
            return if self.config.optional {
                Ok(None)
            } else {
                Err(FieldValidationError::must_be(field, EXPECTATION))
            };
        };

        let value = match candidate {
            Value::Bool(value) => *value,
            Value::String(s) if self.config.stringified => {
                parse_literal(s).ok_or_else(|| FieldValidationError::must_be(field, EXPECTATION))?
            }
            _ => return Err(FieldValidationError::must_be(field, EXPECTATION)),
        };

        if self.config.admits(value) {
            Ok(Some(value))
        } else {
            Err(FieldValidationError::must_be(field, EXPECTATION))
        }
    }
}
