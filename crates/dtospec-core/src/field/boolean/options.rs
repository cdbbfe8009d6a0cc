//! Boolean field options and their resolution
//!
//! [`BooleanOptions`] is what a DTO author writes; [`FieldConfiguration`] is
//! the immutable effective configuration every artifact of the field is
//! derived from.
//!
//! Copyright (c) 2025 Dtospec Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// User-supplied options for a boolean field
///
/// Every key is optional. When read from an untyped declaration, unknown keys
/// are rejected at declaration time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BooleanOptions {
    /// Also accept the strings `"true"` / `"false"` and emit them on output
    #[serde(default)]
    pub stringified: bool,

    /// Accept an absent value
    #[serde(default)]
    pub optional: bool,

    /// Restrict the accepted set to a single value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<bool>,

    /// Schema-only description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Schema-only deprecation marker
    #[serde(default)]
    pub deprecated: bool,
}

impl BooleanOptions {
    /// Create options with every key at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept and emit the string forms `"true"` / `"false"`
    pub fn stringified(mut self) -> Self {
        self.stringified = true;
        self
    }

    /// Accept an absent value
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Only accept `value`
    pub fn constant(mut self, value: bool) -> Self {
        self.constant = Some(value);
        self
    }

    /// Attach a schema description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the field deprecated in the schema
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Read options from an untyped declaration value
    ///
    /// `null` means "no options". Unknown keys and mistyped values are
    /// declaration errors attributed to `field`.
    pub fn from_value(field: &str, value: &Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        if !value.is_object() {
            return Err(Error::declaration(
                field,
                format!("boolean options must be an object, found {}", value),
            ));
        }
        serde_json::from_value(value.clone())
            .map_err(|e| Error::declaration(field, e.to_string()))
    }

    /// Normalize into the effective configuration
    pub fn resolve(self) -> FieldConfiguration {
        FieldConfiguration {
            optional: self.optional,
            constant: self.constant,
            stringified: self.stringified,
            description: self.description,
            deprecated: self.deprecated,
        }
    }
}

/// Effective configuration of a boolean field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfiguration {
    pub optional: bool,
    pub constant: Option<bool>,
    pub stringified: bool,
    pub description: Option<String>,
    pub deprecated: bool,
}

impl FieldConfiguration {
    /// Whether `value` is inside the accepted set
    pub fn admits(&self, value: bool) -> bool {
        self.constant.map_or(true, |constant| constant == value)
    }
}

impl From<BooleanOptions> for FieldConfiguration {
    fn from(options: BooleanOptions) -> Self {
        options.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = BooleanOptions::new().resolve();
        assert!(!config.optional);
        assert!(!config.stringified);
        assert_eq!(config.constant, None);
        assert!(config.admits(true));
        assert!(config.admits(false));
    }

    #[test]
    fn test_builder_composes() {
        let config = BooleanOptions::new().stringified().optional().constant(false).resolve();
        assert!(config.optional);
        assert!(config.stringified);
        assert_eq!(config.constant, Some(false));
        assert!(!config.admits(true));
        assert!(config.admits(false));
    }

    #[test]
    fn test_from_value_recognized_keys() {
        let options = BooleanOptions::from_value(
            "flag",
            &json!({"stringified": true, "optional": true, "constant": true}),
        )
        .unwrap();
        assert_eq!(options, BooleanOptions::new().stringified().optional().constant(true));
    }

    #[test]
    fn test_from_value_null_is_default() {
        let options = BooleanOptions::from_value("flag", &Value::Null).unwrap();
        assert_eq!(options, BooleanOptions::default());
    }

    #[test]
    fn test_from_value_rejects_unknown_key() {
        let err = BooleanOptions::from_value("flag", &json!({"strict": true})).unwrap_err();
        match err {
            Error::Declaration { field, message } => {
                assert_eq!(field, "flag");
                assert!(message.contains("unknown field `strict`"));
            }
            other => panic!("expected declaration error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_value_rejects_mistyped_constant() {
        let err = BooleanOptions::from_value("flag", &json!({"constant": "false"})).unwrap_err();
        assert!(matches!(err, Error::Declaration { .. }));
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = BooleanOptions::from_value("flag", &json!([true])).unwrap_err();
        assert!(err.to_string().contains("must be an object"));
    }
}
