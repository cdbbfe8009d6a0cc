//! Boolean field kind
//!
//! One [`BooleanOptions`] value is resolved into a [`FieldConfiguration`],
//! and the rule, transform pair and schema fragment are all derived from
//! that single configuration:
//!
//! - `options`: option keys and the config resolver
//! - `rule`: acceptance predicate and its uniform message
//! - `transform`: wire <-> model conversion
//! - `emitter`: schema fragment
//!
//! # Example
//!
//! ```
//! use dtospec_core::field::{BooleanField, BooleanOptions, FieldKind};
//! use serde_json::json;
//!
//! let field = BooleanField::new(BooleanOptions::new().stringified());
//! let model = field.accept("enabled", Some(&json!("true"))).unwrap();
//! assert_eq!(model.map(|m| field.serialize(&m)), Some(json!("true")));
//! ```
//!
//! Copyright (c) 2025 Dtospec Team
//! Licensed under the Apache-2.0 license

pub mod emitter;
pub mod options;
pub mod rule;
pub mod transform;


pub use options::{BooleanOptions, FieldConfiguration};
pub use rule::BooleanRule;
pub use transform::BooleanTransform;

use super::{FieldKind, ModelValue, SchemaFragment};
use crate::error::FieldValidationError;
use serde_json::Value;

/// A declared boolean field: configuration plus the artifacts derived from it
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanField {
    config: FieldConfiguration,
    rule: BooleanRule,
    transform: BooleanTransform,
}

impl BooleanField {
    /// Resolve `options` and derive the rule and transform pair
    pub fn new(options: BooleanOptions) -> Self {
        Self::from_config(options.resolve())
    }

    pub fn from_config(config: FieldConfiguration) -> Self {
        let rule = BooleanRule::new(&config);
        let transform = BooleanTransform::new(config.stringified);
        Self {
            config,
            rule,
            transform,
        }
    }

    pub fn config(&self) -> &FieldConfiguration {
        &self.config
    }
}

impl FieldKind for BooleanField {
    fn kind(&self) -> &'static str {
        "boolean"
    }

    fn is_optional(&self) -> bool {
        self.config.optional
    }

    fn parse(&self, raw: &Value) -> Value {
        self.transform.parse(raw)
    }

    fn validate(
        &self,
        field: &str,
        candidate: Option<&Value>,
    ) -> Result<Option<ModelValue>, FieldValidationError> {
        Ok(self.rule.check(field, candidate)?.map(ModelValue::Boolean))
    }

    fn serialize(&self, model: &ModelValue) -> Value {
        match model {
            ModelValue::Boolean(value) => self.transform.serialize(*value),
        }
    }

    fn schema(&self) -> SchemaFragment {
        emitter::emit_schema(&self.config)
    }
}
