//! Schema emitter for boolean fields
//!
//! The schema always advertises the logical `boolean` type. Stringified
//! fields accept string literals on the wire but the fragment does not
//! change.
//!
//! Copyright (c) 2025 Dtospec Team
//! Licensed under the Apache-2.0 license

use super::options::FieldConfiguration;
use crate::field::schema::{SchemaFragment, SchemaType};
use serde_json::Value;

/// Build the schema fragment for a boolean field
pub fn emit_schema(config: &FieldConfiguration) -> SchemaFragment {
    SchemaFragment {
        schema_type: SchemaType::Boolean,
        enum_values: config.constant.map(|constant| vec![Value::Bool(constant)]),
        description: config.description.clone(),
        deprecated: config.deprecated,
        required: !config.optional,
    }
}
