//! Schema fragment types
//!
//! A fragment describes one property of an object schema. Required-ness is
//! carried alongside but is not serialized into the fragment itself; the
//! document assembler moves it into the containing object's `required` list.
//!
//! Copyright (c) 2025 Dtospec Team
//! Licensed under the Apache-2.0 license

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Logical JSON Schema type advertised for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Boolean,
    String,
    Number,
    Integer,
    Array,
    Object,
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaType::Boolean => write!(f, "boolean"),
            SchemaType::String => write!(f, "string"),
            SchemaType::Number => write!(f, "number"),
            SchemaType::Integer => write!(f, "integer"),
            SchemaType::Array => write!(f, "array"),
            SchemaType::Object => write!(f, "object"),
        }
    }
}

/// Schema contribution of a single field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaFragment {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,

    /// Whether the containing object lists this field as required
    #[serde(skip)]
    pub required: bool,
}

impl SchemaFragment {
    /// A required fragment of the given type with no other keywords
    pub fn of_type(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            enum_values: None,
            description: None,
            deprecated: false,
            required: true,
        }
    }
}
