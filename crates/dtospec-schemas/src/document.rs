//! Schema document assembly
//!
//! Each DTO shape becomes one object schema. Field fragments are placed
//! under `properties` and their required flag is lifted into the object's
//! `required` list, in declaration order.
//!
//! Copyright (c) 2025 Dtospec Team
//! Licensed under the Apache-2.0 license

use crate::error::{SchemaError, SchemaResult};
use dtospec_core::{DtoDescriptor, SchemaFragment, SchemaType};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Object schema describing one DTO shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectSchema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    pub properties: BTreeMap<String, SchemaFragment>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl ObjectSchema {
    /// Assemble the object schema of a single shape
    pub fn from_descriptor(descriptor: &DtoDescriptor) -> Self {
        let mut properties = BTreeMap::new();
        let mut required = Vec::new();

        for binding in descriptor.fields() {
            let fragment = binding.kind().schema();
            if fragment.required {
                required.push(binding.name().to_string());
            }
            properties.insert(binding.name().to_string(), fragment);
        }

        Self {
            schema_type: SchemaType::Object,
            properties,
            required,
        }
    }

    pub fn to_value(&self) -> SchemaResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Schemas of several shapes keyed by shape name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SchemaDocument {
    schemas: BTreeMap<String, ObjectSchema>,
}

impl SchemaDocument {
    pub fn get(&self, name: &str) -> Option<&ObjectSchema> {
        self.schemas.get(name)
    }

    /// Look up a shape's schema, failing with [`SchemaError::UnknownDto`]
    pub fn require(&self, name: &str) -> SchemaResult<&ObjectSchema> {
        self.get(name).ok_or_else(|| SchemaError::UnknownDto {
            name: name.to_string(),
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn to_value(&self) -> SchemaResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Pretty-printed JSON text of the whole document
    pub fn to_json_string(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Generate the schema document for a set of shapes
///
/// Pure and deterministic: identical input produces byte-identical output.
/// When two shapes share a name the later one wins.
pub fn generate_schemas(descriptors: &[&DtoDescriptor]) -> SchemaDocument {
    let schemas = descriptors
        .iter()
        .map(|descriptor| {
            (
                descriptor.name().to_string(),
                ObjectSchema::from_descriptor(descriptor),
            )
        })
        .collect::<BTreeMap<_, _>>();

    tracing::debug!(dtos = schemas.len(), "generated schema document");
    SchemaDocument { schemas }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtospec_core::BooleanOptions;
    use serde_json::json;

    #[test]
    fn test_required_follows_declaration_order() {
        let dto = DtoDescriptor::builder("Order")
            .boolean("zeta", BooleanOptions::new())
            .boolean("alpha", BooleanOptions::new().optional())
            .boolean("beta", BooleanOptions::new())
            .build()
            .unwrap();

        let schema = ObjectSchema::from_descriptor(&dto);
        assert_eq!(schema.required, vec!["zeta", "beta"]);
        assert_eq!(schema.properties.len(), 3);
    }

    #[test]
    fn test_required_omitted_when_empty() {
        let dto = DtoDescriptor::builder("Loose")
            .boolean("flag", BooleanOptions::new().optional())
            .build()
            .unwrap();

        let value = ObjectSchema::from_descriptor(&dto).to_value().unwrap();
        assert_eq!(
            value,
            json!({"type": "object", "properties": {"flag": {"type": "boolean"}}})
        );
    }

    #[test]
    fn test_unknown_dto_lookup() {
        let document = generate_schemas(&[]);
        assert!(document.is_empty());
        assert!(matches!(
            document.require("Missing"),
            Err(SchemaError::UnknownDto { .. })
        ));
    }
}
