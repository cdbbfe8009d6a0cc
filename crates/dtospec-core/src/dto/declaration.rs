//! Untyped declaration documents
//!
//! Shapes can be declared from data instead of code, for example from a
//! YAML or JSON file:
//!
//! ```yaml
//! dtos:
//!   - name: Test
//!     fields:
//!       - name: booleanField
//!         kind: boolean
//!         options:
//!           stringified: true
//! ```
//!
//! Every problem in such a document is a declaration error: unknown keys at
//! any level, unknown field kinds, and unknown or mistyped option keys.
//!
//! Copyright (c) 2025 Dtospec Team
//! Licensed under the Apache-2.0 license

use super::descriptor::{DtoBuilder, DtoDescriptor};
use super::registry::DtoRegistry;
use crate::error::{Error, Result};
use crate::field::BooleanOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// Top-level declaration document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeclarationDocument {
    pub dtos: Vec<DtoDeclaration>,
}

/// Declaration of one DTO shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DtoDeclaration {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDeclaration>,
}

/// Declaration of one field; `options` is interpreted by the field kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDeclaration {
    pub name: String,
    pub kind: String,
    #[serde(default)]
    pub options: Value,
}

impl DeclarationDocument {
    /// Read a document from an already-parsed value
    pub fn from_value(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone()).map_err(|e| Error::declaration("$", e.to_string()))
    }

    /// Build every shape into a registry
    ///
    /// A DTO name appearing twice in one document is rejected.
    pub fn into_registry(self) -> Result<DtoRegistry> {
        let mut seen = HashSet::new();
        let mut registry = DtoRegistry::new();

        for dto in &self.dtos {
            if !seen.insert(dto.name.as_str()) {
                return Err(Error::declaration(
                    dto.name.clone(),
                    "DTO is declared more than once",
                ));
            }
            registry.register(dto.build()?);
        }

        tracing::debug!(dtos = registry.len(), "declaration document loaded");
        Ok(registry)
    }
}

impl DtoDeclaration {
    /// Build this declaration through the composer
    pub fn build(&self) -> Result<DtoDescriptor> {
        self.fields
            .iter()
            .try_fold(DtoBuilder::new(self.name.clone()), bind_field)?
            .build()
    }
}

fn bind_field(builder: DtoBuilder, field: &FieldDeclaration) -> Result<DtoBuilder> {
    match field.kind.as_str() {
        "boolean" => {
            let options = BooleanOptions::from_value(&field.name, &field.options)?;
            Ok(builder.boolean(field.name.clone(), options))
        }
        other => Err(Error::declaration(
            field.name.clone(),
            format!("unknown field kind '{}'", other),
        )),
    }
}
