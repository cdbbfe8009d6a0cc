//! DTO shapes and the composer that declares their fields
//!
//! Copyright (c) 2025 Dtospec Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, InputError, Result};
use crate::field::{BooleanField, BooleanOptions, FieldKind};
use serde_json::{Map, Value};
use std::sync::Arc;

use super::instance::DtoInstance;

/// One declared field: its name and the artifacts bound to it
#[derive(Debug, Clone)]
pub struct FieldBinding {
    name: String,
    kind: Arc<dyn FieldKind>,
}

impl FieldBinding {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &dyn FieldKind {
        self.kind.as_ref()
    }
}

/// A declared DTO shape: fields in declaration order
#[derive(Debug, Clone)]
pub struct DtoDescriptor {
    name: String,
    fields: Vec<FieldBinding>,
}

impl DtoDescriptor {
    /// Start declaring a shape
    pub fn builder(name: impl Into<String>) -> DtoBuilder {
        DtoBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldBinding] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldBinding> {
        self.fields.iter().find(|binding| binding.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Validate a raw payload against this shape
    pub fn input(&self, raw: &Value) -> std::result::Result<DtoInstance, InputError> {
        super::validator::input(self, raw)
    }

    /// Serialize an instance of this shape to its wire form
    pub fn output(&self, instance: &DtoInstance) -> Map<String, Value> {
        super::serializer::output(self, instance)
    }
}

/// Composer for DTO shapes
///
/// Each call binds a field's rule, transform pair and schema fragment in one
/// step. Declaring a name twice replaces the earlier binding in place.
#[derive(Debug)]
pub struct DtoBuilder {
    name: String,
    fields: Vec<FieldBinding>,
}

impl DtoBuilder {
    /// Create a new composer for the shape `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Declare a field of any kind
    pub fn field<K>(self, name: impl Into<String>, kind: K) -> Self
    where
        K: FieldKind + 'static,
    {
        self.bind(name.into(), Arc::new(kind))
    }

    /// Declare a boolean field
    pub fn boolean(self, name: impl Into<String>, options: BooleanOptions) -> Self {
        self.field(name, BooleanField::new(options))
    }

    fn bind(mut self, name: String, kind: Arc<dyn FieldKind>) -> Self {
        if let Some(existing) = self.fields.iter_mut().find(|binding| binding.name == name) {
            tracing::debug!(dto = %self.name, field = %name, "redeclared field replaces earlier binding");
            existing.kind = kind;
        } else {
            tracing::debug!(dto = %self.name, field = %name, kind = kind.kind(), "declared field");
            self.fields.push(FieldBinding { name, kind });
        }
        self
    }

    /// Finish the declaration
    pub fn build(self) -> Result<DtoDescriptor> {
        if self.name.trim().is_empty() {
            return Err(Error::declaration("", "DTO name cannot be empty"));
        }
        if self.fields.iter().any(|binding| binding.name.is_empty()) {
            return Err(Error::declaration(self.name, "field name cannot be empty"));
        }

        Ok(DtoDescriptor {
            name: self.name,
            fields: self.fields,
        })
    }
}
