//! Validated DTO instances

use crate::field::ModelValue;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Model values of one DTO instance, keyed by field name
///
/// Unset fields are simply missing; there is no `null` placeholder.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DtoInstance {
    values: BTreeMap<String, ModelValue>,
}

impl DtoInstance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly for constructing expected instances
    pub fn with(mut self, field: impl Into<String>, value: impl Into<ModelValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<ModelValue>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn unset(&mut self, field: &str) -> Option<ModelValue> {
        self.values.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&ModelValue> {
        self.values.get(field)
    }

    pub fn is_set(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModelValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Model view as a JSON object (no wire encoding applied)
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .values
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        Value::Object(map)
    }
}
