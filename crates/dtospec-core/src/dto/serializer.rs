//! Serialization interface: validated instance -> wire mapping
//!
//! Only declared fields are exposed, each through its own serialize
//! direction. Fields with no value are omitted, never written as `null`.

use super::descriptor::DtoDescriptor;
use super::instance::DtoInstance;
use serde_json::{Map, Value};

/// Serialize an instance through the shape's transform pairs
pub fn output(descriptor: &DtoDescriptor, instance: &DtoInstance) -> Map<String, Value> {
    let mut wire = Map::new();
    for binding in descriptor.fields() {
        if let Some(model) = instance.get(binding.name()) {
            wire.insert(binding.name().to_string(), binding.kind().serialize(model));
        }
    }
    tracing::trace!(dto = descriptor.name(), fields = wire.len(), "serialized instance");
    wire
}
