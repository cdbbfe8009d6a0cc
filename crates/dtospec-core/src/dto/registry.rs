//! Named collection of declared DTO shapes

use super::descriptor::DtoDescriptor;
use crate::error::{Error, Result};
use std::sync::Arc;

/// DTO shapes in registration order, addressable by name
#[derive(Debug, Clone, Default)]
pub struct DtoRegistry {
    dtos: Vec<Arc<DtoDescriptor>>,
}

impl DtoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a shape; a shape with the same name is replaced in place
    pub fn register(&mut self, descriptor: DtoDescriptor) -> Arc<DtoDescriptor> {
        let descriptor = Arc::new(descriptor);
        match self.dtos.iter_mut().find(|dto| dto.name() == descriptor.name()) {
            Some(existing) => *existing = Arc::clone(&descriptor),
            None => self.dtos.push(Arc::clone(&descriptor)),
        }
        descriptor
    }

    pub fn get(&self, name: &str) -> Option<&Arc<DtoDescriptor>> {
        self.dtos.iter().find(|dto| dto.name() == name)
    }

    /// Look up a shape, failing with [`Error::UnknownDto`]
    pub fn require(&self, name: &str) -> Result<&Arc<DtoDescriptor>> {
        self.get(name).ok_or_else(|| Error::UnknownDto {
            name: name.to_string(),
        })
    }

    pub fn names(&self) -> Vec<&str> {
        self.dtos.iter().map(|dto| dto.name()).collect()
    }

    /// Borrowed view of every shape, ready for schema generation
    pub fn descriptors(&self) -> Vec<&DtoDescriptor> {
        self.dtos.iter().map(|dto| dto.as_ref()).collect()
    }

    pub fn len(&self) -> usize {
        self.dtos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dtos.is_empty()
    }
}
