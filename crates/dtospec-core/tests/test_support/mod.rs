//! Shared test support utilities for integration tests

#![allow(dead_code)]

use dtospec_core::{DtoDescriptor, DtoInstance};
use serde_json::Value;

/// Wire form of an instance as a JSON value
pub fn wire(dto: &DtoDescriptor, instance: &DtoInstance) -> Value {
    Value::Object(dto.output(instance))
}

/// Assert that `payload` is rejected with exactly `message`
pub fn assert_rejected(dto: &DtoDescriptor, payload: &Value, message: &str) {
    match dto.input(payload) {
        Ok(instance) => panic!("payload {} was accepted as {:?}", payload, instance),
        Err(err) => assert_eq!(err.message(), message, "payload {}", payload),
    }
}
