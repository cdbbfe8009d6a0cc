//! Tests for the composer and the whole-object interfaces
//!
//! Copyright (c) 2025 Dtospec Team
//! Licensed under the Apache-2.0 license

use super::*;
use crate::error::{Error, InputError};
use crate::field::{BooleanOptions, ModelValue};
use serde_json::{json, Value};
use std::sync::Arc;

fn two_flags() -> DtoDescriptor {
    DtoDescriptor::builder("Flags")
        .boolean("first", BooleanOptions::new())
        .boolean("second", BooleanOptions::new().stringified())
        .build()
        .unwrap()
}

#[test]
fn test_builder_keeps_declaration_order() {
    let dto = two_flags();
    let names: Vec<&str> = dto.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["first", "second"]);
    assert_eq!(dto.name(), "Flags");
}

#[test]
fn test_builder_redeclaration_replaces_in_place() {
    let dto = DtoDescriptor::builder("Flags")
        .boolean("first", BooleanOptions::new())
        .boolean("second", BooleanOptions::new())
        .boolean("first", BooleanOptions::new().optional())
        .build()
        .unwrap();

    assert_eq!(dto.fields().len(), 2);
    assert_eq!(dto.fields()[0].name(), "first");
    assert!(dto.fields()[0].kind().is_optional());
}

#[test]
fn test_builder_rejects_empty_names() {
    assert!(matches!(
        DtoDescriptor::builder("  ").build(),
        Err(Error::Declaration { .. })
    ));
    assert!(matches!(
        DtoDescriptor::builder("Flags").boolean("", BooleanOptions::new()).build(),
        Err(Error::Declaration { .. })
    ));
}

#[test]
fn test_first_declared_field_wins() {
    let dto = two_flags();
    let err = dto.input(&json!({"first": 1, "second": 2})).unwrap_err();
    assert_eq!(err.message(), "first must be a boolean value");

    let err = dto.input(&json!({"first": true, "second": 2})).unwrap_err();
    assert_eq!(err.message(), "second must be a boolean value");
}

#[test]
fn test_first_error_ignores_payload_key_order() {
    let dto = two_flags();
    let err = dto.input(&json!({"second": "bad", "first": "bad"})).unwrap_err();
    assert_eq!(err.message(), "first must be a boolean value");
}

#[test]
fn test_whitelist_rejects_undeclared_keys() {
    let dto = two_flags();
    let err = dto
        .input(&json!({"first": true, "second": true, "third": true}))
        .unwrap_err();
    assert_eq!(
        err,
        InputError::NotWhitelisted {
            property: "third".to_string()
        }
    );
    assert_eq!(err.message(), "property third should not exist");
}

#[test]
fn test_whitelist_reports_first_key_in_payload_order() {
    let dto = two_flags();
    let err = dto
        .input(&json!({"zeta": 1, "alpha": 1, "first": true}))
        .unwrap_err();
    assert_eq!(err.message(), "property zeta should not exist");

    let raw: Value = serde_json::from_str(r#"{"first": true, "omega": 1, "beta": 2}"#).unwrap();
    assert_eq!(dto.input(&raw).unwrap_err().message(), "property omega should not exist");
}

#[test]
fn test_whitelist_checked_before_fields() {
    let dto = two_flags();
    let err = dto.input(&json!({"first": "bad", "extra": 1})).unwrap_err();
    assert_eq!(err.message(), "property extra should not exist");
}

#[test]
fn test_non_object_payload() {
    let dto = two_flags();
    for raw in [Value::Null, json!([]), json!(true), json!("x")] {
        assert_eq!(dto.input(&raw).unwrap_err(), InputError::NotAnObject);
    }
}

#[test]
fn test_output_uses_each_fields_transform() {
    let dto = two_flags();
    let instance = dto.input(&json!({"first": false, "second": "true"})).unwrap();
    assert_eq!(instance.get("second"), Some(&ModelValue::Boolean(true)));

    let wire = dto.output(&instance);
    assert_eq!(Value::Object(wire), json!({"first": false, "second": "true"}));
}

#[test]
fn test_output_omits_unset_and_undeclared() {
    let dto = DtoDescriptor::builder("Optional")
        .boolean("flag", BooleanOptions::new().optional())
        .build()
        .unwrap();

    let instance = dto.input(&json!({})).unwrap();
    assert!(instance.is_empty());
    assert!(dto.output(&instance).is_empty());

    let stray = DtoInstance::new().with("unknown", true);
    assert!(dto.output(&stray).is_empty());
}

#[test]
fn test_validate_serialize_validate_is_stable() {
    let dto = two_flags();
    let first = dto.input(&json!({"first": true, "second": false})).unwrap();
    let wire = Value::Object(dto.output(&first));
    let second = dto.input(&wire).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_input_async_matches_sync() {
    let dto = two_flags();
    let raw = json!({"first": true, "second": "false"});
    assert_eq!(input_async(&dto, &raw).await, input(&dto, &raw));
}

#[tokio::test]
async fn test_validate_batch_preserves_order() {
    let dto = Arc::new(two_flags());
    let payloads = vec![
        json!({"first": true, "second": true}),
        json!({"first": "no", "second": true}),
        json!({"first": false, "second": "false"}),
        json!({"first": false, "second": false, "x": 1}),
    ];

    let outcomes = validate_batch(dto, payloads).await.unwrap();
    assert_eq!(outcomes.len(), 4);
    assert_eq!(
        outcomes[0],
        Ok(DtoInstance::new().with("first", true).with("second", true))
    );
    assert_eq!(
        outcomes[1].as_ref().unwrap_err().message(),
        "first must be a boolean value"
    );
    assert_eq!(
        outcomes[2],
        Ok(DtoInstance::new().with("first", false).with("second", false))
    );
    assert_eq!(
        outcomes[3].as_ref().unwrap_err().message(),
        "property x should not exist"
    );
}

#[tokio::test]
async fn test_batch_rejections_stay_per_payload() {
    let dto = Arc::new(two_flags());
    let payloads = vec![json!([]), json!({"first": 1, "second": true})];

    let outcomes = validate_batch(dto, payloads).await.unwrap();
    assert_eq!(outcomes[0], Err(InputError::NotAnObject));
    assert!(matches!(outcomes[1], Err(InputError::Field(_))));
}
