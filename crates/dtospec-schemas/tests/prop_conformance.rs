//! Property-based tests tying the validator to the generated schema
//!
//! For shapes without stringified fields, a payload restricted to declared
//! keys must be accepted by the validator exactly when it conforms to the
//! generated JSON Schema.

use dtospec_core::{BooleanOptions, DtoDescriptor};
use dtospec_schemas::{generate_schemas, ConformanceChecker};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

const FIELDS: [&str; 3] = ["alpha", "beta", "gamma"];

/// Strategy for generating non-stringified options
fn plain_options_strategy() -> impl Strategy<Value = BooleanOptions> {
    (any::<bool>(), proptest::option::of(any::<bool>())).prop_map(|(optional, constant)| {
        BooleanOptions {
            optional,
            constant,
            ..BooleanOptions::default()
        }
    })
}

/// Strategy for generating field candidates, `None` meaning absent
fn candidate_strategy() -> impl Strategy<Value = Option<Value>> {
    proptest::option::of(prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        Just(json!("true")),
        Just(json!("false")),
        any::<i32>().prop_map(|n| json!(n)),
        Just(json!([])),
        Just(json!({})),
        "[a-z]{0,6}".prop_map(Value::String),
    ])
}

fn shape(options: &[BooleanOptions]) -> DtoDescriptor {
    FIELDS
        .iter()
        .zip(options)
        .fold(DtoDescriptor::builder("Test"), |builder, (name, options)| {
            builder.boolean(*name, options.clone())
        })
        .build()
        .unwrap()
}

fn payload(candidates: &[Option<Value>]) -> Value {
    let object: Map<String, Value> = FIELDS
        .iter()
        .zip(candidates)
        .filter_map(|(name, candidate)| {
            candidate
                .clone()
                .map(|value| (name.to_string(), value))
        })
        .collect();
    Value::Object(object)
}

proptest! {
    /// Property: validator acceptance and schema conformance agree
    #[test]
    fn prop_validator_matches_schema(
        options in prop::collection::vec(plain_options_strategy(), 1..=3),
        candidates in prop::collection::vec(candidate_strategy(), 3)
    ) {
        let dto = shape(&options);
        let document = generate_schemas(&[&dto]);
        let checker = ConformanceChecker::from_document(&document, "Test").unwrap();

        let declared = &candidates[..options.len()];
        let raw = payload(declared);

        prop_assert_eq!(
            dto.input(&raw).is_ok(),
            checker.conforms(&raw),
            "payload {} disagrees", raw
        );
    }

    /// Property: serialized output of a non-stringified shape always conforms
    #[test]
    fn prop_output_conforms(
        options in prop::collection::vec(plain_options_strategy(), 1..=3),
        candidates in prop::collection::vec(candidate_strategy(), 3)
    ) {
        let dto = shape(&options);
        let raw = payload(&candidates[..options.len()]);
        if let Ok(instance) = dto.input(&raw) {
            let document = generate_schemas(&[&dto]);
            let checker = ConformanceChecker::from_document(&document, "Test").unwrap();
            prop_assert!(checker.conforms(&Value::Object(dto.output(&instance))));
        }
    }

    /// Property: non-object payloads are rejected by both sides
    #[test]
    fn prop_non_objects_rejected(options in plain_options_strategy(), value in any::<i64>()) {
        let dto = shape(&[options]);
        let checker = ConformanceChecker::from_document(&generate_schemas(&[&dto]), "Test").unwrap();
        for raw in [json!(value), json!([value]), Value::Null, json!("x")] {
            prop_assert!(dto.input(&raw).is_err());
            prop_assert!(!checker.conforms(&raw));
        }
    }
}
