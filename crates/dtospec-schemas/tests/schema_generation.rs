//! Schema document generation for declared shapes

use dtospec_core::{BooleanOptions, DeclarationDocument, DtoDescriptor};
use dtospec_schemas::generate_schemas;
use pretty_assertions::assert_eq;
use serde_json::json;

fn single(name: &str, field: &str, options: BooleanOptions) -> DtoDescriptor {
    DtoDescriptor::builder(name)
        .boolean(field, options)
        .build()
        .unwrap()
}

#[test]
fn test_normal_schema() {
    let test = single("Test", "booleanField", BooleanOptions::new());
    assert_eq!(
        generate_schemas(&[&test]).to_value().unwrap(),
        json!({
            "Test": {
                "type": "object",
                "properties": {
                    "booleanField": {"type": "boolean"}
                },
                "required": ["booleanField"]
            }
        })
    );
}

#[test]
fn test_stringified_schema_is_still_boolean() {
    let test = single("Test", "booleanField", BooleanOptions::new().stringified());
    assert_eq!(
        generate_schemas(&[&test]).to_value().unwrap(),
        json!({
            "Test": {
                "type": "object",
                "properties": {
                    "booleanField": {"type": "boolean"}
                },
                "required": ["booleanField"]
            }
        })
    );
}

#[test]
fn test_stringified_optional_schema() {
    let test = single(
        "Test",
        "booleanField",
        BooleanOptions::new().stringified().optional(),
    );
    assert_eq!(
        generate_schemas(&[&test]).to_value().unwrap(),
        json!({
            "Test": {
                "type": "object",
                "properties": {
                    "booleanField": {"type": "boolean"}
                }
            }
        })
    );
}

#[test]
fn test_constant_schema() {
    let test = single(
        "Test",
        "constantBooleanField",
        BooleanOptions::new().constant(false),
    );
    assert_eq!(
        generate_schemas(&[&test]).to_value().unwrap(),
        json!({
            "Test": {
                "type": "object",
                "properties": {
                    "constantBooleanField": {"type": "boolean", "enum": [false]}
                },
                "required": ["constantBooleanField"]
            }
        })
    );
}

#[test]
fn test_schema_only_options() {
    let test = single(
        "Flags",
        "legacy",
        BooleanOptions::new()
            .optional()
            .description("Old toggle")
            .deprecated(),
    );
    assert_eq!(
        generate_schemas(&[&test]).to_value().unwrap(),
        json!({
            "Flags": {
                "type": "object",
                "properties": {
                    "legacy": {
                        "type": "boolean",
                        "description": "Old toggle",
                        "deprecated": true
                    }
                }
            }
        })
    );
}

#[test]
fn test_multiple_shapes_from_declarations() {
    let registry = DeclarationDocument::from_value(&json!({
        "dtos": [
            {"name": "B", "fields": [{"name": "b", "kind": "boolean", "options": {"optional": true}}]},
            {"name": "A", "fields": [{"name": "a", "kind": "boolean", "options": {"constant": true}}]}
        ]
    }))
    .unwrap()
    .into_registry()
    .unwrap();

    let document = generate_schemas(&registry.descriptors());
    assert_eq!(document.len(), 2);
    assert_eq!(document.names().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(
        document.to_value().unwrap(),
        json!({
            "A": {
                "type": "object",
                "properties": {"a": {"type": "boolean", "enum": [true]}},
                "required": ["a"]
            },
            "B": {
                "type": "object",
                "properties": {"b": {"type": "boolean"}}
            }
        })
    );
}

#[test]
fn test_generation_is_deterministic() {
    let first = DtoDescriptor::builder("Mixed")
        .boolean("one", BooleanOptions::new())
        .boolean("two", BooleanOptions::new().stringified().optional())
        .boolean("three", BooleanOptions::new().constant(true))
        .build()
        .unwrap();
    let second = first.clone();

    let a = generate_schemas(&[&first]).to_json_string().unwrap();
    let b = generate_schemas(&[&second]).to_json_string().unwrap();
    assert_eq!(a, b);
}
