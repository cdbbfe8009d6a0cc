//! Dtospec Schemas - schema documents for declared DTO shapes
//!
//! This crate turns declared shapes into JSON Schema object documents and
//! checks payloads against them:
//! - **Document assembly**: [`generate_schemas`] maps every shape name to
//!   `{ "type": "object", "properties": {...}, "required": [...] }`
//! - **Conformance**: [`ConformanceChecker`] compiles a generated object
//!   schema with `jsonschema` and reports whether a payload conforms
//!
//! ## Quick Start
//!
//! ```rust
//! use dtospec_core::{BooleanOptions, DtoDescriptor};
//! use dtospec_schemas::generate_schemas;
//! use serde_json::json;
//!
//! let test = DtoDescriptor::builder("Test")
//!     .boolean("constantBooleanField", BooleanOptions::new().constant(false))
//!     .build()
//!     .unwrap();
//!
//! let document = generate_schemas(&[&test]);
//! assert_eq!(
//!     document.to_value().unwrap(),
//!     json!({
//!         "Test": {
//!             "type": "object",
//!             "properties": {
//!                 "constantBooleanField": {"type": "boolean", "enum": [false]}
//!             },
//!             "required": ["constantBooleanField"]
//!         }
//!     })
//! );
//! ```
//!
//! Copyright (c) 2025 Dtospec Team
//! Licensed under the Apache-2.0 license

pub mod conformance;
pub mod document;
pub mod error;

pub use conformance::ConformanceChecker;
pub use document::{generate_schemas, ObjectSchema, SchemaDocument};
pub use error::{SchemaError, SchemaResult};
