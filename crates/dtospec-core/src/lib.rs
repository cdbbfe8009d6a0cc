//! Dtospec Core - one field declaration drives validation, transformation and schema
//!
//! A DTO author declares each field once. From that single configuration the
//! crate derives three artifacts that cannot drift apart:
//!
//! - **Validation rule**: accepts or rejects a raw wire value with a uniform,
//!   field-keyed message
//! - **Transform pair**: parse (wire -> model) and serialize (model -> wire)
//! - **Schema fragment**: the JSON Schema property describing the field
//!
//! # Main Components
//!
//! - [`field`]: field kinds behind the [`FieldKind`] capability trait
//! - [`dto`]: the [`DtoBuilder`] composer, validation and serialization
//!   interfaces, registries and declaration documents
//! - [`error`]: declaration-time [`Error`] and request-time [`InputError`]
//!
//! # Example
//!
//! ```
//! use dtospec_core::{BooleanOptions, DtoDescriptor};
//! use serde_json::json;
//!
//! let test = DtoDescriptor::builder("Test")
//!     .boolean("constantBooleanField", BooleanOptions::new().constant(false))
//!     .build()
//!     .unwrap();
//!
//! let err = test.input(&json!({"constantBooleanField": true})).unwrap_err();
//! assert_eq!(err.message(), "constantBooleanField must be a boolean value");
//! ```

pub mod dto;
pub mod error;
pub mod field;

pub use dto::{
    DeclarationDocument, DtoBuilder, DtoDescriptor, DtoInstance, DtoRegistry, FieldBinding,
};
pub use error::{Error, FieldValidationError, InputError, Result};
pub use field::{
    BooleanField, BooleanOptions, FieldConfiguration, FieldKind, ModelValue, SchemaFragment,
    SchemaType,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
