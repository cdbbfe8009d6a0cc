//! DTO shapes, the composer, and the validation / serialization interfaces
//!
//! The module is organized into:
//! - `descriptor`: [`DtoDescriptor`] and the [`DtoBuilder`] composer
//! - `instance`: validated [`DtoInstance`] values
//! - `validator`: raw payload -> instance (first-error-wins, whitelist)
//! - `serializer`: instance -> wire mapping
//! - `registry`: named collections of shapes
//! - `declaration`: shapes declared from JSON/YAML documents
//!
//! # Example
//!
//! ```
//! use dtospec_core::dto::{DtoDescriptor, DtoInstance};
//! use dtospec_core::field::BooleanOptions;
//! use serde_json::json;
//!
//! let test = DtoDescriptor::builder("Test")
//!     .boolean("booleanField", BooleanOptions::new().stringified())
//!     .build()
//!     .unwrap();
//!
//! let instance = test.input(&json!({"booleanField": "true"})).unwrap();
//! assert_eq!(instance, DtoInstance::new().with("booleanField", true));
//! assert_eq!(test.output(&instance)["booleanField"], json!("true"));
//! ```
//!
//! Copyright (c) 2025 Dtospec Team
//! Licensed under the Apache-2.0 license

pub mod declaration;
pub mod descriptor;
pub mod instance;
pub mod registry;
pub mod serializer;
pub mod validator;

#[cfg(test)]
mod tests;

pub use declaration::{DeclarationDocument, DtoDeclaration, FieldDeclaration};
pub use descriptor::{DtoBuilder, DtoDescriptor, FieldBinding};
pub use instance::DtoInstance;
pub use registry::DtoRegistry;
pub use serializer::output;
pub use validator::{input, input_async, validate_batch};
