//! Error types for schema assembly and conformance checks
//!
//! Copyright (c) 2025 Dtospec Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Errors raised while assembling or compiling schema documents
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A generated object schema was rejected by the JSON Schema compiler
    #[error("Schema for '{name}' failed to compile: {message}")]
    Compile { name: String, message: String },

    /// A shape was requested from a document that does not contain it
    #[error("No schema for DTO '{name}'")]
    UnknownDto { name: String },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
