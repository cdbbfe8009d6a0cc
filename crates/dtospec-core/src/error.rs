//! Error types for the dtospec core library
//!
//! Two layers of failure exist and they never mix:
//! - Declaration time: [`Error`], raised while DTO shapes are being declared
//!   (unknown option keys, unknown field kinds, empty names). These are
//!   programmer errors and surface immediately.
//! - Request time: [`InputError`], the single rejection produced when a raw
//!   payload is validated against a declared shape. Field-level failures are
//!   carried by [`FieldValidationError`].

use thiserror::Error;

/// Main error type for declaration-time and orchestration failures
#[derive(Error, Debug)]
pub enum Error {
    /// A field or DTO declaration is invalid
    #[error("Declaration error: {field} - {message}")]
    Declaration {
        field: String,
        message: String,
    },

    /// A DTO shape was requested by name but never declared
    #[error("Unknown DTO: {name}")]
    UnknownDto {
        name: String,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// A validation task could not be joined
    #[error("Runtime error: {message}")]
    Runtime {
        message: String,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a declaration error for a field
    pub fn declaration(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Declaration {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Rejection of a single field value
///
/// The message is uniform per field: wrong type, wrong string
/// form and wrong constant all produce the same text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FieldValidationError {
    /// Name of the rejected field
    pub field: String,
    /// Human-readable message, `"<field> must be <expectation>"`
    pub message: String,
}

impl FieldValidationError {
    /// Build the `"<field> must be <expectation>"` message
    pub fn must_be(field: impl Into<String>, expectation: &str) -> Self {
        let field = field.into();
        let message = format!("{} must be {}", field, expectation);
        Self { field, message }
    }
}

/// The single error surfaced by the validation interface for one payload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A declared field rejected its value
    #[error(transparent)]
    Field(#[from] FieldValidationError),

    /// The payload carries a key no field declares
    #[error("property {property} should not exist")]
    NotWhitelisted {
        property: String,
    },

    /// The payload is not an object at all
    #[error("an unknown value was passed to the validate function")]
    NotAnObject,
}

impl InputError {
    /// The single human-readable message for this rejection
    pub fn message(&self) -> String {
        self.to_string()
    }
}
