//! # Validation Errors

use thiserror::Error;

/// Result type for payload validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reasons a request body is rejected before it reaches the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Body is not valid JSON, or could not be read
    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    #[error("Request body must be an object, got {0}")]
    NotAnObject(&'static str),

    #[error("\"{0}\" is required")]
    MissingField(&'static str),

    #[error("\"{field}\" must be {expected}, got {actual}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("\"{0}\" is not allowed to be empty")]
    EmptyField(&'static str),
}

impl ValidationError {
    /// The offending field, if the failure is tied to one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::MissingField(field)
            | ValidationError::EmptyField(field)
            | ValidationError::TypeMismatch { field, .. } => Some(field),
            ValidationError::MalformedBody(_) | ValidationError::NotAnObject(_) => None,
        }
    }
}
