//! Custom error types for the common library
//!
//! This module defines the error taxonomy shared by the model bindings and
//! the tools built on top of them.

use chrono::ParseError as ChronoParseError;
use serde_json::Error as JsonError;
use thiserror::Error;

/// Custom error type for decoding and validating model payloads
#[derive(Error, Debug)]
pub enum ModelError {
    /// Textual payload is not a valid JSON document
    #[error("Payload parse error: {0}")]
    Parse(#[from] JsonError),

    /// Structured payload does not fit the requested shape
    #[error("Payload shape error: {0}")]
    Payload(#[source] JsonError),

    /// Payload decoded to something other than a JSON object
    #[error("Payload must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// A present field carries a value of the wrong JSON type
    #[error("Field `{field}` must be {expected}, found {found}")]
    FieldType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// Timestamp field is not valid RFC 3339
    #[error("Field `{field}` is not an RFC 3339 timestamp: {source}")]
    Timestamp {
        field: &'static str,
        #[source]
        source: ChronoParseError,
    },

    /// Request payload failed validation
    #[error("Invalid `{field}`: {message}")]
    Validation { field: &'static str, message: String },

    /// Configuration error
    #[error("Decode configuration error: {0}")]
    Configuration(String),
}

impl ModelError {
    /// Build a validation error for the given field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        ModelError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Whether this error came from the textual parse step
    pub fn is_parse(&self) -> bool {
        matches!(self, ModelError::Parse(_))
    }
}

/// Type alias for Result with ModelError
pub type ModelResult<T> = Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_from_json() {
        let err: ModelError = serde_json::from_str::<serde_json::Value>("not valid json")
            .unwrap_err()
            .into();
        assert!(err.is_parse());
        assert!(err.to_string().starts_with("Payload parse error"));
    }

    #[test]
    fn test_field_type_message() {
        let err = ModelError::FieldType {
            field: "id",
            expected: "a string",
            found: "a number",
        };
        assert_eq!(err.to_string(), "Field `id` must be a string, found a number");
        assert!(!err.is_parse());
    }

    #[test]
    fn test_payload_error_is_not_parse() {
        let json_err = serde_json::from_value::<String>(serde_json::json!(5)).unwrap_err();
        let err = ModelError::Payload(json_err);
        assert!(!err.is_parse());
        assert!(err.to_string().starts_with("Payload shape error"));
    }

    #[test]
    fn test_validation_helper() {
        let err = ModelError::validation("email", "Email is required");
        assert_eq!(err.to_string(), "Invalid `email`: Email is required");
    }
}
