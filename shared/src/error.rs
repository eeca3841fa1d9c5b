//! Error types for the ingestion API.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Raised when a record or request cannot be constructed from the values given.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The payload is missing a required field, has a field of the wrong type,
    /// or carries a malformed value.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// A field that must hold a UUID does not.
    #[error("field `{field}` is not a valid UUID: {value:?}")]
    InvalidUuid { field: &'static str, value: String },

    /// A request body failed its field rules.
    #[error("invalid request: {0}")]
    Request(String),
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        ValidationError::InvalidPayload(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errs: validator::ValidationErrors) -> Self {
        ValidationError::Request(errs.to_string())
    }
}

/// Errors that can occur while serving ingestion API requests.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// AWS SDK error
    #[error("AWS error: {0}")]
    Aws(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The engine answered, but not with something we can use
    #[error("Engine error: {0}")]
    Engine(String),

    /// Not found error
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            Error::NotFound(_) => 404,
            Error::Aws(_) | Error::Engine(_) => 502,
            _ => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err: Error = ValidationError::Request("raw_text: length".to_string()).into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(Error::NotFound("route".to_string()).status_code(), 404);
        assert_eq!(Error::Engine("bad payload".to_string()).status_code(), 502);
        assert_eq!(Error::Internal("boom".to_string()).status_code(), 500);
    }

    #[test]
    fn test_invalid_uuid_message() {
        let err = ValidationError::InvalidUuid {
            field: "document_id",
            value: "not-a-uuid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "field `document_id` is not a valid UUID: \"not-a-uuid\""
        );
    }
}
