//! Core error types for the Foliotrack client.
//!
//! This module defines transport-agnostic error types. HTTP-specific failures
//! (from reqwest, envelope decoding, etc.) are converted to these types by the
//! connect layer before any store or service code sees them.

use chrono::ParseError as ChronoParseError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the client application.
///
/// This enum represents all possible errors that can occur in the client.
/// Transport-specific errors are wrapped in string form to keep this type
/// HTTP-library-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    /// A gateway request failed; displays as the underlying message so store
    /// error fields read cleanly in the UI.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The session can no longer be authenticated (refresh failed or was
    /// impossible). Stored credentials have already been cleared when this
    /// is returned.
    #[error("Session is no longer valid: {0}")]
    SessionInvalid(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Credential store error: {0}")]
    Credential(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors produced by the HTTP gateway.
///
/// The three variants mirror how a request can fail from the caller's point
/// of view: the request never reached the server, the server answered with an
/// error envelope, or the body could not be decoded into the expected shape.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No response was received (DNS failure, refused connection, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The server responded with an error envelope.
    #[error("{message}")]
    Status {
        status_code: u16,
        message: String,
        errors: Vec<FieldIssue>,
    },

    /// The response body did not match the expected envelope or data shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status associated with this error, if a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }

    /// A 4xx response carrying field-level validation issues.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ApiError::Status { status_code, errors, .. }
                if (400..500).contains(status_code) && !errors.is_empty()
        )
    }

    pub fn is_server(&self) -> bool {
        matches!(self, ApiError::Status { status_code, .. } if *status_code >= 500)
    }
}

/// A single field-level issue from a validation error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Credential(err.to_string())
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
