/*
[INPUT]:  Error sources (HTTP, backend API, local validation, serialization)
[OUTPUT]: Structured error types with stable machine-readable kinds
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing the kind mapping
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Vaultic adapter
#[derive(Error, Debug)]
pub enum VaulticError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned an error response
    #[error("Backend error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Input rejected locally, before any backend call
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No valid session token is held; authenticate first
    #[error("Authentication required: no valid session token")]
    AuthenticationRequired,

    /// Backend reported the resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection timeout
    #[error("Connection timeout after {duration}s")]
    Timeout { duration: u64 },
}

/// Stable machine-readable error kinds surfaced in the tool envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    AuthenticationRequired,
    NotFound,
    Operational,
}

impl ErrorKind {
    /// Wire value carried in the envelope `error` field
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation_error",
            ErrorKind::AuthenticationRequired => "authentication_required",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Operational => "operational_error",
        }
    }
}

impl VaulticError {
    /// Collapse the variant onto its stable kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            VaulticError::Validation(_) => ErrorKind::Validation,
            VaulticError::AuthenticationRequired => ErrorKind::AuthenticationRequired,
            VaulticError::NotFound(_) => ErrorKind::NotFound,
            _ => ErrorKind::Operational,
        }
    }

    /// Check if the error was produced without contacting the backend
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            VaulticError::Validation(_) | VaulticError::AuthenticationRequired
        )
    }

    /// Create a backend error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        VaulticError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for Vaultic operations
pub type Result<T> = std::result::Result<T, VaulticError>;
