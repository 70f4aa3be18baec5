//! Error types for the role client

use thiserror::Error;

/// Result type alias for role client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the role client
#[derive(Error, Debug)]
pub enum Error {
    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Payload rejected (400/422 or client-side validation)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server error (5xx)
    #[error("Server error: {0}")]
    Server(String),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from an HTTP status code and response body
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            404 => Error::NotFound(message),
            400 | 422 => Error::Validation(message),
            500..=599 => Error::Server(message),
            _ => Error::Other(format!("HTTP {}: {}", status, message)),
        }
    }
}
