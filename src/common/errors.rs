//! Error types for the application

use thiserror::Error;

/// Result type alias using our GatewayError
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Missing or malformed form input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unauthenticated or non-whitelisted principal
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// The messaging webhook refused the message or the call failed
    #[error("Dispatch failed with status {status}: {message}")]
    Dispatch { status: u16, message: String },

    /// The upstream market-data provider returned a non-success status
    #[error("Upstream returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    /// HTTP request errors
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Shorthand for a validation failure message
    pub fn validation(message: impl Into<String>) -> Self {
        GatewayError::Validation(message.into())
    }
}
