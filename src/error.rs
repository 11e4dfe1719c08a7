//! Error types for the PropelMe backend
//!
//! This module provides comprehensive error handling using thiserror for
//! structured error definitions and anyhow for error propagation at the
//! binary edge.

use thiserror::Error;

/// Main error type for PropelMe operations
#[derive(Error, Debug)]
pub enum PropelError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Generative model API request failed
    #[error("LLM API error: {0}")]
    LlmApi(String),

    /// Event search API request failed
    #[error("Events API error: {0}")]
    EventsApi(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// An optional external integration is not configured
    #[error("Not configured: {0}")]
    NotConfigured(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed request payload (e.g. a contact without an id where
    /// interaction matching requires one)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for PropelMe operations
pub type Result<T> = std::result::Result<T, PropelError>;

/// Convert anyhow::Error to PropelError
impl From<anyhow::Error> for PropelError {
    fn from(err: anyhow::Error) -> Self {
        PropelError::Other(err.to_string())
    }
}
