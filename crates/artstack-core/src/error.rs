//! Error types for the artstack catalog.

use thiserror::Error;

/// Result type alias using artstack's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for catalog operations.
///
/// A failed load is fatal for the current session: callers surface it as
/// "failed to load catalog" and do not retry automatically. Normalize,
/// query, and aggregate are total functions and never construct errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog document unreachable or unparsable
    #[error("Failed to load catalog: {0}")]
    Load(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
