//! Error types for the rcpt-core library.

use thiserror::Error;

/// Main error type for the rcpt library.
///
/// Unmatched claim fields are not errors: they show up as empty detected
/// lists in the verdict. Only caller misuse ends up here.
#[derive(Error, Debug)]
pub enum RcptError {
    /// A caller passed an argument outside its valid domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No validator is registered for the requested client.
    #[error("unsupported receipt client: {0}")]
    UnsupportedClient(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the rcpt library.
pub type Result<T> = std::result::Result<T, RcptError>;
