//! Error types for rechunk.
//!
//! A single error enum covers configuration, I/O, chunking and
//! serialization failures across the workspace.

use thiserror::Error;

/// Unified error type for rechunk.
///
/// All fallible functions return `Result<T, AppError>`.
/// Invalid input is reported, never panicked on.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors (invalid chunk size, malformed separators, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Chunking and batch processing errors
    #[error("Chunking error: {0}")]
    Chunking(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
