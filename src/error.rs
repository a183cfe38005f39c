//! Error types for anonboard.

use thiserror::Error;

/// Common error type for the board service.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Database error.
    ///
    /// Wraps errors from the storage backend. Errors from sqlx are
    /// automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for BoardError {
    fn from(e: sqlx::Error) -> Self {
        BoardError::Database(e.to_string())
    }
}

/// Result type alias for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;
