//! Error types for calnote.

use thiserror::Error;

/// Errors that can occur in calnote operations.
#[derive(Error, Debug)]
pub enum CalNoteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Result type alias for calnote operations.
pub type CalNoteResult<T> = Result<T, CalNoteError>;
