//! Error types for pupcal-ics.

use thiserror::Error;

/// Errors that can occur when writing a calendar document.
#[derive(Debug, Error)]
pub enum IcsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("writer already finished")]
    Finished,
}

/// Alias for `Result<T, IcsError>`.
pub type IcsResult<T> = Result<T, IcsError>;
