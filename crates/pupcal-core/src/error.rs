//! Core error type.
//!
//! Downstream crates wrap `CoreError` as one variant of their own enum rather
//! than re-declaring configuration failures.

use thiserror::Error;

/// Errors raised while loading or validating a [`ScheduleConfig`](crate::ScheduleConfig).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `pupcal-core`.
pub type CoreResult<T> = Result<T, CoreError>;
