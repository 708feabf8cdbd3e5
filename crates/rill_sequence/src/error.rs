//! Error types for sequence construction.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

/// Result alias for fallible sequence operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for rill operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an invalid range error from the bounds the caller requested.
    #[must_use]
    pub fn invalid_range(start: i64, end: i64) -> Self {
        Self::new(ErrorKind::InvalidRange { start, end })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Range bounds that select no elements (empty or inverted).
    #[error("invalid range: bounds {start} to {end} select no elements")]
    InvalidRange {
        /// The requested start bound.
        start: i64,
        /// The requested end bound.
        end: i64,
    },
}
