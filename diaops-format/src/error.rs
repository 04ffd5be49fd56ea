//! Error types for diaops-format organized by processing stage.

use rust_decimal::Decimal;
use thiserror::Error;

/// Format pipeline error variants.
#[derive(Debug, Error)]
pub enum Error {
    /// A row or line failed to decode
    #[error(transparent)]
    MalformedRow(#[from] MalformedRowError),

    /// A segment interval ends before it starts
    #[error("segment ends before it starts: start {start}, end {end}")]
    InvalidInterval { start: Decimal, end: Decimal },

    /// Gap threshold supplied as negative
    #[error("gap threshold must be non-negative, got {0}")]
    InvalidThreshold(Decimal),
}

/// Row-level decode errors.
///
/// Raised when an input row lacks the required field count or contains a
/// non-decimal value where a timestamp is expected. Callers abort the whole
/// conversion on the first malformed row rather than emitting partial output.
#[derive(Debug, Error)]
pub enum MalformedRowError {
    /// Too few fields for the expected layout
    #[error("expected at least {expected} fields, got {got}")]
    MissingFields { expected: usize, got: usize },

    /// Timestamp field is not a valid decimal literal
    #[error("invalid timestamp {value:?}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    /// Lock column is not a boolean literal
    #[error("invalid lock column {0:?} (expected \"true\" or \"false\")")]
    InvalidLock(String),
}

/// Result type alias for diaops-format operations.
pub type Result<T> = std::result::Result<T, Error>;
