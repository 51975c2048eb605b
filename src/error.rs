//! Error types for the plain-text seed format

use thiserror::Error;

/// Errors raised while parsing a seed pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern is empty or contains no valid rows")]
    Empty,

    #[error("row {row} has length {len}, expected {expected} (all rows must have the same length)")]
    InconsistentRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("invalid character '{ch}' at position ({row}, {col}); only '0' and '1' are allowed")]
    InvalidCharacter { ch: char, row: usize, col: usize },
}
