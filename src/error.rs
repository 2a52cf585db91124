//! Error types for screenplay feature extraction.

use thiserror::Error;

/// Main error type for extraction operations.
///
/// Configuration problems (unknown or duplicated feature names, malformed
/// weights) are deliberately *not* errors: the spec parser reports them as
/// warnings and extraction proceeds with the remaining valid entries. The
/// variants here are caller contract violations and boundary failures.
#[derive(Error, Debug)]
pub enum Error {
    /// A line index outside the script was requested.
    #[error("line index {index} out of range for script with {line_count} lines")]
    LineOutOfRange { index: usize, line_count: usize },

    /// Feature rows of unequal length were handed to matrix assembly.
    #[error("ragged feature rows: row {row} has {actual} values, expected {expected}")]
    RaggedRows {
        row: usize,
        actual: usize,
        expected: usize,
    },

    /// The tokenized-script input could not be deserialized.
    #[error("tokenized script deserialization failed: {0}")]
    ScriptFormat(#[from] serde_json::Error),

    /// I/O failure while reading tokenized input or writing exported data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
