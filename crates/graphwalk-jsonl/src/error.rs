//! Error types for graphwalk-jsonl operations.

use std::io;
use thiserror::Error;

/// The error type for graphwalk-jsonl operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading or writing.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error at line {line}: {source}")]
    Json {
        /// 1-based line number of the offending record (0 when writing).
        line: usize,
        /// The underlying serde_json error.
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn json_at(line: usize, source: serde_json::Error) -> Self {
        Self::Json { line, source }
    }
}

/// A specialized Result type for graphwalk-jsonl operations.
pub type Result<T> = std::result::Result<T, Error>;
