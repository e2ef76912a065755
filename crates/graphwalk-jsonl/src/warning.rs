//! Non-fatal warnings produced while reading JSONL data.
//!
//! Resilient loading keeps going when a line cannot be used. Each skipped
//! line is described by a [`Warning`] and accumulated in a
//! [`WarningCollector`] that is shared with the stream producing records.
//!
//! ```
//! use graphwalk_jsonl::warning::{Warning, WarningCollector};
//!
//! let collector = WarningCollector::new();
//! collector.add(Warning::MalformedJson {
//!     line_number: 3,
//!     error: "expected value".to_string(),
//! });
//!
//! let warnings = collector.into_warnings();
//! assert_eq!(warnings[0].line_number(), 3);
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// A line that was skipped while reading JSONL data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The line is not valid JSON, or does not match the expected record shape.
    MalformedJson {
        /// 1-based line number.
        line_number: usize,
        /// Parser error message.
        error: String,
    },

    /// The line was skipped for any other reason (for example a read error).
    SkippedLine {
        /// 1-based line number.
        line_number: usize,
        /// Why the line was skipped.
        reason: String,
    },
}

impl Warning {
    /// Returns the line number associated with this warning.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::MalformedJson { line_number, .. } | Self::SkippedLine { line_number, .. } => {
                *line_number
            }
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedJson { line_number, error } => {
                write!(f, "line {line_number}: malformed JSON: {error}")
            }
            Self::SkippedLine {
                line_number,
                reason,
            } => write!(f, "line {line_number}: skipped: {reason}"),
        }
    }
}

impl std::error::Error for Warning {}

/// Shared, cloneable accumulator of [`Warning`]s.
///
/// Clones share the same underlying list, so a clone can be moved into a
/// stream while the caller keeps another handle to inspect the results.
#[derive(Debug, Clone, Default)]
pub struct WarningCollector {
    warnings: Arc<Mutex<Vec<Warning>>>,
}

impl WarningCollector {
    /// Creates a new empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock still holds a valid Vec; recover it rather than panic.
    fn lock(&self) -> MutexGuard<'_, Vec<Warning>> {
        self.warnings
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Records a warning.
    pub fn add(&self, warning: Warning) {
        self.lock().push(warning);
    }

    /// Returns the number of warnings recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the recorded warnings without consuming the collector.
    #[must_use]
    pub fn warnings(&self) -> Vec<Warning> {
        self.lock().clone()
    }

    /// Consumes the collector, returning the recorded warnings in insertion order.
    #[must_use]
    pub fn into_warnings(self) -> Vec<Warning> {
        match Arc::try_unwrap(self.warnings) {
            Ok(mutex) => mutex
                .into_inner()
                .unwrap_or_else(std::sync::PoisonError::into_inner),
            Err(shared) => shared
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .clone(),
        }
    }
}
