//! Async JSONL (JSON Lines) support for graphwalk data files.
//!
//! Graph and lineage files are stored one JSON record per line. This crate
//! provides line-numbered reading, resilient loading that skips malformed
//! lines with a [`Warning`], and crash-safe atomic writes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod atomic;
pub mod error;
pub mod reader;
pub mod warning;
pub mod writer;

pub use atomic::{write_jsonl_atomic, write_jsonl_atomic_iter};
pub use error::{Error, Result};
pub use reader::{read_jsonl_resilient, JsonlReader};
pub use warning::{Warning, WarningCollector};
pub use writer::JsonlWriter;
