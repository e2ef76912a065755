//! Error types for graphwalk operations.

use std::io;
use thiserror::Error;

/// The error type for graphwalk operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A vertex referenced by an operation is not in the graph.
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Storage error.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors raised while locating, reading, or writing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No `.graphwalk/` directory was found in the directory tree.
    #[error("Not a graphwalk repository (or any parent up to the filesystem root). Run 'graphwalk init' first")]
    NotInitialized,

    /// `graphwalk init` was run where a repository already exists.
    #[error("graphwalk is already initialized in this directory. Found existing '{0}'")]
    AlreadyInitialized(String),

    /// The configuration file could not be parsed or serialized.
    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised by the JSONL storage layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing a JSONL data file failed.
    #[error("JSONL error: {0}")]
    Jsonl(#[from] graphwalk_jsonl::Error),

    /// Saving would rewrite a data file that had unusable lines on load.
    #[error(
        "Refusing to rewrite {path}: {count} line(s) could not be loaded and would be lost. Fix or remove them first"
    )]
    UnloadedLines {
        /// The data file that would be rewritten.
        path: String,
        /// Number of load warnings for that file.
        count: usize,
    },
}

/// A specialized Result type for graphwalk operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds a [`Error::VertexNotFound`] from any displayable vertex id.
    pub(crate) fn vertex_not_found(vertex: &impl std::fmt::Display) -> Self {
        Self::VertexNotFound(vertex.to_string())
    }
}
