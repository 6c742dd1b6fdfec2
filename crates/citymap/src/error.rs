//! Error types for citymap operations.

use citygraph::GraphError;
use std::io;
use thiserror::Error;

/// The error type for citymap operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The graph rejected an operation.
    ///
    /// Graph errors pass through unchanged so callers can match on them.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Snapshot file could not be parsed or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized Result type for citymap operations.
pub type Result<T> = std::result::Result<T, Error>;
