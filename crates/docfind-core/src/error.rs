//! Error types for docfind operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used
//! across all docfind crates. Uses `thiserror` for derive macros.
//!
//! The central variant is [`Error::Schema`]: a search index must be
//! all-or-nothing correct, so any record that does not conform to the
//! schema fails the whole load. No partial index is ever produced.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur in docfind operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error, with the offending path when known.
    #[error("I/O error{}: {source}", path_suffix(.path))]
    Io {
        /// Underlying I/O error.
        source: std::io::Error,
        /// Path the operation was acting on, if any.
        path: Option<PathBuf>,
    },

    /// Input does not conform to the search index schema.
    #[error("Schema violation: {0}")]
    Schema(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Something was not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Create an I/O error without path context.
    pub fn io(source: std::io::Error) -> Self {
        Self::Io { source, path: None }
    }

    /// Create an I/O error carrying the offending path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::Io {
            source,
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Create a schema violation error.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Create a schema violation error pinned to a record position.
    pub fn schema_at(index: usize, msg: impl Into<String>) -> Self {
        Self::Schema(format!("record {}: {}", index, msg.into()))
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// True if this error is a schema violation.
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::io(source)
    }
}

/// Result type alias using docfind's Error type.
pub type Result<T> = std::result::Result<T, Error>;

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" ({})", p.display()),
        None => String::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================
