//! Error types for catalog generation.
//!
//! Follows ODF-REP: Library crates use `thiserror` for explicit error enums.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for catalog generation.
///
/// Only configuration and output failures reach the caller; per-file read
/// failures are absorbed by the description extractor.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Low-level I/O error tied to a path.
    #[error("IO error at {path}: {source}")]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Config file exists but could not be parsed.
    #[error("Invalid config {path}: {message}")]
    Config {
        /// Config file path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// Catalog could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
