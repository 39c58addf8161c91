//! Central error types for brrr-bigo.
//!
//! Uses `thiserror` for ergonomic error definitions with automatic
//! `Display` and `From` implementations. Analysis itself never surfaces
//! these to callers of [`crate::analyze_complexity`]; they travel through
//! the internal stages and the configuration/CLI layers.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum BigOError {
    /// IO operation failed (without path context - prefer IoWithPath when path is available)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// IO operation failed with path context for better error messages
    #[error("IO error at {path}: {error}")]
    IoWithPath {
        error: std::io::Error,
        path: PathBuf,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Invalid analyzer configuration (bad keyword lists, tab width, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal fault while classifying source text
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Unrecognized complexity class notation
    #[error("Unknown complexity class: {0}")]
    InvalidClass(String),
}

/// Convenience type alias for Results using BigOError.
pub type Result<T> = std::result::Result<T, BigOError>;

impl BigOError {
    /// Create an IO error with path context.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let source = std::fs::read_to_string(path)
    ///     .map_err(|e| BigOError::io_with_path(e, path))?;
    /// ```
    #[inline]
    pub fn io_with_path(error: std::io::Error, path: impl AsRef<Path>) -> Self {
        BigOError::IoWithPath {
            error,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Shorthand for an [`BigOError::Analysis`] fault.
    #[inline]
    pub fn analysis(message: impl Into<String>) -> Self {
        BigOError::Analysis(message.into())
    }
}
