//! Core error type for fontmerge operations
//!
//! Provides the `CoreError` enum that wraps the error types of the different
//! modules. The tag engine itself never fails; errors come from document
//! structure problems and from loading font files.
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling (no `anyhow` in the library)
//! - Anomalies inside subtitle text degrade to documented defaults instead
//! - Keep enough context (paths, line numbers) for user-facing messages

use crate::parser::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fontmerge core operations
#[derive(Debug, Error)]
pub enum CoreError {
    /// Script structure could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A font file or directory could not be read
    #[error("failed to read font source {}: {source}", path.display())]
    FontSource {
        /// File or directory that failed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A path given as a font directory is not a directory
    #[error("font path {} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

impl CoreError {
    /// Create a font source error from an I/O failure
    pub fn font_source(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FontSource {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, CoreError>;
