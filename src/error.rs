//! Error types for gentable operations.
//!
//! This module defines [`GenTableError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Filesystem failures are never recovered: a partial scan is worse than
//!   no report, so every error propagates to the process boundary
//! - Use `anyhow::Error` (via `GenTableError::Other`) for unexpected errors
//! - All errors should name the path involved

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gentable operations.
#[derive(Debug, Error)]
pub enum GenTableError {
    /// The packages root does not exist or is not a directory.
    #[error("Packages directory not found: {path}")]
    PackagesDirNotFound { path: PathBuf },

    /// Recursive search below a package failed.
    #[error("Failed to traverse {path}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gentable operations.
pub type Result<T> = std::result::Result<T, GenTableError>;
