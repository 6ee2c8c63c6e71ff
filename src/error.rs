//! Error types for lockgen
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Top-level lockgen error type
#[derive(Error, Debug)]
pub enum LockgenError {
    /// Manifest not found
    #[error("No package.json found at '{path}'")]
    ManifestNotFound { path: PathBuf },

    /// Manifest parse error
    #[error("Failed to parse '{path}': {source}")]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Lock file serialization error
    #[error("Failed to serialize lock file: {source}")]
    LockSerialize { source: serde_json::Error },

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),
}

impl LockgenError {
    /// Whether this error is the guarded missing-manifest case
    pub fn is_manifest_not_found(&self) -> bool {
        matches!(self, Self::ManifestNotFound { .. })
    }
}
