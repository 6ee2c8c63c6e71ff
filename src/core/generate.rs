//! The read-transform-write generation pass
//!
//! One invocation reads the manifest, derives the lock record, and
//! writes it out. There is no retry and no partial-write recovery;
//! every failure is terminal for the run. Nothing is written unless
//! the manifest parsed successfully.

use std::path::{Path, PathBuf};

use crate::core::lock::LockFile;
use crate::core::manifest::Manifest;
use crate::error::LockgenError;
use crate::infra::filesystem;

/// Options for lock file generation
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Also emit legacy npm v1-style top-level dependency maps
    pub legacy_deps: bool,
}

/// Result of a successful generation
#[derive(Debug)]
pub struct GenerateResult {
    /// Path to the written lock file
    pub output_path: PathBuf,
    /// Package name recorded in the lock file
    pub name: String,
    /// Package version recorded in the lock file
    pub version: String,
    /// Number of runtime dependencies mirrored
    pub dependency_count: usize,
    /// Number of development dependencies mirrored
    pub dev_dependency_count: usize,
}

/// Generate a lock file from the manifest at `manifest_path`
///
/// Overwrites any existing file at `output_path` without confirmation.
/// Errors are typed; the caller decides which ones to guard and which
/// to propagate.
pub fn generate(
    manifest_path: &Path,
    output_path: &Path,
    options: &GenerateOptions,
) -> Result<GenerateResult, LockgenError> {
    let manifest = Manifest::load(manifest_path)?;
    tracing::debug!(
        manifest = %manifest_path.display(),
        name = %manifest.name,
        "loaded manifest"
    );

    let lock = LockFile::from_manifest(&manifest, options.legacy_deps);
    let content = lock
        .to_json_pretty()
        .map_err(|e| LockgenError::LockSerialize { source: e })?;

    filesystem::write_file(output_path, &content)?;
    tracing::info!(output = %output_path.display(), "wrote lock file");

    Ok(GenerateResult {
        output_path: output_path.to_path_buf(),
        name: manifest.name,
        version: manifest.version,
        dependency_count: manifest.dependencies.len(),
        dev_dependency_count: manifest.dev_dependencies.len(),
    })
}
