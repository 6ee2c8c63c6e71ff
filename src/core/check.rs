//! Manifest and lock file status reporting
//!
//! Loads the manifest and reports what generation would produce,
//! without writing anything.

use std::path::Path;

use crate::core::lock::LockFile;
use crate::core::manifest::Manifest;
use crate::error::LockgenError;
use crate::infra::filesystem;

/// State of the lock file relative to the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockStatus {
    /// No lock file present
    Missing,
    /// Lock file matches what generation would produce
    UpToDate,
    /// Lock file exists but differs from the manifest projection
    Stale,
}

/// Result of a check run
#[derive(Debug)]
pub struct CheckReport {
    /// Package name from the manifest (or its default)
    pub name: String,
    /// Package version from the manifest (or its default)
    pub version: String,
    /// Module type from the manifest (or its default)
    pub package_type: String,
    /// Number of runtime dependencies
    pub dependency_count: usize,
    /// Number of development dependencies
    pub dev_dependency_count: usize,
    /// Lock file state
    pub lock_status: LockStatus,
}

/// Check the manifest and compare the lock file against it
///
/// "Up to date" means regenerating would reproduce the current lock
/// file bytes. Comparison uses the default output shape; legacy maps
/// in an existing lock file make it read as stale.
pub fn check(manifest_path: &Path, lock_path: &Path) -> Result<CheckReport, LockgenError> {
    let manifest = Manifest::load(manifest_path)?;

    let expected = LockFile::from_manifest(&manifest, false)
        .to_json_pretty()
        .map_err(|e| LockgenError::LockSerialize { source: e })?;

    let lock_status = if lock_path.exists() {
        let current = filesystem::read_file(lock_path)?;
        if current == expected {
            LockStatus::UpToDate
        } else {
            LockStatus::Stale
        }
    } else {
        LockStatus::Missing
    };

    Ok(CheckReport {
        name: manifest.name,
        version: manifest.version,
        package_type: manifest.package_type,
        dependency_count: manifest.dependencies.len(),
        dev_dependency_count: manifest.dev_dependencies.len(),
        lock_status,
    })
}
