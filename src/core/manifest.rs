//! Manifest (package.json) parsing
//!
//! The manifest is the input document. Only the five fields mirrored
//! into the lock file are modeled; everything else in the file is
//! ignored. Absent fields fall back to fixed defaults rather than
//! failing, matching npm's tolerance for sparse manifests.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::error::LockgenError;
use crate::infra::filesystem;

/// File name of the input manifest
pub const MANIFEST_FILE: &str = "package.json";

/// The project manifest (package.json)
///
/// Dependency map values are opaque: version specifiers are carried as
/// whatever JSON value the manifest holds, and key order is preserved
/// from the source document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    /// Package name
    #[serde(default = "default_name")]
    pub name: String,

    /// Package version
    #[serde(default = "default_version")]
    pub version: String,

    /// Module type (module, commonjs)
    #[serde(rename = "type", default = "default_package_type")]
    pub package_type: String,

    /// Runtime dependencies (name -> version specifier)
    #[serde(default)]
    pub dependencies: Map<String, Value>,

    /// Development dependencies (name -> version specifier)
    #[serde(rename = "devDependencies", default)]
    pub dev_dependencies: Map<String, Value>,
}

fn default_name() -> String {
    "project".to_string()
}

fn default_version() -> String {
    "0.0.0".to_string()
}

fn default_package_type() -> String {
    "module".to_string()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            package_type: default_package_type(),
            dependencies: Map::new(),
            dev_dependencies: Map::new(),
        }
    }
}

impl Manifest {
    /// Load manifest from file path
    ///
    /// A missing file is reported as [`LockgenError::ManifestNotFound`]
    /// so callers can decide whether to guard or propagate it.
    pub fn load(path: &Path) -> Result<Self, LockgenError> {
        if !path.exists() {
            return Err(LockgenError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = filesystem::read_file(path)?;
        Self::from_json(&content).map_err(|e| LockgenError::ManifestParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Parse manifest from a JSON string
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}
