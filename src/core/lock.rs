//! Lock file (package-lock.json) derivation
//!
//! The lock file is a fixed-shape stub: a `lockfileVersion: 3`
//! document whose `packages` map holds a single root entry keyed by
//! the empty string, mirroring the manifest fields. It records no
//! resolved versions and no integrity hashes.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::core::manifest::Manifest;

/// File name of the generated lock file
pub const LOCK_FILE: &str = "package-lock.json";

/// Lock file format version (npm v7+ schema)
pub const LOCKFILE_VERSION: u32 = 3;

/// Lock file structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LockFile {
    /// Package name
    pub name: String,

    /// Package version
    pub version: String,

    /// Lock file format version (always 3)
    #[serde(rename = "lockfileVersion")]
    pub lockfile_version: u32,

    /// Always true in this schema
    pub requires: bool,

    /// Module type
    #[serde(rename = "type")]
    pub package_type: String,

    /// Package entries; only the root entry (key "") is ever present
    pub packages: Packages,

    /// Legacy npm v1-style top-level dependency map (pinned versions)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Map<String, Value>>,

    /// Legacy npm v1-style top-level devDependency map
    #[serde(
        rename = "devDependencies",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub dev_dependencies: Option<Map<String, Value>>,
}

/// The `packages` map of the lock file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Packages {
    /// Root package entry, keyed by the empty string
    #[serde(rename = "")]
    pub root: RootPackage,
}

/// The root package entry, a shallow copy of the manifest fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RootPackage {
    /// Package name
    pub name: String,

    /// Package version
    pub version: String,

    /// Module type
    #[serde(rename = "type")]
    pub package_type: String,

    /// Runtime dependencies, copied verbatim
    #[serde(default)]
    pub dependencies: Map<String, Value>,

    /// Development dependencies, copied verbatim
    #[serde(rename = "devDependencies", default)]
    pub dev_dependencies: Map<String, Value>,
}

impl LockFile {
    /// Derive a lock file from a manifest
    ///
    /// The root entry is a copy-or-default projection of the manifest.
    /// With `legacy_deps`, top-level dependency maps with pinned
    /// versions are appended as well.
    pub fn from_manifest(manifest: &Manifest, legacy_deps: bool) -> Self {
        let root = RootPackage {
            name: manifest.name.clone(),
            version: manifest.version.clone(),
            package_type: manifest.package_type.clone(),
            dependencies: manifest.dependencies.clone(),
            dev_dependencies: manifest.dev_dependencies.clone(),
        };

        let (dependencies, dev_dependencies) = if legacy_deps {
            (
                Some(pinned_entries(&manifest.dependencies)),
                Some(pinned_entries(&manifest.dev_dependencies)),
            )
        } else {
            (None, None)
        };

        Self {
            name: manifest.name.clone(),
            version: manifest.version.clone(),
            lockfile_version: LOCKFILE_VERSION,
            requires: true,
            package_type: manifest.package_type.clone(),
            packages: Packages { root },
            dependencies,
            dev_dependencies,
        }
    }

    /// Serialize to 2-space-indented JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from a JSON string
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

/// Build a legacy top-level dependency map from a specifier map
///
/// Each string specifier becomes `{"version": <specifier>}` with one
/// leading `^` or `~` stripped. Non-string specifiers get no entry.
fn pinned_entries(specs: &Map<String, Value>) -> Map<String, Value> {
    let mut entries = Map::new();
    for (name, spec) in specs {
        if let Some(spec) = spec.as_str() {
            let pinned = spec.strip_prefix(['^', '~']).unwrap_or(spec);
            entries.insert(name.clone(), json!({ "version": pinned }));
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_manifest() -> Manifest {
        Manifest::from_json(
            r#"{"name":"demo","version":"1.2.0","dependencies":{"left-pad":"^1.0.0"}}"#,
        )
        .expect("Failed to parse manifest")
    }

    #[test]
    fn test_lock_file_constants() {
        let lock = LockFile::from_manifest(&Manifest::default(), false);

        assert_eq!(lock.lockfile_version, 3);
        assert!(lock.requires);
    }

    #[test]
    fn test_root_entry_mirrors_manifest() {
        let manifest = demo_manifest();
        let lock = LockFile::from_manifest(&manifest, false);

        assert_eq!(lock.packages.root.name, "demo");
        assert_eq!(lock.packages.root.version, "1.2.0");
        assert_eq!(lock.packages.root.package_type, "module");
        assert_eq!(lock.packages.root.dependencies, manifest.dependencies);
        assert!(lock.packages.root.dev_dependencies.is_empty());
    }

    #[test]
    fn test_serialized_shape_matches_schema() {
        let lock = LockFile::from_manifest(&demo_manifest(), false);
        let output = lock.to_json_pretty().expect("Failed to serialize");

        let value: Value = serde_json::from_str(&output).expect("Output is not valid JSON");
        assert_eq!(
            value,
            json!({
                "name": "demo",
                "version": "1.2.0",
                "lockfileVersion": 3,
                "requires": true,
                "type": "module",
                "packages": {
                    "": {
                        "name": "demo",
                        "version": "1.2.0",
                        "type": "module",
                        "dependencies": { "left-pad": "^1.0.0" },
                        "devDependencies": {}
                    }
                }
            })
        );
    }

    #[test]
    fn test_top_level_key_order() {
        let lock = LockFile::from_manifest(&demo_manifest(), false);
        let output = lock.to_json_pretty().expect("Failed to serialize");

        let positions: Vec<usize> = [
            "\"name\"",
            "\"version\"",
            "\"lockfileVersion\"",
            "\"requires\"",
            "\"type\"",
            "\"packages\"",
        ]
        .iter()
        .map(|key| output.find(key).expect("missing key"))
        .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "top-level keys out of order:\n{output}");
    }

    #[test]
    fn test_no_legacy_maps_by_default() {
        let lock = LockFile::from_manifest(&demo_manifest(), false);
        let output = lock.to_json_pretty().expect("Failed to serialize");

        assert!(lock.dependencies.is_none());
        assert!(lock.dev_dependencies.is_none());
        assert!(!output.contains("\"devDependencies\": null"));
    }

    #[test]
    fn test_legacy_maps_pin_versions() {
        let manifest = Manifest::from_json(
            r#"{
                "dependencies": { "left-pad": "^1.3.0", "rimraf": "~5.0.0", "exact": "2.0.0" },
                "devDependencies": { "vitest": "^2.1.0" }
            }"#,
        )
        .expect("Failed to parse manifest");

        let lock = LockFile::from_manifest(&manifest, true);

        let deps = lock.dependencies.as_ref().expect("legacy deps missing");
        assert_eq!(deps.get("left-pad"), Some(&json!({ "version": "1.3.0" })));
        assert_eq!(deps.get("rimraf"), Some(&json!({ "version": "5.0.0" })));
        assert_eq!(deps.get("exact"), Some(&json!({ "version": "2.0.0" })));

        let dev = lock.dev_dependencies.as_ref().expect("legacy dev deps missing");
        assert_eq!(dev.get("vitest"), Some(&json!({ "version": "2.1.0" })));
    }

    #[test]
    fn test_legacy_maps_strip_only_one_prefix_char() {
        let manifest = Manifest::from_json(r#"{"dependencies":{"odd":"^^1.0.0"}}"#)
            .expect("Failed to parse manifest");

        let lock = LockFile::from_manifest(&manifest, true);
        let deps = lock.dependencies.as_ref().expect("legacy deps missing");
        assert_eq!(deps.get("odd"), Some(&json!({ "version": "^1.0.0" })));
    }

    #[test]
    fn test_legacy_maps_skip_non_string_specifiers() {
        let manifest = Manifest::from_json(r#"{"dependencies":{"weird":{"nested":true}}}"#)
            .expect("Failed to parse manifest");

        let lock = LockFile::from_manifest(&manifest, true);

        // Copied verbatim into the root entry, skipped in the legacy map
        assert!(lock.packages.root.dependencies.contains_key("weird"));
        assert!(lock.dependencies.as_ref().is_some_and(Map::is_empty));
    }

    #[test]
    fn test_lock_file_json_roundtrip() {
        let lock = LockFile::from_manifest(&demo_manifest(), true);

        let output = lock.to_json_pretty().expect("Failed to serialize");
        let parsed = LockFile::from_json(&output).expect("Failed to parse");

        assert_eq!(lock, parsed);
    }
}
