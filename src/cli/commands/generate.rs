//! Generate command implementation
//!
//! Implements `lockgen generate` to write a stub package-lock.json
//! next to the project's package.json.

use anyhow::{bail, Result};
use std::path::Path;

use crate::cli::output::status;
use crate::core::generate::{self, GenerateOptions};
use crate::core::lock::LOCK_FILE;
use crate::core::manifest::MANIFEST_FILE;

/// Execute the generate command
pub fn execute(project_dir: &Path, legacy_deps: bool, quiet: bool) -> Result<()> {
    let manifest_path = project_dir.join(MANIFEST_FILE);
    let output_path = project_dir.join(LOCK_FILE);

    let options = GenerateOptions { legacy_deps };
    let result = match generate::generate(&manifest_path, &output_path, &options) {
        Ok(result) => result,
        Err(e) if e.is_manifest_not_found() => {
            bail!(
                "No {} found in '{}'",
                MANIFEST_FILE,
                project_dir.display()
            );
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        name = %result.name,
        version = %result.version,
        dependencies = result.dependency_count,
        dev_dependencies = result.dev_dependency_count,
        "lock file generated"
    );

    if !quiet {
        println!("{} Generated {}", status::SUCCESS, LOCK_FILE);
    }
    Ok(())
}
