//! Check command implementation
//!
//! Implements `lockgen check` to validate the manifest and report the
//! lock file status without writing anything.

use anyhow::{bail, Result};
use std::path::Path;

use crate::cli::output::status;
use crate::core::check::{self, LockStatus};
use crate::core::lock::LOCK_FILE;
use crate::core::manifest::MANIFEST_FILE;

/// Execute the check command
pub fn execute(project_dir: &Path, quiet: bool) -> Result<()> {
    let manifest_path = project_dir.join(MANIFEST_FILE);
    let lock_path = project_dir.join(LOCK_FILE);

    if !manifest_path.exists() {
        bail!(
            "No {} found in '{}'",
            MANIFEST_FILE,
            project_dir.display()
        );
    }

    let report = check::check(&manifest_path, &lock_path)?;

    if quiet {
        return Ok(());
    }

    println!("{} {} is valid", status::SUCCESS, MANIFEST_FILE);
    println!("  Name: {}", report.name);
    println!("  Version: {}", report.version);
    println!("  Type: {}", report.package_type);
    println!("  Dependencies: {}", report.dependency_count);
    println!("  Dev dependencies: {}", report.dev_dependency_count);

    match report.lock_status {
        LockStatus::UpToDate => {
            println!("{} {} is up to date", status::SUCCESS, LOCK_FILE);
        }
        LockStatus::Stale => {
            println!(
                "{} {} is stale - run 'lockgen generate' to refresh it",
                status::WARNING,
                LOCK_FILE
            );
        }
        LockStatus::Missing => {
            println!(
                "{} {} is missing - run 'lockgen generate' to create it",
                status::WARNING,
                LOCK_FILE
            );
        }
    }

    Ok(())
}
