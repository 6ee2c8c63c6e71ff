//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod check;
pub mod generate;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate package-lock.json from package.json
    Generate {
        /// Project directory containing package.json (defaults to the
        /// current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Also emit legacy top-level dependency maps with pinned versions
        #[arg(long)]
        legacy_deps: bool,
    },

    /// Validate package.json and report lock file status without writing
    Check {
        /// Project directory containing package.json (defaults to the
        /// current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self, quiet: bool) -> Result<()> {
        match self {
            Self::Generate { dir, legacy_deps } => {
                let project_dir = resolve_project_dir(dir)?;
                generate::execute(&project_dir, legacy_deps, quiet)
            }
            Self::Check { dir } => {
                let project_dir = resolve_project_dir(dir)?;
                check::execute(&project_dir, quiet)
            }
        }
    }
}

/// Resolve the project directory, falling back to the current directory
fn resolve_project_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}
