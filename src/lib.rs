//! Lockgen - Minimal synthetic package-lock.json generator
//!
//! This library provides the core functionality for generating a
//! minimal `package-lock.json` from a project's `package.json`. The
//! output is a stub lock file with a fixed shape, intended to satisfy
//! tooling that only checks for the existence and shallow structure of
//! a lock file.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (manifest parsing, lock derivation)
//! - [`infra`] - Infrastructure layer (filesystem access)
//! - [`error`] - Error types and handling

pub mod cli;
pub mod core;
pub mod error;
pub mod infra;
