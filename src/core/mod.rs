//! Core business logic module
//!
//! This module contains all business logic for lockgen. Filesystem
//! access goes through [`crate::infra`].
//!
//! # Submodules
//!
//! - [`manifest`] - Manifest (package.json) parsing
//! - [`lock`] - Lock file (package-lock.json) derivation
//! - [`generate`] - The read-transform-write generation pass
//! - [`check`] - Manifest and lock file status reporting

pub mod check;
pub mod generate;
pub mod lock;
pub mod manifest;
