//! Infrastructure layer
//!
//! Filesystem access lives here, behind small wrappers that attach
//! path context to errors.

pub mod filesystem;
