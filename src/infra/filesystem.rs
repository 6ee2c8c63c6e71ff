//! Filesystem operations
//!
//! Handles file operations.

use std::path::Path;

use crate::error::FilesystemError;

/// Write content to a file, overwriting any existing file
pub fn write_file(path: &Path, content: &str) -> Result<(), FilesystemError> {
    std::fs::write(path, content).map_err(|e| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    std::fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
