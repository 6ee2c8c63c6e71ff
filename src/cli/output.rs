//! Output formatting
//!
//! This module provides the status glyphs and error display used by
//! the CLI layer.

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// Print an error as a single diagnostic line on stderr
///
/// The alternate format flattens the anyhow context chain onto one
/// line instead of dumping a backtrace-style report.
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", status::ERROR);
}
