//! Shared terminal output helpers.
//!
//! Keeps the `Error:`/`WARNING:` prefixes uniform across commands so scripted
//! callers can grep stderr reliably.

use std::io::Write;

/// Writes an error line, prefixed `Error:`, to the given stream.
pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Writes a non-fatal warning line, prefixed `WARNING:`.
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}
