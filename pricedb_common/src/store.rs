//! Appending formatted entries to the price-database file.
//!
//! The price-database file is append-only from this tool's perspective: its
//! existing contents are never read or rewritten. Each update writes the
//! configured separator followed by the freshly formatted entry lines at the
//! end of the file and syncs before returning.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::result::Result;

/// Appends `separator` followed by `lines` to the file at `path`.
///
/// The file is created if it does not exist. Nothing is inserted between the
/// separator and the lines, and nothing after them. The write is synced to
/// disk before returning. I/O failures surface as `UpdateError::Io`; the
/// separator may already be on disk if writing the lines fails.
pub fn append_entries(path: &Path, separator: &str, lines: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(separator.as_bytes())?;
    file.write_all(lines.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
