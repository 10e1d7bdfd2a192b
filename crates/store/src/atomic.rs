//! Atomic write helper

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace `target` with `data` atomically
///
/// Writes to a temporary file in the target's directory, fsyncs it, then
/// renames it over the target. Readers see either the old content or the
/// new content, never a prefix. The temporary file is removed if any step
/// fails.
pub fn atomic_write(target: &Path, data: &[u8]) -> io::Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| e.error)?;

    Ok(())
}
