use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;
use tracing::debug;

use crate::error::{Error, Result};

/// Write `bytes` to `dest` through a temporary file in the same directory
///
/// `dest` only ever appears complete. The temporary file is deleted when
/// writing or the final rename fails.
pub fn write_atomically(dest: &Path, bytes: &[u8]) -> Result<()> {
    let file_name = dest
        .file_name()
        .ok_or_else(|| Error::InvalidPath(dest.to_path_buf()))?;
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = Builder::new()
        .prefix(&format!(".{}.", file_name.to_string_lossy()))
        .suffix(".partial")
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(dest).map_err(|e| e.error)?;

    debug!("Wrote {} bytes to {}", bytes.len(), dest.display());
    Ok(())
}

/// Remove a file, logging what was removed
pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path)?;
    debug!("Removed {}", path.display());
    Ok(())
}
