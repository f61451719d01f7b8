use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::FontPair;
use crate::utils::pair_for;

/// `.woff` files directly inside `dir`, paired by name with their `.woff2`
/// counterparts and sorted by file name
///
/// Subdirectories are not entered and anything that is not a regular file is
/// ignored, even when its name ends in `.woff`.
pub fn scan_woff_files(dir: &Path) -> Result<Vec<FontPair>> {
    let mut pairs = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        if let Some(pair) = pair_for(dir, &entry.file_name()) {
            pairs.push(pair);
        }
    }

    pairs.sort();
    debug!("Found {} WOFF files in {}", pairs.len(), dir.display());
    Ok(pairs)
}
