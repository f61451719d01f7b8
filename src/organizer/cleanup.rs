use std::fmt;

use tracing::{debug, info};

use super::scan::scan_woff_files;
use crate::error::Result;
use crate::models::{Config, FontPair};
use crate::utils::remove_file;

/// What a cleanup pass did
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupReport {
    /// Pairs whose `.woff` was deleted
    pub removed: Vec<FontPair>,
    /// Pairs kept because the `.woff2` is larger
    pub kept: Vec<FontPair>,
    /// `.woff` files with no `.woff2` next to them
    pub unpaired: Vec<FontPair>,
}

impl fmt::Display for CleanupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} removed, {} kept, {} without a WOFF2",
            self.removed.len(),
            self.kept.len(),
            self.unpaired.len()
        )
    }
}

/// A WOFF2 supersedes its WOFF when it is not larger
pub fn woff2_supersedes(woff_size: u64, woff2_size: u64) -> bool {
    woff2_size <= woff_size
}

/// Delete every `.woff` in the configured directory whose `.woff2` is not larger
pub fn cleanup_directory(config: &Config) -> Result<CleanupReport> {
    let dir = config.directory();
    info!("Removing superseded WOFF fonts in {}", dir.display());

    let mut report = CleanupReport::default();
    for pair in scan_woff_files(dir)? {
        if !pair.has_woff2() {
            report.unpaired.push(pair);
            continue;
        }

        let (woff_size, woff2_size) = pair.sizes().map_err(|e| e.at(&pair.woff))?;
        if !woff2_supersedes(woff_size, woff2_size) {
            debug!(
                "Keeping {} ({} bytes), WOFF2 is {} bytes",
                pair.woff.display(),
                woff_size,
                woff2_size
            );
            report.kept.push(pair);
            continue;
        }

        println!("{} << {}", pair.woff.display(), pair.woff2.display());
        remove_file(&pair.woff).map_err(|e| e.at(&pair.woff))?;
        report.removed.push(pair);
    }

    info!("Cleanup finished: {}", report);
    Ok(report)
}
