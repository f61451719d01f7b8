use std::fmt;
use std::path::Path;

use tracing::{debug, info};

use super::scan::scan_woff_files;
use crate::error::Result;
use crate::font::{validate_font, Flavor, FontSummary, WebFont};
use crate::models::{Config, FontPair};

/// What a conversion pass did
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    /// Pairs whose `.woff2` was written by this pass
    pub converted: Vec<FontPair>,
    /// Pairs whose `.woff2` already existed
    pub skipped: Vec<FontPair>,
}

impl fmt::Display for ConvertReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} converted, {} already had a WOFF2",
            self.converted.len(),
            self.skipped.len()
        )
    }
}

/// Convert every `.woff` in the configured directory that has no `.woff2` yet
///
/// The first font that fails to load, validate or save stops the pass.
pub fn convert_directory(config: &Config) -> Result<ConvertReport> {
    let dir = config.directory();
    info!("Converting WOFF fonts in {}", dir.display());

    let mut report = ConvertReport::default();
    for pair in scan_woff_files(dir)? {
        if pair.has_woff2() {
            debug!("Skipping {}: WOFF2 already exists", pair);
            report.skipped.push(pair);
            continue;
        }

        println!("{} => {}", pair.woff.display(), pair.woff2.display());
        convert_font(&pair.woff, &pair.woff2).map_err(|e| e.at(&pair.woff))?;
        report.converted.push(pair);
    }

    info!("Conversion finished: {}", report);
    Ok(report)
}

/// Load `src`, check it parses, and save it as WOFF2 at `dest`
pub fn convert_font(src: &Path, dest: &Path) -> Result<FontSummary> {
    let mut font = WebFont::load(src)?;
    let summary = validate_font(&font)?;
    debug!(
        "{}: {} font, family {}, {} glyphs",
        src.display(),
        font.flavor(),
        summary.family_name.as_deref().unwrap_or("<unnamed>"),
        summary.num_glyphs
    );

    font.set_flavor(Flavor::Woff2);
    font.save(dest)?;
    Ok(summary)
}
