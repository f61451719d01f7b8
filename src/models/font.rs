use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A `.woff` file and the `.woff2` file it pairs with by name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontPair {
    /// Path of the WOFF file
    pub woff: PathBuf,
    /// Path the WOFF2 counterpart has (or would have)
    pub woff2: PathBuf,
}

impl FontPair {
    pub fn new(woff: impl Into<PathBuf>, woff2: impl Into<PathBuf>) -> Self {
        Self {
            woff: woff.into(),
            woff2: woff2.into(),
        }
    }

    /// The counterpart only counts when a regular file of that name exists
    pub fn has_woff2(&self) -> bool {
        self.woff2.is_file()
    }

    /// Sizes of the WOFF and WOFF2 files, in that order
    pub fn sizes(&self) -> Result<(u64, u64)> {
        Ok((file_size(&self.woff)?, file_size(&self.woff2)?))
    }
}

impl fmt::Display for FontPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.woff.display(), self.woff2.display())
    }
}

fn file_size(path: &Path) -> Result<u64> {
    Ok(fs::metadata(path)?.len())
}
