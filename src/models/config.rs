use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Configuration for a convert or cleanup pass
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for font files (non-recursive)
    pub directory: PathBuf,
    /// Enable debug output
    pub debug_mode: bool,
}

impl Config {
    /// Create a configuration for `directory`
    pub fn new(directory: impl Into<PathBuf>, debug_mode: bool) -> Self {
        Self {
            directory: directory.into(),
            debug_mode,
        }
    }

    /// Make sure the configured directory is usable before any work starts
    pub fn validate(&self) -> Result<()> {
        if !self.directory.is_dir() {
            return Err(Error::InvalidPath(self.directory.clone()));
        }
        Ok(())
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(".", false)
    }
}
