use std::path::PathBuf;

use clap::{Args, Parser};

use crate::models::Config;

/// Arguments both tools accept
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Directory containing the font files (not searched recursively)
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl CommonArgs {
    pub fn into_config(self) -> Config {
        Config::new(self.directory, self.debug)
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "woff-to-woff2",
    version,
    about = "Convert every WOFF font in a directory to WOFF2",
    long_about = "Convert every WOFF font in a directory to WOFF2.\n\n\
        X.woff is converted to X.woff2 unless X.woff2 already exists."
)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Parser)]
#[command(
    name = "woff-cleanup",
    version,
    about = "Remove WOFF fonts superseded by a WOFF2 that is not larger",
    long_about = "Remove WOFF fonts superseded by a WOFF2 that is not larger.\n\n\
        X.woff is deleted when X.woff2 exists next to it and is the same size or smaller."
)]
pub struct CleanupArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}
