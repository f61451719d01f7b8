use anyhow::Result;
use clap::Parser;
use woffsrt::cli::CleanupArgs;
use woffsrt::organizer::cleanup_directory;
use woffsrt::utils::init_logging;

fn main() -> Result<()> {
    let config = CleanupArgs::parse().common.into_config();
    init_logging(&config);
    config.validate()?;

    let report = cleanup_directory(&config)?;
    println!("Cleanup summary: {}", report);
    Ok(())
}
