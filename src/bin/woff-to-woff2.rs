use anyhow::Result;
use clap::Parser;
use woffsrt::cli::ConvertArgs;
use woffsrt::organizer::convert_directory;
use woffsrt::utils::init_logging;

fn main() -> Result<()> {
    let config = ConvertArgs::parse().common.into_config();
    init_logging(&config);
    config.validate()?;

    let report = convert_directory(&config)?;
    println!("Conversion summary: {}", report);
    Ok(())
}
