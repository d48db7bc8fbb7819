mod harness;

use anyhow::Result;
use log::info;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting fieldgrid - minesweeper field presentation harness");

    // Load configuration
    let config = fieldgrid_core::Config::load(None)?;
    config.validate()?;
    info!("Loaded configuration: {:?}", config);

    harness::run(&config)?;

    Ok(())
}
