//! Tessera CLI - Cell-Based Painting Surface
//!
//! Command-line driver for the Tessera painting core.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;

use tessera::cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("Tessera v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(Commands::Run { script }) => commands::run(&script)?,
        Some(Commands::Layers) => commands::list_layers()?,
        Some(Commands::Demo { style }) => commands::demo(&style)?,
        None => {
            println!("Tessera v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
        }
    }

    Ok(())
}
