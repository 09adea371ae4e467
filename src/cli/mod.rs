//! CLI Module
//!
//! Thin driver over the painting core: turns a JSON edit script into
//! actions and feeds them through the grid and trackers.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tessera - cell-based painting surface
#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a JSON edit script and print the composited grid
    #[command(name = "run")]
    Run {
        /// Path to the script file
        script: PathBuf,
    },

    /// List the registered layers
    #[command(name = "layers")]
    Layers,

    /// Run the built-in demonstration sequence
    #[command(name = "demo")]
    Demo {
        /// Draw style for the demo grid
        #[arg(short, long, default_value = "set")]
        style: String,
    },
}
