//! Command-line interface
//!
//! Argument parsing and the command handlers. The lot itself knows nothing
//! about any of this; handlers construct a lot from configuration, drive
//! it, and report through [`OutputFormatter`].

pub mod handlers;
mod output;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parking position allocator and ticket lifecycle manager
#[derive(Parser)]
#[command(name = "lotkeeper", version, about, long_about = None)]
pub struct Cli {
    /// Output machine-readable JSON where supported
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a configuration file (default: lotkeeper.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run an interactive console over a single in-memory lot
    Console {
        /// Number of positions, overriding configuration
        #[arg(short, long)]
        capacity: Option<u32>,

        /// Display name for the lot
        #[arg(long)]
        name: Option<String>,

        /// Registry identifier for the lot
        #[arg(long)]
        id: Option<u32>,
    },

    /// Run a scripted arrival/departure sequence and report the outcome
    Simulate {
        /// Number of positions, overriding configuration
        #[arg(short, long)]
        capacity: Option<u32>,

        /// Vehicles arriving at the gate
        #[arg(short, long, default_value_t = 12)]
        arrivals: u32,

        /// Tickets redeemed after the arrivals, oldest first
        #[arg(short, long, default_value_t = 4)]
        departures: u32,

        /// Seed for the plate generator, for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,
    },
}
