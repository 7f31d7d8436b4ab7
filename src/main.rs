//! lotkeeper - parking position allocator CLI
//!
//! This is the main entry point for the lotkeeper binary. It parses
//! command-line arguments, loads configuration, and dispatches to the
//! command handlers.

use clap::Parser;
use lotkeeper::cli::handlers::{SimulateParams, handle_console_command, handle_simulate_command};
use lotkeeper::cli::{Cli, Commands, OutputFormatter};
use lotkeeper::config::LotConfig;
use lotkeeper::error::{LotKeeperError, Result};
use std::process;

fn main() {
    let cli = Cli::parse();

    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    // Set up logging if verbose mode is enabled
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    let config = match &cli.config {
        Some(path) => LotConfig::load_from(path)?,
        None => LotConfig::load_or_default()?,
    };

    dispatch_command(cli.command, config, formatter)
}

fn dispatch_command(
    command: Commands,
    mut config: LotConfig,
    formatter: &OutputFormatter,
) -> Result<()> {
    match command {
        Commands::Console { capacity, name, id } => {
            if let Some(capacity) = capacity {
                config.capacity = capacity;
            }
            if let Some(name) = name {
                config.name = Some(name);
            }
            if let Some(id) = id {
                config.id = id;
            }
            handle_console_command(&config, formatter)
        },
        Commands::Simulate {
            capacity,
            arrivals,
            departures,
            seed,
        } => {
            if let Some(capacity) = capacity {
                config.capacity = capacity;
            }
            handle_simulate_command(
                &config,
                &SimulateParams {
                    arrivals,
                    departures,
                    seed,
                },
                formatter,
            )
        },
    }
}

/// Handle errors and display them to the user
///
/// Prints the user-facing message, any suggestions for getting past the
/// error, and the debug representation when verbose logging is active.
fn handle_error(error: &LotKeeperError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  • {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.print_json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
        }));
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}
