//! Command implementations for the skychart CLI
//!
//! This module contains the command execution logic and error handling for
//! the CLI interface. Each command is implemented in its own module.

pub mod locations;
pub mod shared;
pub mod show;

use crate::cli::args::Commands;

/// Main command runner for the skychart CLI
///
/// Dispatches to the appropriate subcommand handler:
/// - `show`: fetch, parse and render the chart for a location
/// - `select`: interactive location choice, persisted for later runs
/// - `locations`: non-interactive location lookup
pub async fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Show(show_args) => show::run_show(show_args).await,
        Commands::Select(select_args) => locations::run_select(select_args).await,
        Commands::Locations(locations_args) => locations::run_locations(locations_args).await,
    }
}
