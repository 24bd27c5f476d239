//! Command-line argument definitions for skychart
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the skychart viewer
#[derive(Debug, Clone, Parser)]
#[command(
    name = "skychart",
    version,
    about = "View Clear Dark Sky astronomical observing forecasts in the terminal",
    long_about = "Fetches Clear Dark Sky 'clear sky chart' forecasts (cloud cover, \
                  transparency, seeing and darkness) for an observing location and \
                  renders them as a color-coded timeline in the terminal. Running \
                  with no subcommand shows the chart for the saved location."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the skychart viewer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Fetch and display the chart for the saved or given location (default)
    Show(ShowArgs),
    /// Choose an observing location interactively and save it
    Select(SelectArgs),
    /// Search the location list without changing the saved choice
    Locations(LocationsArgs),
}

/// Arguments for the show command (fetch, parse and render a chart)
#[derive(Debug, Clone, Default, Parser)]
pub struct ShowArgs {
    /// Chart key to display, bypassing the saved location
    ///
    /// Keys are the Clear Dark Sky location slugs, e.g. "SanFranCA". When
    /// omitted, the saved location is used; with no saved location the
    /// interactive city selection runs first.
    #[arg(short = 'k', long = "key", value_name = "KEY")]
    pub key: Option<String>,

    /// Cache directory override
    #[arg(long = "cache-dir", value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    /// Re-download the location list instead of using the cached copy
    #[arg(long = "refresh-locations")]
    pub refresh_locations: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the select command (interactive location choice)
#[derive(Debug, Clone, Parser)]
pub struct SelectArgs {
    /// Browse by state instead of searching by city name
    #[arg(long = "by-state")]
    pub by_state: bool,

    /// Cache directory override
    #[arg(long = "cache-dir", value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    /// Re-download the location list instead of using the cached copy
    #[arg(long = "refresh-locations")]
    pub refresh_locations: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the locations command (non-interactive lookup)
#[derive(Debug, Clone, Parser)]
pub struct LocationsArgs {
    /// List every location for a state (case-insensitive)
    #[arg(long = "state", value_name = "NAME", conflicts_with = "search")]
    pub state: Option<String>,

    /// Search display names for a fragment (case-insensitive substring)
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Output format for the location listing
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Cache directory override
    #[arg(long = "cache-dir", value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    /// Re-download the location list instead of using the cached copy
    #[arg(long = "refresh-locations")]
    pub refresh_locations: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for the locations listing
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable numbered listing
    Human,
    /// JSON array for scripting
    Json,
}

impl ShowArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose)
    }
}

impl SelectArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose)
    }
}

impl LocationsArgs {
    /// Validate the locations command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.state.is_none() && self.search.is_none() {
            return Err(Error::configuration(
                "Specify either --state or --search".to_string(),
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose)
    }
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
