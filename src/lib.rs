//! Skychart Library
//!
//! A Rust library for fetching and displaying Clear Dark Sky astronomical
//! observing forecasts ("clear sky charts") in the terminal.
//!
//! This library provides tools for:
//! - Parsing the Clear Dark Sky location list into a searchable index
//! - Decoding the proprietary two-block chart format into a time-ordered
//!   forecast series
//! - Downloading and caching the location list and per-location charts
//! - Rendering forecasts as color-coded timelines in the terminal

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod chart_parser;
        pub mod data_source;
        pub mod location_index;
        pub mod renderer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ChartHeader, ForecastRecord, LocationEntry, SkyChart};
pub use app::services::chart_parser::ChartParser;
pub use app::services::location_index::LocationIndex;

/// Result type alias for skychart operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for location-index and chart-parsing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Download from the chart service failed
    #[error("Download failed for {url}: {message}")]
    Fetch {
        url: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// A location-list line did not split into exactly three pipe-delimited fields
    #[error("Malformed location record at line {line}: '{content}'")]
    MalformedLocationRecord { line: usize, content: String },

    /// One of the first three chart lines lacks a usable `name = value` assignment
    #[error("Malformed chart header at line {line}: {reason} ('{content}')")]
    MalformedChartHeader {
        line: usize,
        content: String,
        reason: String,
    },

    /// A data line inside Block A or Block B failed tokenization
    #[error("Malformed chart record at line {line}: {reason} ('{content}')")]
    MalformedChartRecord {
        line: usize,
        content: String,
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a download error with the offending URL
    pub fn fetch(
        url: impl Into<String>,
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a malformed location record error
    pub fn malformed_location_record(line: usize, content: impl Into<String>) -> Self {
        Self::MalformedLocationRecord {
            line,
            content: content.into(),
        }
    }

    /// Create a malformed chart header error
    pub fn malformed_chart_header(
        line: usize,
        content: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedChartHeader {
            line,
            content: content.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed chart record error
    pub fn malformed_chart_record(
        line: usize,
        content: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedChartRecord {
            line,
            content: content.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
