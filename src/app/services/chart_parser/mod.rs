//! Chart parser for Clear Dark Sky forecast resources
//!
//! This module decodes the proprietary two-block chart text format into a
//! time-ordered forecast series. The format is line-oriented: three
//! `name = value` header assignments, a fixed legend, a first data block of
//! parenthesized comma-separated records, another legend, and a second data
//! block whose values are joined to the first by exact timestamp match.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and block merging
//! - [`header`] - Chart preamble assignment parsing
//! - [`record`] - Data line scrubbing and tokenization
//! - [`lines`] - Line cursor over the raw chart text
//!
//! ## Usage
//!
//! ```rust
//! use skychart::ChartParser;
//!
//! # fn example(chart_text: &str) -> skychart::Result<()> {
//! let chart = ChartParser::parse(chart_text)?;
//!
//! println!("{}: {} forecast hours", chart.header.title, chart.len());
//! # Ok(())
//! # }
//! ```

pub mod header;
pub mod lines;
pub mod parser;
pub mod record;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use lines::LineCursor;
pub use parser::ChartParser;
