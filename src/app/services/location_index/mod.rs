//! Location index service for Clear Dark Sky chart locations
//!
//! This module builds an in-memory lookup table from the flat pipe-delimited
//! location list published by the chart service and provides case-insensitive
//! lookups by state and by city name fragment.

use crate::Result;
use crate::app::models::LocationEntry;
use std::collections::HashMap;

pub mod parser;
pub mod query;

#[cfg(test)]
pub mod tests;

/// Searchable index over the Clear Dark Sky location list
///
/// The index is built once from the raw location resource and is immutable
/// afterwards. Two views are maintained: `by_state` keyed by lowercased
/// state name with entries in source order (this order drives the numbered
/// selection menu), and `by_city` keyed by lowercased display name. Display
/// name collisions in the source resolve last-write-wins, a quirk inherited
/// from the upstream list.
#[derive(Debug, Clone, Default)]
pub struct LocationIndex {
    /// Entries grouped by lowercased state name, source order preserved
    pub(crate) by_state: HashMap<String, Vec<LocationEntry>>,

    /// Entries keyed by lowercased display name, last write wins
    pub(crate) by_city: HashMap<String, LocationEntry>,

    /// Number of location lines indexed
    pub(crate) entry_count: usize,
}

impl LocationIndex {
    /// Build the index from the raw location resource bytes
    ///
    /// The upstream list embeds non-ASCII place names in ISO-8859-1, so the
    /// bytes are decoded before line parsing. The build aborts on the first
    /// malformed line; no partial index is ever returned.
    pub fn build(raw: &[u8]) -> Result<Self> {
        let text = parser::decode_latin1(raw);
        Self::from_text(&text)
    }

    /// Build the index from already-decoded text
    pub fn from_text(text: &str) -> Result<Self> {
        let mut index = Self::default();

        for (line_no, line) in text.lines().enumerate() {
            if line.is_empty() {
                continue;
            }

            let entry = parser::parse_line(line_no + 1, line)?;

            index
                .by_state
                .entry(entry.state.to_lowercase())
                .or_default()
                .push(entry.clone());

            index.by_city.insert(entry.name.to_lowercase(), entry);
            index.entry_count += 1;
        }

        Ok(index)
    }

    /// Number of location lines indexed
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Number of distinct states in the index
    pub fn state_count(&self) -> usize {
        self.by_state.len()
    }

    /// Check whether a state exists in the index (case-insensitive)
    pub fn contains_state(&self, state: &str) -> bool {
        self.by_state.contains_key(&state.to_lowercase())
    }
}
