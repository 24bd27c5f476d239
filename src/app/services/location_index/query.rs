//! Location lookup and search functionality

use super::LocationIndex;
use crate::app::models::LocationEntry;

impl LocationIndex {
    /// Look up all locations for a state (case-insensitive)
    ///
    /// Entries come back in the order they appear in the source list, which
    /// is the order the selection menu numbers them. An unknown state yields
    /// an empty slice - no matches is an expected outcome of user search,
    /// not a failure.
    pub fn lookup_state(&self, state: &str) -> &[LocationEntry] {
        self.by_state
            .get(&state.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Find locations whose display name contains the given fragment
    ///
    /// The search is case-insensitive and substring-based: "franc" matches
    /// "San Francisco, CA". All matches are returned so the caller can
    /// disambiguate; results are sorted by lowercased display name to keep
    /// numbered menus stable across runs.
    pub fn search_city(&self, fragment: &str) -> Vec<&LocationEntry> {
        let fragment_lower = fragment.to_lowercase();

        let mut matches: Vec<&LocationEntry> = self
            .by_city
            .iter()
            .filter(|(name, _)| name.contains(&fragment_lower))
            .map(|(_, entry)| entry)
            .collect();

        matches.sort_by_key(|entry| entry.name.to_lowercase());
        matches
    }

    /// All state names present in the index, sorted
    pub fn states(&self) -> Vec<&str> {
        let mut states: Vec<&str> = self.by_state.keys().map(String::as_str).collect();
        states.sort_unstable();
        states
    }
}
