//! Configuration and persisted state
//!
//! Resolves the on-disk cache directory and manages the user's saved
//! location choice, which survives between runs so the common case is
//! `skychart` with no arguments.

use crate::app::models::LocationEntry;
use crate::constants::{CACHE_DIR_NAME, LOCATION_FILENAME, SAVED_LOCATION_FILENAME};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runtime configuration for cache paths
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the cached location list, chart copies and the
    /// saved location state
    pub cache_dir: PathBuf,
}

impl Config {
    /// Resolve the configuration, honoring an explicit cache override
    pub fn resolve(cache_dir: Option<PathBuf>) -> Result<Self> {
        let cache_dir = match cache_dir {
            Some(dir) => dir,
            None => default_cache_dir()?,
        };

        Ok(Self { cache_dir })
    }

    /// Create the cache directory if it does not exist yet
    pub fn ensure_cache_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.cache_dir).map_err(|e| {
            Error::io(
                format!("Failed to create cache directory {}", self.cache_dir.display()),
                e,
            )
        })
    }

    /// Path of the cached location list
    pub fn location_list_path(&self) -> PathBuf {
        self.cache_dir.join(LOCATION_FILENAME)
    }

    /// Path of the cached chart copy for a location key
    pub fn chart_cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.txt", key))
    }

    /// Path of the saved location state file
    pub fn saved_location_path(&self) -> PathBuf {
        self.cache_dir.join(SAVED_LOCATION_FILENAME)
    }
}

/// Find the platform cache directory for skychart
pub fn default_cache_dir() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|dir| dir.join(CACHE_DIR_NAME))
        .ok_or_else(|| Error::configuration("Could not determine platform cache directory"))
}

/// The user's persisted location choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedLocation {
    /// Chart key of the chosen location
    pub key: String,

    /// Display name, shown in the rendered chart title
    pub name: String,
}

impl SavedLocation {
    pub fn from_entry(entry: &LocationEntry) -> Self {
        Self {
            key: entry.key.clone(),
            name: entry.name.clone(),
        }
    }

    /// Load the saved choice, if any
    ///
    /// A missing or unreadable state file means "no saved location" (first
    /// run, or a stale format) rather than an error.
    pub fn load(path: &Path) -> Option<Self> {
        let contents = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(saved) => Some(saved),
            Err(e) => {
                debug!("ignoring unreadable state file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Persist the choice, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::io(
                    format!("Failed to create state directory {}", parent.display()),
                    e,
                )
            })?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::configuration(format!("Failed to serialize location state: {}", e)))?;

        fs::write(path, json).map_err(|e| {
            Error::io(format!("Failed to write state file {}", path.display()), e)
        })
    }
}
