//! Remote data source with on-disk caching
//!
//! Downloads the Clear Dark Sky location list and per-location chart
//! resources. The location list is downloaded once and reused from cache on
//! later runs; charts are short-lived forecasts and are fetched fresh every
//! time, with the latest copy written back to the cache.

use crate::config::Config;
use crate::constants::{LOCATION_URL, chart_url};
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::time::Duration;
use tracing::{debug, info};

/// Fetches chart service resources and caches them on disk
#[derive(Debug)]
pub struct DataSource {
    client: reqwest::Client,
    config: Config,
}

impl DataSource {
    pub fn new(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Raw bytes of the location list
    ///
    /// Served from cache when present. `refresh` forces a re-download - the
    /// upstream list changes rarely, but it does change.
    pub async fn location_list(&self, refresh: bool) -> Result<Vec<u8>> {
        let path = self.config.location_list_path();

        if !refresh && path.exists() {
            debug!("using cached location list at {}", path.display());
            return fs::read(&path).map_err(|e| {
                Error::io(format!("Failed to read cached location list {}", path.display()), e)
            });
        }

        let bytes = self.download(LOCATION_URL, "location list").await?;

        self.config.ensure_cache_dir()?;
        fs::write(&path, &bytes).map_err(|e| {
            Error::io(format!("Failed to cache location list to {}", path.display()), e)
        })?;
        info!("cached location list ({} bytes) at {}", bytes.len(), path.display());

        Ok(bytes)
    }

    /// Chart text for a location key, always fetched fresh
    ///
    /// The downloaded copy is written to the cache so the last-seen chart
    /// survives for offline inspection.
    pub async fn chart_text(&self, key: &str) -> Result<String> {
        let url = chart_url(key);
        let bytes = self.download(&url, key).await?;

        let path = self.config.chart_cache_path(key);
        self.config.ensure_cache_dir()?;
        fs::write(&path, &bytes).map_err(|e| {
            Error::io(format!("Failed to cache chart to {}", path.display()), e)
        })?;
        debug!("cached chart for {} at {}", key, path.display());

        // Chart resources are ASCII-safe by contract
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn download(&self, url: &str, what: &str) -> Result<Vec<u8>> {
        let spinner = download_spinner(what);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::fetch(url, "request failed", Some(e)))?;

        let status = response.status();
        if !status.is_success() {
            spinner.finish_and_clear();
            return Err(Error::fetch(
                url,
                format!("server returned {}", status),
                None,
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::fetch(url, "failed to read response body", Some(e)))?;

        spinner.finish_and_clear();
        debug!("downloaded {} bytes from {}", bytes.len(), url);

        Ok(bytes.to_vec())
    }
}

/// Spinner shown while a download is in flight
fn download_spinner(what: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} downloading {msg}...")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(what.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_chart_url_shape() {
        // The per-location resource address is <base>/<key>csp.txt
        assert_eq!(
            chart_url("OakldCA"),
            "http://www.cleardarksky.com/txtc/OakldCAcsp.txt"
        );
    }

    #[tokio::test]
    async fn test_cached_location_list_read_without_network() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = Config {
            cache_dir: temp_dir.path().to_path_buf(),
        };
        fs::write(config.location_list_path(), b"SanFranCA|CA|San Francisco, CA\n").unwrap();

        let source = DataSource::new(config);
        let bytes = source.location_list(false).await.unwrap();

        assert_eq!(bytes, b"SanFranCA|CA|San Francisco, CA\n");
    }

    #[test]
    fn test_data_source_holds_config() {
        let config = Config {
            cache_dir: PathBuf::from("/tmp/skychart-test"),
        };
        let source = DataSource::new(config);
        assert_eq!(
            source.config.chart_cache_path("X").to_str().unwrap(),
            "/tmp/skychart-test/X.txt"
        );
    }
}
