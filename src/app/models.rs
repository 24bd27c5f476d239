//! Data models for Clear Dark Sky forecasts
//!
//! This module contains the core data structures for representing chart
//! locations and the time-ordered forecast series decoded from a chart
//! resource.

use crate::constants::RECORD_MIN_VALUES;
use crate::{Error, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// =============================================================================
// Location Entry
// =============================================================================

/// One location from the Clear Dark Sky location list
///
/// The `key` is the opaque slug used to build the per-location chart URL
/// (e.g. `SanFranCA`). Keys are unique across the list; display names are
/// not, and the index resolves duplicates last-write-wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    /// Chart key, e.g. "SanFranCA"
    pub key: String,

    /// State or region name as it appears in the source list
    pub state: String,

    /// Human-readable place name, e.g. "San Francisco, CA"
    pub name: String,
}

impl LocationEntry {
    pub fn new(key: impl Into<String>, state: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            state: state.into(),
            name: name.into(),
        }
    }
}

// =============================================================================
// Chart Header
// =============================================================================

/// Metadata parsed from the first three lines of a chart resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartHeader {
    /// Chart title, quotes stripped
    pub title: String,

    /// Format version string advertised by the source
    pub format_version: String,

    /// UTC offset of the chart's local timestamps, in hours
    pub utc_offset: f64,
}

// =============================================================================
// Forecast Record
// =============================================================================

/// One forecast hour, merged from both data blocks of a chart
///
/// Block A supplies the five leading codes; `darkness` is appended from
/// Block B when a record with the same timestamp exists there. The numeric
/// domains (0-10 for cloud cover, 0-5 for transparency and seeing) are part
/// of the contract with the renderer but are not validated here - the source
/// occasionally emits out-of-domain codes and the reference behavior is to
/// pass them through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    /// Naive local time of the forecast hour (no timezone conversion applied)
    pub timestamp: NaiveDateTime,

    /// Cloud cover code, 0 (overcast) to 10 (clear)
    pub cloud_cover: i32,

    /// Transparency code, 0 to 5
    pub transparency: i32,

    /// Seeing code, 0 to 5
    pub seeing: i32,

    /// Wind class field from Block A
    pub wind_class: f64,

    /// Humidity class field from Block A
    pub humidity_class: f64,

    /// Sky darkness fraction from Block B; absent when Block B carried no
    /// record for this timestamp (rendered as fully dark)
    pub darkness: Option<f64>,
}

impl ForecastRecord {
    /// Map a merged value list into a record, positionally
    ///
    /// Index 0 = cloud cover, 1 = transparency, 2 = seeing, 3 and 4 = wind
    /// and humidity classes, 5 (present only when Block B contributed) =
    /// darkness. `line` is the source line of the Block A record, used for
    /// error context.
    pub fn from_values(timestamp: NaiveDateTime, line: usize, values: &[String]) -> Result<Self> {
        if values.len() < RECORD_MIN_VALUES {
            return Err(Error::malformed_chart_record(
                line,
                values.join(","),
                format!(
                    "expected at least {} values for {}, found {}",
                    RECORD_MIN_VALUES,
                    timestamp,
                    values.len()
                ),
            ));
        }

        let parse_code = |index: usize, field: &str| -> Result<i32> {
            values[index].trim().parse::<i32>().map_err(|_| {
                Error::malformed_chart_record(
                    line,
                    values.join(","),
                    format!("invalid {} code '{}'", field, values[index]),
                )
            })
        };

        let parse_class = |index: usize, field: &str| -> Result<f64> {
            values[index].trim().parse::<f64>().map_err(|_| {
                Error::malformed_chart_record(
                    line,
                    values.join(","),
                    format!("invalid {} value '{}'", field, values[index]),
                )
            })
        };

        let darkness = match values.get(RECORD_MIN_VALUES) {
            Some(raw) => Some(raw.trim().parse::<f64>().map_err(|_| {
                Error::malformed_chart_record(
                    line,
                    values.join(","),
                    format!("invalid darkness value '{}'", raw),
                )
            })?),
            None => None,
        };

        Ok(Self {
            timestamp,
            cloud_cover: parse_code(0, "cloud cover")?,
            transparency: parse_code(1, "transparency")?,
            seeing: parse_code(2, "seeing")?,
            wind_class: parse_class(3, "wind class")?,
            humidity_class: parse_class(4, "humidity class")?,
            darkness,
        })
    }

    /// Whether Block B contributed a darkness value for this hour
    pub fn has_darkness(&self) -> bool {
        self.darkness.is_some()
    }
}

// =============================================================================
// Sky Chart
// =============================================================================

/// A fully parsed chart: header metadata plus the forecast series
///
/// Records are ordered ascending by timestamp; timestamps are unique within
/// one chart so the order is total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyChart {
    /// Header metadata from the chart preamble
    pub header: ChartHeader,

    /// Forecast hours, ascending by timestamp
    pub records: Vec<ForecastRecord>,
}

impl SkyChart {
    /// Number of forecast hours in the chart
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the chart carries any forecast hours
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First and last forecast timestamps, when any records exist
    pub fn span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => Some((first.timestamp, last.timestamp)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn values(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_values_without_darkness() {
        let record =
            ForecastRecord::from_values(ts(0), 8, &values(&["3", "2", "1", "0", "0"])).unwrap();

        assert_eq!(record.cloud_cover, 3);
        assert_eq!(record.transparency, 2);
        assert_eq!(record.seeing, 1);
        assert_eq!(record.wind_class, 0.0);
        assert_eq!(record.humidity_class, 0.0);
        assert_eq!(record.darkness, None);
        assert!(!record.has_darkness());
    }

    #[test]
    fn test_from_values_with_darkness() {
        let record =
            ForecastRecord::from_values(ts(0), 8, &values(&["3", "2", "1", "0", "0", "0.75"]))
                .unwrap();

        assert_eq!(record.darkness, Some(0.75));
        assert!(record.has_darkness());
    }

    #[test]
    fn test_from_values_too_few() {
        let result = ForecastRecord::from_values(ts(0), 8, &values(&["3", "2", "1"]));

        match result.unwrap_err() {
            Error::MalformedChartRecord { line, reason, .. } => {
                assert_eq!(line, 8);
                assert!(reason.contains("expected at least"));
            }
            other => panic!("expected MalformedChartRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_from_values_bad_code() {
        let result = ForecastRecord::from_values(ts(0), 8, &values(&["x", "2", "1", "0", "0"]));

        match result.unwrap_err() {
            Error::MalformedChartRecord { reason, .. } => {
                assert!(reason.contains("cloud cover"));
            }
            other => panic!("expected MalformedChartRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_from_values_bad_darkness() {
        let result =
            ForecastRecord::from_values(ts(0), 8, &values(&["3", "2", "1", "0", "0", "dark"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_chart_span() {
        let header = ChartHeader {
            title: "test".to_string(),
            format_version: "1".to_string(),
            utc_offset: -8.0,
        };

        let chart = SkyChart {
            header: header.clone(),
            records: vec![
                ForecastRecord::from_values(ts(0), 8, &values(&["3", "2", "1", "0", "0"])).unwrap(),
                ForecastRecord::from_values(ts(1), 9, &values(&["4", "2", "1", "0", "0"])).unwrap(),
            ],
        };

        assert_eq!(chart.len(), 2);
        assert!(!chart.is_empty());
        assert_eq!(chart.span(), Some((ts(0), ts(1))));

        let empty = SkyChart {
            header,
            records: Vec::new(),
        };
        assert!(empty.is_empty());
        assert_eq!(empty.span(), None);
    }
}
