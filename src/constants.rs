//! Application constants for skychart
//!
//! This module contains the Clear Dark Sky endpoint addresses, the chart
//! format markers, and the color scaling factors used throughout the
//! application.

// =============================================================================
// Clear Dark Sky Endpoints
// =============================================================================

/// Location list resource (pipe-delimited, ISO-8859-1 encoded)
pub const LOCATION_URL: &str = "http://www.cleardarksky.com/t/chart_prop00.txt";

/// Base address for per-location chart resources
pub const CHART_BASE_URL: &str = "http://www.cleardarksky.com/txtc";

/// Build the chart resource URL for a location key
pub fn chart_url(key: &str) -> String {
    format!("{}/{}csp.txt", CHART_BASE_URL, key)
}

// =============================================================================
// Cache Files
// =============================================================================

/// Cached copy of the location list
pub const LOCATION_FILENAME: &str = "sky_locations.txt";

/// Persisted location choice
pub const SAVED_LOCATION_FILENAME: &str = "current_location.json";

/// Cache subdirectory name under the platform cache root
pub const CACHE_DIR_NAME: &str = "skychart";

// =============================================================================
// Chart Format Markers
// =============================================================================

/// Timestamp format used by chart data lines
pub const CHART_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Raw line that terminates a data block, matched before any scrubbing
pub const BLOCK_TERMINATOR: &str = ")";

/// Characters deleted from a data line before it is split on commas
pub const SCRUB_CHARS: &[char] = &['"', '(', ')', '\t', '\n'];

/// Legend lines between the three header assignments and Block A
pub const LEGEND_LINES_BEFORE_BLOCK_A: usize = 4;

/// Legend lines between the Block A terminator and Block B
pub const LEGEND_LINES_BEFORE_BLOCK_B: usize = 5;

/// Trailing decorative tokens discarded from every Block A record
pub const BLOCK_A_TRAILING_DROP: usize = 2;

/// Minimum comma-separated fields for a Block A line after scrubbing
pub const BLOCK_A_MIN_FIELDS: usize = 4;

/// Minimum comma-separated fields for a Block B line after scrubbing
pub const BLOCK_B_MIN_FIELDS: usize = 2;

/// Merged values required to populate a forecast record (timestamp excluded)
pub const RECORD_MIN_VALUES: usize = 5;

// =============================================================================
// Forecast Code Domains
// =============================================================================

/// Cloud cover codes run 0 (overcast) to 10 (clear)
pub const CLOUD_COVER_MAX: i32 = 10;

/// Transparency codes run 0 (poor) to 5 (transparent)
pub const TRANSPARENCY_MAX: i32 = 5;

/// Seeing codes run 0 (bad) to 5 (excellent)
pub const SEEING_MAX: i32 = 5;

// =============================================================================
// Rendering
// =============================================================================

/// Cell glyph for one forecast hour
pub const CHART_BLOCK: char = '\u{25a0}';

/// Width of the row label column
pub const LABEL_WIDTH: usize = 15;

/// Color channel step per cloud cover code (0-10 domain into 0-255)
pub const CLOUD_COLOR_STEP: i32 = 23;

/// Color channel step per transparency or seeing code (0-5 domain into 0-255)
pub const TRANSPARENCY_COLOR_STEP: i32 = 46;

/// Seeing shares the transparency step
pub const SEEING_COLOR_STEP: i32 = TRANSPARENCY_COLOR_STEP;

/// Darkness fraction to grayscale channel: floor(value * scale + offset)
pub const DARKNESS_SCALE: f64 = 24.0;
pub const DARKNESS_OFFSET: f64 = 104.0;

/// Channel level used when a record carries no darkness value (fully dark)
pub const DARKNESS_MISSING_LEVEL: i32 = 255;

// =============================================================================
// Helper Functions
// =============================================================================

/// Scale a cloud cover code into a 0-255 color channel value
pub fn cloud_channel(code: i32) -> i32 {
    (code * CLOUD_COLOR_STEP).clamp(0, 255)
}

/// Scale a transparency or seeing code into a 0-255 color channel value
pub fn quality_channel(code: i32) -> i32 {
    (code * TRANSPARENCY_COLOR_STEP).clamp(0, 255)
}

/// Scale a darkness fraction into a 0-255 grayscale channel value
///
/// Missing darkness maps to the fully-dark level.
pub fn darkness_channel(darkness: Option<f64>) -> i32 {
    match darkness {
        Some(value) => ((value * DARKNESS_SCALE + DARKNESS_OFFSET).floor() as i32).clamp(0, 255),
        None => DARKNESS_MISSING_LEVEL,
    }
}
