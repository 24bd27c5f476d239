//! Chart preamble parsing
//!
//! The first three lines of a chart resource are `name = value` assignments:
//! the chart title, the format version, and the UTC offset of the chart's
//! local timestamps. Values may be double-quoted; the offset sometimes is.

use super::lines::LineCursor;
use crate::app::models::ChartHeader;
use crate::{Error, Result};

/// Parse the three-line chart preamble
pub fn parse_header(cursor: &mut LineCursor) -> Result<ChartHeader> {
    let title = next_assignment(cursor, "title")?;
    let format_version = next_assignment(cursor, "format version")?;

    let (line_no, raw_offset) = assignment_line(cursor, "UTC offset")?;
    let utc_offset: f64 = raw_offset.parse().map_err(|_| {
        Error::malformed_chart_header(
            line_no,
            raw_offset.clone(),
            format!("non-numeric UTC offset '{}'", raw_offset),
        )
    })?;

    Ok(ChartHeader {
        title,
        format_version,
        utc_offset,
    })
}

fn next_assignment(cursor: &mut LineCursor, what: &str) -> Result<String> {
    assignment_line(cursor, what).map(|(_, value)| value)
}

/// Read one assignment line, returning its line number and unquoted value
///
/// The value is everything after the first `=`, whitespace-trimmed with
/// surrounding double quotes stripped.
fn assignment_line(cursor: &mut LineCursor, what: &str) -> Result<(usize, String)> {
    let (line_no, raw) = match cursor.next_line() {
        Some(line) => line,
        None => {
            return Err(Error::malformed_chart_header(
                cursor.position() + 1,
                "",
                format!("unexpected end of chart while reading {}", what),
            ));
        }
    };

    let (_, value) = raw.split_once('=').ok_or_else(|| {
        Error::malformed_chart_header(line_no, raw, format!("missing '=' in {} assignment", what))
    })?;

    Ok((line_no, value.trim().trim_matches('"').to_string()))
}
