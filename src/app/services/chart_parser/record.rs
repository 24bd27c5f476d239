//! Data line scrubbing and tokenization
//!
//! Both data blocks share one record shape: a parenthesized, comma-separated
//! line whose first token is a `YYYY-MM-DD HH:MM:SS` timestamp. Before
//! splitting, the quote, parenthesis, tab and newline characters are deleted
//! from the line. The blocks differ only in their minimum field counts and
//! in Block A discarding its last two tokens - a quirk of the upstream
//! format preserved as-is (the dropped tokens look like data but the source
//! never renders them).

use crate::constants::{
    BLOCK_A_MIN_FIELDS, BLOCK_A_TRAILING_DROP, BLOCK_B_MIN_FIELDS, CHART_DATETIME_FORMAT,
    SCRUB_CHARS,
};
use crate::{Error, Result};
use chrono::NaiveDateTime;

/// Delete the format's decorative characters from a data line
pub fn scrub(line: &str) -> String {
    line.chars().filter(|c| !SCRUB_CHARS.contains(c)).collect()
}

/// Tokenize a Block A record line
///
/// Returns the record timestamp and its value tokens, with the trailing two
/// tokens already discarded.
pub fn parse_block_a_line(line_no: usize, raw: &str) -> Result<(NaiveDateTime, Vec<String>)> {
    let scrubbed = scrub(raw);
    let tokens: Vec<&str> = scrubbed.split(',').collect();

    if tokens.len() < BLOCK_A_MIN_FIELDS {
        return Err(Error::malformed_chart_record(
            line_no,
            raw,
            format!(
                "expected at least {} fields, found {}",
                BLOCK_A_MIN_FIELDS,
                tokens.len()
            ),
        ));
    }

    let tokens = &tokens[..tokens.len() - BLOCK_A_TRAILING_DROP];
    let timestamp = parse_timestamp(line_no, raw, tokens[0])?;
    let values = tokens[1..].iter().map(|t| t.to_string()).collect();

    Ok((timestamp, values))
}

/// Tokenize a Block B record line
///
/// All tokens after the timestamp are candidates for appending; nothing is
/// discarded.
pub fn parse_block_b_line(line_no: usize, raw: &str) -> Result<(NaiveDateTime, Vec<String>)> {
    let scrubbed = scrub(raw);
    let tokens: Vec<&str> = scrubbed.split(',').collect();

    if tokens.len() < BLOCK_B_MIN_FIELDS {
        return Err(Error::malformed_chart_record(
            line_no,
            raw,
            format!(
                "expected at least {} fields, found {}",
                BLOCK_B_MIN_FIELDS,
                tokens.len()
            ),
        ));
    }

    let timestamp = parse_timestamp(line_no, raw, tokens[0])?;
    let values = tokens[1..].iter().map(|t| t.to_string()).collect();

    Ok((timestamp, values))
}

fn parse_timestamp(line_no: usize, raw: &str, token: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(token, CHART_DATETIME_FORMAT).map_err(|_| {
        Error::malformed_chart_record(line_no, raw, format!("invalid timestamp '{}'", token))
    })
}
