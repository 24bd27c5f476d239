//! Core chart parser implementation
//!
//! This module orchestrates the nine-step chart grammar: preamble, fixed
//! legends, the two data blocks, and the timestamp-keyed merge that joins
//! Block B's darkness values onto Block A's forecast codes.

use std::collections::HashMap;
use tracing::{debug, info};

use super::header::parse_header;
use super::lines::LineCursor;
use super::record::{parse_block_a_line, parse_block_b_line};
use crate::Result;
use crate::app::models::{ForecastRecord, SkyChart};
use crate::constants::{
    BLOCK_TERMINATOR, LEGEND_LINES_BEFORE_BLOCK_A, LEGEND_LINES_BEFORE_BLOCK_B,
};
use chrono::NaiveDateTime;

/// A Block A record awaiting the merge, with its source line for diagnostics
#[derive(Debug)]
struct PendingRecord {
    line: usize,
    values: Vec<String>,
}

/// Parser for Clear Dark Sky chart resources
///
/// `parse` is a pure function of its input text: it holds no state across
/// calls and performs no I/O, so charts can be parsed concurrently if ever
/// needed. Any structural failure aborts the whole parse - a malformed
/// upstream chart must never yield a partial series.
#[derive(Debug)]
pub struct ChartParser;

impl ChartParser {
    /// Parse a chart resource into a time-ordered forecast series
    pub fn parse(text: &str) -> Result<SkyChart> {
        let mut cursor = LineCursor::new(text);

        let header = parse_header(&mut cursor)?;
        debug!(
            "parsed chart header: title='{}', version='{}', utc_offset={}",
            header.title, header.format_version, header.utc_offset
        );

        cursor.skip(LEGEND_LINES_BEFORE_BLOCK_A, "chart legend")?;

        // Block A: forecast codes keyed by timestamp
        let mut pending: HashMap<NaiveDateTime, PendingRecord> = HashMap::new();
        loop {
            let (line_no, raw) = cursor.expect_line("Block A")?;
            // The terminator is matched on the raw line, before scrubbing
            // would erase the parenthesis
            if raw == BLOCK_TERMINATOR {
                break;
            }

            let (timestamp, values) = parse_block_a_line(line_no, raw)?;
            pending.insert(
                timestamp,
                PendingRecord {
                    line: line_no,
                    values,
                },
            );
        }
        debug!("Block A yielded {} timestamps", pending.len());

        cursor.skip(LEGEND_LINES_BEFORE_BLOCK_B, "mid-chart legend")?;

        // Block B: one-way merge. Values append onto an existing timestamp;
        // timestamps unknown to Block A are dropped, not inserted.
        let mut dropped = 0usize;
        loop {
            let (line_no, raw) = cursor.expect_line("Block B")?;
            if raw == BLOCK_TERMINATOR {
                break;
            }

            let (timestamp, values) = parse_block_b_line(line_no, raw)?;
            match pending.get_mut(&timestamp) {
                Some(record) => record.values.extend(values),
                None => {
                    dropped += 1;
                    debug!("dropping Block B record at {} with no Block A match", timestamp);
                }
            }
        }
        if dropped > 0 {
            debug!("dropped {} unmatched Block B records", dropped);
        }

        // Explicit ascending sort over the merged timestamps; the source
        // usually emits Block A in order but the format does not promise it
        let mut timestamps: Vec<NaiveDateTime> = pending.keys().copied().collect();
        timestamps.sort_unstable();

        let mut records = Vec::with_capacity(timestamps.len());
        for timestamp in timestamps {
            let raw = &pending[&timestamp];
            records.push(ForecastRecord::from_values(timestamp, raw.line, &raw.values)?);
        }

        info!(
            "parsed {} forecast hours from chart '{}'",
            records.len(),
            header.title
        );

        Ok(SkyChart { header, records })
    }
}
