//! Line cursor over raw chart text
//!
//! The chart grammar is expressed as sequential rules over lines: read the
//! three header assignments, skip a fixed legend, consume a block up to its
//! terminator, and so on. The cursor keeps 1-based line numbers so parse
//! failures can point at the offending line.

use crate::{Error, Result};

/// Forward-only cursor over the lines of a chart resource
#[derive(Debug)]
pub struct LineCursor<'a> {
    inner: std::str::Lines<'a>,
    consumed: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines(),
            consumed: 0,
        }
    }

    /// Number of lines consumed so far
    pub fn position(&self) -> usize {
        self.consumed
    }

    /// Next line with its 1-based line number, or `None` at end of input
    pub fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let line = self.inner.next()?;
        self.consumed += 1;
        Some((self.consumed, line))
    }

    /// Next line, treating end of input as a malformed chart
    ///
    /// `context` names the grammar rule being read, for diagnostics.
    pub fn expect_line(&mut self, context: &str) -> Result<(usize, &'a str)> {
        self.next_line().ok_or_else(|| {
            Error::malformed_chart_record(
                self.consumed + 1,
                "",
                format!("unexpected end of chart while reading {}", context),
            )
        })
    }

    /// Skip `count` lines unconditionally, failing on truncated input
    pub fn skip(&mut self, count: usize, context: &str) -> Result<()> {
        for _ in 0..count {
            self.expect_line(context)?;
        }
        Ok(())
    }
}
