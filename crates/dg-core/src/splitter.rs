//! Batch splitting on the `GO` separator convention.
//!
//! A script is cut wherever a line holds nothing but `GO` (any case, with
//! optional spaces or tabs around it). Each piece is sent to the database
//! on its own, in source order.

use regex::Regex;

/// Separator line: `GO` alone on a line, LF or CRLF terminated.
const SEPARATOR_PATTERN: &str = r"(?im)^[ \t]*GO[ \t]*\r?$";

/// Splits migration scripts into independently executable batches.
#[derive(Debug, Clone)]
pub struct StatementSplitter {
    separator: Regex,
}

impl StatementSplitter {
    /// Create a splitter for the `GO` separator.
    pub fn new() -> Self {
        Self {
            separator: Regex::new(SEPARATOR_PATTERN).expect("valid regex literal"),
        }
    }

    /// Split `script` into trimmed, non-empty batches in source order.
    ///
    /// A script without separator lines is a single batch. A script that is
    /// blank (or only separators) yields no batches at all.
    pub fn split<'a>(&self, script: &'a str) -> Vec<&'a str> {
        self.separator
            .split(script)
            .map(str::trim)
            .filter(|batch| !batch.is_empty())
            .collect()
    }
}

impl Default for StatementSplitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "splitter_test.rs"]
mod tests;
