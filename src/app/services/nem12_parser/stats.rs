//! Parsing statistics for SimpleNem12 processing
//!
//! Tracks how each input line was handled during a successful parse.

use serde::{Deserialize, Serialize};

/// Line handling counts for one parse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Lines read from the source
    pub total_lines: usize,

    /// Blank lines dropped before validation (only when configured)
    pub blank_lines_skipped: usize,

    /// `100`/`900` framing lines stripped before dispatch
    pub framing_lines: usize,

    /// `200` meter records that created an aggregate
    pub parent_records: usize,

    /// `300` interval records appended to an aggregate
    pub child_records: usize,

    /// `300` interval records seen before any meter record
    pub orphan_child_records: usize,

    /// Lines whose leading field is not a known record type
    pub unrecognised_lines: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines that were seen but contributed nothing to the output
    pub fn ignored_lines(&self) -> usize {
        self.orphan_child_records + self.unrecognised_lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stats_empty() {
        let stats = ParseStats::new();
        assert_eq!(stats.total_lines, 0);
        assert_eq!(stats.ignored_lines(), 0);
    }

    #[test]
    fn test_ignored_lines() {
        let stats = ParseStats {
            total_lines: 10,
            framing_lines: 2,
            parent_records: 1,
            child_records: 4,
            orphan_child_records: 2,
            unrecognised_lines: 1,
            ..Default::default()
        };
        assert_eq!(stats.ignored_lines(), 3);
    }
}
