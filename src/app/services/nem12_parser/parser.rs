//! Core SimpleNem12 parser implementation
//!
//! This module provides the parser orchestration: file-level validation,
//! content-level validation of the framing records, stripping of framing
//! lines, and the single pass that builds meter read aggregates.

use std::path::Path;
use tracing::{debug, info};

use super::builder::MeterReadBuilder;
use super::record_classifier::is_framing_line;
use super::stats::ParseStats;
use crate::app::adapters::line_source::{FileLineSource, LineSource};
use crate::app::adapters::observer::{Observer, TracingObserver};
use crate::app::models::MeterRead;
use crate::app::services::validation::validators;
use crate::config::ParserConfig;
use crate::{Error, Result};

/// Parser for SimpleNem12 metering files
///
/// The `try_*` methods fail fast and return the first error encountered.
/// The public entry points [`parse_simple_nem12`](Self::parse_simple_nem12)
/// and [`parse_source`](Self::parse_source) report that error to the
/// observer once and return an empty collection instead.
#[derive(Debug)]
pub struct SimpleNem12Parser<O: Observer = TracingObserver> {
    config: ParserConfig,
    observer: O,
}

impl SimpleNem12Parser {
    /// Create a parser with default configuration that logs failures
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Create a parser with custom configuration that logs failures
    pub fn with_config(config: ParserConfig) -> Self {
        Self::with_observer(config, TracingObserver)
    }
}

impl Default for SimpleNem12Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Observer> SimpleNem12Parser<O> {
    /// Create a parser reporting failures to a custom observer
    pub fn with_observer(config: ParserConfig, observer: O) -> Self {
        Self { config, observer }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Parse a SimpleNem12 file into meter reads.
    ///
    /// Returns an empty collection when any validation or parse step fails;
    /// the failure reason goes to the observer.
    pub fn parse_simple_nem12(&self, path: &Path) -> Vec<MeterRead> {
        self.or_report(self.try_parse_file(path))
    }

    /// Parse lines from any source into meter reads, reporting failures to
    /// the observer and returning an empty collection on error
    pub fn parse_source(&self, source: &dyn LineSource) -> Vec<MeterRead> {
        self.or_report(self.try_parse_source(source))
    }

    /// Parse a file, returning the first failure as an error
    pub fn try_parse_file(&self, path: &Path) -> Result<Vec<MeterRead>> {
        self.parse_file_with_stats(path).map(|(reads, _)| reads)
    }

    /// Parse a file and report how each line was handled
    pub fn parse_file_with_stats(&self, path: &Path) -> Result<(Vec<MeterRead>, ParseStats)> {
        info!("Parsing SimpleNem12 file: {}", path.display());

        self.config.validate()?;
        if !validators::file_exists().test(path).is_valid() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let source = FileLineSource::new(path).with_trim(self.config.trim_lines);
        self.parse_lines_with_stats(source.read_lines()?)
    }

    /// Parse lines from a source, returning the first failure as an error
    pub fn try_parse_source(&self, source: &dyn LineSource) -> Result<Vec<MeterRead>> {
        self.config.validate()?;
        let lines = source.read_lines()?;
        self.parse_lines_with_stats(lines).map(|(reads, _)| reads)
    }

    /// Validate and parse lines already read into memory
    pub fn parse_lines_with_stats(
        &self,
        lines: Vec<String>,
    ) -> Result<(Vec<MeterRead>, ParseStats)> {
        let total_lines = lines.len();
        let (lines, blank_lines_skipped) = self.drop_blank_lines(lines);

        self.validate_contents(&lines)?;

        let mut builder = MeterReadBuilder::new(&self.config);
        let mut framing_lines = 0;
        for line in &lines {
            if is_framing_line(line) {
                framing_lines += 1;
                continue;
            }
            builder.push_line(line)?;
        }

        let (reads, mut stats) = builder.finish();
        stats.total_lines = total_lines;
        stats.blank_lines_skipped = blank_lines_skipped;
        stats.framing_lines = framing_lines;

        info!(
            "Parsed {} meter reads with {} interval records from {} lines",
            reads.len(),
            stats.child_records,
            stats.total_lines
        );
        if stats.ignored_lines() > 0 {
            debug!(
                "Ignored {} orphan interval records and {} unrecognised lines",
                stats.orphan_child_records, stats.unrecognised_lines
            );
        }

        Ok((reads, stats))
    }

    /// Non-empty record set with a `100` first line and a `900` last line
    fn validate_contents(&self, lines: &[String]) -> Result<()> {
        validators::has_meter_records().check(lines)?;
        validators::valid_start_line().check(&lines.first().cloned())?;
        validators::valid_end_line().check(&lines.last().cloned())?;
        Ok(())
    }

    fn drop_blank_lines(&self, lines: Vec<String>) -> (Vec<String>, usize) {
        if !self.config.skip_blank_lines {
            return (lines, 0);
        }

        let before = lines.len();
        let kept: Vec<String> = lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect();
        let skipped = before - kept.len();
        (kept, skipped)
    }

    fn or_report(&self, result: Result<Vec<MeterRead>>) -> Vec<MeterRead> {
        result.unwrap_or_else(|e| {
            self.observer.on_failure(&e);
            Vec::new()
        })
    }
}
