//! Single-pass construction of meter read aggregates
//!
//! [`MeterReadBuilder`] consumes meter and interval lines in file order.
//! It keeps the meter currently being filled as an explicit handle; a new
//! meter record closes the current one and opens the next, so output order
//! always matches file order. Any failure aborts the build, and the builder
//! is dropped along with every aggregate it held.

use tracing::{debug, warn};

use super::field_parsers::{parse_date, parse_volume};
use super::record_classifier::{ClassifiedLine, classify};
use super::stats::ParseStats;
use crate::app::models::{EnergyUnit, MeterRead, MeterVolume, Quality, RecordType};
use crate::app::services::validation::{Validation, validators};
use crate::constants::{child_fields, parent_fields, reasons};
use crate::{Error, ParserConfig, Result};

/// Position of the builder within the record stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// No line processed yet
    AwaitingRecords,
    /// Lines processed but no meter record seen
    AccumulatingWithoutParent,
    /// A meter record is open and receives interval records
    AccumulatingWithParent,
    /// All lines consumed
    Done,
}

/// Field rules applied to meter and interval records
struct FieldRules {
    identifier: Validation<str>,
    energy_unit: Validation<str>,
    quality: Validation<str>,
}

impl FieldRules {
    fn new(config: &ParserConfig) -> Self {
        Self {
            identifier: validators::valid_identifier(config.identifier_length),
            energy_unit: validators::valid_energy_unit(),
            quality: validators::valid_quality(),
        }
    }
}

/// Builds the ordered collection of meter reads from non-framing lines
pub struct MeterReadBuilder {
    rules: FieldRules,
    completed: Vec<MeterRead>,
    current: Option<MeterRead>,
    state: BuilderState,
    stats: ParseStats,
}

impl MeterReadBuilder {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            rules: FieldRules::new(config),
            completed: Vec::new(),
            current: None,
            state: BuilderState::AwaitingRecords,
            stats: ParseStats::new(),
        }
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Number of aggregates created so far, including the open one
    pub fn meter_count(&self) -> usize {
        self.completed.len() + usize::from(self.current.is_some())
    }

    /// Dispatch one line by its record type
    pub fn push_line(&mut self, line: &str) -> Result<()> {
        let record = classify(line);

        match record.record_type {
            Some(RecordType::Parent) => self.open_meter(&record)?,
            Some(RecordType::Child) => self.append_interval(&record)?,
            _ => {
                self.stats.unrecognised_lines += 1;
                debug!("Ignoring unrecognised line: '{}'", line);
            }
        }

        if self.state == BuilderState::AwaitingRecords {
            self.state = BuilderState::AccumulatingWithoutParent;
        }

        Ok(())
    }

    /// Close the open aggregate and return everything built, in file order
    pub fn finish(mut self) -> (Vec<MeterRead>, ParseStats) {
        if let Some(meter) = self.current.take() {
            self.completed.push(meter);
        }
        self.state = BuilderState::Done;
        debug!("Builder finished with {} meter reads", self.completed.len());

        (self.completed, self.stats)
    }

    fn open_meter(&mut self, record: &ClassifiedLine<'_>) -> Result<()> {
        let nmi = record.field(parent_fields::NMI)?;
        let energy_unit = record.field(parent_fields::ENERGY_UNIT)?;

        self.rules.identifier.check(nmi)?;
        self.rules.energy_unit.check(energy_unit)?;
        let energy_unit = EnergyUnit::from_code(energy_unit)
            .ok_or_else(|| Error::validation(reasons::INVALID_ENERGY_UNIT))?;

        if let Some(previous) = self.current.replace(MeterRead::new(nmi, energy_unit)) {
            self.completed.push(previous);
        }
        self.state = BuilderState::AccumulatingWithParent;
        self.stats.parent_records += 1;
        debug!("Opened meter read for NMI {}", nmi);

        Ok(())
    }

    fn append_interval(&mut self, record: &ClassifiedLine<'_>) -> Result<()> {
        let Some(meter) = self.current.as_mut() else {
            self.stats.orphan_child_records += 1;
            warn!(
                "Ignoring interval record before any meter record: '{}'",
                record.line
            );
            return Ok(());
        };

        let date = record.field(child_fields::DATE)?;
        let volume = record.field(child_fields::VOLUME)?;
        let quality = record.field(child_fields::QUALITY)?;

        let date = parse_date(date)?;
        self.rules.quality.check(quality)?;
        let quality = Quality::from_code(quality)
            .ok_or_else(|| Error::validation(reasons::INVALID_QUALITY))?;
        let volume = parse_volume(volume)?;

        if meter
            .append_volume(date, MeterVolume::new(volume, quality))
            .is_some()
        {
            debug!("NMI {} repeats date {}, keeping the later volume", meter.nmi(), date);
        }
        self.stats.child_records += 1;

        Ok(())
    }
}
