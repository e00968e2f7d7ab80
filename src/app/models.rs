//! Data models for SimpleNem12 processing
//!
//! This module contains the record types and the meter read aggregates
//! produced from a SimpleNem12 file.

use crate::constants::record_tokens;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Record Types
// =============================================================================

/// Leading token of every SimpleNem12 line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    /// `100` file start marker
    Start,
    /// `200` meter header record
    Parent,
    /// `300` daily interval record
    Child,
    /// `900` file end marker
    End,
}

impl RecordType {
    /// The wire token for this record type
    pub fn token(&self) -> &'static str {
        match self {
            RecordType::Start => record_tokens::START,
            RecordType::Parent => record_tokens::PARENT,
            RecordType::Child => record_tokens::CHILD,
            RecordType::End => record_tokens::END,
        }
    }

    /// Match a leading field exactly against the known tokens
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            record_tokens::START => Some(RecordType::Start),
            record_tokens::PARENT => Some(RecordType::Parent),
            record_tokens::CHILD => Some(RecordType::Child),
            record_tokens::END => Some(RecordType::End),
            _ => None,
        }
    }

    /// Framing records delimit the file and carry no payload
    pub fn is_framing(&self) -> bool {
        matches!(self, RecordType::Start | RecordType::End)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// =============================================================================
// Energy Unit and Quality
// =============================================================================

/// Unit of the recorded volumes. Only kilowatt hours are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyUnit {
    #[serde(rename = "KWH")]
    Kwh,
}

impl EnergyUnit {
    pub fn code(&self) -> &'static str {
        match self {
            EnergyUnit::Kwh => "KWH",
        }
    }

    /// Parse an energy unit code, case sensitive
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KWH" => Some(EnergyUnit::Kwh),
            _ => None,
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Reading quality: actual or estimated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    /// Actual meter reading
    A,
    /// Estimated reading
    E,
}

impl Quality {
    pub fn code(&self) -> &'static str {
        match self {
            Quality::A => "A",
            Quality::E => "E",
        }
    }

    /// Parse a quality flag, case sensitive
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(Quality::A),
            "E" => Some(Quality::E),
            _ => None,
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Meter Volume
// =============================================================================

/// A single day's consumption with its quality flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterVolume {
    /// Signed arbitrary-precision volume in the meter's energy unit
    pub volume: BigDecimal,

    /// Whether the volume is actual or estimated
    pub quality: Quality,
}

impl MeterVolume {
    pub fn new(volume: BigDecimal, quality: Quality) -> Self {
        Self { volume, quality }
    }
}

// =============================================================================
// Meter Read Aggregate
// =============================================================================

/// All daily volumes recorded for one meter, in file order
///
/// Dates are unique within an aggregate. Appending a date that is already
/// present replaces its volume but keeps its original position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredMeterRead", into = "StoredMeterRead")]
pub struct MeterRead {
    nmi: String,
    energy_unit: EnergyUnit,
    volumes: Vec<(NaiveDate, MeterVolume)>,
    /// Index into `volumes` for each date
    positions: HashMap<NaiveDate, usize>,
}

impl MeterRead {
    /// Create an aggregate with no volumes
    pub fn new(nmi: impl Into<String>, energy_unit: EnergyUnit) -> Self {
        Self {
            nmi: nmi.into(),
            energy_unit,
            volumes: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// National Metering Identifier
    pub fn nmi(&self) -> &str {
        &self.nmi
    }

    pub fn energy_unit(&self) -> EnergyUnit {
        self.energy_unit
    }

    /// Record the volume for a date, returning the volume it replaced
    pub fn append_volume(&mut self, date: NaiveDate, volume: MeterVolume) -> Option<MeterVolume> {
        match self.positions.get(&date) {
            Some(&index) => Some(std::mem::replace(&mut self.volumes[index].1, volume)),
            None => {
                self.positions.insert(date, self.volumes.len());
                self.volumes.push((date, volume));
                None
            }
        }
    }

    /// Daily volumes in the order they appeared in the file
    pub fn volumes(&self) -> impl Iterator<Item = (NaiveDate, &MeterVolume)> + '_ {
        self.volumes.iter().map(|(date, volume)| (*date, volume))
    }

    /// Volume recorded for a specific date
    pub fn volume_on(&self, date: NaiveDate) -> Option<&MeterVolume> {
        self.positions
            .get(&date)
            .map(|&index| &self.volumes[index].1)
    }

    /// Sum of all daily volumes
    pub fn total_volume(&self) -> BigDecimal {
        self.volumes
            .iter()
            .fold(BigDecimal::from(0), |total, (_, v)| total + &v.volume)
    }

    /// Number of days recorded
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }
}

/// Serialised form of [`MeterRead`]; the date index is rebuilt on load
#[derive(Clone, Serialize, Deserialize)]
struct StoredMeterRead {
    nmi: String,
    energy_unit: EnergyUnit,
    volumes: Vec<(NaiveDate, MeterVolume)>,
}

impl From<StoredMeterRead> for MeterRead {
    fn from(stored: StoredMeterRead) -> Self {
        let mut read = MeterRead::new(stored.nmi, stored.energy_unit);
        for (date, volume) in stored.volumes {
            read.append_volume(date, volume);
        }
        read
    }
}

impl From<MeterRead> for StoredMeterRead {
    fn from(read: MeterRead) -> Self {
        Self {
            nmi: read.nmi,
            energy_unit: read.energy_unit,
            volumes: read.volumes,
        }
    }
}
