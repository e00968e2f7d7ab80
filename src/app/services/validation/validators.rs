//! Catalog of SimpleNem12 validation rules
//!
//! Each function builds a fresh rule carrying its catalogued failure reason,
//! so every check in the parser reports from a single place.

use super::Validation;
use crate::app::models::{EnergyUnit, Quality, RecordType};
use crate::app::services::nem12_parser::record_classifier::leading_token;
use crate::constants::reasons;
use std::path::Path;

/// The input path refers to an existing file
pub fn file_exists() -> Validation<Path> {
    Validation::from_predicate(|path: &Path| path.exists(), reasons::FILE_NOT_FOUND)
}

/// The record set holds at least one line
pub fn has_meter_records() -> Validation<[String]> {
    Validation::from_predicate(|lines: &[String]| !lines.is_empty(), reasons::EMPTY_FILE)
}

/// The first line exists and starts with the `100` token
pub fn valid_start_line() -> Validation<Option<String>> {
    marker_line(RecordType::Start, reasons::INVALID_START)
}

/// The last line exists and starts with the `900` token
pub fn valid_end_line() -> Validation<Option<String>> {
    marker_line(RecordType::End, reasons::INVALID_END)
}

fn marker_line(marker: RecordType, reason: &'static str) -> Validation<Option<String>> {
    let present = Validation::from_predicate(|line: &Option<String>| line.is_some(), reason);
    let leading = Validation::from_predicate(
        move |line: &Option<String>| {
            line.as_deref()
                .is_some_and(|l| leading_token(l) == marker.token())
        },
        reason,
    );
    present.and(leading)
}

/// The meter identifier has exactly `length` characters
pub fn valid_identifier(length: usize) -> Validation<str> {
    Validation::from_predicate(
        move |nmi: &str| nmi.chars().count() == length,
        reasons::invalid_nmi(length),
    )
}

/// The energy unit is `KWH`
pub fn valid_energy_unit() -> Validation<str> {
    Validation::from_predicate(
        |unit: &str| EnergyUnit::from_code(unit) == Some(EnergyUnit::Kwh),
        reasons::INVALID_ENERGY_UNIT,
    )
}

/// The quality flag is `A` or `E`
pub fn valid_quality() -> Validation<str> {
    let actual = Validation::from_predicate(
        |flag: &str| Quality::from_code(flag) == Some(Quality::A),
        reasons::INVALID_QUALITY,
    );
    let estimated = Validation::from_predicate(
        |flag: &str| Quality::from_code(flag) == Some(Quality::E),
        reasons::INVALID_QUALITY,
    );
    actual.or(estimated)
}
