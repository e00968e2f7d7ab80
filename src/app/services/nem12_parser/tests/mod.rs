//! Test utilities for SimpleNem12 parser testing
//!
//! This module provides fixture content and helper functions used across
//! the parser test modules.

use chrono::NaiveDate;
use bigdecimal::BigDecimal;
use std::io::Write;
use std::str::FromStr;
use tempfile::NamedTempFile;

use crate::app::models::{EnergyUnit, MeterRead, MeterVolume, Quality};

// Test modules
mod failure_tests;

/// Two meters with a week and six days of intervals respectively
pub fn create_test_nem12() -> String {
    r#"100
200,6123456789,KWH
300,20161113,-50.8,A
300,20161114,23.96,A
300,20161115,32.0,A
300,20161116,-33,A
300,20161117,0,A
300,20161118,0,E
300,20161119,-9,A
200,6987654321,KWH
300,20161215,-3.8,A
300,20161216,0,A
300,20161217,3.0,E
300,20161218,-12.8,A
300,20161219,23.43,E
300,20161220,4.5,A
900"#
        .to_string()
}

/// Expected aggregates for [`create_test_nem12`]
pub fn expected_meter_reads() -> Vec<MeterRead> {
    let mut first = MeterRead::new("6123456789", EnergyUnit::Kwh);
    for (date, volume, quality) in [
        ("20161113", "-50.8", "A"),
        ("20161114", "23.96", "A"),
        ("20161115", "32.0", "A"),
        ("20161116", "-33", "A"),
        ("20161117", "0", "A"),
        ("20161118", "0", "E"),
        ("20161119", "-9", "A"),
    ] {
        first.append_volume(date_of(date), meter_volume(volume, quality));
    }

    let mut second = MeterRead::new("6987654321", EnergyUnit::Kwh);
    for (date, volume, quality) in [
        ("20161215", "-3.8", "A"),
        ("20161216", "0", "A"),
        ("20161217", "3.0", "E"),
        ("20161218", "-12.8", "A"),
        ("20161219", "23.43", "E"),
        ("20161220", "4.5", "A"),
    ] {
        second.append_volume(date_of(date), meter_volume(volume, quality));
    }

    vec![first, second]
}

/// Parse a `yyyyMMdd` literal
pub fn date_of(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y%m%d").unwrap()
}

/// Build a volume from literal text
pub fn meter_volume(volume: &str, quality: &str) -> MeterVolume {
    MeterVolume::new(
        BigDecimal::from_str(volume).unwrap(),
        Quality::from_code(quality).unwrap(),
    )
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
