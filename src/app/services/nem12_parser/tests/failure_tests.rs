//! Tests for failure reporting at the public entry points
//!
//! Every fatal failure must produce an empty collection and exactly one
//! reason on the observer.

use super::*;
use crate::Error;
use crate::app::adapters::line_source::MemoryLineSource;
use crate::app::adapters::observer::RecordingObserver;
use crate::app::services::nem12_parser::SimpleNem12Parser;
use crate::config::ParserConfig;
use std::path::Path;

fn recording_parser() -> SimpleNem12Parser<RecordingObserver> {
    SimpleNem12Parser::with_observer(ParserConfig::default(), RecordingObserver::new())
}

/// Parse the lines through the public entry point and return the single
/// recorded failure reason
fn failure_reason(lines: &[&str]) -> String {
    let parser = recording_parser();
    let reads = parser.parse_source(&MemoryLineSource::new(lines.iter().copied()));

    assert!(reads.is_empty(), "expected empty result for {:?}", lines);
    assert_eq!(parser.observer().failure_count(), 1);
    parser.observer().last_reason().unwrap()
}

#[test]
fn test_missing_file() {
    let parser = recording_parser();
    let reads = parser.parse_simple_nem12(Path::new("/nonexistent/SimpleNem12.csv"));

    assert!(reads.is_empty());
    assert_eq!(
        parser.observer().reasons(),
        vec!["The File Does Not Exists".to_string()]
    );
}

#[test]
fn test_missing_file_structured_error() {
    let err = SimpleNem12Parser::new()
        .try_parse_file(Path::new("/nonexistent/SimpleNem12.csv"))
        .unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
    assert_eq!(err.reason(), "The File Does Not Exists");
}

#[test]
fn test_empty_file() {
    let temp_file = create_temp_file("");
    let parser = recording_parser();

    let reads = parser.parse_simple_nem12(temp_file.path());

    assert!(reads.is_empty());
    assert_eq!(
        parser.observer().last_reason().unwrap(),
        "The input file doesn't have any meter records"
    );
}

#[test]
fn test_empty_source() {
    assert_eq!(
        failure_reason(&[]),
        "The input file doesn't have any meter records"
    );
}

#[test]
fn test_invalid_first_line() {
    assert_eq!(
        failure_reason(&["200,6123456789,KWH", "300,20161113,-50.8,A", "900"]),
        "RecordType 100 must be the first line in the file"
    );
}

#[test]
fn test_invalid_last_line() {
    assert_eq!(
        failure_reason(&["100", "200,6123456789,KWH", "300,20161113,-50.8,A"]),
        "RecordType 900 must be the last line in the file"
    );
}

#[test]
fn test_start_checked_before_end() {
    assert_eq!(
        failure_reason(&["200,6123456789,KWH", "300,20161113,-50.8,A"]),
        "RecordType 100 must be the first line in the file"
    );
}

#[test]
fn test_invalid_date() {
    assert_eq!(
        failure_reason(&[
            "100",
            "200,6123456789,KWH",
            "300,2016111113,-50.8,A",
            "900"
        ]),
        "Input date 2016111113 cannot be parsed"
    );
}

#[test]
fn test_invalid_energy_unit() {
    assert_eq!(
        failure_reason(&["100", "200,6123456789,MWH", "300,20161113,-50.8,A", "900"]),
        "EnergyUnit value should be KWH"
    );
}

#[test]
fn test_invalid_identifier_length() {
    for nmi in ["612345678", "61234567890", ""] {
        let parent = format!("200,{},KWH", nmi);
        assert_eq!(
            failure_reason(&["100", &parent, "900"]),
            "the number of characters should be 10"
        );
    }
}

#[test]
fn test_invalid_quality() {
    assert_eq!(
        failure_reason(&["100", "200,6123456789,KWH", "300,20161113,-50.8,X", "900"]),
        "Quality should be either A or E"
    );
}

#[test]
fn test_invalid_volume() {
    let reason = failure_reason(&["100", "200,6123456789,KWH", "300,20161113,lots,A", "900"]);
    assert!(reason.starts_with("Input volume lots cannot be parsed"));
}

#[test]
fn test_failure_discards_earlier_aggregates() {
    let parser = recording_parser();
    let source = MemoryLineSource::from_text(&create_test_nem12().replace("20161219", "2016-12-19"));

    let reads = parser.parse_source(&source);

    assert!(reads.is_empty());
    assert_eq!(
        parser.observer().reasons(),
        vec!["Input date 2016-12-19 cannot be parsed".to_string()]
    );
}

#[test]
fn test_first_failure_wins() {
    assert_eq!(
        failure_reason(&[
            "100",
            "200,6123456789,KWH",
            "300,20161113,-50.8,X",
            "200,61,MWH",
            "900"
        ]),
        "Quality should be either A or E"
    );
}

#[test]
fn test_one_report_per_failed_parse() {
    let parser = recording_parser();
    let bad = MemoryLineSource::new(["200,6123456789,KWH"]);
    let good = MemoryLineSource::new(["100", "200,6123456789,KWH", "900"]);

    assert!(parser.parse_source(&bad).is_empty());
    assert_eq!(parser.parse_source(&good).len(), 1);
    assert!(parser.parse_source(&bad).is_empty());

    assert_eq!(parser.observer().failure_count(), 2);
}

#[test]
fn test_invalid_configuration_reported() {
    let parser = SimpleNem12Parser::with_observer(
        ParserConfig::default().with_identifier_length(0),
        RecordingObserver::new(),
    );
    let reads = parser.parse_source(&MemoryLineSource::new(["100", "900"]));

    assert!(reads.is_empty());
    assert!(
        parser
            .observer()
            .last_reason()
            .unwrap()
            .starts_with("Configuration error")
    );
}

#[test]
fn test_digit_group_separators_rejected() {
    assert_eq!(
        failure_reason(&["100", "200,6123456789,KWH", "300,20161113,1_000,A", "900"]),
        "Input volume 1_000 cannot be parsed"
    );
}
