//! Field parsing utilities for SimpleNem12 interval records
//!
//! Dates must be exactly eight digits in `yyyyMMdd` order. Volumes are
//! arbitrary precision decimals and may be signed, fractional, or carry an
//! exponent.

use crate::constants::{DATE_FORMAT, DATE_LENGTH};
use crate::{Error, Result};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[0-9]{{{}}}$", DATE_LENGTH)).expect("date pattern is valid")
});

/// Optional sign, digits with an optional fraction, optional exponent
static VOLUME_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$")
        .expect("volume pattern is valid")
});

/// Parse a `yyyyMMdd` interval date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    if !DATE_SHAPE.is_match(value) {
        return Err(Error::date_parsing(value));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| Error::date_parsing(value))
}

/// Parse a decimal interval volume without loss of precision
pub fn parse_volume(value: &str) -> Result<BigDecimal> {
    if !VOLUME_SHAPE.is_match(value) {
        return Err(Error::volume_parsing(value, None));
    }

    BigDecimal::from_str(value).map_err(|e| Error::volume_parsing(value, Some(e)))
}
