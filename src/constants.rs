//! Application constants for the SimpleNem12 parser
//!
//! This module contains the record layout, default values and the catalogued
//! failure reasons used throughout the parser.

// =============================================================================
// Record Layout
// =============================================================================

/// Field separator used by every SimpleNem12 line
pub const FIELD_SEPARATOR: char = ',';

/// Leading tokens for each record type
pub mod record_tokens {
    /// File start marker
    pub const START: &str = "100";

    /// Meter (NMI) header record
    pub const PARENT: &str = "200";

    /// Daily interval volume record
    pub const CHILD: &str = "300";

    /// File end marker
    pub const END: &str = "900";
}

/// Field positions within a `200` meter record
pub mod parent_fields {
    pub const NMI: usize = 1;
    pub const ENERGY_UNIT: usize = 2;
}

/// Field positions within a `300` interval record
pub mod child_fields {
    pub const DATE: usize = 1;
    pub const VOLUME: usize = 2;
    pub const QUALITY: usize = 3;
}

/// Length of a National Metering Identifier
pub const NMI_LENGTH: usize = 10;

/// Interval date format (`yyyyMMdd`)
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Number of characters in an interval date
pub const DATE_LENGTH: usize = 8;

// =============================================================================
// Failure Reasons
// =============================================================================

/// Catalogued failure reasons reported by the validators
pub mod reasons {
    pub const FILE_NOT_FOUND: &str = "The File Does Not Exists";
    pub const EMPTY_FILE: &str = "The input file doesn't have any meter records";
    pub const INVALID_START: &str = "RecordType 100 must be the first line in the file";
    pub const INVALID_END: &str = "RecordType 900 must be the last line in the file";
    pub const INVALID_ENERGY_UNIT: &str = "EnergyUnit value should be KWH";
    pub const INVALID_QUALITY: &str = "Quality should be either A or E";
    pub const READ_FAILURE: &str = "Error reading meter records from csv file";

    /// Identifier length failure for a configured length
    pub fn invalid_nmi(length: usize) -> String {
        format!("the number of characters should be {}", length)
    }
}
