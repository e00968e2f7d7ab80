//! SimpleNem12 Parser Library
//!
//! A Rust library for reading SimpleNem12 interval metering files into
//! per-meter collections of daily consumption volumes.
//!
//! This library provides tools for:
//! - Reading ordered, trimmed lines from a file or any other line source
//! - Validating file framing (`100` start and `900` end records)
//! - Composable field validation with short-circuiting AND/OR rules
//! - Classifying `200` meter records and `300` interval records
//! - Building ordered `MeterRead` aggregates in a single pass
//! - Reporting failures through an injected observer sink

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod nem12_parser;
        pub mod validation;
    }
    pub mod adapters {
        pub mod line_source;
        pub mod observer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::adapters::line_source::{FileLineSource, LineSource, MemoryLineSource};
pub use app::adapters::observer::{Observer, RecordingObserver, TracingObserver};
pub use app::models::{EnergyUnit, MeterRead, MeterVolume, Quality, RecordType};
pub use app::services::nem12_parser::{ParseStats, SimpleNem12Parser};
pub use config::ParserConfig;

/// Result type alias for the SimpleNem12 parser
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while reading or parsing a SimpleNem12 file.
///
/// Every variant renders as the human-readable reason that is handed to the
/// failure observer at the public entry point.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reading lines from the source failed
    #[error("{message}: {source}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file is missing
    #[error("The File Does Not Exists")]
    FileNotFound { path: String },

    /// A catalogued validation rule rejected the input
    #[error("{reason}")]
    Validation { reason: String },

    /// Interval date is not an eight digit `yyyyMMdd` calendar date
    #[error("Input date {value} cannot be parsed")]
    DateParsing { value: String },

    /// Interval volume is not a decimal number
    #[error("Input volume {value} cannot be parsed")]
    VolumeParsing {
        value: String,
        #[source]
        source: Option<bigdecimal::ParseBigDecimalError>,
    },

    /// A meter or interval record has fewer fields than its layout requires
    #[error("RecordType {record_type} line '{line}' is missing field {index}")]
    MissingField {
        record_type: RecordType,
        index: usize,
        line: String,
    },

    /// Parser configuration is unusable
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a validation error carrying a catalogued reason
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Create a date parsing error
    pub fn date_parsing(value: impl Into<String>) -> Self {
        Self::DateParsing {
            value: value.into(),
        }
    }

    /// Create a volume parsing error
    pub fn volume_parsing(
        value: impl Into<String>,
        source: Option<bigdecimal::ParseBigDecimalError>,
    ) -> Self {
        Self::VolumeParsing {
            value: value.into(),
            source,
        }
    }

    /// Create a missing field error
    pub fn missing_field(record_type: RecordType, index: usize, line: impl Into<String>) -> Self {
        Self::MissingField {
            record_type,
            index,
            line: line.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Human-readable failure reason reported to the observer
    pub fn reason(&self) -> String {
        self.to_string()
    }
}
