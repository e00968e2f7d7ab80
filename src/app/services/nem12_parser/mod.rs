//! SimpleNem12 parser for interval metering files
//!
//! This module turns ordered SimpleNem12 lines into `MeterRead` aggregates.
//! Processing is a single synchronous pass that stops at the first failure.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration, file and content validation
//! - [`record_classifier`] - Leading-token classification and field splitting
//! - [`builder`] - Aggregate construction state machine
//! - [`field_parsers`] - Date and volume parsing
//! - [`stats`] - Line handling statistics
//!
//! ## Usage
//!
//! ```rust,no_run
//! use simple_nem12::app::services::nem12_parser::SimpleNem12Parser;
//!
//! let parser = SimpleNem12Parser::new();
//! let reads = parser.parse_simple_nem12(std::path::Path::new("SimpleNem12.csv"));
//!
//! for read in &reads {
//!     println!("{} {} days, total {}", read.nmi(), read.len(), read.total_volume());
//! }
//! ```

pub mod builder;
pub mod field_parsers;
pub mod parser;
pub mod record_classifier;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use builder::{BuilderState, MeterReadBuilder};
pub use parser::SimpleNem12Parser;
pub use stats::ParseStats;
