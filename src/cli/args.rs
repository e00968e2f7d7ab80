//! Command-line argument definitions for the SimpleNem12 parser
//!
//! This module defines the CLI interface using the clap derive API.

use crate::Result;
use crate::config::ParserConfig;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the SimpleNem12 parser
///
/// Reads SimpleNem12 interval metering files and reports the per-meter
/// daily volumes they contain.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "simple-nem12",
    version,
    about = "Parse SimpleNem12 interval metering files into per-meter daily volumes",
    long_about = "Reads a SimpleNem12 file (100 header, 200 meter records, 300 interval \
                  records, 900 trailer), validates its framing and every field, and prints \
                  the meter reads it contains. Parsing stops at the first invalid record."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a file and print its meter reads
    Parse(ParseArgs),
    /// Check a file and report the first failure, if any
    Validate(ValidateArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// SimpleNem12 file to parse
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format for meter reads
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for meter reads"
    )]
    pub output_format: OutputFormat,

    /// Path to a JSON parser configuration file
    ///
    /// Keys missing from the file keep their defaults. Command-line flags
    /// override values from the file.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to parser configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Required meter identifier length
    #[arg(
        long = "identifier-length",
        value_name = "N",
        help = "Required number of characters in a meter identifier"
    )]
    pub identifier_length: Option<usize>,

    /// Ignore blank lines anywhere in the file
    #[arg(long = "skip-blank-lines", help = "Ignore blank lines in the file")]
    pub skip_blank_lines: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// SimpleNem12 file to check
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to parser configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    #[arg(
        long = "identifier-length",
        value_name = "N",
        help = "Required number of characters in a meter identifier"
    )]
    pub identifier_length: Option<usize>,

    #[arg(long = "skip-blank-lines", help = "Ignore blank lines in the file")]
    pub skip_blank_lines: bool,

    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for meter reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary per meter
    Human,
    /// JSON array of meter reads
    Json,
    /// One CSV row per interval record
    Csv,
}

impl ParseArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Merge the configuration file (if any) with command-line overrides
    pub fn build_config(&self) -> Result<ParserConfig> {
        merge_config(
            self.config_file.as_ref(),
            self.identifier_length,
            self.skip_blank_lines,
        )
    }
}

impl ValidateArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Merge the configuration file (if any) with command-line overrides
    pub fn build_config(&self) -> Result<ParserConfig> {
        merge_config(
            self.config_file.as_ref(),
            self.identifier_length,
            self.skip_blank_lines,
        )
    }
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn merge_config(
    config_file: Option<&PathBuf>,
    identifier_length: Option<usize>,
    skip_blank_lines: bool,
) -> Result<ParserConfig> {
    let mut config = match config_file {
        Some(path) => ParserConfig::from_file(path)?,
        None => ParserConfig::default(),
    };

    if let Some(length) = identifier_length {
        config = config.with_identifier_length(length);
    }
    if skip_blank_lines {
        config = config.with_skip_blank_lines();
    }

    config.validate()?;
    Ok(config)
}
