//! Parser configuration.
//!
//! Provides the knobs that shape how a SimpleNem12 source is read and
//! validated. Defaults reproduce the standard file layout.

use crate::constants::NMI_LENGTH;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Configuration for a SimpleNem12 parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Required number of characters in a meter identifier
    pub identifier_length: usize,

    /// Trim surrounding whitespace from every line read from a file
    pub trim_lines: bool,

    /// Drop lines that are empty after trimming before content validation
    pub skip_blank_lines: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            identifier_length: NMI_LENGTH,
            trim_lines: true,
            skip_blank_lines: false,
        }
    }
}

impl ParserConfig {
    /// Load configuration from a JSON file, falling back to defaults for
    /// any missing keys
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read configuration file {}", path.display()),
                e,
            )
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Invalid configuration in {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Set the required identifier length
    pub fn with_identifier_length(mut self, length: usize) -> Self {
        self.identifier_length = length;
        self
    }

    /// Keep lines exactly as read
    pub fn without_trimming(mut self) -> Self {
        self.trim_lines = false;
        self
    }

    /// Ignore blank lines anywhere in the file
    pub fn with_skip_blank_lines(mut self) -> Self {
        self.skip_blank_lines = true;
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.identifier_length == 0 {
            return Err(Error::configuration(
                "identifier_length must be greater than zero",
            ));
        }
        Ok(())
    }
}
