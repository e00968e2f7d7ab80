//! Line sources feeding the SimpleNem12 parser
//!
//! A line source yields the whole input as an ordered sequence of strings,
//! read once into memory before any validation runs.

use crate::constants::reasons;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ordered supply of raw SimpleNem12 lines
pub trait LineSource {
    /// Read every line, in order
    fn read_lines(&self) -> Result<Vec<String>>;
}

/// Reads lines from a file on disk
#[derive(Debug, Clone)]
pub struct FileLineSource {
    path: PathBuf,
    trim: bool,
}

impl FileLineSource {
    /// Create a source that trims each line
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            trim: true,
        }
    }

    /// Control whether surrounding whitespace is trimmed from each line
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileLineSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        let file = File::open(&self.path).map_err(|e| Error::io(reasons::READ_FAILURE, e))?;
        let reader = BufReader::new(file);

        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| Error::io(reasons::READ_FAILURE, e))?;
            if self.trim {
                lines.push(line.trim().to_string());
            } else {
                lines.push(line);
            }
        }

        debug!("Read {} lines from {}", lines.len(), self.path.display());
        Ok(lines)
    }
}

/// Serves lines already held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryLineSource {
    lines: Vec<String>,
}

impl MemoryLineSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Split text on line breaks, trimming each line
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(str::trim))
    }
}

impl LineSource for MemoryLineSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_source_trims_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "100\n  200,6123456789,KWH  \r\n300,20161113,-50.8,A\n900").unwrap();

        let lines = FileLineSource::new(file.path()).read_lines().unwrap();
        assert_eq!(
            lines,
            vec!["100", "200,6123456789,KWH", "300,20161113,-50.8,A", "900"]
        );
    }

    #[test]
    fn test_file_source_without_trim() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "100\n  200,6123456789,KWH\n900").unwrap();

        let lines = FileLineSource::new(file.path())
            .with_trim(false)
            .read_lines()
            .unwrap();
        assert_eq!(lines[1], "  200,6123456789,KWH");
    }

    #[test]
    fn test_file_source_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let lines = FileLineSource::new(file.path()).read_lines().unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_file_source_missing_file() {
        let err = FileLineSource::new("/nonexistent/SimpleNem12.csv")
            .read_lines()
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.reason().starts_with("Error reading meter records from csv file: "));
    }

    #[test]
    fn test_memory_source_from_text() {
        let source = MemoryLineSource::from_text("100\n 200,6123456789,KWH \n900\n");
        assert_eq!(
            source.read_lines().unwrap(),
            vec!["100", "200,6123456789,KWH", "900"]
        );
    }
}
