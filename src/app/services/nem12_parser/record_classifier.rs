//! Line classification for SimpleNem12 records
//!
//! Every line is a comma separated record whose first field names its
//! record type. Framing lines are recognised by prefix so they can be
//! stripped before per-record dispatch.

use crate::app::models::RecordType;
use crate::constants::{FIELD_SEPARATOR, record_tokens};
use crate::{Error, Result};

/// First comma separated field of a line
pub fn leading_token(line: &str) -> &str {
    line.split(FIELD_SEPARATOR).next().unwrap_or("")
}

/// Whether a line is a `100` or `900` framing record.
///
/// Matches on the line prefix rather than the exact leading field.
pub fn is_framing_line(line: &str) -> bool {
    line.starts_with(record_tokens::START) || line.starts_with(record_tokens::END)
}

/// A line split into fields, tagged with its record type when recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// Record type of the leading field, `None` for unrecognised tokens
    pub record_type: Option<RecordType>,

    /// All fields, including the leading record type token
    pub fields: Vec<&'a str>,

    /// The line as read
    pub line: &'a str,
}

impl<'a> ClassifiedLine<'a> {
    /// Field at `index`, failing when the line is too short
    pub fn field(&self, index: usize) -> Result<&'a str> {
        self.fields.get(index).copied().ok_or_else(|| {
            Error::missing_field(
                self.record_type.unwrap_or(RecordType::Parent),
                index,
                self.line,
            )
        })
    }
}

/// Split a line on commas and classify it by its leading field
pub fn classify(line: &str) -> ClassifiedLine<'_> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let record_type = fields.first().and_then(|token| RecordType::from_token(token));

    ClassifiedLine {
        record_type,
        fields,
        line,
    }
}
