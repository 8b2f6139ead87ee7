//! Transcript model and file loaders.
//!
//! A transcript is an ordered list of rows, each pairing a start timestamp
//! with a line of text. Rows come from CSV or JSON files; a row that lacks
//! either field is kept for display but flagged as malformed so it cannot
//! drive a seek.

mod csv;
mod json;
mod timestamp;

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

pub use timestamp::{format_seconds, parse_timestamp};

/// Row-level errors. These are diagnostics, never fatal: the caller reports
/// them and carries on.
///
/// `index` fields are 0-based like everything else in the model; messages
/// render them 1-based to match the row numbers the interface displays.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// The start timestamp did not parse as `[HH:]MM:SS` text.
    #[error("Invalid time format: {input}")]
    Format { input: String },

    /// The row has no value for a required column.
    #[error("Row {} is missing a {field:?} value", .index + 1)]
    MissingField { index: usize, field: String },

    /// The referenced row does not exist.
    #[error("Row {} does not exist ({len} rows loaded)", .index + 1)]
    OutOfRange { index: usize, len: usize },
}

/// The column names a transcript file is read with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub start_time: String,
    pub text: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            start_time: "Start Time".to_string(),
            text: "Text".to_string(),
        }
    }
}

/// Which on-disk format a transcript was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Json,
}

impl SourceFormat {
    /// Determine the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Some(SourceFormat::Csv),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(SourceFormat::Json),
            _ => None,
        }
    }

    /// Display name for status output.
    pub fn name(&self) -> &'static str {
        match self {
            SourceFormat::Csv => "CSV",
            SourceFormat::Json => "JSON",
        }
    }
}

/// One transcript row. Either field may be absent when the source file has
/// no value for it; such rows are malformed but still displayed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub start_time: Option<String>,
    pub text: Option<String>,
}

impl Row {
    pub fn new(start_time: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            start_time: Some(start_time.into()),
            text: Some(text.into()),
        }
    }

    /// Whether both fields carry a value.
    pub fn is_complete(&self) -> bool {
        self.start_time.is_some() && self.text.is_some()
    }
}

/// An ordered transcript plus the metadata it was loaded with.
#[derive(Debug, Clone)]
pub struct Transcript {
    rows: Vec<Row>,
    format: SourceFormat,
    columns: Columns,
}

impl Transcript {
    /// Load a transcript file, picking the parser from the extension.
    pub fn load(path: &Path, columns: &Columns) -> Result<Self> {
        let format = match SourceFormat::from_path(path) {
            Some(format) => format,
            None => bail!(
                "Unsupported transcript format for {:?} (expected a .csv or .json file)",
                path
            ),
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript file: {:?}", path))?;

        match format {
            SourceFormat::Csv => Self::parse_csv(&content, columns)
                .with_context(|| format!("Failed to parse CSV transcript: {:?}", path)),
            SourceFormat::Json => Self::parse_json(&content, columns)
                .with_context(|| format!("Failed to parse JSON transcript: {:?}", path)),
        }
    }

    /// Parse CSV transcript text.
    pub fn parse_csv(content: &str, columns: &Columns) -> Result<Self> {
        let rows = csv::parse_rows(content, columns)?;
        Ok(Self {
            rows,
            format: SourceFormat::Csv,
            columns: columns.clone(),
        })
    }

    /// Parse JSON transcript text. Accepts both an array of record objects
    /// and the column-oriented object shape.
    pub fn parse_json(content: &str, columns: &Columns) -> Result<Self> {
        let rows = json::parse_rows(content, columns)?;
        Ok(Self {
            rows,
            format: SourceFormat::Json,
            columns: columns.clone(),
        })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn format(&self) -> SourceFormat {
        self.format
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// Rows that cannot drive a seek, with the reason for each.
    ///
    /// Covers missing fields only; a present-but-unparsable timestamp is
    /// still activatable under the fallback-to-zero rule.
    pub fn malformed(&self) -> Vec<(usize, RowError)> {
        let mut result = Vec::new();
        for (index, row) in self.rows.iter().enumerate() {
            if let Some(error) = self.missing_field_error(index, row) {
                result.push((index, error));
            }
        }
        result
    }

    /// The missing-field error for a row, if any. Start time is checked
    /// before text so the diagnostic names the first gap.
    pub fn missing_field_error(&self, index: usize, row: &Row) -> Option<RowError> {
        if row.start_time.is_none() {
            return Some(RowError::MissingField {
                index,
                field: self.columns.start_time.clone(),
            });
        }
        if row.text.is_none() {
            return Some(RowError::MissingField {
                index,
                field: self.columns.text.clone(),
            });
        }
        None
    }

    /// Earliest and latest parseable start offsets, if any row has one.
    pub fn timespan(&self) -> Option<(f64, f64)> {
        let mut span: Option<(f64, f64)> = None;
        for row in &self.rows {
            let Some(text) = row.start_time.as_deref() else {
                continue;
            };
            let Ok(seconds) = parse_timestamp(text) else {
                continue;
            };
            span = Some(match span {
                Some((min, max)) => (min.min(seconds), max.max(seconds)),
                None => (seconds, seconds),
            });
        }
        span
    }
}

/// Case-insensitive, whitespace-trimmed column name comparison.
///
/// Real-world exports disagree on header casing; `start time` and
/// `Start Time` should resolve to the same column.
pub(crate) fn column_matches(header: &str, wanted: &str) -> bool {
    header.trim().eq_ignore_ascii_case(wanted.trim())
}
