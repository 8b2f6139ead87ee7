//! CSV transcript reader.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};

use super::{column_matches, Columns, Row};

/// Parse CSV content into transcript rows.
///
/// The first record is the header row; the start-time and text columns are
/// located by name. Ragged records and missing cells become rows with absent
/// fields rather than load failures.
pub(super) fn parse_rows(content: &str, columns: &Columns) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .context("Failed to read CSV header row")?
        .clone();

    let start_idx = headers
        .iter()
        .position(|h| column_matches(h, &columns.start_time));
    let text_idx = headers
        .iter()
        .position(|h| column_matches(h, &columns.text));

    let mut rows = Vec::new();
    for (record_num, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("Failed to read CSV record {}", record_num + 1))?;
        rows.push(Row {
            start_time: cell(&record, start_idx),
            text: cell(&record, text_idx),
        });
    }

    Ok(rows)
}

/// A cell value, with blank cells treated the same as absent ones.
fn cell(record: &StringRecord, idx: Option<usize>) -> Option<String> {
    let value = record.get(idx?)?;
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
