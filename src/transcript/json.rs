//! JSON transcript reader.
//!
//! Accepts two shapes:
//! - records: `[{"Start Time": "00:01", "Text": "hello"}, ...]`
//! - columns: `{"Start Time": {"0": "00:01"}, "Text": {"0": "hello"}}`
//!
//! The column-oriented shape is what dataframe exports produce; rows are
//! ordered by their numeric index key.

use std::cmp::Ordering;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};

use super::{column_matches, Columns, Row};

pub(super) fn parse_rows(content: &str, columns: &Columns) -> Result<Vec<Row>> {
    let value: Value =
        serde_json::from_str(content).context("Failed to parse transcript JSON")?;

    match value {
        Value::Array(records) => parse_records(&records, columns),
        Value::Object(map) => parse_column_tables(&map, columns),
        _ => bail!(
            "Transcript JSON must be an array of row objects or a column-oriented object"
        ),
    }
}

/// Records shape: one object per row.
fn parse_records(records: &[Value], columns: &Columns) -> Result<Vec<Row>> {
    let mut rows = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let Value::Object(map) = record else {
            bail!("Transcript record {} is not a JSON object", index);
        };
        rows.push(Row {
            start_time: field(map, &columns.start_time),
            text: field(map, &columns.text),
        });
    }
    Ok(rows)
}

/// Column-oriented shape: one table per column, keyed by row index.
fn parse_column_tables(map: &Map<String, Value>, columns: &Columns) -> Result<Vec<Row>> {
    let start_table = column_table(map, &columns.start_time)?;
    let text_table = column_table(map, &columns.text)?;

    if start_table.is_none() && text_table.is_none() {
        bail!(
            "Transcript JSON object has neither a {:?} nor a {:?} column",
            columns.start_time,
            columns.text
        );
    }

    let mut keys: Vec<&str> = start_table
        .iter()
        .chain(text_table.iter())
        .flat_map(|table| table.keys())
        .map(|key| key.as_str())
        .collect();
    keys.sort_by(|a, b| row_key_order(a, b));
    keys.dedup();

    let rows = keys
        .into_iter()
        .map(|key| Row {
            start_time: start_table.and_then(|t| t.get(key)).and_then(scalar_text),
            text: text_table.and_then(|t| t.get(key)).and_then(scalar_text),
        })
        .collect();

    Ok(rows)
}

/// Look up a column table by name. A matching key must hold an object.
fn column_table<'a>(
    map: &'a Map<String, Value>,
    wanted: &str,
) -> Result<Option<&'a Map<String, Value>>> {
    let Some((key, value)) = map.iter().find(|(k, _)| column_matches(k, wanted)) else {
        return Ok(None);
    };
    match value {
        Value::Object(table) => Ok(Some(table)),
        _ => bail!("Transcript JSON column {:?} is not an object of row values", key),
    }
}

/// A record field by column name, compared leniently.
fn field(map: &Map<String, Value>, wanted: &str) -> Option<String> {
    let (_, value) = map.iter().find(|(k, _)| column_matches(k, wanted))?;
    scalar_text(value)
}

/// Stringify a scalar value. Null, blank strings, and nested structures
/// count as missing.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Order row index keys numerically when possible (`"2"` before `"10"`),
/// lexicographically otherwise.
fn row_key_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}
