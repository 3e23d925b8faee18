//! Decode walk: expanding table nodes back into arrays of objects.

use serde_json::{Map, Value};

use crate::error::TableError;
use crate::shape::{is_table_shape, COLUMNS_KEY, ROWS_KEY};
use crate::types::RECURSION_LIMIT;

// ── Entry point ───────────────────────────────────────────────────────────

/// Parse JSON text and expand every table node back to an array of objects.
///
/// Parser failures surface as [`TableError::Parse`], whose message carries
/// the `[TableJSON] JSON parse error` marker and embeds the underlying
/// diagnostic.
pub fn parse(input: &str) -> Result<Value, TableError> {
    let data: Value = serde_json::from_str(input)?;
    expand_tables(&data)
}

/// Apply the expansion walk to an already-parsed value.
pub fn expand_tables(value: &Value) -> Result<Value, TableError> {
    expand_value(value, 0)
}

// ── Recursive walk ────────────────────────────────────────────────────────

fn expand_value(value: &Value, depth: usize) -> Result<Value, TableError> {
    if depth > RECURSION_LIMIT {
        return Err(TableError::DepthLimit(RECURSION_LIMIT));
    }
    match value {
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(expand_value(item, depth + 1)?);
            }
            Ok(Value::Array(out))
        }
        Value::Object(obj) if is_table_shape(value) => expand_table(obj, depth),
        Value::Object(obj) => {
            let mut out = Map::new();
            for (key, val) in obj {
                out.insert(key.clone(), expand_value(val, depth + 1)?);
            }
            Ok(Value::Object(out))
        }
        leaf => Ok(leaf.clone()),
    }
}

/// Rebuild the array of objects a table node encodes.
///
/// Columns zip against whatever cells each row actually has: a short row
/// leaves its unmatched keys absent, extra cells are dropped, and a
/// non-array row yields an empty object. Each cell re-enters the walk, so a
/// table-shaped cell expands in place and deeper plain nesting is still
/// restored.
fn expand_table(table: &Map<String, Value>, depth: usize) -> Result<Value, TableError> {
    let columns: &[Value] = table
        .get(COLUMNS_KEY)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let rows: &[Value] = table
        .get(ROWS_KEY)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let cells: &[Value] = row.as_array().map(Vec::as_slice).unwrap_or_default();
        let mut obj = Map::new();
        for (index, column) in columns.iter().enumerate() {
            // Column names are strings in practice; anything else falls back
            // to its JSON rendering rather than failing the decode.
            let key = match column {
                Value::String(name) => name.clone(),
                other => other.to_string(),
            };
            if let Some(cell) = cells.get(index) {
                obj.insert(key, expand_value(cell, depth + 1)?);
            }
        }
        out.push(Value::Object(obj));
    }
    Ok(Value::Array(out))
}

// ── Tests ─────────────────────────────────────────────────────────────────
