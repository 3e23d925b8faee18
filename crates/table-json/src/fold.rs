//! Encode walk: folding qualifying arrays into table nodes.

use indexmap::IndexSet;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::TableError;
use crate::shape::{COLUMNS_KEY, ROWS_KEY, TABLE_KEY, TABLE_TAG};
use crate::types::{StringifyOptions, TableConversion, DEFAULT_THRESHOLD, RECURSION_LIMIT};

// ── Entry points ──────────────────────────────────────────────────────────

/// Serialize `data` to JSON text, folding qualifying arrays into tables.
///
/// `data` is first converted through the external JSON codec
/// (`serde_json::to_value`), so any input that cannot be represented as a
/// JSON value fails with [`TableError::Serialize`] before the walk starts.
pub fn stringify<T: Serialize>(
    data: &T,
    options: &StringifyOptions,
) -> Result<String, TableError> {
    let value = serde_json::to_value(data).map_err(TableError::Serialize)?;
    let folded = fold_tables(&value, options)?;
    serde_json::to_string(&folded).map_err(TableError::Serialize)
}

/// Like [`stringify`], with human-readable indentation.
pub fn stringify_pretty<T: Serialize>(
    data: &T,
    options: &StringifyOptions,
) -> Result<String, TableError> {
    let value = serde_json::to_value(data).map_err(TableError::Serialize)?;
    let folded = fold_tables(&value, options)?;
    serde_json::to_string_pretty(&folded).map_err(TableError::Serialize)
}

/// Apply the folding walk to an already-converted value, starting at depth 0.
pub fn fold_tables(value: &Value, options: &StringifyOptions) -> Result<Value, TableError> {
    fold_value(value, options, 0)
}

// ── Recursive walk ────────────────────────────────────────────────────────

fn fold_value(value: &Value, options: &StringifyOptions, depth: usize) -> Result<Value, TableError> {
    if depth > RECURSION_LIMIT {
        return Err(TableError::DepthLimit(RECURSION_LIMIT));
    }
    // Nothing below the configured bound may fold, and the walk performs no
    // other rewrite, so the subtree passes through as-is.
    if options.max_depth.map_or(false, |max| depth > max) {
        return Ok(value.clone());
    }
    match value {
        Value::Array(items) => {
            if should_fold(items, options.table_conversion) {
                fold_array(items, options, depth + 1)
            } else {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(fold_value(item, options, depth + 1)?);
                }
                Ok(Value::Array(out))
            }
        }
        Value::Object(obj) => {
            let mut out = Map::new();
            for (key, val) in obj {
                out.insert(key.clone(), fold_value(val, options, depth + 1)?);
            }
            Ok(Value::Object(out))
        }
        leaf => Ok(leaf.clone()),
    }
}

/// The conversion predicate: does this array qualify for folding?
///
/// `Force` accepts any non-empty array of objects. The threshold modes
/// additionally require the array to be strictly longer than the threshold
/// and every element's key set to equal the first element's (same
/// cardinality, same names; key order and cell value types are irrelevant).
fn should_fold(items: &[Value], mode: TableConversion) -> bool {
    let threshold = match mode {
        TableConversion::Force => {
            return !items.is_empty() && items.iter().all(Value::is_object);
        }
        TableConversion::Auto => DEFAULT_THRESHOLD,
        TableConversion::Threshold(n) => n,
    };
    if items.len() <= threshold {
        return false;
    }
    let first = match items[0].as_object() {
        Some(obj) => obj,
        None => return false,
    };
    let first_keys: IndexSet<&str> = first.keys().map(String::as_str).collect();
    items.iter().all(|item| {
        item.as_object().map_or(false, |obj| {
            obj.len() == first_keys.len() && obj.keys().all(|key| first_keys.contains(key.as_str()))
        })
    })
}

/// Build the table node for an array that passed the predicate.
///
/// Column order is the first element's key enumeration order. `depth` is the
/// depth of the cell values; every cell re-enters the folding walk, so a
/// nested array of objects inside a cell can itself fold.
fn fold_array(items: &[Value], options: &StringifyOptions, depth: usize) -> Result<Value, TableError> {
    let columns: Vec<String> = match items.first().and_then(Value::as_object) {
        Some(first) => first.keys().cloned().collect(),
        None => Vec::new(),
    };
    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let obj = item.as_object();
        let mut row = Vec::with_capacity(columns.len());
        for column in &columns {
            // A key absent from this element (possible under `Force`, which
            // skips the homogeneity check) encodes its cell as null.
            row.push(match obj.and_then(|map| map.get(column)) {
                Some(cell) => fold_value(cell, options, depth)?,
                None => Value::Null,
            });
        }
        rows.push(Value::Array(row));
    }
    let mut table = Map::new();
    table.insert(TABLE_KEY.to_owned(), Value::String(TABLE_TAG.to_owned()));
    table.insert(
        COLUMNS_KEY.to_owned(),
        Value::Array(columns.into_iter().map(Value::String).collect()),
    );
    table.insert(ROWS_KEY.to_owned(), Value::Array(rows));
    Ok(Value::Object(table))
}

// ── Tests ─────────────────────────────────────────────────────────────────
