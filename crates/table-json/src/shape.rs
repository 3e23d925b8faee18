//! Structural detection of table nodes.

use serde_json::Value;

/// Reserved key carrying the version tag of a table node.
pub const TABLE_KEY: &str = "@table";
/// Reserved key holding the ordered column names.
pub const COLUMNS_KEY: &str = "columns";
/// Reserved key holding the row value arrays.
pub const ROWS_KEY: &str = "rows";

/// Tag written into freshly folded tables: `"v"` + the crate version.
///
/// Diagnostic metadata only; [`is_table_shape`] never inspects the tag value
/// beyond truthiness, so tables written by any release expand identically.
pub const TABLE_TAG: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Returns true if `value` is table-shaped: an object with a truthy
/// `@table`, an array `columns`, and an array `rows`.
///
/// The check is purely structural and side-effect-free; both walk
/// directions use it. Any object in the wild matching this shape expands as
/// a table on decode. Row lengths are not validated here, ragged rows are
/// tolerated at expansion time.
pub fn is_table_shape(value: &Value) -> bool {
    match value.as_object() {
        Some(obj) => {
            obj.get(TABLE_KEY).map_or(false, is_truthy)
                && obj.get(COLUMNS_KEY).map_or(false, Value::is_array)
                && obj.get(ROWS_KEY).map_or(false, Value::is_array)
        }
        None => false,
    }
}

// JS truthiness: null, false, 0, and "" are falsy; containers are truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
