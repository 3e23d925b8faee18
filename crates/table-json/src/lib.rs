//! TableJSON: reversible columnar folding for JSON arrays of uniform objects.
//!
//! # Overview
//!
//! An array of structurally-homogeneous objects (a query result set, an
//! event batch) repeats every key on every element. This crate folds such
//! arrays into a columnar table node that is still plain JSON:
//!
//! ```text
//! {"@table": "v0.1.0", "columns": ["id", "name"], "rows": [[1, "Alice"], [2, "Bob"]]}
//! ```
//!
//! [`stringify`] walks the input top-down and folds every array that passes
//! the conversion predicate for the configured [`TableConversion`] mode;
//! [`parse`] detects table nodes structurally (by the shape of the three
//! reserved keys, never by the tag value) and expands them back. The two
//! walks are exact inverses for any value the predicate folds.
//!
//! Both directions are synchronous, stateless between calls, and bounded by
//! a hard recursion cap ([`RECURSION_LIMIT`]) so pathologically nested input
//! fails with [`TableError::DepthLimit`] instead of exhausting the stack.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use table_json::{parse, stringify, StringifyOptions, TableConversion};
//!
//! let data = json!({
//!     "users": [
//!         {"id": 1, "name": "Alice"},
//!         {"id": 2, "name": "Bob"}
//!     ]
//! });
//!
//! let options = StringifyOptions {
//!     table_conversion: TableConversion::Force,
//!     ..StringifyOptions::default()
//! };
//! let text = stringify(&data, &options)?;
//! assert!(text.contains("@table"));
//! assert_eq!(parse(&text)?, data);
//! # Ok::<(), table_json::TableError>(())
//! ```

pub mod error;
pub mod expand;
pub mod fold;
pub mod shape;
pub mod types;

pub use error::TableError;
pub use expand::{expand_tables, parse};
pub use fold::{fold_tables, stringify, stringify_pretty};
pub use shape::{is_table_shape, COLUMNS_KEY, ROWS_KEY, TABLE_KEY, TABLE_TAG};
pub use types::{StringifyOptions, TableConversion, DEFAULT_THRESHOLD, RECURSION_LIMIT};
