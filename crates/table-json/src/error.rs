//! Error type shared by both walk directions.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    /// Malformed input text handed to [`parse`](crate::parse).
    #[error("[TableJSON] JSON parse error : {0}")]
    Parse(#[from] serde_json::Error),

    /// Encode-side input that cannot be represented as a JSON value.
    #[error("[TableJSON] JSON serialize error : {0}")]
    Serialize(#[source] serde_json::Error),

    /// Input nesting exceeded [`RECURSION_LIMIT`](crate::RECURSION_LIMIT).
    #[error("[TableJSON] input too deeply nested (limit {0})")]
    DepthLimit(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_message_carries_marker() {
        let err = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let err = TableError::from(err);
        assert!(err.to_string().starts_with("[TableJSON] JSON parse error"));
    }

    #[test]
    fn depth_limit_message_names_limit() {
        let msg = TableError::DepthLimit(512).to_string();
        assert!(msg.contains("too deeply nested"));
        assert!(msg.contains("512"));
    }
}
