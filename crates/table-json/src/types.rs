//! Core types for the folding configuration.

/// Array length above which [`TableConversion::Auto`] folds.
pub const DEFAULT_THRESHOLD: usize = 10;

/// Hard bound on traversal recursion, independent of
/// [`StringifyOptions::max_depth`].
///
/// Both walk directions count every descent and fail with
/// [`TableError::DepthLimit`](crate::TableError::DepthLimit) past this bound
/// instead of exhausting the stack on pathologically nested input.
pub const RECURSION_LIMIT: usize = 512;

/// Fold policy applied to every array the encode walk visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableConversion {
    /// Fold homogeneous object arrays longer than [`DEFAULT_THRESHOLD`].
    #[default]
    Auto,
    /// Fold every non-empty array whose elements are all objects.
    ///
    /// Key-set homogeneity is not required; a key missing from an element
    /// encodes its cell as `null`.
    Force,
    /// Fold homogeneous object arrays strictly longer than the given length.
    Threshold(usize),
}

/// Encode-side configuration for [`stringify`](crate::stringify).
#[derive(Debug, Clone, Default)]
pub struct StringifyOptions {
    /// When arrays are folded into table nodes. Defaults to
    /// [`TableConversion::Auto`].
    pub table_conversion: TableConversion,
    /// Depth beyond which no folding is attempted; `None` is unbounded.
    ///
    /// The root sits at depth 0 and every descent into an array or object
    /// adds 1. Values past the bound are copied through unchanged, never
    /// dropped.
    pub max_depth: Option<usize>,
}
