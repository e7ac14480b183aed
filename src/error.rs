//! Error types for the helper operations.
//!
//! The library performs exactly one validation of its own (the even-length
//! check on flat key/value lists) and one parsing step (entry templates);
//! everything else delegates to the underlying map. All failures surface
//! immediately, with no retries, recovery, or logging.

use thiserror::Error;

/// Errors produced by the helper operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A flat alternating key/value list had an odd number of items.
    ///
    /// Raised by [`put_into_map_flat`](crate::ops::put_into_map_flat) before
    /// any mutation takes place.
    #[error("flat key/value list must have an even number of items, got {count}")]
    OddItemCount {
        /// Number of items the caller supplied.
        count: usize,
    },

    /// An entry template could not be parsed.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Errors produced while parsing an [`EntryTemplate`](crate::format::EntryTemplate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template did not contain exactly two `{}` placeholders.
    #[error("entry template {template:?} must contain exactly two `{{}}` placeholders, found {found}")]
    PlaceholderCount {
        /// The offending template string.
        template: String,
        /// How many placeholders it actually contained.
        found: usize,
    },

    /// A `{` or `}` without a matching partner.
    ///
    /// Literal braces must be escaped as `{{` and `}}`.
    #[error("unbalanced brace at byte {position} in entry template {template:?}")]
    UnbalancedBrace {
        /// The offending template string.
        template: String,
        /// Byte offset of the stray brace.
        position: usize,
    },
}
