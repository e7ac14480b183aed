//! # map-ops
//!
//! Bulk, conditional, and formatting helpers for caller-owned map types.
//!
//! ## Overview
//!
//! This library provides a handful of stateless helper functions over any
//! container implementing the minimal [`Mapping`](mapping::Mapping) trait:
//!
//! - **Bulk insertion**: [`put_into_map`](ops::put_into_map) from a typed
//!   pair sequence, with a flat alternating-list variant for callers that
//!   need that shape
//! - **Bulk removal**: [`remove_keys`](ops::remove_keys) by key sequence
//! - **Conditional update**: [`put_if_present`](ops::put_if_present)
//!   overwrites only existing keys and hands back the displaced value
//! - **Formatting**: [`format_mapping`](format::format_mapping) renders a
//!   map through per-entry templates with distinct first/last treatment
//!
//! The crate owns no map storage. Every function borrows a map supplied by
//! the caller, mutates it in place (formatting excepted), and hands the same
//! reference back so calls can be chained. `std::collections::HashMap` and
//! `std::collections::BTreeMap` implement [`Mapping`](mapping::Mapping) out
//! of the box.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use map_ops::pairs;
//! use map_ops::prelude::*;
//!
//! let mut scores: BTreeMap<&str, i32> = BTreeMap::new();
//! put_into_map(&mut scores, pairs!["ada" => 1, "bob" => 2]);
//!
//! // Only existing keys are updated; the previous value comes back.
//! assert_eq!(put_if_present(&mut scores, "ada", 3), Some(1));
//! assert_eq!(put_if_present(&mut scores, "eve", 9), None);
//!
//! let rendered = format_mapping(&scores, "<", None, "({}={})", None, ">").unwrap();
//! assert_eq!(rendered, "<(ada=3)(bob=2)>");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the trait, the helper functions, and the error types.
///
/// # Usage
///
/// ```rust
/// use map_ops::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, TemplateError};
    pub use crate::format::{EntryTemplate, format_mapping};
    pub use crate::mapping::Mapping;
    pub use crate::ops::{put_if_present, put_into_map, put_into_map_flat, remove_keys};
}

pub mod error;
pub mod format;
pub mod mapping;
pub mod ops;
