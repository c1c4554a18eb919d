//! Structured fields for error trees.
//!
//! Errors collect key/value fields as they propagate through call layers.
//! An error may wrap one underlying error (through [`core::error::Error::source`])
//! or fan out into several through a [`JoinedError`], so the errors reachable
//! from a root form a tree. This crate walks that tree in a fixed pre-order and
//! folds every node's fields into one mapping.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_fields::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Aggregating fields
//!
//! ```
//! use error_fields::{ContextError, FieldConfig, FieldValue, FIELD_KEY_CODE};
//!
//! let inner = ContextError::new("row not found").with_code("db_missing_row");
//! let outer = ContextError::wrap(inner, "loading profile").with_field("user_id", 42);
//!
//! let fields = FieldConfig::default().all_fields(Some(&outer));
//! assert_eq!(fields.get(FIELD_KEY_CODE), Some(&FieldValue::from("db_missing_row")));
//! assert_eq!(fields.get("user_id"), Some(&FieldValue::from(42)));
//! ```
//!
//! ## Walking a joined tree
//!
//! ```
//! use error_fields::{walk, ContextError, JoinedError};
//!
//! let join = JoinedError::new([ContextError::new("left"), ContextError::new("right")]);
//! let root = ContextError::wrap(join, "root");
//!
//! let visited: Vec<String> = walk(&root)
//!     .filter_map(|node| node.downcast_ref::<ContextError>())
//!     .map(|e| e.message().to_string())
//!     .collect();
//! assert_eq!(visited, ["root", "left", "right"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Field aggregation over error trees
pub mod aggregate;
/// Field-building macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capability traits and `Result` extensions
pub mod traits;
/// Pre-order traversal of error trees
pub mod tree;
/// Field values, field mappings and the crate's error node types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod report;

pub use aggregate::*;
pub use traits::*;
pub use tree::{walk, ErrorTreeIter};
pub use types::{
    ContextError, FieldValue, Fields, JoinedError, FIELD_KEY_ACTION, FIELD_KEY_CATEGORY,
    FIELD_KEY_CODE, FIELD_KEY_LOCATION, FIELD_KEY_RELATED_CODE, FIELD_KEY_STATUS_CODE,
};
