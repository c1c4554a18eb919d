//! Field aggregation over error trees.
//!
//! [`FieldConfig`] drives an [`ErrorTreeIter`](crate::ErrorTreeIter) over a
//! tree, runs its extractors on every node, and either folds the results into
//! one [`Fields`](crate::Fields) mapping or stops at the first node matching a
//! query:
//!
//! - [`FieldConfig::all_fields`]: merged fields of the whole tree
//! - [`FieldConfig::has_field`]: whether any node sets a key
//! - [`FieldConfig::has_category`]: whether any node sets a key to a given value
//!
//! Merging is per key. Ordinary keys are overwritten by later-visited nodes;
//! list keys collect every value in visiting order.
//!
//! # Examples
//!
//! ```
//! use error_fields::{ContextError, FieldConfig, JoinedError};
//!
//! let join = JoinedError::new([
//!     ContextError::new("cache miss").with_field("cache", "redis"),
//!     ContextError::new("db timeout").with_field("db", "primary"),
//! ]);
//! let err = ContextError::wrap(join, "fetching order").with_code("order_fetch");
//!
//! let config = FieldConfig::default();
//! let fields = config.all_fields(Some(&err));
//! assert!(fields.contains_key("cache") && fields.contains_key("db"));
//! assert!(config.has_field(Some(&err), "db"));
//! assert!(!config.has_field(Some(&err), "queue"));
//! ```

pub mod config;
#[cfg(feature = "std")]
pub mod global;
pub mod query;

pub use config::{context_fields, Extractor, FieldConfig};
pub use query::{all_fields, has_category, has_field};
