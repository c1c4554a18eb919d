//! Process-wide default [`FieldConfig`] (requires the `std` feature).
//!
//! Libraries register their extractors and list keys once at startup; the
//! query functions here then work against that shared configuration. Every
//! query clones a snapshot first, so a registration racing with an
//! aggregation never changes the aggregation's result halfway through.
//!
//! # Examples
//!
//! ```
//! use error_fields::aggregate::global;
//! use error_fields::ContextError;
//!
//! global::register_list_key("request_stage");
//!
//! let err = ContextError::wrap(
//!     ContextError::new("upstream").with_field("request_stage", "proxy"),
//!     "handler",
//! )
//! .with_field("request_stage", "auth");
//!
//! let stages = global::all_fields(Some(&err)).remove("request_stage").unwrap();
//! assert_eq!(stages.as_list().map(<[_]>::len), Some(2));
//! ```

use crate::aggregate::FieldConfig;
use crate::tree::ErrorNode;
use crate::types::alloc_type::String;
use crate::types::{FieldValue, Fields};
use std::sync::{OnceLock, PoisonError, RwLock};

fn cell() -> &'static RwLock<FieldConfig> {
    static DEFAULT: OnceLock<RwLock<FieldConfig>> = OnceLock::new();
    DEFAULT.get_or_init(|| RwLock::new(FieldConfig::default()))
}

/// Returns a copy of the current process-wide configuration.
pub fn snapshot() -> FieldConfig {
    cell().read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Replaces the process-wide configuration, returning the previous one.
pub fn replace(config: FieldConfig) -> FieldConfig {
    let mut guard = cell().write().unwrap_or_else(PoisonError::into_inner);
    core::mem::replace(&mut *guard, config)
}

/// Applies `f` to the process-wide configuration under the write lock.
pub fn update<F: FnOnce(&mut FieldConfig)>(f: F) {
    let mut guard = cell().write().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard);
}

/// Appends an extractor to the process-wide configuration.
pub fn register_extractor<F>(extractor: F)
where
    F: Fn(ErrorNode<'_>) -> Option<Fields> + Send + Sync + 'static,
{
    update(|config| config.add_extractor(extractor));
}

/// Marks `key` as accumulated into a list in the process-wide configuration.
pub fn register_list_key<K: Into<String>>(key: K) {
    update(|config| config.add_list_key(key));
}

/// [`FieldConfig::all_fields`] on a snapshot of the process-wide configuration.
pub fn all_fields(root: Option<ErrorNode<'_>>) -> Fields {
    snapshot().all_fields(root)
}

/// [`FieldConfig::has_field`] on a snapshot of the process-wide configuration.
pub fn has_field(root: Option<ErrorNode<'_>>, key: &str) -> bool {
    snapshot().has_field(root, key)
}

/// [`FieldConfig::has_category`] on a snapshot of the process-wide configuration.
pub fn has_category(root: Option<ErrorNode<'_>>, category_key: &str, value: &FieldValue) -> bool {
    snapshot().has_category(root, category_key, value)
}

/// [`FieldConfig::is_category`] on a snapshot of the process-wide configuration.
pub fn is_category<V: Into<FieldValue>>(root: Option<ErrorNode<'_>>, category: V) -> bool {
    snapshot().is_category(root, category)
}
