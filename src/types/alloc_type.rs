//! Heap-backed types resolved through `alloc`, so the same paths work with
//! and without the `std` feature.

pub use alloc::borrow::Cow;
pub use alloc::boxed::Box;
pub use alloc::collections::{btree_map, BTreeMap, BTreeSet};
pub use alloc::string::{String, ToString};
pub use alloc::sync::Arc;
pub use alloc::vec::Vec;

/// Owned, thread-safe error object stored as a successor by the crate's node types.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;
