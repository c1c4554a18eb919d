//! Field values, field mappings and the error node types.
//!
//! This module provides the data the traversal engine folds over:
//!
//! - [`FieldValue`]: an opaque, typed payload stored under a field key
//! - [`Fields`]: a key-ordered mapping of field keys to values
//! - [`ContextError`]: an error carrying a message, fields and an optional source
//! - [`JoinedError`]: a fan-out node joining several underlying errors
//!
//! # Examples
//!
//! ```
//! use error_fields::{ContextError, FieldValue, FIELD_KEY_STATUS_CODE};
//!
//! let err = ContextError::new("invalid payload")
//!     .with_code("payload_invalid")
//!     .with_status_code(400);
//!
//! assert_eq!(err.code(), Some("payload_invalid"));
//! assert_eq!(err.fields().get(FIELD_KEY_STATUS_CODE), Some(&FieldValue::UInt(400)));
//! ```

pub mod alloc_type;
pub mod context_error;
pub mod field_value;
pub mod fields;
pub mod joined_error;

pub use alloc_type::BoxError;
pub use context_error::*;
pub use field_value::FieldValue;
pub use fields::Fields;
pub use joined_error::{JoinedError, Successors};

/// Unique identifier of the error, set by [`ContextError::with_code`].
pub const FIELD_KEY_CODE: &str = "error_code";
/// HTTP status code a response builder should use for the error.
pub const FIELD_KEY_STATUS_CODE: &str = "error_status_code";
/// Action an outside user can take to fix the error.
pub const FIELD_KEY_ACTION: &str = "error_action";
/// Category matched by [`FieldConfig::is_category`](crate::FieldConfig::is_category).
pub const FIELD_KEY_CATEGORY: &str = "error_category";
/// Code of a related error when a second error is raised while handling the first.
pub const FIELD_KEY_RELATED_CODE: &str = "error_related_code";
/// Source location where a [`ContextError`] was created. Accumulated as a list by default.
pub const FIELD_KEY_LOCATION: &str = "error_location";
