//! Core traits for field extraction and error wrapping.
//!
//! - [`HasFields`]: capability implemented by error types that carry fields
//! - [`ResultExt`]: adds a [`ContextError`](crate::ContextError) layer to any `Result`
//!
//! # Examples
//!
//! ```
//! use error_fields::traits::{HasFields, ResultExt};
//!
//! let err = Err::<(), _>("connection reset")
//!     .wrap_err("syncing inventory")
//!     .unwrap_err();
//! assert!(err.to_fields().contains_key(error_fields::FIELD_KEY_LOCATION));
//! ```

pub mod has_fields;
pub mod result_ext;

pub use has_fields::HasFields;
pub use result_ext::ResultExt;
