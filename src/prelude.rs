//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_fields::prelude::*;
//!
//! fn parse_port(raw: &str) -> Result<u16, ContextError> {
//!     raw.parse::<u16>().wrap_err("parsing port")
//! }
//!
//! let err = parse_port("http").unwrap_err();
//! assert!(FieldConfig::default().has_field(Some(&err), FIELD_KEY_LOCATION));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fields!`]
//! - **Types**: [`ContextError`], [`JoinedError`], [`Fields`], [`FieldValue`],
//!   [`FieldConfig`], [`ErrorTreeIter`]
//! - **Traits**: [`HasFields`], [`ResultExt`]
//! - **Field keys**: the `FIELD_KEY_*` constants

// Macros
pub use crate::fields;

// Core types
pub use crate::aggregate::FieldConfig;
pub use crate::tree::{walk, ErrorTreeIter};
pub use crate::types::{ContextError, FieldValue, Fields, JoinedError};

// Traits
pub use crate::traits::{HasFields, ResultExt};

// Field keys
pub use crate::types::{
    FIELD_KEY_ACTION, FIELD_KEY_CATEGORY, FIELD_KEY_CODE, FIELD_KEY_LOCATION,
    FIELD_KEY_RELATED_CODE, FIELD_KEY_STATUS_CODE,
};
