//! Capability trait for error types that carry their own fields.
//!
//! The aggregation engine never inspects error types itself; it runs
//! extractor functions. [`HasFields`] is the typed capability those
//! extractors recognize, and [`FieldConfig::extract`](crate::FieldConfig::extract)
//! builds the extractor for a concrete type.
//!
//! # Examples
//!
//! ```
//! use error_fields::{FieldConfig, Fields, HasFields};
//! use std::fmt;
//!
//! #[derive(Debug)]
//! struct QuotaExceeded {
//!     tenant: String,
//! }
//!
//! impl fmt::Display for QuotaExceeded {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "quota exceeded for {}", self.tenant)
//!     }
//! }
//!
//! impl std::error::Error for QuotaExceeded {}
//!
//! impl HasFields for QuotaExceeded {
//!     fn to_fields(&self) -> Fields {
//!         Fields::new().with("tenant", self.tenant.as_str())
//!     }
//! }
//!
//! let config = FieldConfig::default().extract::<QuotaExceeded>();
//! let err = QuotaExceeded { tenant: "acme".into() };
//! assert!(config.has_field(Some(&err), "tenant"));
//! ```

use crate::types::Fields;

/// An error that exposes a field mapping.
pub trait HasFields {
    /// Returns the fields this error contributes on its own, ignoring any source.
    fn to_fields(&self) -> Fields;
}

impl<T: HasFields + ?Sized> HasFields for &T {
    #[inline]
    fn to_fields(&self) -> Fields {
        (**self).to_fields()
    }
}
