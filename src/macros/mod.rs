//! Ergonomic macros for building [`Fields`](crate::Fields).
//!
//! - [`macro@crate::fields`] - builds a mapping from `key => value` pairs.
//!
//! # Examples
//!
//! ```
//! use error_fields::{fields, ContextError};
//!
//! let err = ContextError::new("payment declined").with_fields(fields! {
//!     "order_id" => 1042_u64,
//!     "provider" => "stripe",
//! });
//!
//! assert_eq!(err.fields().get("provider").unwrap(), "stripe");
//! ```

/// Builds a [`Fields`](crate::Fields) mapping from `key => value` pairs.
///
/// Keys accept anything convertible into `String` and values anything
/// convertible into [`FieldValue`](crate::FieldValue). A repeated key keeps the
/// last value.
///
/// # Examples
///
/// ```
/// use error_fields::{fields, FieldValue};
///
/// let empty = fields! {};
/// assert!(empty.is_empty());
///
/// let fields = fields! { "attempt" => 2, "attempt" => 3, "fatal" => true };
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields.get("attempt"), Some(&FieldValue::Int(3)));
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.insert($key, $value);
        )+
        fields
    }};
}
