//! Extension trait for wrapping `Result` errors into [`ContextError`] layers.
//!
//! # Examples
//!
//! ```
//! use error_fields::traits::ResultExt;
//! use error_fields::ContextError;
//!
//! fn load_config() -> Result<String, ContextError> {
//!     std::fs::read_to_string("config.toml").wrap_err("loading configuration file")
//! }
//!
//! assert!(load_config().is_err());
//! ```

use crate::types::alloc_type::{BoxError, String};
use crate::types::{ContextError, Fields};

/// Extension trait for adding a [`ContextError`] layer to `Result` types.
///
/// Every method records the location of its caller, like
/// [`ContextError::wrap`].
pub trait ResultExt<T> {
    /// Wraps the error with a message.
    fn wrap_err<M: Into<String>>(self, message: M) -> Result<T, ContextError>;

    /// Wraps the error with a message and a set of fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_fields::traits::ResultExt;
    /// use error_fields::fields;
    ///
    /// let result: Result<(), &str> = Err("timed out");
    /// let err = result
    ///     .wrap_err_with(fields! { "attempt" => 3 }, "calling billing")
    ///     .unwrap_err();
    /// assert!(err.fields().contains_key("attempt"));
    /// ```
    fn wrap_err_with<M: Into<String>>(self, fields: Fields, message: M) -> Result<T, ContextError>;

    /// Wraps the error with a lazily built message.
    ///
    /// The closure is only called if the `Result` is an `Err`.
    fn wrap_err_lazy<F>(self, f: F) -> Result<T, ContextError>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline]
    #[track_caller]
    fn wrap_err<M: Into<String>>(self, message: M) -> Result<T, ContextError> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(ContextError::wrap(error, message)),
        }
    }

    #[inline]
    #[track_caller]
    fn wrap_err_with<M: Into<String>>(self, fields: Fields, message: M) -> Result<T, ContextError> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(ContextError::wrap(error, message).with_fields(fields)),
        }
    }

    #[inline]
    #[track_caller]
    fn wrap_err_lazy<F>(self, f: F) -> Result<T, ContextError>
    where
        F: FnOnce() -> String,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(ContextError::wrap(error, f())),
        }
    }
}
