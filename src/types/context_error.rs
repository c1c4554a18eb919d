//! Error node carrying a message, structured fields and an optional source.
//!
//! [`ContextError`] is the construction-side counterpart of the aggregation
//! engine: every layer that handles a failure wraps it with its own message
//! and whatever fields it knows about, and the engine later merges the fields
//! of every layer into one mapping.

use crate::traits::HasFields;
use crate::types::alloc_type::{BoxError, String};
use crate::types::{
    FieldValue, Fields, FIELD_KEY_ACTION, FIELD_KEY_CATEGORY, FIELD_KEY_CODE, FIELD_KEY_LOCATION,
    FIELD_KEY_STATUS_CODE,
};
use core::fmt::{self, Display};
use core::panic::Location;

/// Error with a message, a field mapping and at most one wrapped source.
///
/// Creation records the caller's `file:line` under [`FIELD_KEY_LOCATION`],
/// which the default [`FieldConfig`](crate::FieldConfig) accumulates into a
/// list across the whole tree.
#[must_use]
#[derive(Debug)]
pub struct ContextError {
    message: String,
    fields: Fields,
    source: Option<BoxError>,
}

impl ContextError {
    /// Creates a leaf error.
    #[track_caller]
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self::build(message.into(), None, Location::caller())
    }

    /// Creates an error wrapping `source`.
    ///
    /// Anything convertible into a boxed error works as a source, including
    /// another `ContextError`, a [`JoinedError`](crate::JoinedError), a foreign
    /// error type or a plain string.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_fields::ContextError;
    /// use std::error::Error;
    ///
    /// let err = ContextError::wrap("disk full", "saving snapshot");
    /// assert_eq!(err.to_string(), "saving snapshot : disk full");
    /// assert!(err.source().is_some());
    /// ```
    #[track_caller]
    pub fn wrap<E, M>(source: E, message: M) -> Self
    where
        E: Into<BoxError>,
        M: Into<String>,
    {
        Self::build(message.into(), Some(source.into()), Location::caller())
    }

    fn build(message: String, source: Option<BoxError>, location: &Location<'_>) -> Self {
        let mut fields = Fields::new();
        fields.insert(FIELD_KEY_LOCATION, alloc::format!("{}:{}", location.file(), location.line()));
        Self { message, fields, source }
    }

    /// Sets the error code. An empty code is ignored.
    #[inline]
    pub fn with_code<C: Into<String>>(mut self, code: C) -> Self {
        let code = code.into();
        if !code.is_empty() {
            self.fields.insert(FIELD_KEY_CODE, code);
        }
        self
    }

    /// Sets one field, overwriting an existing value.
    #[inline]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key, value);
        self
    }

    /// Merges `fields` into this error's fields, overwriting existing keys.
    #[inline]
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Sets the HTTP status code. Zero is ignored.
    #[inline]
    pub fn with_status_code(mut self, status: u16) -> Self {
        if status != 0 {
            self.fields.insert(FIELD_KEY_STATUS_CODE, status);
        }
        self
    }

    /// Sets the action an outside user can take to fix the error.
    #[inline]
    pub fn with_action<A: Into<String>>(mut self, action: A) -> Self {
        self.fields.insert(FIELD_KEY_ACTION, action.into());
        self
    }

    /// Sets the category matched by [`FieldConfig::is_category`](crate::FieldConfig::is_category).
    #[inline]
    pub fn with_category<C: Into<FieldValue>>(mut self, category: C) -> Self {
        self.fields.insert(FIELD_KEY_CATEGORY, category);
        self
    }

    /// Returns this layer's message, without the source chain.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the fields set on this layer only.
    #[inline]
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Returns the fields of this layer for in-place edits.
    #[inline]
    pub fn fields_mut(&mut self) -> &mut Fields {
        &mut self.fields
    }

    /// Returns the code set on this layer, if any.
    #[inline]
    pub fn code(&self) -> Option<&str> {
        self.fields.get(FIELD_KEY_CODE).and_then(FieldValue::as_str)
    }

    /// Consumes the error, returning the wrapped source.
    #[inline]
    pub fn into_source(self) -> Option<BoxError> {
        self.source
    }
}

impl Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(source) = &self.source {
            write!(f, " : {}", source)?;
        }
        Ok(())
    }
}

impl core::error::Error for ContextError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn core::error::Error + 'static))
    }
}

impl HasFields for ContextError {
    #[inline]
    fn to_fields(&self) -> Fields {
        self.fields.clone()
    }
}
