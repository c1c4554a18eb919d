//! Tracing integration for error-fields.
//!
//! Emits one `tracing` event per handled error, carrying the error message
//! and the aggregated fields of its whole tree.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-fields = { version = "0.1", features = ["tracing"] }
//! ```

use core::error::Error;
use core::fmt::{self, Display};

use crate::aggregate::FieldConfig;
use crate::tree::deepest_context;
use crate::types::{Fields, FIELD_KEY_STATUS_CODE};
use tracing::Level;

/// Renders a [`Fields`] mapping as space-separated `key=value` pairs.
///
/// # Example
///
/// ```
/// use error_fields::report::FieldsDisplay;
/// use error_fields::fields;
///
/// let fields = fields! { "b" => 2, "a" => "x" };
/// assert_eq!(FieldsDisplay(&fields).to_string(), "a=x b=2");
/// ```
pub struct FieldsDisplay<'a>(pub &'a Fields);

impl Display for FieldsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

/// Returns `true` when the aggregated status code is a 4xx client error.
pub fn is_client_error(fields: &Fields) -> bool {
    fields
        .get(FIELD_KEY_STATUS_CODE)
        .is_some_and(|status| status.to_string().starts_with('4'))
}

/// Level an error is reported at.
///
/// `WARN` when the deepest [`ContextError`](crate::ContextError) in the tree
/// carries a 4xx [`FIELD_KEY_STATUS_CODE`], `ERROR` otherwise.
///
/// # Example
///
/// ```
/// use error_fields::report::level;
/// use error_fields::ContextError;
/// use tracing::Level;
///
/// let err = ContextError::wrap(ContextError::new("no row").with_status_code(404), "lookup");
/// assert_eq!(level(&err), Level::WARN);
/// assert_eq!(level(&ContextError::new("boom")), Level::ERROR);
/// ```
pub fn level(err: &(dyn Error + 'static)) -> Level {
    match deepest_context(Some(err)) {
        Some(ctx) if is_client_error(ctx.fields()) => Level::WARN,
        _ => Level::ERROR,
    }
}

/// Aggregates the fields of `err` and emits them as one event at [`level`].
///
/// # Example
///
/// ```rust,ignore
/// use error_fields::report::report;
/// use error_fields::{ContextError, FieldConfig};
///
/// let err = ContextError::new("missing user").with_status_code(404);
/// report(&err, &FieldConfig::default());
/// ```
pub fn report(err: &(dyn Error + 'static), config: &FieldConfig) {
    let fields = config.all_fields(Some(err));
    let rendered = FieldsDisplay(&fields);

    if level(err) == Level::WARN {
        tracing::warn!(error = %err, fields = %rendered, "error handled");
    } else {
        tracing::error!(error = %err, fields = %rendered, "error handled");
    }
}

/// [`report`] using the process-wide default configuration.
pub fn report_global(err: &(dyn Error + 'static)) {
    report(err, &crate::aggregate::global::snapshot());
}
