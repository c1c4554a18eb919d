use crate::types::alloc_type::{BoxError, Vec};
use core::error::Error;
use core::fmt::{self, Display};

/// Fan-out node joining several underlying errors.
///
/// A `JoinedError` never reports a [`source`](Error::source); its successors
/// are exposed through [`iter`](Self::iter) instead, in the order they were
/// joined. The tree walker treats a join as transparent: it yields the joined
/// errors in order and never the join itself.
///
/// # Examples
///
/// ```
/// use error_fields::{ContextError, JoinedError};
///
/// let joined = JoinedError::new([
///     ContextError::new("replica a unreachable"),
///     ContextError::new("replica b unreachable"),
/// ]);
///
/// assert_eq!(joined.len(), 2);
/// assert_eq!(
///     joined.to_string(),
///     "replica a unreachable\nreplica b unreachable"
/// );
/// ```
#[derive(Debug, Default)]
pub struct JoinedError {
    errors: Vec<BoxError>,
}

impl JoinedError {
    /// Joins every error yielded by `errors`, keeping their order.
    pub fn new<I, E>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<BoxError>,
    {
        Self { errors: errors.into_iter().map(Into::into).collect() }
    }

    /// Like [`new`](Self::new), but returns `None` when there is nothing to join.
    pub fn join<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<BoxError>,
    {
        let joined = Self::new(errors);
        (!joined.is_empty()).then_some(joined)
    }

    /// Appends one more successor.
    #[inline]
    pub fn push<E: Into<BoxError>>(&mut self, error: E) {
        self.errors.push(error.into());
    }

    /// Number of joined errors.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if nothing was joined. The tree walker skips an empty join.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the joined errors in join order.
    #[inline]
    pub fn iter(&self) -> Successors<'_> {
        Successors { inner: self.errors.iter() }
    }

    /// Consumes the join, returning the owned successors.
    #[inline]
    pub fn into_inner(self) -> Vec<BoxError> {
        self.errors
    }
}

/// Iterator over the successors of a [`JoinedError`].
#[derive(Debug, Clone)]
pub struct Successors<'a> {
    inner: core::slice::Iter<'a, BoxError>,
}

impl<'a> Iterator for Successors<'a> {
    type Item = &'a (dyn Error + 'static);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| &**e as &(dyn Error + 'static))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Successors<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|e| &**e as &(dyn Error + 'static))
    }
}

impl ExactSizeIterator for Successors<'_> {}

impl<'a> IntoIterator for &'a JoinedError {
    type Item = &'a (dyn Error + 'static);
    type IntoIter = Successors<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: Into<BoxError>> FromIterator<E> for JoinedError {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Display for JoinedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            Display::fmt(error, f)?;
        }
        Ok(())
    }
}

impl Error for JoinedError {}
