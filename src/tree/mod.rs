//! Pre-order traversal of error trees.
//!
//! Errors reachable from a root through [`source`](core::error::Error::source)
//! and through [`JoinedError`](crate::JoinedError) fan-outs form a tree.
//! [`ErrorTreeIter`] visits it node by node, parents before children and
//! earlier joined branches before later ones.
//!
//! # Examples
//!
//! ```
//! use error_fields::{walk, ContextError};
//!
//! let err = ContextError::wrap(ContextError::new("inner"), "outer");
//! assert_eq!(walk(&err).count(), 2);
//! ```

pub mod iter;

pub use iter::{ErrorNode, ErrorTreeIter};

use crate::types::ContextError;

/// Walks the tree rooted at `root`.
#[inline]
pub fn walk<'a>(root: ErrorNode<'a>) -> ErrorTreeIter<'a> {
    ErrorTreeIter::from_root(root)
}

/// Returns the first [`ContextError`] in traversal order.
///
/// # Examples
///
/// ```
/// use error_fields::tree::find_context;
/// use error_fields::ContextError;
///
/// let err = ContextError::wrap(std::io::Error::other("eof"), "reading header");
/// assert_eq!(find_context(Some(&err)).map(|e| e.message()), Some("reading header"));
/// assert!(find_context(Some(&std::io::Error::other("eof"))).is_none());
/// ```
pub fn find_context<'a>(root: Option<ErrorNode<'a>>) -> Option<&'a ContextError> {
    ErrorTreeIter::new(root).find_map(|node| node.downcast_ref::<ContextError>())
}

/// Returns the last node in traversal order.
///
/// For a plain source chain this is the root cause.
pub fn deepest<'a>(root: Option<ErrorNode<'a>>) -> Option<ErrorNode<'a>> {
    ErrorTreeIter::new(root).last()
}

/// Returns the last [`ContextError`] in traversal order.
///
/// Unlike [`deepest`], foreign errors are skipped, so the result always
/// carries fields.
///
/// # Examples
///
/// ```
/// use error_fields::tree::deepest_context;
/// use error_fields::ContextError;
///
/// let inner = ContextError::wrap(std::io::Error::other("eof"), "reading header");
/// let err = ContextError::wrap(inner, "loading file");
/// assert_eq!(deepest_context(Some(&err)).map(|e| e.message()), Some("reading header"));
/// ```
pub fn deepest_context<'a>(root: Option<ErrorNode<'a>>) -> Option<&'a ContextError> {
    ErrorTreeIter::new(root)
        .filter_map(|node| node.downcast_ref::<ContextError>())
        .last()
}
