use crate::types::alloc_type::Box;
use crate::types::JoinedError;
use core::error::Error;
use core::iter::FusedIterator;
use smallvec::SmallVec;

/// A node of an error tree.
pub type ErrorNode<'a> = &'a (dyn Error + 'static);

/// Pending siblings, stored so the next one to visit is on top.
type PendingStack<'a> = SmallVec<[ErrorNode<'a>; 4]>;

/// Lazy pre-order, depth-first, left-to-right walk over an error tree.
///
/// A node's successor is its [`source`](Error::source). A [`JoinedError`] is a
/// fan-out point: it is never yielded itself, its joined errors are visited in
/// join order instead, each with its whole subtree before the next one.
///
/// The walk is iterative. It keeps the next node to yield plus a stack of
/// siblings still waiting to be visited across every enclosing join, so deep
/// source chains cannot overflow the call stack and memory stays proportional
/// to the pending siblings, not to the size of the tree.
///
/// Only [`JoinedError`] (also when boxed again as `Box<JoinedError>`) is
/// recognized as a fan-out point. Multi-error types from other crates are
/// visited as ordinary nodes through their `source`; wrap their parts in a
/// [`JoinedError`] to have them walked branch by branch.
///
/// There is no cycle detection: an error reachable from itself makes the walk
/// endless.
///
/// # Examples
///
/// ```
/// use error_fields::{ContextError, ErrorTreeIter, JoinedError};
///
/// let err = ContextError::wrap(
///     JoinedError::new([ContextError::wrap("cause", "left"), ContextError::new("right")]),
///     "root",
/// );
///
/// let mut iter = ErrorTreeIter::from_root(&err);
/// let mut seen = Vec::new();
/// while iter.has_next() {
///     let node = iter.next().unwrap();
///     seen.push(match node.downcast_ref::<ContextError>() {
///         Some(ctx) => ctx.message().to_string(),
///         None => node.to_string(),
///     });
/// }
///
/// assert_eq!(seen, ["root", "left", "cause", "right"]);
/// assert!(iter.next().is_none());
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Default)]
pub struct ErrorTreeIter<'a> {
    next: Option<ErrorNode<'a>>,
    pending: PendingStack<'a>,
}

impl<'a> ErrorTreeIter<'a> {
    /// Starts a walk at `root`. A `None` root gives an exhausted iterator.
    pub fn new(root: Option<ErrorNode<'a>>) -> Self {
        let mut iter = Self { next: None, pending: SmallVec::new() };
        iter.next = iter.settle(root);
        iter
    }

    /// Starts a walk at a known root.
    #[inline]
    pub fn from_root(root: ErrorNode<'a>) -> Self {
        Self::new(Some(root))
    }

    /// Returns `true` if the next call to [`next`](Iterator::next) yields a node.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Resolves a candidate into the node that will actually be yielded.
    ///
    /// A missing candidate falls back to the nearest pending sibling. A join
    /// is replaced by its first successor while the rest go on top of the
    /// pending stack, so they come before siblings queued by outer joins.
    /// Nested and empty joins are resolved in the same loop.
    fn settle(&mut self, mut candidate: Option<ErrorNode<'a>>) -> Option<ErrorNode<'a>> {
        loop {
            let node = candidate.take().or_else(|| self.pending.pop())?;
            let Some(join) = as_join(node) else {
                return Some(node);
            };

            let mut successors = join.iter();
            candidate = successors.next();
            self.pending.extend(successors.rev());
        }
    }
}

/// `ContextError::wrap(Box::new(join), ..)` boxes the join a second time, so
/// both shapes count as a join.
fn as_join<'a>(node: ErrorNode<'a>) -> Option<&'a JoinedError> {
    node.downcast_ref::<JoinedError>()
        .or_else(|| node.downcast_ref::<Box<JoinedError>>().map(|join| &**join))
}

impl<'a> Iterator for ErrorTreeIter<'a> {
    type Item = ErrorNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = self.settle(node.source());
        Some(node)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(_) => (1, None),
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for ErrorTreeIter<'_> {}

impl core::fmt::Debug for ErrorTreeIter<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ErrorTreeIter")
            .field("has_next", &self.has_next())
            .field("pending", &self.pending.len())
            .finish()
    }
}
