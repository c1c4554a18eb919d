use error_fields::tree::ErrorNode;
use error_fields::{ContextError, ErrorTreeIter, JoinedError};

/// Message of a single layer: the `ContextError` message, or the full
/// display of a foreign error.
pub fn label(node: ErrorNode<'_>) -> String {
    match node.downcast_ref::<ContextError>() {
        Some(ctx) => ctx.message().to_string(),
        None => node.to_string(),
    }
}

pub fn labels(root: Option<ErrorNode<'_>>) -> Vec<String> {
    ErrorTreeIter::new(root).map(label).collect()
}

/// Builds the reference tree:
///
/// ```text
///         a
///        / \
///       b   f
///      / \  |
///     c   e g
///     |    / \
///     d   h   i
/// ```
///
/// `a`, `b` and `g` wrap joins; `c` and `f` wrap a single error.
pub fn reference_tree() -> ContextError {
    let g = ContextError::wrap(
        JoinedError::new([ContextError::new("h"), ContextError::new("i")]),
        "g",
    );
    let f = ContextError::wrap(g, "f");
    let c = ContextError::wrap(ContextError::new("d"), "c");
    let b = ContextError::wrap(JoinedError::new([c, ContextError::new("e")]), "b");
    ContextError::wrap(JoinedError::new([b, f]), "a")
}

/// Same shape as [`reference_tree`], with every node setting `step` to its
/// own label and a few nodes setting extra keys.
pub fn tagged_tree() -> ContextError {
    let tag = |e: ContextError| {
        let name = e.message().to_string();
        e.with_field("step", name)
    };

    let g = tag(ContextError::wrap(
        JoinedError::new([
            tag(ContextError::new("h")).with_field("shard", 7),
            tag(ContextError::new("i")),
        ]),
        "g",
    ));
    let f = tag(ContextError::wrap(g, "f"));
    let c = tag(ContextError::wrap(
        tag(ContextError::new("d")).with_field("table", "orders"),
        "c",
    ));
    let b = tag(ContextError::wrap(JoinedError::new([c, tag(ContextError::new("e"))]), "b"));
    tag(ContextError::wrap(JoinedError::new([b, f]), "a")).with_field("request", "r-1")
}
