use error_fields::{ContextError, JoinedError};
use std::error::Error;

#[test]
fn display_joins_messages_with_newlines() {
    let join = JoinedError::new([ContextError::new("a"), ContextError::new("b")]);
    assert_eq!(join.to_string(), "a\nb");
}

#[test]
fn join_of_nothing_is_none() {
    assert!(JoinedError::join(Vec::<ContextError>::new()).is_none());
    assert!(JoinedError::join(["only"]).is_some());
}

#[test]
fn join_never_reports_a_source() {
    let join = JoinedError::new([ContextError::new("a")]);
    assert!(join.source().is_none());
}

#[test]
fn successors_keep_join_order() {
    let mut join = JoinedError::new(["first"]);
    join.push(ContextError::new("second"));
    join.push("third");

    let messages: Vec<String> = join.iter().map(ToString::to_string).collect();
    assert_eq!(messages, ["first", "second", "third"]);
    assert_eq!(join.iter().len(), 3);

    let reversed: Vec<String> = join.iter().rev().map(ToString::to_string).collect();
    assert_eq!(reversed, ["third", "second", "first"]);
}

#[test]
fn collects_from_an_iterator() {
    let join: JoinedError = ["x", "y"].into_iter().collect();
    assert_eq!(join.len(), 2);
    assert_eq!(join.into_inner().len(), 2);
}
