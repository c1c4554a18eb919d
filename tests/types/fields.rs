use error_fields::{FieldValue, Fields};
use std::collections::BTreeMap;

#[test]
fn insert_replaces_and_returns_previous() {
    let mut fields = Fields::new();
    assert_eq!(fields.insert("k", 1), None);
    assert_eq!(fields.insert("k", 2), Some(FieldValue::Int(1)));
    assert_eq!(fields.len(), 1);
}

#[test]
fn append_creates_then_extends_a_list() {
    let mut fields = Fields::new();
    fields.append("loc", "a");
    fields.append("loc", "b");

    assert_eq!(fields.get("loc"), Some(&FieldValue::from(vec!["a", "b"])));
}

#[test]
fn append_promotes_a_scalar_to_a_list() {
    let mut fields = Fields::new().with("loc", "scalar");
    fields.append("loc", "next");

    assert_eq!(fields.get("loc"), Some(&FieldValue::from(vec!["scalar", "next"])));
}

#[test]
fn append_keeps_list_values_nested() {
    let mut fields = Fields::new();
    fields.append("loc", vec!["a", "b"]);

    assert_eq!(
        fields.get("loc"),
        Some(&FieldValue::List(vec![FieldValue::from(vec!["a", "b"])]))
    );
}

#[test]
fn iteration_is_in_key_order() {
    let fields: Fields = [("zeta", 1), ("alpha", 2), ("mid", 3)].into_iter().collect();
    let keys: Vec<&String> = fields.keys().collect();
    assert_eq!(keys, ["alpha", "mid", "zeta"]);
}

#[test]
fn extend_overwrites_existing_keys() {
    let mut fields = Fields::new().with("a", 1).with("b", 1);
    fields.extend(Fields::new().with("b", 2).with("c", 2));

    assert_eq!(fields.get("a"), Some(&FieldValue::Int(1)));
    assert_eq!(fields.get("b"), Some(&FieldValue::Int(2)));
    assert_eq!(fields.get("c"), Some(&FieldValue::Int(2)));
}

#[test]
fn remove_and_contains() {
    let mut fields = Fields::new().with("a", true);
    assert!(fields.contains_key("a"));
    assert_eq!(fields.remove("a"), Some(FieldValue::Bool(true)));
    assert!(!fields.contains_key("a"));
    assert!(fields.is_empty());
}

#[test]
fn converts_to_and_from_btree_map() {
    let mut map = BTreeMap::new();
    map.insert("k".to_string(), FieldValue::from("v"));

    let fields = Fields::from(map.clone());
    assert_eq!(fields.into_inner(), map);
}
