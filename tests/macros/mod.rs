use error_fields::{fields, FieldValue};

#[test]
fn fields_macro_builds_empty_mapping() {
    let fields = fields! {};
    assert!(fields.is_empty());
}

#[test]
fn fields_macro_accepts_mixed_values() {
    let owned = String::from("owned");
    let fields = fields! {
        "str" => "borrowed",
        "string" => owned,
        "int" => -1,
        "uint" => 1_u64,
        "float" => 0.25,
        "bool" => false,
        "list" => vec![1, 2],
    };

    assert_eq!(fields.len(), 7);
    assert_eq!(fields.get("string").unwrap(), "owned");
    assert_eq!(fields.get("float"), Some(&FieldValue::Float(0.25)));
    assert_eq!(fields.get("list").and_then(FieldValue::as_list).map(<[_]>::len), Some(2));
}

#[test]
fn fields_macro_accepts_computed_keys() {
    let key = format!("shard_{}", 3);
    let fields = fields! { key.clone() => true, "plain" => 1 };
    assert!(fields.contains_key(&key));
    assert!(fields.contains_key("plain"));
}

#[test]
fn fields_macro_keeps_last_duplicate() {
    let fields = fields! { "k" => 1, "k" => 2 };
    assert_eq!(fields.get("k"), Some(&FieldValue::Int(2)));
}
