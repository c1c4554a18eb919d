use error_fields::FieldValue;
use std::borrow::Cow;

#[test]
fn integers_keep_their_signedness() {
    assert!(matches!(FieldValue::from(-3_i8), FieldValue::Int(-3)));
    assert!(matches!(FieldValue::from(7_i64), FieldValue::Int(7)));
    assert!(matches!(FieldValue::from(7_isize), FieldValue::Int(7)));
    assert!(matches!(FieldValue::from(7_u16), FieldValue::UInt(7)));
    assert!(matches!(FieldValue::from(7_usize), FieldValue::UInt(7)));
}

#[test]
fn strings_convert_from_borrowed_and_owned() {
    assert_eq!(FieldValue::from("a"), FieldValue::Str("a".to_string()));
    assert_eq!(FieldValue::from(String::from("b")), FieldValue::Str("b".to_string()));
    assert_eq!(FieldValue::from(Cow::Borrowed("c")), FieldValue::Str("c".to_string()));
}

#[test]
fn options_map_none_to_null() {
    assert!(FieldValue::from(None::<i32>).is_null());
    assert_eq!(FieldValue::from(Some(true)), FieldValue::Bool(true));
}

#[test]
fn vectors_become_lists() {
    let value = FieldValue::from(vec![1_u8, 2, 3]);
    assert_eq!(value.as_list().map(<[_]>::len), Some(3));
    assert_eq!(value.to_string(), "[1, 2, 3]");
}

#[test]
fn accessors_convert_between_integer_kinds() {
    assert_eq!(FieldValue::UInt(5).as_i64(), Some(5));
    assert_eq!(FieldValue::Int(5).as_u64(), Some(5));
    assert_eq!(FieldValue::Int(-5).as_u64(), None);
    assert_eq!(FieldValue::UInt(u64::MAX).as_i64(), None);
    assert_eq!(FieldValue::from("5").as_i64(), None);
    assert_eq!(FieldValue::Bool(false).as_bool(), Some(false));
}

#[test]
fn display_renders_plain_values() {
    assert_eq!(FieldValue::Null.to_string(), "null");
    assert_eq!(FieldValue::from(404_u16).to_string(), "404");
    assert_eq!(FieldValue::from(1.5).to_string(), "1.5");
    assert_eq!(FieldValue::from("text").to_string(), "text");
    assert_eq!(
        FieldValue::List(vec![FieldValue::from("a"), FieldValue::from(vec!["b"])]).to_string(),
        "[a, [b]]"
    );
}

#[test]
fn equality_separates_kinds() {
    assert_ne!(FieldValue::from(10), FieldValue::from("10"));
    assert_ne!(FieldValue::from(1), FieldValue::from(true));
    assert_ne!(FieldValue::from(10), FieldValue::from(10.0));
    assert_ne!(FieldValue::Null, FieldValue::from(0));
    assert_eq!(FieldValue::from("x"), "x");
}

#[test]
fn integers_compare_by_value_across_signedness() {
    assert_eq!(FieldValue::Int(10), FieldValue::UInt(10));
    assert_eq!(FieldValue::UInt(10), FieldValue::Int(10));
    assert_eq!(FieldValue::from(404_u16), FieldValue::from(404));
    assert_ne!(FieldValue::Int(-1), FieldValue::UInt(u64::MAX));
    assert_ne!(FieldValue::UInt(u64::MAX), FieldValue::Int(i64::MAX));
    assert_eq!(
        FieldValue::from(vec![1_u8, 2]),
        FieldValue::List(vec![FieldValue::Int(1), FieldValue::Int(2)])
    );
}
