use error_fields::{ContextError, FieldConfig, JoinedError};

mod field_value;
mod fields;
mod joined_error;

#[test]
fn context_error_and_join_compose_into_one_tree() {
    let join = JoinedError::new([
        ContextError::new("first replica").with_code("replica_a"),
        ContextError::new("second replica").with_code("replica_b"),
    ]);
    let err = ContextError::wrap(join, "replicating write");

    assert_eq!(err.to_string(), "replicating write : first replica\nsecond replica");
    let fields = FieldConfig::default().all_fields(Some(&err));
    assert_eq!(fields.get(error_fields::FIELD_KEY_CODE).unwrap(), "replica_b");
}
