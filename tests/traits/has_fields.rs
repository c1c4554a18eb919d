use error_fields::{ContextError, FieldConfig, Fields, HasFields, FIELD_KEY_CODE};
use std::fmt;

#[derive(Debug)]
enum StorageError {
    Full { volume: String },
    ReadOnly,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Full { volume } => write!(f, "volume {volume} is full"),
            StorageError::ReadOnly => f.write_str("volume is read-only"),
        }
    }
}

impl std::error::Error for StorageError {}

impl HasFields for StorageError {
    fn to_fields(&self) -> Fields {
        match self {
            StorageError::Full { volume } => Fields::new()
                .with(FIELD_KEY_CODE, "storage_full")
                .with("volume", volume.as_str()),
            StorageError::ReadOnly => Fields::new().with(FIELD_KEY_CODE, "storage_read_only"),
        }
    }
}

#[test]
fn context_error_exposes_its_own_fields_only() {
    let err = ContextError::wrap(ContextError::new("inner").with_field("inner", 1), "outer")
        .with_field("outer", 1);

    let fields = err.to_fields();
    assert!(fields.contains_key("outer"));
    assert!(!fields.contains_key("inner"));
}

#[test]
fn references_forward_to_the_referent() {
    let err = StorageError::ReadOnly;
    let by_ref = &err;
    assert_eq!(by_ref.to_fields(), err.to_fields());
}

#[test]
fn custom_capability_overrides_wrapper_code() {
    let config = FieldConfig::default()
        .with_extractor(error_fields::context_fields)
        .extract::<StorageError>();

    let err = ContextError::wrap(StorageError::Full { volume: "/data".into() }, "writing segment")
        .with_code("segment_write");

    let fields = config.all_fields(Some(&err));
    assert_eq!(fields.get(FIELD_KEY_CODE).unwrap(), "storage_full");
    assert_eq!(fields.get("volume").unwrap(), "/data");
}

#[test]
fn unregistered_capability_is_not_extracted() {
    let err = ContextError::wrap(StorageError::ReadOnly, "writing segment").with_code("segment_write");

    let fields = FieldConfig::default().all_fields(Some(&err));
    assert_eq!(fields.get(FIELD_KEY_CODE).unwrap(), "segment_write");
}
