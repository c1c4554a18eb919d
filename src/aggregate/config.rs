use crate::traits::HasFields;
use crate::tree::ErrorNode;
use crate::types::alloc_type::{Arc, BTreeSet, String};
use crate::types::{ContextError, Fields, FIELD_KEY_LOCATION};
use core::error::Error;
use core::fmt;
use smallvec::SmallVec;

/// Function extracting the fields of a single error node.
///
/// Returning `None` or an empty mapping contributes nothing for that node.
/// Extractors must not panic; the engine does not guard against it.
pub type Extractor = Arc<dyn Fn(ErrorNode<'_>) -> Option<Fields> + Send + Sync>;

/// Extractor used when a configuration has none of its own.
///
/// Recognizes [`ContextError`] nodes and returns their fields.
#[inline]
pub fn context_fields(node: ErrorNode<'_>) -> Option<Fields> {
    node.downcast_ref::<ContextError>().map(HasFields::to_fields)
}

/// Aggregation settings: the extractors run on each node and the keys whose
/// values are accumulated into lists.
///
/// Extractors run in registration order, and within one node a later
/// extractor overwrites keys returned by an earlier one. With no extractors
/// registered, [`context_fields`] is used.
///
/// Cloning is cheap: extractors are reference counted. A clone is an
/// independent snapshot, so registering on one value never affects another.
///
/// # Examples
///
/// ```
/// use error_fields::{ContextError, FieldConfig, Fields};
///
/// let config = FieldConfig::new()
///     .with_extractor(error_fields::context_fields)
///     .with_extractor(|node| Some(Fields::new().with("message", node.to_string())))
///     .with_list_key("step");
///
/// let err = ContextError::wrap(ContextError::new("b").with_field("step", "parse"), "a")
///     .with_field("step", "load");
///
/// let fields = config.all_fields(Some(&err));
/// assert_eq!(fields.get("step").unwrap().to_string(), "[load, parse]");
/// assert_eq!(fields.get("message").unwrap(), "b");
/// ```
#[derive(Clone)]
pub struct FieldConfig {
    extractors: SmallVec<[Extractor; 2]>,
    list_keys: BTreeSet<String>,
}

impl FieldConfig {
    /// Creates the default configuration: no extractors and
    /// [`FIELD_KEY_LOCATION`] accumulated as a list.
    #[inline]
    pub fn new() -> Self {
        Self::empty().with_list_key(FIELD_KEY_LOCATION)
    }

    /// Creates a configuration with no extractors and no list keys.
    #[inline]
    pub fn empty() -> Self {
        Self { extractors: SmallVec::new(), list_keys: BTreeSet::new() }
    }

    /// Appends an extractor.
    #[inline]
    pub fn with_extractor<F>(mut self, extractor: F) -> Self
    where
        F: Fn(ErrorNode<'_>) -> Option<Fields> + Send + Sync + 'static,
    {
        self.add_extractor(extractor);
        self
    }

    /// Appends an extractor recognizing nodes of type `T`.
    #[inline]
    pub fn extract<T>(self) -> Self
    where
        T: HasFields + Error + 'static,
    {
        self.with_extractor(|node| node.downcast_ref::<T>().map(HasFields::to_fields))
    }

    /// Marks `key` as accumulated into a list instead of overwritten.
    #[inline]
    pub fn with_list_key<K: Into<String>>(mut self, key: K) -> Self {
        self.add_list_key(key);
        self
    }

    /// Appends an extractor in place.
    #[inline]
    pub fn add_extractor<F>(&mut self, extractor: F)
    where
        F: Fn(ErrorNode<'_>) -> Option<Fields> + Send + Sync + 'static,
    {
        self.extractors.push(Arc::new(extractor));
    }

    /// Appends an extractor that is already shared with other configurations.
    #[inline]
    pub fn add_shared_extractor(&mut self, extractor: Extractor) {
        self.extractors.push(extractor);
    }

    /// Marks `key` as accumulated into a list, in place.
    #[inline]
    pub fn add_list_key<K: Into<String>>(&mut self, key: K) {
        self.list_keys.insert(key.into());
    }

    /// Removes a list key, returning whether it was present.
    #[inline]
    pub fn remove_list_key(&mut self, key: &str) -> bool {
        self.list_keys.remove(key)
    }

    /// Returns `true` if values under `key` are accumulated into a list.
    #[inline]
    pub fn is_list_key(&self, key: &str) -> bool {
        self.list_keys.contains(key)
    }

    /// Returns the list keys in key order.
    #[inline]
    pub fn list_keys(&self) -> impl Iterator<Item = &str> {
        self.list_keys.iter().map(String::as_str)
    }

    /// Number of registered extractors; zero means the [`context_fields`] fallback applies.
    #[inline]
    pub fn extractor_count(&self) -> usize {
        self.extractors.len()
    }

    /// Returns the fields of a single node, without looking at its successors.
    pub fn node_fields(&self, node: ErrorNode<'_>) -> Fields {
        if self.extractors.is_empty() {
            return context_fields(node).unwrap_or_default();
        }

        let mut fields = Fields::new();
        for extractor in &self.extractors {
            if let Some(extracted) = extractor(node) {
                fields.extend(extracted);
            }
        }
        fields
    }

    /// Folds one node's fields into the running aggregate.
    pub(crate) fn merge(&self, aggregate: &mut Fields, node_fields: Fields) {
        for (key, value) in node_fields {
            if self.list_keys.contains(key.as_str()) {
                aggregate.append(key, value);
            } else {
                aggregate.insert(key, value);
            }
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldConfig")
            .field("extractors", &self.extractors.len())
            .field("list_keys", &self.list_keys)
            .finish()
    }
}
