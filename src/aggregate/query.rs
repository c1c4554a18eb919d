use crate::aggregate::FieldConfig;
use crate::tree::{ErrorNode, ErrorTreeIter};
use crate::types::{FieldValue, Fields, FIELD_KEY_CATEGORY};

impl FieldConfig {
    /// Merges the fields of every node in the tree rooted at `root`.
    ///
    /// Nodes are visited in pre-order. For an ordinary key the value from the
    /// node visited last wins, so a wrapped error's field overrides the same
    /// field set by the layer wrapping it. For a list key every value is
    /// appended in visiting order.
    ///
    /// Returns an empty mapping for a `None` root.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_fields::{ContextError, FieldConfig, FieldValue};
    ///
    /// let inner = ContextError::new("inner").with_field("retry", false);
    /// let outer = ContextError::wrap(inner, "outer").with_field("retry", true);
    ///
    /// let fields = FieldConfig::default().all_fields(Some(&outer));
    /// assert_eq!(fields.get("retry"), Some(&FieldValue::Bool(false)));
    /// assert!(FieldConfig::default().all_fields(None).is_empty());
    /// ```
    pub fn all_fields(&self, root: Option<ErrorNode<'_>>) -> Fields {
        let mut aggregate = Fields::new();
        for node in ErrorTreeIter::new(root) {
            let node_fields = self.node_fields(node);
            self.merge(&mut aggregate, node_fields);
        }
        aggregate
    }

    /// Returns `true` as soon as a node in the tree has `key`.
    ///
    /// Agrees with `self.all_fields(root).contains_key(key)`, but stops at the
    /// first match.
    pub fn has_field(&self, root: Option<ErrorNode<'_>>, key: &str) -> bool {
        self.any_node(root, |fields| fields.contains_key(key))
    }

    /// Returns `true` as soon as a node in the tree has `category_key` set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_fields::{ContextError, FieldConfig, FieldValue};
    ///
    /// let err = ContextError::wrap(ContextError::new("inner").with_field("tier", 2), "outer");
    /// let config = FieldConfig::default();
    /// assert!(config.has_category(Some(&err), "tier", &FieldValue::from(2)));
    /// assert!(!config.has_category(Some(&err), "tier", &FieldValue::from("2")));
    /// ```
    pub fn has_category(
        &self,
        root: Option<ErrorNode<'_>>,
        category_key: &str,
        value: &FieldValue,
    ) -> bool {
        self.any_node(root, |fields| fields.get(category_key) == Some(value))
    }

    /// [`has_category`](Self::has_category) on [`FIELD_KEY_CATEGORY`].
    #[inline]
    pub fn is_category<V: Into<FieldValue>>(&self, root: Option<ErrorNode<'_>>, category: V) -> bool {
        self.has_category(root, FIELD_KEY_CATEGORY, &category.into())
    }

    fn any_node<P>(&self, root: Option<ErrorNode<'_>>, mut predicate: P) -> bool
    where
        P: FnMut(&Fields) -> bool,
    {
        ErrorTreeIter::new(root).any(|node| predicate(&self.node_fields(node)))
    }
}

/// Free-function form of [`FieldConfig::all_fields`].
#[inline]
pub fn all_fields(root: Option<ErrorNode<'_>>, config: &FieldConfig) -> Fields {
    config.all_fields(root)
}

/// Free-function form of [`FieldConfig::has_field`].
#[inline]
pub fn has_field(root: Option<ErrorNode<'_>>, config: &FieldConfig, key: &str) -> bool {
    config.has_field(root, key)
}

/// Free-function form of [`FieldConfig::has_category`].
#[inline]
pub fn has_category(
    root: Option<ErrorNode<'_>>,
    config: &FieldConfig,
    category_key: &str,
    value: &FieldValue,
) -> bool {
    config.has_category(root, category_key, value)
}
