use crate::types::alloc_type::{btree_map, BTreeMap, String, Vec};
use crate::types::FieldValue;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mapping of field keys to [`FieldValue`]s.
///
/// Keys are unique and kept in key order, so iteration and rendering are
/// deterministic regardless of the order fields were inserted in.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Fields {
    entries: BTreeMap<String, FieldValue>,
}

impl Fields {
    /// Creates an empty mapping.
    #[inline]
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Builder form of [`insert`](Self::insert).
    #[inline]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.insert(key, value);
        self
    }

    /// Inserts a value, returning the one it replaced.
    #[inline]
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<FieldValue>
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.entries.insert(key.into(), value.into())
    }

    /// Appends `value` to the list stored under `key`, creating the list on first use.
    ///
    /// A value that is already a list is appended as a single element. A
    /// non-list value found under `key` becomes the first element of the list.
    pub fn append<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let value = value.into();
        match self.entries.entry(key.into()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(FieldValue::List(Vec::from([value])));
            },
            btree_map::Entry::Occupied(mut slot) => match slot.get_mut() {
                FieldValue::List(items) => items.push(value),
                existing => {
                    let first = core::mem::take(existing);
                    *existing = FieldValue::List(Vec::from([first, value]));
                },
            },
        }
    }

    /// Returns the value under `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value under `key`.
    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut FieldValue> {
        self.entries.get_mut(key)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key`, returning its value.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.entries.remove(key)
    }

    /// Number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries in key order.
    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldValue> {
        self.entries.iter()
    }

    /// Returns the keys in order.
    #[inline]
    pub fn keys(&self) -> btree_map::Keys<'_, String, FieldValue> {
        self.entries.keys()
    }

    /// Consumes the mapping, returning the underlying `BTreeMap`.
    #[inline]
    pub fn into_inner(self) -> BTreeMap<String, FieldValue> {
        self.entries
    }
}

impl From<BTreeMap<String, FieldValue>> for Fields {
    fn from(entries: BTreeMap<String, FieldValue>) -> Self {
        Self { entries }
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        fields.extend(iter);
        fields
    }
}

impl<K, V> Extend<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Fields {
    type Item = (String, FieldValue);
    type IntoIter = btree_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
