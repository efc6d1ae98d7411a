use super::Value;
use core::fmt;
use indexmap::IndexMap;
use std::sync::Arc;

/// A persistent map from string keys to [`Value`]s.
///
/// Insertion order is preserved for stable output but is not significant:
/// two maps with the same entries in a different order are equal.
///
/// Like [`List`](super::List), "mutating" methods return a new `Map` whose
/// values are shared with the original.
#[derive(Clone, Default)]
pub struct Map(Arc<IndexMap<String, Value>>);

impl Map {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map has an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns a map with `value` stored under `key`.
    ///
    /// An existing entry keeps its position; a new key is appended. If `value`
    /// is the very node already stored under `key`, `self` is returned without
    /// copying.
    pub fn insert(&self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if self.0.get(&key).is_some_and(|current| current.ptr_eq(&value)) {
            return self.clone();
        }
        let mut next = Arc::clone(&self.0);
        Arc::make_mut(&mut next).insert(key, value);
        Self(next)
    }

    /// Returns a map without the entry for `key`.
    ///
    /// Removing an absent key returns a map sharing the storage of `self`.
    pub fn remove(&self, key: &str) -> Self {
        if !self.0.contains_key(key) {
            return self.clone();
        }
        let mut next = Arc::clone(&self.0);
        Arc::make_mut(&mut next).shift_remove(key);
        Self(next)
    }

    /// Returns `true` if both maps share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0 == *other.0
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(Arc::new(
            iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
