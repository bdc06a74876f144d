//! Insertion-ordered mapping returned by grouping and `to_map` terminals.
//!
//! [`KeyedMap`] keeps keys in the order they were first seen while still
//! offering hashed lookup, so grouping output is deterministic and reads in
//! source order.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::hash::Hash;

/// A map from `K` to `V` that iterates in first-insertion order.
#[derive(Clone, Debug)]
pub struct KeyedMap<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for KeyedMap<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> KeyedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Append a new key. The caller guarantees `key` is absent.
    pub(crate) fn insert_new(&mut self, key: K, value: V) {
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
    }

    /// Value under `key`, inserting `make()` at the end if the key is new.
    pub(crate) fn entry_or_insert_with(&mut self, key: K, make: impl FnOnce() -> V) -> &mut V {
        let i = match self.index.get(&key) {
            Some(&i) => i,
            None => {
                self.insert_new(key, make());
                self.entries.len() - 1
            }
        };
        &mut self.entries[i].1
    }

    /// Apply `f` to every value, keeping key order.
    pub fn map_values<O>(self, mut f: impl FnMut(V) -> O) -> KeyedMap<K, O> {
        KeyedMap {
            entries: self.entries.into_iter().map(|(k, v)| (k, f(v))).collect(),
            index: self.index,
        }
    }

    /// Convert into an unordered `HashMap`.
    pub fn into_hash_map(self) -> HashMap<K, V> {
        self.entries.into_iter().collect()
    }
}

impl<K, V> KeyedMap<K, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Entries as owned pairs, in first-seen key order.
    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<K, V> IntoIterator for KeyedMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for KeyedMap<K, V> {
    /// Two maps are equal when they hold the same entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Renders as `{k1=v1, k2=v2}`.
impl<K: Display, V: Display> Display for KeyedMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str("{")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}={v}")?;
        }
        f.write_str("}")
    }
}

impl<K: Serialize, V: Serialize> Serialize for KeyedMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
