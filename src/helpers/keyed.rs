//! Keyed terminal operations: grouping, map building and partitioning.
//!
//! All of them make a single left-to-right pass over the sequence's element
//! stream and return a [`KeyedMap`], whose keys iterate in first-seen order.
//! Empty input yields an empty map. `to_map` stops pulling at the first
//! duplicate key.
//!
//! ## Example
//! ```
//! use seqflow::*;
//!
//! let words = from_vec(vec!["apple", "avocado", "banana"]);
//! let by_initial = words.group_by(|w| w.chars().next())?;
//! assert_eq!(by_initial.get(&Some('a')), Some(&vec!["apple", "avocado"]));
//! assert_eq!(by_initial.len(), 2);
//! # Ok::<_, seqflow::SeqError>(())
//! ```

use crate::combiners::CombineFn;
use crate::error::{Result, SeqError};
use crate::keyed::KeyedMap;
use crate::{SeqBound, Sequence};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

impl<T: SeqBound> Sequence<T> {
    /// Group elements by `key_fn`; each group keeps source order.
    pub fn group_by<K, F>(self, key_fn: F) -> Result<KeyedMap<K, Vec<T>>>
    where
        K: Eq + Hash + Clone,
        F: Fn(&T) -> K,
    {
        let mut groups: KeyedMap<K, Vec<T>> = KeyedMap::new();
        for t in self.stream()? {
            let t = t?;
            groups.entry_or_insert_with(key_fn(&t), Vec::new).push(t);
        }
        debug!(groups = groups.len(), "group_by");
        Ok(groups)
    }

    /// Group elements by `key_fn`, folding each group through `downstream`.
    ///
    /// ```
    /// use seqflow::*;
    /// use seqflow::combiners::Count;
    ///
    /// let counts = from_vec(vec![1, 2, 3, 4, 5]).group_by_with(|n| n % 2 == 0, Count)?;
    /// assert_eq!(counts.get(&false), Some(&3));
    /// assert_eq!(counts.get(&true), Some(&2));
    /// # Ok::<_, seqflow::SeqError>(())
    /// ```
    pub fn group_by_with<K, F, C, A, O>(self, key_fn: F, downstream: C) -> Result<KeyedMap<K, O>>
    where
        K: Eq + Hash + Clone,
        F: Fn(&T) -> K,
        C: CombineFn<T, A, O>,
    {
        let mut accs: KeyedMap<K, A> = KeyedMap::new();
        for t in self.stream()? {
            let t = t?;
            let acc = accs.entry_or_insert_with(key_fn(&t), || downstream.create());
            downstream.add_input(acc, t);
        }
        Ok(accs.map_values(|acc| downstream.finish(acc)))
    }

    /// Build a map of `key_fn(e) -> value_fn(e)`.
    ///
    /// Fails with [`SeqError::DuplicateKey`] on the first key collision.
    pub fn to_map<K, V, KF, VF>(self, key_fn: KF, value_fn: VF) -> Result<KeyedMap<K, V>>
    where
        K: Eq + Hash + Clone + Debug,
        V: Debug,
        KF: Fn(&T) -> K,
        VF: Fn(&T) -> V,
    {
        let mut map: KeyedMap<K, V> = KeyedMap::new();
        for t in self.stream()? {
            let t = t?;
            let (k, v) = (key_fn(&t), value_fn(&t));
            if let Some(existing) = map.get(&k) {
                debug!(key = ?k, "to_map collision without merge function");
                return Err(SeqError::DuplicateKey {
                    key: format!("{k:?}"),
                    existing: format!("{existing:?}"),
                    incoming: format!("{v:?}"),
                });
            }
            map.insert_new(k, v);
        }
        Ok(map)
    }

    /// Build a map of `key_fn(e) -> value_fn(e)`, resolving collisions with
    /// `merge(existing, incoming)` in encounter order.
    ///
    /// ```
    /// use seqflow::*;
    ///
    /// let m = from_vec(vec![(1, "a"), (2, "b"), (1, "c")]).to_map_with_merge(
    ///     |p| p.0,
    ///     |p| p.1.to_string(),
    ///     |a, b| format!("{a};{b}"),
    /// )?;
    /// assert_eq!(m.get(&1).map(String::as_str), Some("a;c"));
    /// # Ok::<_, seqflow::SeqError>(())
    /// ```
    pub fn to_map_with_merge<K, V, KF, VF, M>(
        self,
        key_fn: KF,
        value_fn: VF,
        merge: M,
    ) -> Result<KeyedMap<K, V>>
    where
        K: Eq + Hash + Clone,
        KF: Fn(&T) -> K,
        VF: Fn(&T) -> V,
        M: Fn(V, V) -> V,
    {
        let mut pending: KeyedMap<K, Vec<V>> = KeyedMap::new();
        for t in self.stream()? {
            let t = t?;
            pending.entry_or_insert_with(key_fn(&t), Vec::new).push(value_fn(&t));
        }
        let mut map: KeyedMap<K, V> = KeyedMap::new();
        for (k, vs) in pending {
            if let Some(v) = vs.into_iter().reduce(&merge) {
                map.insert_new(k, v);
            }
        }
        Ok(map)
    }

    /// Split into `(matching, non_matching)`, both in source order.
    pub fn partition_by<F>(self, pred: F) -> Result<(Vec<T>, Vec<T>)>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self.collect()?.into_iter().partition(|t| pred(t)))
    }
}
