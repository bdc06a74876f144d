//! Assertion functions for testing sequence outputs.

use crate::keyed::KeyedMap;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics if the collections differ in length or at any index.
///
/// # Example
///
/// ```
/// use seqflow::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two collections hold the same elements with the same
/// multiplicities, ignoring order.
///
/// # Panics
///
/// Panics if some element occurs a different number of times in each.
///
/// # Example
///
/// ```
/// use seqflow::testing::assert_same_multiset;
///
/// assert_same_multiset(&[4, 1, 4], &[1, 4, 4]);
/// ```
pub fn assert_same_multiset<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    fn counts<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
        let mut m = HashMap::new();
        for t in items {
            *m.entry(t).or_insert(0) += 1;
        }
        m
    }

    assert_eq!(
        counts(actual),
        counts(expected),
        "Multiset mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

/// Assert that all elements satisfy a predicate.
///
/// # Panics
///
/// Panics on the first element that does not satisfy the predicate.
///
/// # Example
///
/// ```
/// use seqflow::testing::assert_all;
///
/// assert_all(&[2, 4, 6], |x| x % 2 == 0);
/// ```
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            predicate(item),
            "Predicate failed for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that no element satisfies a predicate.
///
/// # Panics
///
/// Panics on the first element that satisfies the predicate.
pub fn assert_none<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            !predicate(item),
            "Predicate unexpectedly succeeded for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that a [`KeyedMap`] holds exactly `expected`, in key order.
///
/// # Panics
///
/// Panics if keys, their order, or any value differ.
///
/// # Example
///
/// ```
/// use seqflow::*;
/// use seqflow::testing::assert_keyed_equal;
///
/// let m = from_vec(vec![3, 1, 3]).group_by(|n| *n)?;
/// assert_keyed_equal(&m, &[(3, vec![3, 3]), (1, vec![1])]);
/// # Ok::<_, seqflow::SeqError>(())
/// ```
pub fn assert_keyed_equal<K, V>(actual: &KeyedMap<K, V>, expected: &[(K, V)])
where
    K: Debug + PartialEq,
    V: Debug + PartialEq,
{
    let entries: Vec<(&K, &V)> = actual.iter().collect();
    let wanted: Vec<(&K, &V)> = expected.iter().map(|(k, v)| (k, v)).collect();
    assert_eq!(
        entries, wanted,
        "Keyed map mismatch:\n  Expected: {wanted:?}\n  Actual: {entries:?}"
    );
}
