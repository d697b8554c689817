//! Iteration over one- and two-level tables.

use std::collections::BTreeMap;

/// Visit every entry of `map` as `(value, key)`, in key order.
///
/// # Example
///
/// ```rust
/// use statem::core::iterate;
/// use std::collections::BTreeMap;
///
/// let map = BTreeMap::from([("a", 1), ("b", 2)]);
/// let mut seen = Vec::new();
/// iterate(&map, |value, key| seen.push((*key, *value)));
///
/// assert_eq!(seen, vec![("a", 1), ("b", 2)]);
/// ```
pub fn iterate<K, V, F>(map: &BTreeMap<K, V>, mut visit: F)
where
    F: FnMut(&V, &K),
{
    for (key, value) in map {
        visit(value, key);
    }
}

/// Visit every leaf of a two-level table.
///
/// The callback receives `(outer_value, outer_key, inner_value, inner_key)`:
/// each value sits directly before its key, shallower level first. Outer
/// entries with an empty inner map have no leaves and are never visited.
///
/// # Example
///
/// ```rust
/// use statem::core::for_each_leaf;
/// use std::collections::BTreeMap;
///
/// let table = BTreeMap::from([
///     ("bar", BTreeMap::from([("a", 3), ("b", 4)])),
///     ("foo", BTreeMap::from([("a", 1)])),
/// ]);
///
/// let mut seen = Vec::new();
/// for_each_leaf(&table, |outer, outer_key, value, inner_key| {
///     seen.push((*outer_key, outer.len(), *inner_key, *value));
/// });
///
/// assert_eq!(
///     seen,
///     vec![("bar", 2, "a", 3), ("bar", 2, "b", 4), ("foo", 1, "a", 1)]
/// );
/// ```
pub fn for_each_leaf<K1, K2, V, F>(table: &BTreeMap<K1, BTreeMap<K2, V>>, mut visit: F)
where
    F: FnMut(&BTreeMap<K2, V>, &K1, &V, &K2),
{
    iterate(table, |inner, outer_key| {
        iterate(inner, |value, inner_key| visit(inner, outer_key, value, inner_key))
    });
}

/// Iterator form of [`for_each_leaf`], yielding `(outer_key, inner_key, value)`.
pub fn leaves<'a, K1, K2, V>(
    table: &'a BTreeMap<K1, BTreeMap<K2, V>>,
) -> impl Iterator<Item = (&'a K1, &'a K2, &'a V)> + 'a
where
    K1: 'a,
    K2: 'a,
    V: 'a,
{
    table
        .iter()
        .flat_map(|(outer, inner)| inner.iter().map(move |(key, value)| (outer, key, value)))
}
