//! Transposition of two-level tables.

use super::iter::for_each_leaf;
use std::collections::BTreeMap;

/// Transpose a two-level table: `table[k1][k2] = v` becomes
/// `inverted[k2][k1] = v`.
///
/// Converts a state-keyed transition table into an event-keyed one and back.
/// The input is never modified. Inverting twice yields the original table as
/// long as it has no empty inner maps, since those carry no leaves.
///
/// # Example
///
/// ```rust
/// use statem::core::invert;
/// use statem::transitions;
///
/// let states = transitions! {
///     A => { poke => B },
///     B => { poke => A },
/// };
///
/// let events = invert(&states);
///
/// assert_eq!(events, transitions! { poke => { A => B, B => A } });
/// assert_eq!(invert(&events), states);
/// ```
pub fn invert<K1, K2, V>(table: &BTreeMap<K1, BTreeMap<K2, V>>) -> BTreeMap<K2, BTreeMap<K1, V>>
where
    K1: Ord + Clone,
    K2: Ord + Clone,
    V: Clone,
{
    let mut inverted: BTreeMap<K2, BTreeMap<K1, V>> = BTreeMap::new();

    for_each_leaf(table, |_, outer_key, value, inner_key| {
        inverted
            .entry(inner_key.clone())
            .or_default()
            .insert(outer_key.clone(), value.clone());
    });

    inverted
}
