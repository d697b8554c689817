//! Transition table shapes.

use super::invert::invert;
use super::iter::leaves;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Two-level transition table mapping `outer -> inner -> next state`.
///
/// The same type holds both readings of the relation:
/// state-keyed (`state -> event -> next`) and event-keyed
/// (`event -> state -> next`). [`Transitions`] records which one it is.
pub type Table = BTreeMap<String, BTreeMap<String, String>>;

/// A transition table tagged with its shape.
///
/// Both shapes describe the same `(state, event, next)` relation and build
/// machines with identical behavior.
///
/// # Example
///
/// ```rust
/// use statem::core::Transitions;
/// use statem::transitions;
///
/// let by_state = Transitions::States(transitions! { A => { poke => B } });
/// let by_event = Transitions::Events(transitions! { poke => { A => B } });
///
/// assert_eq!(by_state.into_event_keyed(), by_event.into_event_keyed());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transitions {
    /// `state -> event -> next state`
    States(Table),
    /// `event -> state -> next state`
    Events(Table),
}

impl Transitions {
    /// Canonical event-keyed form, inverting if necessary.
    pub fn into_event_keyed(self) -> Table {
        match self {
            Self::States(table) => invert(&table),
            Self::Events(table) => table,
        }
    }

    /// State-keyed form, inverting if necessary.
    pub fn into_state_keyed(self) -> Table {
        match self {
            Self::States(table) => table,
            Self::Events(table) => invert(&table),
        }
    }

    /// True when the table declares no transitions at all.
    pub fn is_empty(&self) -> bool {
        leaves(self.table()).next().is_none()
    }

    /// Every `(state, event, next)` triple, whatever the shape.
    pub fn triples(&self) -> Vec<(&str, &str, &str)> {
        match self {
            Self::States(table) => leaves(table)
                .map(|(state, event, next)| (state.as_str(), event.as_str(), next.as_str()))
                .collect(),
            Self::Events(table) => leaves(table)
                .map(|(event, state, next)| (state.as_str(), event.as_str(), next.as_str()))
                .collect(),
        }
    }

    fn table(&self) -> &Table {
        match self {
            Self::States(table) | Self::Events(table) => table,
        }
    }
}
