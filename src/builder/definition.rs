//! Serializable machine definitions.

use crate::builder::error::BuildError;
use crate::core::{Table, Transitions};
use serde::{Deserialize, Serialize};

/// Caller-supplied machine definition.
///
/// Exactly one of `states` (state-keyed) or `events` (event-keyed) must be
/// present. The JSON form mirrors the struct:
///
/// ```json
/// { "initial": "A", "states": { "A": { "poke": "B" }, "B": { "poke": "A" } } }
/// ```
///
/// # Example
///
/// ```rust
/// use statem::{Definition, Machine};
///
/// let definition = Definition::from_json(
///     r#"{ "initial": "A", "events": { "poke": { "A": "B", "B": "A" } } }"#,
/// )
/// .unwrap();
///
/// let mut machine = Machine::from_definition(definition).unwrap();
/// machine.send("poke").unwrap();
/// assert_eq!(machine.state(), "B");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// State the machine starts in
    pub initial: String,

    /// `state -> event -> next state`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Table>,

    /// `event -> state -> next state`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Table>,
}

impl Definition {
    /// Definition with a state-keyed table.
    pub fn with_states(initial: impl Into<String>, states: Table) -> Self {
        Self {
            initial: initial.into(),
            states: Some(states),
            events: None,
        }
    }

    /// Definition with an event-keyed table.
    pub fn with_events(initial: impl Into<String>, events: Table) -> Self {
        Self {
            initial: initial.into(),
            states: None,
            events: Some(events),
        }
    }

    /// Parse a definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::InvalidDefinition(e.to_string()))
    }

    /// Render the definition as JSON.
    pub fn to_json(&self) -> Result<String, BuildError> {
        serde_json::to_string(self).map_err(|e| BuildError::InvalidDefinition(e.to_string()))
    }

    /// Split into the initial state and the single supplied table shape.
    pub fn into_transitions(self) -> Result<(String, Transitions), BuildError> {
        let transitions = match (self.states, self.events) {
            (Some(states), None) => Transitions::States(states),
            (None, Some(events)) => Transitions::Events(events),
            (None, None) => return Err(BuildError::MissingTransitions),
            (Some(_), Some(_)) => return Err(BuildError::ConflictingTransitions),
        };
        Ok((self.initial, transitions))
    }
}
