//! Builder for constructing machines.

use crate::builder::definition::Definition;
use crate::builder::error::BuildError;
use crate::core::Table;
use crate::machine::Machine;

/// Builder for constructing machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use statem::MachineBuilder;
///
/// let mut machine = MachineBuilder::new()
///     .initial("Idle")
///     .transition("Idle", "start", "Running")
///     .transition("Running", "stop", "Idle")
///     .build()
///     .unwrap();
///
/// machine.send("start").unwrap();
/// assert_eq!(machine.state(), "Running");
/// ```
#[derive(Debug, Default)]
pub struct MachineBuilder {
    initial: Option<String>,
    states: Option<Table>,
    events: Option<Table>,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Supply a whole state-keyed table.
    pub fn states(mut self, states: Table) -> Self {
        self.states = Some(states);
        self
    }

    /// Supply a whole event-keyed table.
    pub fn events(mut self, events: Table) -> Self {
        self.events = Some(events);
        self
    }

    /// Add one `state --event--> next` transition to the state-keyed table.
    ///
    /// A later call for the same state and event replaces the destination.
    pub fn transition(
        mut self,
        state: impl Into<String>,
        event: impl Into<String>,
        next: impl Into<String>,
    ) -> Self {
        self.states
            .get_or_insert_with(Table::new)
            .entry(state.into())
            .or_default()
            .insert(event.into(), next.into());
        self
    }

    /// Resolve into a [`Definition`] without building.
    pub fn definition(self) -> Result<Definition, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(Definition {
            initial,
            states: self.states,
            events: self.events,
        })
    }

    /// Build the machine.
    /// Returns an error if the initial state or transitions are missing, or
    /// if both table shapes were supplied.
    pub fn build(self) -> Result<Machine, BuildError> {
        Machine::from_definition(self.definition()?)
    }
}
