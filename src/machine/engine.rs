//! State machine that dispatches named events.

use crate::builder::{BuildError, Definition};
use crate::core::{invert, Table, Transitions};
use crate::machine::error::SendError;
use crate::machine::observers::{Observers, Topic};
use crate::validation::{lint_events, DefinitionIssue};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, trace};

/// Finite state machine over string-named states and events.
///
/// The transition table is normalized to event-keyed form at construction
/// and never changes afterwards. Only [`Machine::send`] moves the current
/// state.
///
/// # Example
///
/// ```rust
/// use statem::core::Transitions;
/// use statem::{transitions, Machine};
///
/// let mut machine = Machine::new(
///     "A",
///     Transitions::States(transitions! {
///         A => { poke => B },
///         B => { poke => A },
///     }),
/// );
///
/// machine.send("poke").unwrap();
/// assert_eq!(machine.state(), "B");
///
/// machine.send("poke").unwrap();
/// assert_eq!(machine.state(), "A");
/// ```
#[derive(Debug)]
pub struct Machine {
    initial: String,
    current: String,
    events: Table,
    observers: Observers,
}

impl Machine {
    /// Create a machine in `initial`, accepting either table shape.
    ///
    /// Never fails. Whether `initial` appears in the table is not checked
    /// here; see [`Machine::lint`].
    pub fn new(initial: impl Into<String>, transitions: Transitions) -> Self {
        let initial = initial.into();
        let events = transitions.into_event_keyed();
        trace!(initial = %initial, events = events.len(), "machine created");

        Self {
            current: initial.clone(),
            initial,
            events,
            observers: Observers::new(),
        }
    }

    /// Create a machine from a caller-supplied definition.
    ///
    /// Fails when the definition has neither `states` nor `events`, or has
    /// both.
    pub fn from_definition(definition: Definition) -> Result<Self, BuildError> {
        let (initial, transitions) = definition.into_transitions()?;
        Ok(Self::new(initial, transitions))
    }

    /// Current state (pure)
    pub fn state(&self) -> &str {
        &self.current
    }

    /// State the machine was created in (pure)
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Event-keyed transition table (pure)
    pub fn events(&self) -> &Table {
        &self.events
    }

    /// State-keyed view of the transition table.
    pub fn states(&self) -> Table {
        invert(&self.events)
    }

    /// Destination for `event` from the current state, without moving.
    pub fn next_state(&self, event: &str) -> Option<&str> {
        self.events
            .get(event)
            .and_then(|transitions| transitions.get(&self.current))
            .map(String::as_str)
    }

    /// Whether `send(event)` would succeed from the current state.
    pub fn accepts(&self, event: &str) -> bool {
        self.next_state(event).is_some()
    }

    /// Send an event, moving to the state the table names for it.
    ///
    /// On a genuine transition, exit observers of the old state run, the
    /// state changes, then enter observers of the new state run. A
    /// transition into the current state notifies neither. Event observers
    /// run last, for every accepted event.
    ///
    /// # Errors
    ///
    /// - [`SendError::UnknownEvent`] if the table never declares `event`.
    /// - [`SendError::IllegalTransition`] if the current state declares no
    ///   destination for `event`.
    ///
    /// The state is unchanged and no observer runs in either case.
    pub fn send(&mut self, event: &str) -> Result<(), SendError> {
        let transitions = self
            .events
            .get(event)
            .ok_or_else(|| SendError::UnknownEvent {
                event: event.to_string(),
            })?;

        let next = transitions
            .get(&self.current)
            .cloned()
            .ok_or_else(|| SendError::IllegalTransition {
                event: event.to_string(),
                state: self.current.clone(),
            })?;

        if next == self.current {
            debug!(event = %event, state = %self.current, "self-loop, no notifications");
        } else {
            self.observers.publish(&Topic::Exit(self.current.clone()));
            let previous = std::mem::replace(&mut self.current, next);
            debug!(event = %event, from = %previous, to = %self.current, "state transition");
            self.observers.publish(&Topic::Enter(self.current.clone()));
        }

        self.observers.publish(&Topic::Event(event.to_string()));
        Ok(())
    }

    /// Register an observer for every entry into `state`.
    pub fn on_enter<F>(&mut self, state: impl Into<String>, observer: F)
    where
        F: FnMut() + 'static,
    {
        self.observers
            .subscribe(Topic::Enter(state.into()), Box::new(observer));
    }

    /// Register an observer for every exit from `state`.
    pub fn on_exit<F>(&mut self, state: impl Into<String>, observer: F)
    where
        F: FnMut() + 'static,
    {
        self.observers
            .subscribe(Topic::Exit(state.into()), Box::new(observer));
    }

    /// Register an observer for every accepted `event`, self-loops included.
    pub fn on_event<F>(&mut self, event: impl Into<String>, observer: F)
    where
        F: FnMut() + 'static,
    {
        self.observers
            .subscribe(Topic::Event(event.into()), Box::new(observer));
    }

    /// Check the machine's own table for structural problems.
    ///
    /// Advisory only; a machine with issues still runs.
    pub fn lint(&self) -> Validation<(), NonEmptyVec<DefinitionIssue>> {
        lint_events(&self.initial, &self.events)
    }
}
