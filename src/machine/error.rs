//! Errors returned by `Machine::send`.

use thiserror::Error;

/// Errors that can occur when sending an event to a machine.
///
/// Neither variant changes the machine's state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SendError {
    /// The event is not declared anywhere in the transition table.
    #[error("Unknown event '{event}'")]
    UnknownEvent { event: String },

    /// The event is declared, but not for the current state.
    #[error("Machine does not accept '{event}' event in '{state}' state")]
    IllegalTransition { event: String, state: String },
}
