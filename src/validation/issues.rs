//! Problems a transition table can have.

use thiserror::Error;

/// Structural issues found by [`lint`](super::lint).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionIssue {
    #[error("Transition table declares no transitions")]
    EmptyTable,

    #[error("Initial state '{state}' does not appear in the transition table")]
    UndeclaredInitial { state: String },

    #[error("State '{state}' is not reachable from the initial state")]
    UnreachableState { state: String },
}
