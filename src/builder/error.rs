//! Build errors for machine definitions and the machine builder.

use thiserror::Error;

/// Errors that can occur when resolving a definition into a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Supply either states or events")]
    MissingTransitions,

    #[error("Both states and events supplied. Supply exactly one")]
    ConflictingTransitions,

    #[error("Invalid definition: {0}")]
    InvalidDefinition(String),
}
