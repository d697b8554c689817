//! Builder API for machine construction.
//!
//! This module provides the ways a machine definition reaches the engine:
//! a fluent builder, a serde-loadable [`Definition`], and the
//! [`transitions!`](crate::transitions) macro for inline tables.

pub mod definition;
pub mod error;
pub mod machine;
pub mod macros;

pub use definition::Definition;
pub use error::BuildError;
pub use machine::MachineBuilder;
