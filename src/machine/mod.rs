//! The runtime state machine.
//!
//! A [`Machine`] owns its current state, an immutable event-keyed
//! transition table, and the observers registered against it.
//!
//! # Key Concepts
//!
//! - **Dispatch**: `send` looks up the event, then the current state's
//!   destination, and only then mutates
//! - **Notifications**: exit for the old state fires before the state
//!   changes, enter for the new state fires after
//! - **Self-loops**: a transition back into the current state is silent

mod engine;
mod error;
mod observers;

pub use engine::Machine;
pub use error::SendError;
pub use observers::{Observer, Observers, Topic};
