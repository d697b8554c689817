//! Statem: a small finite state machine engine
//!
//! A machine is declared as a transition table over string-named states and
//! events, tracks one current state, and notifies observers when it enters
//! or leaves a state.
//!
//! # Core Concepts
//!
//! - **Tables**: The same `(state, event, next)` relation written
//!   state-keyed or event-keyed; [`invert`](crate::core::invert) converts between them
//! - **Machine**: Dispatches `send(event)`, rejecting unknown events and
//!   events the current state does not accept
//! - **Observers**: Exit for the old state fires before enter for the new
//!   one; self-loops fire nothing
//! - **Lint**: Optional accumulating checks for unreachable or undeclared
//!   states
//!
//! # Example
//!
//! ```rust
//! use statem::{transitions, MachineBuilder};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut machine = MachineBuilder::new()
//!     .initial("A")
//!     .events(transitions! {
//!         poke => { A => B, B => C, C => C },
//!         prod => { A => A, B => A, C => B },
//!     })
//!     .build()
//!     .unwrap();
//!
//! let entered_b = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&entered_b);
//! machine.on_enter("B", move || counter.set(counter.get() + 1));
//!
//! for event in ["poke", "poke", "prod", "prod"] {
//!     machine.send(event).unwrap();
//! }
//!
//! assert_eq!(machine.state(), "A");
//! assert_eq!(entered_b.get(), 2);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use crate::builder::{BuildError, Definition, MachineBuilder};
pub use crate::core::{invert, Table, Transitions};
pub use crate::machine::{Machine, SendError};
