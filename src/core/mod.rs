//! Transition tables and the pure functions that reshape them.
//!
//! This module contains the pure core of the engine:
//! - The two-level `Table` type and the `Transitions` input shapes
//! - Leaf iteration over two-level tables
//! - Table inversion (state-keyed ↔ event-keyed)
//!
//! Nothing in this module mutates its input or holds state.

mod invert;
mod iter;
mod table;

pub use invert::invert;
pub use iter::{for_each_leaf, iterate, leaves};
pub use table::{Table, Transitions};
