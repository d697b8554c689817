//! Structural checks for transition tables.
//!
//! Construction never rejects a table; these checks are an advisory pass
//! callers can run before or after building a machine. They use Stillwater's
//! `Validation` to report every problem in one go instead of stopping at the
//! first.
//!
//! # Example
//!
//! ```rust
//! use statem::core::Transitions;
//! use statem::transitions;
//! use statem::validation::{lint, DefinitionIssue};
//! use stillwater::validation::Validation;
//!
//! let transitions = Transitions::States(transitions! {
//!     A => { poke => B },
//!     C => { poke => A },
//! });
//!
//! match lint("A", &transitions) {
//!     Validation::Failure(issues) => {
//!         assert!(issues
//!             .iter()
//!             .any(|issue| matches!(issue, DefinitionIssue::UnreachableState { .. })));
//!     }
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

mod issues;
mod lint;

pub use issues::DefinitionIssue;
pub use lint::lint;
pub(crate) use lint::lint_events;
