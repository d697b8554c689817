//! Table lint using accumulating validation.

use super::issues::DefinitionIssue;
use crate::core::{invert, leaves, Table, Transitions};
use std::borrow::Cow;
use std::collections::{BTreeSet, VecDeque};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check a transition table against an initial state, accumulating ALL
/// issues.
///
/// Returns `Validation::Success(())` for a table where every declared state
/// is reachable from `initial`.
pub fn lint(
    initial: &str,
    transitions: &Transitions,
) -> Validation<(), NonEmptyVec<DefinitionIssue>> {
    let events = match transitions {
        Transitions::Events(table) => Cow::Borrowed(table),
        Transitions::States(table) => Cow::Owned(invert(table)),
    };
    lint_events(initial, &events)
}

pub(crate) fn lint_events(
    initial: &str,
    events: &Table,
) -> Validation<(), NonEmptyVec<DefinitionIssue>> {
    if leaves(events).next().is_none() {
        return Validation::fail(DefinitionIssue::EmptyTable);
    }

    let mut checks: Vec<Validation<(), NonEmptyVec<DefinitionIssue>>> = Vec::new();

    let declared: BTreeSet<&str> = leaves(events)
        .flat_map(|(_, state, next)| [state.as_str(), next.as_str()])
        .collect();

    let initial_check = if declared.contains(initial) {
        Validation::success(())
    } else {
        Validation::fail(DefinitionIssue::UndeclaredInitial {
            state: initial.to_string(),
        })
    };
    checks.push(initial_check);

    let states = invert(events);
    let reachable = reachable_from(initial, &states);
    for state in declared.difference(&reachable) {
        checks.push(Validation::fail(DefinitionIssue::UnreachableState {
            state: state.to_string(),
        }));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Breadth-first walk over a state-keyed table.
fn reachable_from<'a>(initial: &'a str, states: &'a Table) -> BTreeSet<&'a str> {
    let mut seen = BTreeSet::from([initial]);
    let mut queue = VecDeque::from([initial]);

    while let Some(state) = queue.pop_front() {
        let Some(transitions) = states.get(state) else {
            continue;
        };
        for next in transitions.values() {
            if seen.insert(next.as_str()) {
                queue.push_back(next.as_str());
            }
        }
    }

    seen
}
