//! End-to-end scenarios run against both definition shapes.

use statem::{transitions, Definition, Machine, SendError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

type Counts = Rc<RefCell<HashMap<String, usize>>>;

fn two_state_definitions() -> Vec<Definition> {
    vec![
        Definition::with_states(
            "A",
            transitions! {
                A => { poke => B },
                B => { poke => A },
            },
        ),
        Definition::with_events("A", transitions! { poke => { A => B, B => A } }),
    ]
}

fn three_state_definitions() -> Vec<Definition> {
    vec![
        Definition::with_states(
            "A",
            transitions! {
                A => { poke => B, prod => A },
                B => { poke => C, prod => A },
                C => { poke => C, prod => B, invalid => C },
            },
        ),
        Definition::with_events(
            "A",
            transitions! {
                poke => { A => B, B => C, C => C },
                prod => { A => A, B => A, C => B },
                invalid => { C => C },
            },
        ),
    ]
}

fn count_notifications(machine: &mut Machine, states: &[&'static str]) -> Counts {
    let counts: Counts = Rc::new(RefCell::new(HashMap::new()));
    for &state in states {
        let enter = Rc::clone(&counts);
        machine.on_enter(state, move || {
            *enter.borrow_mut().entry(format!("enter:{state}")).or_default() += 1;
        });
        let exit = Rc::clone(&counts);
        machine.on_exit(state, move || {
            *exit.borrow_mut().entry(format!("exit:{state}")).or_default() += 1;
        });
    }
    counts
}

fn count(counts: &Counts, key: &str) -> usize {
    counts.borrow().get(key).copied().unwrap_or(0)
}

#[test]
fn two_states_one_event_toggles() {
    for definition in two_state_definitions() {
        let mut machine = Machine::from_definition(definition).unwrap();
        let counts = count_notifications(&mut machine, &["A", "B"]);
        assert_eq!(machine.state(), "A");

        machine.send("poke").unwrap();
        assert_eq!(machine.state(), "B");
        assert_eq!(count(&counts, "exit:A"), 1);
        assert_eq!(count(&counts, "enter:B"), 1);

        machine.send("poke").unwrap();
        assert_eq!(machine.state(), "A");
        assert_eq!(count(&counts, "exit:B"), 1);
        assert_eq!(count(&counts, "enter:A"), 1);
    }
}

#[test]
fn three_states_two_events_sequence() {
    for definition in three_state_definitions() {
        let mut machine = Machine::from_definition(definition).unwrap();
        let mut visited = Vec::new();

        for event in ["poke", "poke", "prod", "prod"] {
            machine.send(event).unwrap();
            visited.push(machine.state().to_string());
        }

        assert_eq!(visited, vec!["B", "C", "B", "A"]);
    }
}

#[test]
fn self_loop_from_initial_fires_nothing() {
    for definition in three_state_definitions() {
        let mut machine = Machine::from_definition(definition).unwrap();
        let counts = count_notifications(&mut machine, &["A", "B", "C"]);

        machine.send("prod").unwrap();

        assert_eq!(machine.state(), "A");
        assert!(counts.borrow().is_empty());
    }
}

#[test]
fn self_loop_in_c_fires_nothing() {
    for definition in three_state_definitions() {
        let mut machine = Machine::from_definition(definition).unwrap();
        machine.send("poke").unwrap();
        machine.send("poke").unwrap();
        let counts = count_notifications(&mut machine, &["B", "C"]);

        machine.send("poke").unwrap();

        assert_eq!(machine.state(), "C");
        assert!(counts.borrow().is_empty());
    }
}

#[test]
fn unknown_event_is_reported_by_name() {
    for definition in three_state_definitions() {
        let mut machine = Machine::from_definition(definition).unwrap();

        let err = machine.send("unknownEvent").unwrap_err();

        assert_eq!(
            err,
            SendError::UnknownEvent {
                event: "unknownEvent".to_string()
            }
        );
        assert!(err.to_string().to_lowercase().contains("unknown event"));
        assert!(err.to_string().contains("'unknownEvent'"));
        assert_eq!(machine.state(), "A");
    }
}

#[test]
fn illegal_transition_names_event_and_state() {
    for definition in three_state_definitions() {
        let mut machine = Machine::from_definition(definition).unwrap();
        let counts = count_notifications(&mut machine, &["A", "B", "C"]);

        let err = machine.send("invalid").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Machine does not accept 'invalid' event in 'A' state"
        );
        assert_eq!(machine.state(), "A");
        assert!(counts.borrow().is_empty());
    }
}

#[test]
fn invalid_is_accepted_once_in_c() {
    for definition in three_state_definitions() {
        let mut machine = Machine::from_definition(definition).unwrap();
        machine.send("poke").unwrap();
        machine.send("poke").unwrap();

        machine.send("invalid").unwrap();

        assert_eq!(machine.state(), "C");
    }
}

#[test]
fn exit_observers_run_before_enter_observers() {
    for definition in three_state_definitions() {
        let mut machine = Machine::from_definition(definition).unwrap();
        let order = Rc::new(RefCell::new(Vec::new()));
        for state in ["A", "B", "C"] {
            let enter = Rc::clone(&order);
            machine.on_enter(state, move || enter.borrow_mut().push(format!("enter:{state}")));
            let exit = Rc::clone(&order);
            machine.on_exit(state, move || exit.borrow_mut().push(format!("exit:{state}")));
        }

        for event in ["poke", "poke", "prod", "prod"] {
            machine.send(event).unwrap();
        }

        assert_eq!(
            *order.borrow(),
            vec![
                "exit:A", "enter:B", "exit:B", "enter:C", "exit:C", "enter:B", "exit:B",
                "enter:A",
            ]
        );
    }
}

#[test]
fn json_definitions_drive_machines() {
    let json = r#"{
        "initial": "A",
        "events": {
            "poke": { "A": "B", "B": "C", "C": "C" },
            "prod": { "A": "A", "B": "A", "C": "B" }
        }
    }"#;

    let mut machine = Machine::from_definition(Definition::from_json(json).unwrap()).unwrap();
    machine.send("poke").unwrap();
    machine.send("poke").unwrap();

    assert_eq!(machine.state(), "C");
}
