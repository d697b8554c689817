//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Enter/exit observers
//! - Rejected events leave the light untouched
//!
//! Run with: cargo run --example traffic_light

use statem::{transitions, MachineBuilder};

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let mut light = MachineBuilder::new()
        .initial("Red")
        .states(transitions! {
            Red => { tick => Green },
            Green => { tick => Yellow, emergency => Red },
            Yellow => { tick => Red, emergency => Red },
        })
        .build()
        .unwrap();

    for state in ["Red", "Yellow", "Green"] {
        light.on_exit(state, move || println!("  leaving {state}"));
        light.on_enter(state, move || println!("  entering {state}"));
    }

    println!("Initial state: {}\n", light.state());

    for event in ["tick", "tick", "tick", "emergency", "tick", "emergency"] {
        println!("send({event})");
        match light.send(event) {
            Ok(()) => println!("  now {}", light.state()),
            Err(e) => println!("  rejected: {e}"),
        }
    }

    println!("\n=== Example Complete ===");
}
