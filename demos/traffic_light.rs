//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - States declared as a plain list
//! - A single event whose source set covers every state
//!
//! Run with: cargo run --example traffic_light

use statewise::builder::StateMachineBuilder;
use statewise::engine::StateMachine;

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let mut machine: StateMachine = StateMachineBuilder::new()
        .states(["red", "green", "yellow"])
        .event("go", "red", "green")
        .event("slow", "green", "yellow")
        .event("stop", "yellow", "red")
        .build()
        .unwrap();

    println!("Initial state: {:?}\n", machine.current_state());

    println!("Transition sequence:");
    for event in ["go", "slow", "stop", "go", "slow", "stop"] {
        let from = machine.current_state().unwrap_or_default().to_string();
        machine.trigger(event, &()).unwrap();
        println!(
            "  {from:>6} -> {:<6} ({event})",
            machine.current_state().unwrap_or_default()
        );
    }

    println!("\nFiring an event from the wrong state is an error:");
    match machine.trigger("slow", &()) {
        Ok(outcome) => println!("  unexpected outcome: {outcome:?}"),
        Err(err) => println!("  {err}"),
    }

    println!(
        "\nRecorded {} transitions; the light is {:?} again",
        machine.history().len(),
        machine.current_state()
    );

    println!("\n=== Example Complete ===");
}
