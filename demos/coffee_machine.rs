//! Coffee Machine
//!
//! This example demonstrates guards, lifecycle hooks and typed triggers.
//!
//! Key concepts:
//! - A guard on the destination state vetoing a transition
//! - Exit, enter and global hooks running in a fixed order
//! - Candidate source lists and the `any` source
//! - Per-event methods generated with `event_triggers!`
//!
//! Run with: cargo run --example coffee_machine

use statewise::builder::StateMachineBuilder;
use statewise::core::{Guard, Hook};
use statewise::engine::StateMachine;
use statewise::event_triggers;

event_triggers! {
    trait CoffeeEvents for StateMachine<u32> {
        start,
        finish,
        refill,
        reset,
    }
}

fn main() {
    println!("=== Coffee Machine Example ===\n");

    let mut machine: StateMachine<u32> = StateMachineBuilder::new()
        .states(["idle", "brewing", "done"])
        .event("start", "idle", "brewing")
        .event("finish", "brewing", "done")
        .event("refill", ["idle", "done"], "brewing")
        .event("reset", "any", "idle")
        .guard("brewing", Guard::new(|_, cups: &u32| *cups > 0))
        .on_exit("idle", Hook::new(|_, _| println!("  warming up")))
        .on_enter(
            "brewing",
            Hook::new(|_, cups: &u32| println!("  brewing {cups} cup(s)")),
        )
        .on_state_change(Hook::new(|transition, _| {
            println!(
                "  {} -> {} via {:?}",
                transition.from, transition.to, transition.event
            )
        }))
        .build()
        .unwrap();

    println!("Initial state: {:?}", machine.current_state());

    println!("\nOrdering zero cups:");
    let outcome = machine.start(&0).unwrap();
    println!("  outcome: {outcome:?}, state: {:?}", machine.current_state());

    println!("\nOrdering two cups:");
    machine.start(&2).unwrap();
    machine.finish(&2).unwrap();

    println!("\nRefilling from done:");
    machine.refill(&1).unwrap();

    println!("\nRefilling while brewing:");
    if let Err(err) = machine.refill(&1) {
        println!("  {err}");
    }

    println!("\nResetting from any state:");
    machine.reset(&0).unwrap();

    println!("\nPath: {:?}", machine.history().get_path());

    println!("\n=== Example Complete ===");
}
