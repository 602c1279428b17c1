//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic, event-driven state machine with
//! undo/redo.
//!
//! Key concepts:
//! - Event-driven transitions from a JSON configuration
//! - Rejected events leave the machine untouched
//! - Undo/redo over visited states
//! - Reset returns to the initial state without touching history
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use rewind::{Fsm, FsmError};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"{
    "initial": "Red",
    "states": {
        "Red":    { "transitions": { "next": "Green" } },
        "Green":  { "transitions": { "next": "Yellow", "emergency": "Red" } },
        "Yellow": { "transitions": { "next": "Red", "emergency": "Red" } }
    }
}"#;

fn main() -> Result<(), FsmError> {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let mut light = Fsm::from_json(CONFIG)?;
    println!("Initial state: {}", light.state());
    println!("States: {:?}", light.states(None));
    println!("States handling 'emergency': {:?}\n", light.states(Some("emergency")));

    for _ in 0..3 {
        light.trigger("next")?;
        println!("next      -> {}", light.state());
    }

    match light.trigger("emergency") {
        Ok(()) => println!("emergency -> {}", light.state()),
        Err(err) => println!("emergency rejected: {err}"),
    }

    println!("\nHistory: {:?}", light.history());

    while light.undo() {
        println!("undo      -> {}", light.state());
    }
    light.redo();
    println!("redo      -> {}", light.state());

    light.reset();
    println!("reset     -> {} (history kept: {:?})", light.state(), light.history());

    println!("\n=== Example Complete ===");
    Ok(())
}
