//! On/Off Switch
//!
//! Builds the classic two-state switch and drives it with a few events,
//! printing each action as it runs.
//!
//! Key concepts:
//! - Entry/exit actions per state, plus an action per transition
//! - Fixed action order: transition action, exit old, enter new
//! - Unknown events are ignored without side effects
//!
//! Run with: RUST_LOG=flipstate=debug cargo run --example on_off_switch

use flipstate::builder::{StateBuilder, StateDefinitionBuilder};
use flipstate::{ActionResult, Error};
use tracing_subscriber::EnvFilter;

fn say(message: &'static str) -> impl Fn() -> ActionResult + Send + Sync + 'static {
    move || {
        println!("  {message}");
        Ok(())
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    println!("=== On/Off Switch Example ===\n");

    let off = "off".to_string();
    let on = "on".to_string();
    let switch = "switch".to_string();
    let unplug = "unplug".to_string();

    let mut machine = StateDefinitionBuilder::new()
        .initial(off.clone())
        .state(
            StateBuilder::new(off.clone())
                .on_enter(say("Inside off: onEnter"))
                .on_exit(say("Inside off: onExit"))
                .on(
                    switch.clone(),
                    on.clone(),
                    say("transition action for switch in OFF state"),
                ),
        )
        .state(
            StateBuilder::new(on.clone())
                .on_enter(say("Inside on: onEnter"))
                .on_exit(say("Inside on: onExit"))
                .on(
                    switch.clone(),
                    off.clone(),
                    say("transition action for switch in ON state"),
                ),
        )
        .build_machine()?
        .with_history(16);

    let mut state = machine.value().clone();
    println!("current state: {state}");

    for event in [&switch, &switch, &unplug] {
        println!("\nevent: {event}");
        match machine.transition(&state, event)? {
            Some(next) => state = next,
            None => println!("  (ignored)"),
        }
        println!("current state: {state}");
    }

    println!("\nPath: {:?}", machine.history().get_path());
    println!("\n=== Example Complete ===");
    Ok(())
}
