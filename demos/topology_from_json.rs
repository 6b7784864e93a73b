//! Topology From JSON
//!
//! Loads the shape of a machine from a JSON document and attaches
//! behaviour in code through an `ActionBinder`.
//!
//! Run with: cargo run --example topology_from_json

use flipstate::config::{ActionBinder, Topology};
use flipstate::definition::{ActionResult, StateActions, StateHooks, TransitionAction};
use flipstate::{event_enum, state_enum, Error, Machine, State};
use std::sync::Arc;

state_enum! {
    enum Turnstile {
        Locked,
        Unlocked,
    }
}

event_enum! {
    enum Input {
        Coin,
        Push,
    }
}

const TOPOLOGY: &str = r#"{
    "initial_state": "Locked",
    "states": [
        {
            "id": "Locked",
            "transitions": [
                { "event": "Coin", "target": "Unlocked" },
                { "event": "Push", "target": "Locked" }
            ]
        },
        {
            "id": "Unlocked",
            "transitions": [
                { "event": "Coin", "target": "Unlocked" },
                { "event": "Push", "target": "Locked" }
            ]
        }
    ]
}"#;

struct Printer;

impl ActionBinder<Turnstile, Input> for Printer {
    fn state_actions(&self, state: &Turnstile) -> Arc<dyn StateActions> {
        let name = state.name().to_string();
        Arc::new(StateHooks::new().with_enter(move || {
            println!("  entered {name}");
            Ok(())
        }))
    }

    fn transition_action(
        &self,
        from: &Turnstile,
        event: &Input,
        target: &Turnstile,
    ) -> Arc<dyn TransitionAction> {
        let line = format!("{from:?} --{event:?}--> {target:?}");
        Arc::new(move || -> ActionResult {
            println!("  {line}");
            Ok(())
        })
    }
}

fn main() -> Result<(), Error> {
    println!("=== Topology From JSON Example ===\n");

    let topology: Topology<Turnstile, Input> = Topology::from_json(TOPOLOGY)?;
    let mut machine = Machine::new(topology.bind(&Printer)?)?;

    for input in [Input::Push, Input::Coin, Input::Coin, Input::Push] {
        println!("input: {input:?}");
        machine.send(&input)?;
    }

    println!("\nFinal state: {:?}", machine.value());
    println!("Exported topology:\n{}", machine.definition().topology().to_json()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
