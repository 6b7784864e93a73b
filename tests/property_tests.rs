//! Property-based tests for the transition executor.
//!
//! Machines are generated from random transition tables over a small
//! alphabet of states and events; every action records a label so the
//! exact sequence of side effects can be compared against the table.

use flipstate::builder::{StateBuilder, StateDefinitionBuilder};
use flipstate::core::StateHistory;
use flipstate::{ActionError, ActionPhase, ActionResult, Machine};
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

const STATES: usize = 4;
const EVENTS: usize = 3;

/// `table[state * EVENTS + event]` is the target of that transition, if any.
type Table = Vec<Option<usize>>;
type Log = Arc<Mutex<Vec<String>>>;

fn state_id(index: usize) -> String {
    format!("s{index}")
}

fn event_id(index: usize) -> String {
    format!("e{index}")
}

/// The single action made to fail: the transition action of
/// `(state, event)`, or the exit/entry action of `state`.
#[derive(Debug, Clone, Copy)]
struct Fault {
    state: usize,
    event: usize,
    phase: ActionPhase,
}

impl Fault {
    fn hits(&self, phase: ActionPhase, state: usize, event: Option<usize>) -> bool {
        self.phase == phase && self.state == state && event.map_or(true, |e| e == self.event)
    }
}

fn record(
    log: &Log,
    label: String,
    fails: bool,
) -> impl Fn() -> ActionResult + Send + Sync + 'static {
    let log = Arc::clone(log);
    move || {
        log.lock().unwrap().push(label.clone());
        if fails {
            Err(ActionError::failed(label.clone()))
        } else {
            Ok(())
        }
    }
}

fn build(table: &Table, initial: usize, log: &Log) -> Machine<String, String> {
    build_with_fault(table, initial, log, None)
}

fn build_with_fault(
    table: &Table,
    initial: usize,
    log: &Log,
    fault: Option<Fault>,
) -> Machine<String, String> {
    let fails = |phase, state, event| fault.is_some_and(|f| f.hits(phase, state, event));
    let states: Vec<StateBuilder<String, String>> = (0..STATES)
        .map(|s| {
            let builder = StateBuilder::new(state_id(s))
                .on_enter(record(log, format!("enter {s}"), fails(ActionPhase::Enter, s, None)))
                .on_exit(record(log, format!("exit {s}"), fails(ActionPhase::Exit, s, None)));
            (0..EVENTS).fold(builder, |builder, e| match table[s * EVENTS + e] {
                Some(target) => builder.on(
                    event_id(e),
                    state_id(target),
                    record(
                        log,
                        format!("action {s}/{e}"),
                        fails(ActionPhase::Transition, s, Some(e)),
                    ),
                ),
                None => builder,
            })
        })
        .collect();

    StateDefinitionBuilder::new()
        .initial(state_id(initial))
        .states(states)
        .build_machine()
        .unwrap()
        .with_history(32)
}

fn arbitrary_phase() -> impl Strategy<Value = ActionPhase> {
    prop_oneof![
        Just(ActionPhase::Transition),
        Just(ActionPhase::Exit),
        Just(ActionPhase::Enter),
    ]
}

fn drain(log: &Log) -> Vec<String> {
    std::mem::take(&mut *log.lock().unwrap())
}

prop_compose! {
    fn arbitrary_table()(
        table in prop::collection::vec(prop::option::of(0..STATES), STATES * EVENTS)
    ) -> Table {
        table
    }
}

proptest! {
    #[test]
    fn unmatched_event_never_changes_anything(
        table in arbitrary_table(),
        initial in 0..STATES,
        event in 0..EVENTS,
        repeats in 1..5usize,
    ) {
        prop_assume!(table[initial * EVENTS + event].is_none());

        let log = Log::default();
        let mut machine = build(&table, initial, &log);

        for _ in 0..repeats {
            let current = machine.value().clone();
            let result = machine.transition(&current, &event_id(event)).unwrap();
            prop_assert_eq!(result, None);
        }

        prop_assert_eq!(machine.value(), &state_id(initial));
        prop_assert!(machine.history().is_empty());
        prop_assert!(drain(&log).is_empty());
    }

    #[test]
    fn matched_event_runs_action_exit_enter_then_commits(
        table in arbitrary_table(),
        initial in 0..STATES,
        event in 0..EVENTS,
    ) {
        let Some(target) = table[initial * EVENTS + event] else {
            return Ok(());
        };

        let log = Log::default();
        let mut machine = build(&table, initial, &log);

        let result = machine.transition(&state_id(initial), &event_id(event)).unwrap();

        prop_assert_eq!(result, Some(state_id(target)));
        prop_assert_eq!(machine.value(), &state_id(target));
        prop_assert_eq!(
            drain(&log),
            vec![
                format!("action {initial}/{event}"),
                format!("exit {initial}"),
                format!("enter {target}"),
            ]
        );
    }

    #[test]
    fn value_follows_the_transition_table(
        table in arbitrary_table(),
        initial in 0..STATES,
        events in prop::collection::vec(0..EVENTS, 0..20),
    ) {
        let log = Log::default();
        let mut machine = build(&table, initial, &log);

        let mut expected = initial;
        let mut fired = 0;
        for event in events {
            let result = machine.send(&event_id(event)).unwrap();
            match table[expected * EVENTS + event] {
                Some(target) => {
                    prop_assert_eq!(result, Some(state_id(target)));
                    expected = target;
                    fired += 1;
                }
                None => {
                    prop_assert_eq!(result, None);
                }
            }
            prop_assert_eq!(machine.value(), &state_id(expected));
        }

        let history: &StateHistory<String, String> = machine.history();
        prop_assert_eq!(history.len(), fired);
        prop_assert_eq!(drain(&log).len(), fired * 3);
    }

    #[test]
    fn identical_inputs_produce_identical_effects(
        table in arbitrary_table(),
        initial in 0..STATES,
        events in prop::collection::vec(0..EVENTS, 0..20),
    ) {
        let run = || {
            let log = Log::default();
            let mut machine = build(&table, initial, &log);
            let results: Vec<Option<String>> = events
                .iter()
                .map(|&e| machine.send(&event_id(e)).unwrap())
                .collect();
            (results, machine.value().clone(), drain(&log))
        };

        prop_assert_eq!(run(), run());
    }

    #[test]
    fn self_transition_fires_exit_and_enter(
        state in 0..STATES,
        event in 0..EVENTS,
    ) {
        let mut table: Table = vec![None; STATES * EVENTS];
        table[state * EVENTS + event] = Some(state);

        let log = Log::default();
        let mut machine = build(&table, state, &log);

        let result = machine.send(&event_id(event)).unwrap();

        prop_assert_eq!(result, Some(state_id(state)));
        prop_assert_eq!(
            drain(&log),
            vec![
                format!("action {state}/{event}"),
                format!("exit {state}"),
                format!("enter {state}"),
            ]
        );
    }

    #[test]
    fn failing_action_leaves_value_and_history_unchanged(
        table in arbitrary_table(),
        initial in 0..STATES,
        prefix in prop::collection::vec(0..EVENTS, 0..4),
        event in 0..EVENTS,
        phase in arbitrary_phase(),
    ) {
        // walk the prefix through the table to learn where it ends up
        let mut from = initial;
        for &e in &prefix {
            if let Some(target) = table[from * EVENTS + e] {
                from = target;
            }
        }
        let Some(target) = table[from * EVENTS + event] else {
            return Ok(());
        };
        let faulty = match phase {
            ActionPhase::Enter => target,
            _ => from,
        };
        let log = Log::default();
        let fault = Fault { state: faulty, event, phase };
        let mut machine = build_with_fault(&table, initial, &log, Some(fault));
        let mut replayed = Ok(());
        for &e in &prefix {
            if let Err(error) = machine.send(&event_id(e)) {
                replayed = Err(error);
                break;
            }
        }
        // the fault must not fire while replaying the prefix
        prop_assume!(replayed.is_ok());
        drain(&log);

        let value_before = machine.value().clone();
        let history_before = machine.history().len();

        let error = machine.send(&event_id(event)).unwrap_err();

        prop_assert_eq!(error.phase(), Some(phase));
        prop_assert_eq!(machine.value(), &value_before);
        prop_assert_eq!(machine.value(), &state_id(from));
        prop_assert_eq!(machine.history().len(), history_before);

        let ran = match phase {
            ActionPhase::Transition => 1,
            ActionPhase::Exit => 2,
            ActionPhase::Enter => 3,
        };
        let expected = [
            format!("action {from}/{event}"),
            format!("exit {from}"),
            format!("enter {target}"),
        ];
        prop_assert_eq!(drain(&log), expected[..ran].to_vec());
    }
}
