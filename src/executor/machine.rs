//! Machine instance: a definition plus the single current-state value.

use crate::core::{Event, State, StateHistory, StateTransition};
use crate::definition::{DefinitionError, StateDefinition};
use crate::executor::error::TransitionError;
use crate::executor::step::step;
use chrono::Utc;
use std::fmt;
use tracing::{debug, warn};

/// Runtime state machine.
///
/// Owns an immutable [`StateDefinition`] and the identifier of the current
/// state. The current state changes only through [`Machine::transition`]
/// (or [`Machine::send`]), and only after every action of the transition
/// has succeeded.
///
/// No transition history is kept unless asked for with
/// [`Machine::with_history`], and even then it is bounded.
///
/// A machine is not internally synchronised. Callers that share one across
/// threads serialise access themselves, e.g. behind a mutex.
pub struct Machine<S: State, E: Event> {
    definition: StateDefinition<S, E>,
    value: S,
    history: StateHistory<S, E>,
}

impl<S: State, E: Event> Machine<S, E> {
    /// Create a machine in the definition's initial state.
    ///
    /// The definition is validated first; every undeclared initial state
    /// or transition target is reported in the returned error. No action
    /// runs, including the initial state's entry action.
    pub fn new(definition: StateDefinition<S, E>) -> Result<Self, DefinitionError> {
        definition.validate()?;
        let value = definition.initial_state().clone();
        debug!(state = value.name(), "machine created");
        Ok(Self {
            definition,
            value,
            history: StateHistory::bounded(0),
        })
    }

    /// Keep the `capacity` most recent committed transitions.
    ///
    /// Anything already recorded beyond the new capacity is dropped.
    pub fn with_history(mut self, capacity: usize) -> Self {
        let mut history = StateHistory::bounded(capacity);
        for transition in self.history.transitions().cloned() {
            history.push(transition);
        }
        self.history = history;
        self
    }

    /// Current state (pure).
    pub fn value(&self) -> &S {
        &self.value
    }

    /// The definition this machine runs (pure).
    pub fn definition(&self) -> &StateDefinition<S, E> {
        &self.definition
    }

    /// Recently committed transitions, empty unless history is enabled (pure).
    pub fn history(&self) -> &StateHistory<S, E> {
        &self.history
    }

    /// Whether `event` would fire a transition from the current state (pure).
    pub fn can_handle(&self, event: &E) -> bool {
        self.definition
            .state(&self.value)
            .is_some_and(|entry| entry.transition(event).is_some())
    }

    /// Events the current state reacts to, sorted by name (pure).
    pub fn available_events(&self) -> Vec<&E> {
        let mut events: Vec<&E> = self
            .definition
            .state(&self.value)
            .map(|entry| entry.transitions().keys().collect())
            .unwrap_or_default();
        events.sort_by(|a, b| a.name().cmp(b.name()));
        events
    }

    /// Process `event` from `current_state`.
    ///
    /// `current_state` must equal [`Machine::value`]; any other value is
    /// rejected with [`TransitionError::StateMismatch`] before anything
    /// runs.
    ///
    /// Runs the transition action, the exit action of the current state
    /// and the entry action of the target, in that order, then commits
    /// the target as the new value and returns it. An event the current
    /// state does not react to returns `Ok(None)` and changes nothing.
    ///
    /// If any action fails the error is returned and the value is left
    /// unchanged. This includes a failing entry action, in which case the
    /// old state's exit action has already run while the machine still
    /// reports the old state.
    pub fn transition(
        &mut self,
        current_state: &S,
        event: &E,
    ) -> Result<Option<S>, TransitionError> {
        if *current_state != self.value {
            warn!(
                expected = self.value.name(),
                actual = current_state.name(),
                event = event.name(),
                "transition requested from a state the machine is not in"
            );
            return Err(TransitionError::StateMismatch {
                expected: self.value.name().to_string(),
                actual: current_state.name().to_string(),
            });
        }

        let Some(target) = step(&self.definition, current_state, event)? else {
            return Ok(None);
        };

        debug!(
            from = self.value.name(),
            to = target.name(),
            event = event.name(),
            "transition committed"
        );
        self.history.push(StateTransition {
            from: self.value.clone(),
            to: target.clone(),
            event: event.clone(),
            timestamp: Utc::now(),
        });
        self.value = target;

        Ok(Some(self.value.clone()))
    }

    /// Process `event` from the machine's own current state.
    pub fn send(&mut self, event: &E) -> Result<Option<S>, TransitionError> {
        let current = self.value.clone();
        self.transition(&current, event)
    }
}

impl<S: State, E: Event> fmt::Debug for Machine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("value", &self.value)
            .field("transitions", &self.history.len())
            .finish_non_exhaustive()
    }
}
