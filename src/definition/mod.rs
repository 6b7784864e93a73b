//! State definitions: the immutable configuration a machine runs.
//!
//! A definition is plain data plus injected behaviour. Structure lives in
//! hash maps keyed by state and event identifiers; behaviour is supplied
//! through the [`StateActions`] and [`TransitionAction`] capabilities so
//! the executor never needs to know what an action does.

mod actions;
mod validation;

pub use actions::{
    ActionError, ActionResult, Hook, NoActions, StateActions, StateHooks, TransitionAction,
};
pub(crate) use actions::noop;
pub use validation::{DefinitionError, DefinitionViolation};

use crate::config::{StateTopology, Topology, TransitionTopology};
use crate::core::{Event, State};
use crate::executor::TransitionError;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// One event handler within a state.
pub struct Transition<S: State> {
    target: S,
    action: Arc<dyn TransitionAction>,
}

impl<S: State> Transition<S> {
    pub fn new(target: S, action: Arc<dyn TransitionAction>) -> Self {
        Self { target, action }
    }

    /// Transition with no action of its own.
    pub fn to(target: S) -> Self {
        Self::new(target, noop())
    }

    /// Destination state.
    pub fn target(&self) -> &S {
        &self.target
    }

    pub(crate) fn action(&self) -> &dyn TransitionAction {
        self.action.as_ref()
    }
}

impl<S: State> Clone for Transition<S> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            action: Arc::clone(&self.action),
        }
    }
}

impl<S: State> fmt::Debug for Transition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// One state: its entry/exit behaviour and the events it reacts to.
pub struct StateEntry<S: State, E: Event> {
    actions: Arc<dyn StateActions>,
    transitions: HashMap<E, Transition<S>>,
}

impl<S: State, E: Event> StateEntry<S, E> {
    pub fn new(actions: Arc<dyn StateActions>) -> Self {
        Self {
            actions,
            transitions: HashMap::new(),
        }
    }

    /// Register the transition fired by `event`, replacing any previous one.
    pub fn with_transition(mut self, event: E, transition: Transition<S>) -> Self {
        self.transitions.insert(event, transition);
        self
    }

    /// Transition registered for `event`, if any.
    pub fn transition(&self, event: &E) -> Option<&Transition<S>> {
        self.transitions.get(event)
    }

    pub fn transitions(&self) -> &HashMap<E, Transition<S>> {
        &self.transitions
    }

    pub(crate) fn actions(&self) -> &dyn StateActions {
        self.actions.as_ref()
    }
}

impl<S: State, E: Event> Clone for StateEntry<S, E> {
    fn clone(&self) -> Self {
        Self {
            actions: Arc::clone(&self.actions),
            transitions: self.transitions.clone(),
        }
    }
}

impl<S: State, E: Event> fmt::Debug for StateEntry<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateEntry")
            .field("transitions", &self.transitions)
            .finish_non_exhaustive()
    }
}

/// The whole machine: an initial state and every declared state.
///
/// Definitions built by hand are not checked; [`StateDefinition::validate`]
/// reports every dangling reference at once, and
/// [`Machine::new`](crate::executor::Machine::new) refuses definitions
/// that fail it.
pub struct StateDefinition<S: State, E: Event> {
    initial_state: S,
    states: HashMap<S, StateEntry<S, E>>,
}

impl<S: State, E: Event> StateDefinition<S, E> {
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            states: HashMap::new(),
        }
    }

    /// Declare a state, replacing any previous entry with the same id.
    pub fn insert_state(&mut self, id: S, entry: StateEntry<S, E>) {
        self.states.insert(id, entry);
    }

    pub fn with_state(mut self, id: S, entry: StateEntry<S, E>) -> Self {
        self.insert_state(id, entry);
        self
    }

    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    pub fn state(&self, id: &S) -> Option<&StateEntry<S, E>> {
        self.states.get(id)
    }

    pub fn states(&self) -> &HashMap<S, StateEntry<S, E>> {
        &self.states
    }

    pub fn contains_state(&self, id: &S) -> bool {
        self.states.contains_key(id)
    }

    /// Look up the transition `event` fires from `current`, together with
    /// the entry of `current` itself.
    ///
    /// Pure: no action runs. `Ok(None)` means `current` does not react to
    /// `event`. Fails only if `current` itself is undeclared.
    pub fn resolve(
        &self,
        current: &S,
        event: &E,
    ) -> Result<Option<(&StateEntry<S, E>, &Transition<S>)>, TransitionError> {
        let entry = self
            .state(current)
            .ok_or_else(|| TransitionError::UndefinedState {
                state: current.name().to_string(),
            })?;
        Ok(entry.transition(event).map(|transition| (entry, transition)))
    }

    /// Action-free structure of this definition.
    ///
    /// States and transitions are sorted by name so the result is stable.
    pub fn topology(&self) -> Topology<S, E> {
        let mut states: Vec<StateTopology<S, E>> = self
            .states
            .iter()
            .map(|(id, entry)| {
                let mut transitions: Vec<TransitionTopology<S, E>> = entry
                    .transitions
                    .iter()
                    .map(|(event, transition)| TransitionTopology {
                        event: event.clone(),
                        target: transition.target.clone(),
                    })
                    .collect();
                transitions.sort_by(|a, b| a.event.name().cmp(b.event.name()));
                StateTopology {
                    id: id.clone(),
                    transitions,
                }
            })
            .collect();
        states.sort_by(|a, b| a.id.name().cmp(b.id.name()));

        Topology {
            initial_state: self.initial_state.clone(),
            states,
        }
    }
}

impl<S: State, E: Event> Clone for StateDefinition<S, E> {
    fn clone(&self) -> Self {
        Self {
            initial_state: self.initial_state.clone(),
            states: self.states.clone(),
        }
    }
}

impl<S: State, E: Event> fmt::Debug for StateDefinition<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateDefinition")
            .field("initial_state", &self.initial_state)
            .field("states", &self.states)
            .finish()
    }
}
