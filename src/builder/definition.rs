//! Builder for constructing state definitions.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{Event, State};
use crate::definition::StateDefinition;
use crate::executor::Machine;
use crate::Error;
use std::collections::HashSet;

/// Builder for constructing state definitions with a fluent API.
///
/// Catches what a hash map would silently swallow (duplicate states,
/// duplicate events within a state). Dangling targets are left to
/// [`StateDefinition::validate`].
pub struct StateDefinitionBuilder<S: State, E: Event> {
    initial: Option<S>,
    states: Vec<StateBuilder<S, E>>,
}

impl<S: State, E: Event> StateDefinitionBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a state.
    pub fn state(mut self, state: StateBuilder<S, E>) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: Vec<StateBuilder<S, E>>) -> Self {
        self.states.extend(states);
        self
    }

    /// Build the definition.
    /// Returns an error if required fields are missing or ids repeat.
    pub fn build(self) -> Result<StateDefinition<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut definition = StateDefinition::new(initial);
        for state in self.states {
            if definition.contains_state(&state.id) {
                return Err(BuildError::DuplicateState {
                    state: state.id.name().to_string(),
                });
            }

            let (id, mut entry, transitions) = state.into_parts();
            let mut seen = HashSet::new();
            for (event, transition) in transitions {
                if !seen.insert(event.clone()) {
                    return Err(BuildError::DuplicateTransition {
                        state: id.name().to_string(),
                        event: event.name().to_string(),
                    });
                }
                entry = entry.with_transition(event, transition);
            }
            definition.insert_state(id, entry);
        }

        Ok(definition)
    }

    /// Build the definition and start a machine on it.
    pub fn build_machine(self) -> Result<Machine<S, E>, Error> {
        let definition = self.build()?;
        Ok(Machine::new(definition)?)
    }
}

impl<S: State, E: Event> Default for StateDefinitionBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
