//! Serializable machine topology.
//!
//! A topology is the structure of a state definition with the behaviour
//! left out: which states exist, which events each reacts to and where
//! they lead. Actions are not serializable, so they are supplied when the
//! topology is bound into a [`StateDefinition`].

use crate::builder::{BuildError, StateBuilder, StateDefinitionBuilder};
use crate::core::{Event, State};
use crate::definition::{
    noop, NoActions, StateActions, StateDefinition, Transition, TransitionAction,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while loading or binding a topology.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse topology: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to serialize topology: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Topology does not describe a valid definition: {0}")]
    Build(#[from] BuildError),
}

/// One transition edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionTopology<S: State, E: Event> {
    pub event: E,
    pub target: S,
}

/// One state and its outgoing edges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTopology<S: State, E: Event> {
    pub id: S,
    #[serde(default)]
    pub transitions: Vec<TransitionTopology<S, E>>,
}

/// Action-free description of a whole machine.
///
/// # Example
///
/// ```rust
/// use flipstate::config::{NoopBinder, Topology};
///
/// let topology: Topology<String, String> = Topology::from_json(
///     r#"{
///         "initial_state": "off",
///         "states": [
///             { "id": "off", "transitions": [{ "event": "switch", "target": "on" }] },
///             { "id": "on", "transitions": [{ "event": "switch", "target": "off" }] }
///         ]
///     }"#,
/// )
/// .unwrap();
///
/// let definition = topology.bind(&NoopBinder).unwrap();
/// assert!(definition.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Topology<S: State, E: Event> {
    pub initial_state: S,
    pub states: Vec<StateTopology<S, E>>,
}

/// Supplies behaviour for a topology being bound.
///
/// Both methods default to no behaviour, so a binder only overrides what
/// it attaches.
pub trait ActionBinder<S: State, E: Event> {
    /// Entry/exit behaviour of `state`.
    fn state_actions(&self, _state: &S) -> Arc<dyn StateActions> {
        Arc::new(NoActions)
    }

    /// Action of the transition fired by `event` from `from` to `target`.
    fn transition_action(&self, _from: &S, _event: &E, _target: &S) -> Arc<dyn TransitionAction> {
        noop()
    }
}

/// Binder that attaches no behaviour at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBinder;

impl<S: State, E: Event> ActionBinder<S, E> for NoopBinder {}

impl<S: State, E: Event> Topology<S, E> {
    /// Parse a topology from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    /// Render this topology as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Build a definition from this topology, attaching actions from `binder`.
    ///
    /// Duplicate states or events are build errors. Dangling targets are
    /// left to [`StateDefinition::validate`].
    pub fn bind<B>(self, binder: &B) -> Result<StateDefinition<S, E>, ConfigError>
    where
        B: ActionBinder<S, E> + ?Sized,
    {
        let states: Vec<StateBuilder<S, E>> = self
            .states
            .into_iter()
            .map(|state| {
                let actions = binder.state_actions(&state.id);
                let builder = StateBuilder::new(state.id.clone()).shared_actions(actions);
                state.transitions.into_iter().fold(builder, |builder, edge| {
                    let action = binder.transition_action(&state.id, &edge.event, &edge.target);
                    builder.transition(edge.event, Transition::new(edge.target, action))
                })
            })
            .collect();

        Ok(StateDefinitionBuilder::new()
            .initial(self.initial_state)
            .states(states)
            .build()?)
    }
}
