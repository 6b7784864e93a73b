//! Builder for a single state and its transitions.

use crate::core::{Event, State};
use crate::definition::{ActionResult, NoActions, StateActions, StateEntry, StateHooks, Transition};
use std::sync::Arc;

/// Builder for one state with a fluent API.
pub struct StateBuilder<S: State, E: Event> {
    pub(crate) id: S,
    hooks: StateHooks,
    custom: Option<Arc<dyn StateActions>>,
    pub(crate) transitions: Vec<(E, Transition<S>)>,
}

impl<S: State, E: Event> StateBuilder<S, E> {
    /// Start describing the state `id`.
    pub fn new(id: S) -> Self {
        Self {
            id,
            hooks: StateHooks::new(),
            custom: None,
            transitions: Vec::new(),
        }
    }

    /// Run `hook` whenever the machine enters this state.
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: Fn() -> ActionResult + Send + Sync + 'static,
    {
        self.hooks = self.hooks.with_enter(hook);
        self
    }

    /// Run `hook` whenever the machine leaves this state.
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: Fn() -> ActionResult + Send + Sync + 'static,
    {
        self.hooks = self.hooks.with_exit(hook);
        self
    }

    /// Use a custom [`StateActions`] implementation.
    /// Takes precedence over `on_enter`/`on_exit`.
    pub fn actions<A>(mut self, actions: A) -> Self
    where
        A: StateActions + 'static,
    {
        self.custom = Some(Arc::new(actions));
        self
    }

    pub(crate) fn shared_actions(mut self, actions: Arc<dyn StateActions>) -> Self {
        self.custom = Some(actions);
        self
    }

    /// On `event`, run `action` and move to `target`.
    pub fn on<F>(self, event: E, target: S, action: F) -> Self
    where
        F: Fn() -> ActionResult + Send + Sync + 'static,
    {
        self.transition(event, Transition::new(target, Arc::new(action)))
    }

    /// On `event`, move to `target` without a transition action.
    pub fn goto(self, event: E, target: S) -> Self {
        self.transition(event, Transition::to(target))
    }

    /// Add a pre-built transition.
    pub fn transition(mut self, event: E, transition: Transition<S>) -> Self {
        self.transitions.push((event, transition));
        self
    }

    pub(crate) fn into_actions(self) -> Arc<dyn StateActions> {
        match self.custom {
            Some(actions) => actions,
            None if self.hooks.is_empty() => Arc::new(NoActions),
            None => Arc::new(self.hooks),
        }
    }

    /// Split into the id, its entry skeleton and the pending transitions.
    pub(crate) fn into_parts(mut self) -> (S, StateEntry<S, E>, Vec<(E, Transition<S>)>) {
        let transitions = std::mem::take(&mut self.transitions);
        let id = self.id.clone();
        let entry = StateEntry::new(self.into_actions());
        (id, entry, transitions)
    }
}
