//! Action capabilities attached to states and transitions.
//!
//! Actions are the only side effects a machine performs. The executor
//! guarantees when and in what order they are called and nothing else:
//! an action's body is opaque to it.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Error returned by a failing action.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActionError {
    #[error("{0}")]
    Failed(String),
}

impl ActionError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Result of running a single action.
pub type ActionResult = Result<(), ActionError>;

/// Entry and exit behaviour of one state.
///
/// Both hooks default to doing nothing, so implementors only override
/// the side they care about.
pub trait StateActions: Send + Sync {
    /// Called when the machine moves into this state.
    fn on_enter(&self) -> ActionResult {
        Ok(())
    }

    /// Called when the machine moves out of this state.
    fn on_exit(&self) -> ActionResult {
        Ok(())
    }
}

/// Side effect attached to a single transition.
///
/// Any `Fn() -> ActionResult` closure is a transition action.
///
/// # Example
///
/// ```rust
/// use flipstate::definition::{ActionResult, TransitionAction};
///
/// let beep = || -> ActionResult {
///     println!("beep");
///     Ok(())
/// };
/// assert!(beep.run().is_ok());
/// ```
pub trait TransitionAction: Send + Sync {
    fn run(&self) -> ActionResult;
}

impl<F> TransitionAction for F
where
    F: Fn() -> ActionResult + Send + Sync,
{
    fn run(&self) -> ActionResult {
        self()
    }
}

/// State with no entry or exit behaviour.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoActions;

impl StateActions for NoActions {}

/// Transition action that does nothing.
pub(crate) fn noop() -> Arc<dyn TransitionAction> {
    Arc::new(|| -> ActionResult { Ok(()) })
}

/// Type alias for hook closures stored in [`StateHooks`].
pub type Hook = Box<dyn Fn() -> ActionResult + Send + Sync>;

/// Closure-backed [`StateActions`].
#[derive(Default)]
pub struct StateHooks {
    enter: Option<Hook>,
    exit: Option<Hook>,
}

impl StateHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entry hook.
    pub fn with_enter<F>(mut self, hook: F) -> Self
    where
        F: Fn() -> ActionResult + Send + Sync + 'static,
    {
        self.enter = Some(Box::new(hook));
        self
    }

    /// Set the exit hook.
    pub fn with_exit<F>(mut self, hook: F) -> Self
    where
        F: Fn() -> ActionResult + Send + Sync + 'static,
    {
        self.exit = Some(Box::new(hook));
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.enter.is_none() && self.exit.is_none()
    }
}

impl StateActions for StateHooks {
    fn on_enter(&self) -> ActionResult {
        self.enter.as_ref().map_or(Ok(()), |hook| hook())
    }

    fn on_exit(&self) -> ActionResult {
        self.exit.as_ref().map_or(Ok(()), |hook| hook())
    }
}

impl fmt::Debug for StateHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateHooks")
            .field("enter", &self.enter.is_some())
            .field("exit", &self.exit.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn no_actions_always_succeed() {
        assert!(NoActions.on_enter().is_ok());
        assert!(NoActions.on_exit().is_ok());
    }

    #[test]
    fn hooks_call_the_matching_closure() {
        let enters = Arc::new(AtomicUsize::new(0));
        let exits = Arc::new(AtomicUsize::new(0));

        let hooks = {
            let enters = Arc::clone(&enters);
            let exits = Arc::clone(&exits);
            StateHooks::new()
                .with_enter(move || {
                    enters.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                })
                .with_exit(move || {
                    exits.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                })
        };

        hooks.on_enter().unwrap();
        hooks.on_enter().unwrap();
        hooks.on_exit().unwrap();

        assert_eq!(enters.load(Ordering::SeqCst), 2);
        assert_eq!(exits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn missing_hook_is_a_noop() {
        let hooks = StateHooks::new().with_exit(|| Err(ActionError::failed("exit failed")));

        assert!(hooks.on_enter().is_ok());
        assert_eq!(hooks.on_exit(), Err(ActionError::failed("exit failed")));
        assert!(!hooks.is_empty());
        assert!(StateHooks::new().is_empty());
    }

    #[test]
    fn closures_are_transition_actions() {
        let action: Arc<dyn TransitionAction> =
            Arc::new(|| -> ActionResult { Err(ActionError::failed("nope")) });
        assert_eq!(action.run().unwrap_err().to_string(), "nope");
        assert!(noop().run().is_ok());
    }
}
