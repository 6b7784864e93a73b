//! Transition error types.

use crate::definition::ActionError;
use std::fmt;
use thiserror::Error;

/// Which of the three ordered actions of a transition was running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionPhase {
    /// The transition's own action
    Transition,
    /// The exit action of the state being left
    Exit,
    /// The entry action of the state being entered
    Enter,
}

impl fmt::Display for ActionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            Self::Transition => "transition action",
            Self::Exit => "exit action",
            Self::Enter => "enter action",
        };
        f.write_str(phase)
    }
}

/// Errors that can occur while processing an event.
///
/// An event with no matching transition is not an error; it yields
/// `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("Current state mismatch: machine is in '{expected}' but caller passed '{actual}'")]
    StateMismatch { expected: String, actual: String },

    #[error("State '{state}' is not declared in the definition")]
    UndefinedState { state: String },

    #[error("{phase} failed in state '{state}' on event '{event}': {source}")]
    ActionFailed {
        phase: ActionPhase,
        state: String,
        event: String,
        #[source]
        source: ActionError,
    },
}

impl TransitionError {
    /// Phase of the failing action, for `ActionFailed` errors.
    pub fn phase(&self) -> Option<ActionPhase> {
        match self {
            Self::ActionFailed { phase, .. } => Some(*phase),
            _ => None,
        }
    }
}
