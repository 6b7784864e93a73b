//! The transition step: a stateless function of definition, state and event.

use crate::core::{Event, State};
use crate::definition::{ActionError, StateDefinition};
use crate::executor::error::{ActionPhase, TransitionError};
use tracing::{debug, trace, warn};

/// Process `event` in state `current` against `definition`.
///
/// Resolves the transition registered for `event`, then runs, in this
/// order, the transition's action, the exit action of `current` and the
/// entry action of the target. Returns the target state; nothing is
/// committed anywhere; callers that track a current state update it from
/// the returned value.
///
/// `Ok(None)` means `current` does not react to `event`: no action runs.
/// The first failing action aborts the step and later actions do not run.
/// A definition that has not been validated may yield
/// [`TransitionError::UndefinedState`] when `current` or the target is
/// missing; in that case no action has run.
pub fn step<S: State, E: Event>(
    definition: &StateDefinition<S, E>,
    current: &S,
    event: &E,
) -> Result<Option<S>, TransitionError> {
    let Some((from, transition)) = definition.resolve(current, event)? else {
        debug!(
            state = current.name(),
            event = event.name(),
            "event ignored: no transition registered"
        );
        return Ok(None);
    };

    let target = transition.target();
    let to = definition
        .state(target)
        .ok_or_else(|| TransitionError::UndefinedState {
            state: target.name().to_string(),
        })?;

    let fail = |phase: ActionPhase, state: &S| {
        let state = state.name().to_string();
        let event = event.name().to_string();
        move |source: ActionError| {
            warn!(%phase, state = %state, event = %event, error = %source, "action failed");
            TransitionError::ActionFailed {
                phase,
                state,
                event,
                source,
            }
        }
    };

    let running = |phase: ActionPhase, state: &S| {
        trace!(%phase, state = state.name(), event = event.name(), "running action");
    };

    running(ActionPhase::Transition, current);
    transition
        .action()
        .run()
        .map_err(fail(ActionPhase::Transition, current))?;

    running(ActionPhase::Exit, current);
    from.actions()
        .on_exit()
        .map_err(fail(ActionPhase::Exit, current))?;

    running(ActionPhase::Enter, target);
    to.actions()
        .on_enter()
        .map_err(fail(ActionPhase::Enter, target))?;

    Ok(Some(target.clone()))
}
