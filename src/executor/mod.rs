//! Transition execution.
//!
//! [`step`] is the stateless core: given a definition, a current state and
//! an event it runs the matching transition's actions and returns the
//! target. [`Machine`] wraps it with the one piece of mutable state, the
//! current value, committed only after all actions succeed.
//!
//! Action order is fixed: transition action, exit of the old state, entry
//! of the new state, then commit.

mod error;
mod machine;
mod step;

pub use error::{ActionPhase, TransitionError};
pub use machine::Machine;
pub use step::step;

use crate::core::{Event, State};
use crate::definition::{DefinitionError, StateDefinition};

/// Validate `definition` and start a machine in its initial state.
///
/// Same as [`Machine::new`].
pub fn create_machine<S: State, E: Event>(
    definition: StateDefinition<S, E>,
) -> Result<Machine<S, E>, DefinitionError> {
    Machine::new(definition)
}
