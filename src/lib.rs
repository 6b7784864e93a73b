//! Flipstate: a minimal deterministic finite-state machine executor
//!
//! A machine is a declarative [`StateDefinition`](definition::StateDefinition)
//! (states, their entry/exit actions and the event-triggered transitions
//! between them) plus one mutable value: the current state. Events are
//! processed one at a time; each either fires exactly one transition or
//! is ignored.
//!
//! # Core Concepts
//!
//! - **State / Event**: typed identifiers via the `State` and `Event` traits
//! - **Definition**: immutable configuration, validated once up front
//! - **Step**: the pure transition function; actions run in a fixed order
//!   (transition action, exit old, enter new) before the new state commits
//! - **Topology**: the serializable, action-free shape of a definition
//!
//! # Example
//!
//! ```rust
//! use flipstate::builder::{StateBuilder, StateDefinitionBuilder};
//!
//! let off = "off".to_string();
//! let on = "on".to_string();
//! let switch = "switch".to_string();
//!
//! let mut machine = StateDefinitionBuilder::new()
//!     .initial(off.clone())
//!     .state(
//!         StateBuilder::new(off.clone())
//!             .on_exit(|| Ok(()))
//!             .on(switch.clone(), on.clone(), || Ok(())),
//!     )
//!     .state(StateBuilder::new(on.clone()).on(switch.clone(), off.clone(), || Ok(())))
//!     .build_machine()
//!     .unwrap();
//!
//! let state = machine.value().clone();
//! assert_eq!(machine.transition(&state, &switch).unwrap(), Some(on.clone()));
//! assert_eq!(machine.value(), &on);
//!
//! // Unknown events are ignored.
//! assert_eq!(machine.send(&"dim".to_string()).unwrap(), None);
//! assert_eq!(machine.value(), &on);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod definition;
pub mod executor;

// Re-export commonly used types
pub use builder::{BuildError, StateBuilder, StateDefinitionBuilder};
pub use config::{ActionBinder, ConfigError, Topology};
pub use crate::core::{Event, State, StateHistory, StateTransition};
pub use definition::{
    ActionError, ActionResult, DefinitionError, StateActions, StateDefinition, StateEntry,
    Transition, TransitionAction,
};
pub use executor::{create_machine, step, ActionPhase, Machine, TransitionError};

/// Any error this crate can produce.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
