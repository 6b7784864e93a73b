//! Builder API for ergonomic state definition construction.
//!
//! This module provides fluent builders and macros for describing state
//! machines with minimal boilerplate while keeping the definition typed.
//!
//! # Example
//!
//! ```
//! use flipstate::builder::{StateBuilder, StateDefinitionBuilder};
//! use flipstate::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Lamp {
//!         Off,
//!         On,
//!     }
//! }
//!
//! event_enum! {
//!     enum LampEvent {
//!         Switch,
//!     }
//! }
//!
//! let mut machine = StateDefinitionBuilder::new()
//!     .initial(Lamp::Off)
//!     .state(StateBuilder::new(Lamp::Off).goto(LampEvent::Switch, Lamp::On))
//!     .state(StateBuilder::new(Lamp::On).goto(LampEvent::Switch, Lamp::Off))
//!     .build_machine()
//!     .unwrap();
//!
//! assert_eq!(machine.send(&LampEvent::Switch).unwrap(), Some(Lamp::On));
//! ```

pub mod definition;
pub mod error;
pub mod macros;
pub mod state;

pub use definition::StateDefinitionBuilder;
pub use error::BuildError;
pub use state::StateBuilder;

use crate::core::{Event, State};

/// Describe a state whose only behaviour is `transitions`, each
/// firing without an action.
///
/// # Example
///
/// ```
/// use flipstate::builder::plain_state;
///
/// let idle = plain_state::<String, String>(
///     "idle".to_string(),
///     vec![("start".to_string(), "running".to_string())],
/// );
/// ```
pub fn plain_state<S, E>(id: S, transitions: Vec<(E, S)>) -> StateBuilder<S, E>
where
    S: State,
    E: Event,
{
    transitions
        .into_iter()
        .fold(StateBuilder::new(id), |builder, (event, target)| builder.goto(event, target))
}
