//! Core identifier types and transition history.
//!
//! This module contains the pure building blocks shared by the rest of
//! the crate:
//! - State and event identifiers via the `State` and `Event` traits
//! - Immutable history of committed transitions
//!
//! Nothing in this module performs side effects.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::{Event, State};
