//! Build errors for state definition builders.

use thiserror::Error;

/// Errors that can occur when building state definitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("State '{state}' is declared more than once")]
    DuplicateState { state: String },

    #[error("State '{state}' declares more than one transition for event '{event}'")]
    DuplicateTransition { state: String, event: String },
}
