//! Structural validation of state definitions using Validation.
//!
//! Every dangling reference is reported in one pass instead of failing on
//! the first one found.

use super::StateDefinition;
use crate::core::{Event, State};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single structural problem in a definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionViolation {
    #[error("initial state '{state}' is not declared")]
    UndeclaredInitialState { state: String },

    #[error("transition on '{event}' from '{from}' targets undeclared state '{target}'")]
    UndeclaredTarget {
        from: String,
        event: String,
        target: String,
    },
}

/// A definition failed validation.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("invalid state definition: {}", join(.violations))]
pub struct DefinitionError {
    violations: Vec<DefinitionViolation>,
}

impl DefinitionError {
    pub fn violations(&self) -> &[DefinitionViolation] {
        &self.violations
    }
}

fn join(violations: &[DefinitionViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

type Check = Validation<(), NonEmptyVec<DefinitionViolation>>;

impl<S: State, E: Event> StateDefinition<S, E> {
    /// Check that the initial state and every transition target are declared.
    ///
    /// Violations are ordered: initial state first, then transitions sorted
    /// by source state and event name.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let mut checks: Vec<Check> = Vec::new();

        checks.push(if self.contains_state(self.initial_state()) {
            Validation::success(())
        } else {
            Validation::fail(DefinitionViolation::UndeclaredInitialState {
                state: self.initial_state().name().to_string(),
            })
        });

        let mut edges: Vec<(&S, &E, &S)> = self
            .states()
            .iter()
            .flat_map(|(from, entry)| {
                entry
                    .transitions()
                    .iter()
                    .map(move |(event, transition)| (from, event, transition.target()))
            })
            .collect();
        edges.sort_by(|a, b| (a.0.name(), a.1.name()).cmp(&(b.0.name(), b.1.name())));

        for (from, event, target) in edges {
            checks.push(if self.contains_state(target) {
                Validation::success(())
            } else {
                Validation::fail(DefinitionViolation::UndeclaredTarget {
                    from: from.name().to_string(),
                    event: event.name().to_string(),
                    target: target.name().to_string(),
                })
            });
        }

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(DefinitionError {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }
}
