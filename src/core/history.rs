//! Transition history tracking.
//!
//! Records committed transitions of a machine, in order, optionally
//! keeping only the most recent ones.

use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use flipstate::core::StateTransition;
///
/// let transition = StateTransition {
///     from: "off".to_string(),
///     to: "on".to_string(),
///     event: "switch".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, "on");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, E: Event> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The event that triggered the transition
    pub event: E,
    /// When the new state was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of committed transitions.
///
/// A history may be bounded: once it holds `capacity` transitions, each
/// new one evicts the oldest. [`StateHistory::new`] is unbounded.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use flipstate::core::{StateHistory, StateTransition};
///
/// let history: StateHistory<String, String> = StateHistory::new();
///
/// let history = history.record(StateTransition {
///     from: "off".to_string(),
///     to: "on".to_string(),
///     event: "switch".to_string(),
///     timestamp: Utc::now(),
/// });
/// let history = history.record(StateTransition {
///     from: "on".to_string(),
///     to: "off".to_string(),
///     event: "switch".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // off -> on -> off
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, E: Event> {
    transitions: VecDeque<StateTransition<S, E>>,
    #[serde(default)]
    capacity: Option<usize>,
}

impl<S: State, E: Event> Default for StateHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> StateHistory<S, E> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            capacity: None,
        }
    }

    /// Create an empty history that keeps at most the `capacity` most
    /// recent transitions. A capacity of zero keeps nothing.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Maximum number of retained transitions, if bounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Append a transition in place, evicting the oldest when full.
    pub fn push(&mut self, transition: StateTransition<S, E>) {
        match self.capacity {
            Some(0) => return,
            Some(capacity) if self.transitions.len() >= capacity => {
                self.transitions.pop_front();
            }
            _ => {}
        }
        self.transitions.push_back(transition);
    }

    /// Record a transition, returning the extended history.
    pub fn record(mut self, transition: StateTransition<S, E>) -> Self {
        self.push(transition);
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the
    /// first retained transition, then the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Events that fired, in order.
    pub fn events(&self) -> Vec<&E> {
        self.transitions.iter().map(|t| &t.event).collect()
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S, E>> {
        self.transitions.back()
    }

    /// Iterate over the retained transitions, oldest first.
    pub fn transitions(&self) -> impl DoubleEndedIterator<Item = &StateTransition<S, E>> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Door {
        Closed,
        Open,
        Locked,
    }

    impl State for Door {
        fn name(&self) -> &str {
            match self {
                Self::Closed => "Closed",
                Self::Open => "Open",
                Self::Locked => "Locked",
            }
        }
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum DoorEvent {
        Push,
        Pull,
        Lock,
    }

    impl Event for DoorEvent {
        fn name(&self) -> &str {
            match self {
                Self::Push => "Push",
                Self::Pull => "Pull",
                Self::Lock => "Lock",
            }
        }
    }

    fn record(from: Door, to: Door, event: DoorEvent) -> StateTransition<Door, DoorEvent> {
        StateTransition {
            from,
            to,
            event,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Door, DoorEvent> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_leaves_clones_untouched() {
        let history = StateHistory::new();
        let new_history = history.clone().record(record(Door::Closed, Door::Open, DoorEvent::Pull));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn bounded_history_evicts_oldest() {
        let mut history = StateHistory::bounded(2);
        history.push(record(Door::Closed, Door::Open, DoorEvent::Pull));
        history.push(record(Door::Open, Door::Closed, DoorEvent::Push));
        history.push(record(Door::Closed, Door::Locked, DoorEvent::Lock));

        assert_eq!(history.len(), 2);
        assert_eq!(history.capacity(), Some(2));
        assert_eq!(history.get_path(), vec![&Door::Open, &Door::Closed, &Door::Locked]);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut history = StateHistory::bounded(0);
        for _ in 0..100 {
            history.push(record(Door::Closed, Door::Open, DoorEvent::Pull));
        }

        assert!(history.is_empty());
        assert!(history.last().is_none());
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(record(Door::Open, Door::Closed, DoorEvent::Push))
            .record(record(Door::Closed, Door::Locked, DoorEvent::Lock));

        let path = history.get_path();
        assert_eq!(path, vec![&Door::Open, &Door::Closed, &Door::Locked]);
        assert_eq!(history.events(), vec![&DoorEvent::Push, &DoorEvent::Lock]);
        assert_eq!(history.last().map(|t| &t.to), Some(&Door::Locked));
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history = StateHistory::new().record(record(Door::Closed, Door::Open, DoorEvent::Pull));

        std::thread::sleep(std::time::Duration::from_millis(10));

        let history = history.record(record(Door::Open, Door::Closed, DoorEvent::Push));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(record(Door::Closed, Door::Open, DoorEvent::Pull));

        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(record(Door::Closed, Door::Open, DoorEvent::Pull));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<Door, DoorEvent> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.last().map(|t| &t.event), Some(&DoorEvent::Pull));
    }
}
