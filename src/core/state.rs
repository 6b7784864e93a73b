//! Identifier traits for states and events.
//!
//! A machine is keyed by two kinds of identifiers: the states it can be in
//! and the events it reacts to. Both are plain values that can be hashed,
//! compared and serialized, and both expose a name for diagnostics.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identifiers.
///
/// All methods are pure - no side effects. A state identifier names one
/// entry of a state definition; it carries no behaviour of its own.
///
/// # Required Traits
///
/// - `Clone`: identifiers are copied into history records and results
/// - `Eq` + `Hash`: identifiers key the state map
/// - `Debug`: identifiers must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: identifiers appear in topology documents
///
/// # Example
///
/// ```rust
/// use flipstate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     On,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
/// }
///
/// assert_eq!(Lamp::On.name(), "On");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for event identifiers.
///
/// Events are the stimuli a machine reacts to. Like states they are
/// plain values; the transition they trigger is looked up per state.
pub trait Event:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl Event for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
