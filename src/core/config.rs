//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for each state, the table
//! of events it responds to. Nothing here is validated up front: whether a
//! state or event exists is only checked when a transition is attempted.

use crate::error::{FsmError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Transition table for a single state.
///
/// Maps event identifiers to destination state identifiers.
///
/// # Example
///
/// ```rust
/// use rewind::core::StateSpec;
///
/// let spec = StateSpec::new().on("go", "Running").on("halt", "Stopped");
///
/// assert_eq!(spec.target("go"), Some("Running"));
/// assert!(spec.handles("halt"));
/// assert!(!spec.handles("jump"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSpec {
    #[serde(default)]
    pub transitions: IndexMap<String, String>,
}

impl StateSpec {
    /// Create a state with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition rule, returning the updated spec.
    ///
    /// A later rule for the same event replaces the earlier one.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Destination for `event`, if this state has a rule for it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Full machine configuration.
///
/// States are kept in declaration order, which is the order reported by
/// [`Fsm::states`](crate::Fsm::states).
///
/// # Example
///
/// ```rust
/// use rewind::core::Configuration;
///
/// let config = Configuration::from_json(
///     r#"{
///         "initial": "A",
///         "states": {
///             "A": { "transitions": { "go": "B" } },
///             "B": { "transitions": { "back": "A" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial, "A");
/// assert!(config.contains_state("B"));
/// assert_eq!(config.state("A").and_then(|s| s.target("go")), Some("B"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub initial: String,
    #[serde(default)]
    pub states: IndexMap<String, StateSpec>,
}

impl Configuration {
    /// Create a configuration with no states.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: IndexMap::new(),
        }
    }

    /// Parse a configuration from JSON.
    ///
    /// A JSON `null` is treated as a missing configuration and yields
    /// [`FsmError::InvalidConfig`]. Malformed input yields [`FsmError::Parse`].
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: Option<Self> = serde_json::from_str(json)?;
        parsed.ok_or(FsmError::InvalidConfig)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up a state's transition table.
    pub fn state(&self, name: &str) -> Option<&StateSpec> {
        self.states.get(name)
    }

    pub fn contains_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// All configured state identifiers, in declaration order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }
}
