//! Fluent builder for configurations and machines.

use crate::core::{Configuration, StateSpec};
use crate::error::{FsmError, Result};
use crate::machine::Fsm;
use indexmap::IndexMap;

/// Builder for constructing a [`Configuration`] with a fluent API.
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    initial: Option<String>,
    states: IndexMap<String, StateSpec>,
}

impl ConfigurationBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add a state with its transition table.
    /// Adding the same state twice replaces the earlier table but keeps its position.
    pub fn state(mut self, name: impl Into<String>, spec: StateSpec) -> Self {
        self.states.insert(name.into(), spec);
        self
    }

    /// Add a single transition rule, creating the source state if needed.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        let spec = self.states.entry(from.into()).or_default();
        spec.transitions.insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if the initial state was never set.
    pub fn build(self) -> Result<Configuration> {
        let initial = self.initial.ok_or(FsmError::InvalidConfig)?;
        Ok(Configuration {
            initial,
            states: self.states,
        })
    }

    /// Build the configuration and wrap it in a machine.
    pub fn build_machine(self) -> Result<Fsm> {
        self.build().map(Fsm::new)
    }
}
