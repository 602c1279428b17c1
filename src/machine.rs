//! Configuration-driven state machine with undo/redo.

use crate::core::{Configuration, UndoHistory};
use crate::error::{FsmError, Result};
use tracing::debug;

/// Finite state machine driven by a [`Configuration`].
///
/// The machine tracks the current state, moves between states either
/// directly ([`change_state`](Self::change_state)) or through events
/// ([`trigger`](Self::trigger)), and keeps a linear undo/redo history.
///
/// The configuration is fixed for the lifetime of the machine and is not
/// validated on construction. A machine may start in a state that is not
/// configured; events fired from such a state are rejected.
///
/// The machine does no internal locking. Share it across threads only
/// behind the caller's own synchronization.
///
/// # Example
///
/// ```rust
/// use rewind::Fsm;
/// use rewind::core::{Configuration, StateSpec};
///
/// let mut config = Configuration::new("Idle");
/// config.states.insert("Idle".into(), StateSpec::new().on("start", "Busy"));
/// config.states.insert("Busy".into(), StateSpec::new().on("finish", "Idle"));
///
/// let mut fsm = Fsm::new(config);
/// fsm.trigger("start").unwrap();
/// assert_eq!(fsm.state(), "Busy");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "Idle");
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "Busy");
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    config: Configuration,
    current: String,
    history: UndoHistory,
}

impl Fsm {
    /// Create a machine in the configured initial state with empty history.
    pub fn new(config: Configuration) -> Self {
        debug!(initial = %config.initial, states = config.states.len(), "Creating state machine");
        Self {
            current: config.initial.clone(),
            config,
            history: UndoHistory::new(),
        }
    }

    /// Create a machine from an optional configuration.
    ///
    /// Fails with [`FsmError::InvalidConfig`] when no configuration is given.
    pub fn from_config(config: Option<Configuration>) -> Result<Self> {
        config.map(Self::new).ok_or(FsmError::InvalidConfig)
    }

    /// Create a machine from a JSON configuration.
    ///
    /// A JSON `null` fails with [`FsmError::InvalidConfig`].
    pub fn from_json(json: &str) -> Result<Self> {
        Configuration::from_json(json).map(Self::new)
    }

    /// Current state identifier.
    pub fn state(&self) -> &str {
        &self.current
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Move directly to `target`.
    ///
    /// The state being left is pushed onto the history and any pending redo
    /// entries are discarded. Fails with [`FsmError::UnknownState`] if
    /// `target` is not configured, leaving the machine untouched.
    pub fn change_state(&mut self, target: &str) -> Result<()> {
        if !self.config.contains_state(target) {
            debug!(from = %self.current, to = target, "Rejected transition to unknown state");
            return Err(FsmError::UnknownState {
                state: target.to_string(),
            });
        }

        debug!(from = %self.current, to = target, "Changing state");
        let previous = std::mem::replace(&mut self.current, target.to_string());
        self.history.record(previous);
        Ok(())
    }

    /// Fire `event` from the current state.
    ///
    /// Resolves the destination from the current state's transition table
    /// and delegates to [`change_state`](Self::change_state).
    ///
    /// # Errors
    ///
    /// - [`FsmError::UnknownState`] if the current state is not configured,
    ///   or the rule points at a state that is not configured.
    /// - [`FsmError::UnknownEvent`] if the current state has no rule for
    ///   `event`.
    pub fn trigger(&mut self, event: &str) -> Result<()> {
        let spec = self
            .config
            .state(&self.current)
            .ok_or_else(|| FsmError::UnknownState {
                state: self.current.clone(),
            })?;

        let target = spec
            .target(event)
            .ok_or_else(|| FsmError::UnknownEvent {
                state: self.current.clone(),
                event: event.to_string(),
            })?
            .to_string();

        debug!(state = %self.current, event, to = %target, "Event triggered");
        self.change_state(&target)
    }

    /// Return to the initial state.
    ///
    /// This bypasses history entirely: neither the undo nor the redo stack
    /// is touched, and the initial state is not checked against the
    /// configuration.
    pub fn reset(&mut self) {
        debug!(from = %self.current, to = %self.config.initial, "Resetting state machine");
        self.current.clone_from(&self.config.initial);
    }

    /// Configured states, in declaration order.
    ///
    /// With `Some(event)`, only states that have a transition rule for that
    /// event are returned. An event no state handles yields an empty list.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            None => self.config.state_names().collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, spec)| spec.handles(event))
                .map(|(name, _)| name.as_str())
                .collect(),
        }
    }

    /// Step back to the previous state.
    ///
    /// Returns `false` without changing anything when there is no history.
    pub fn undo(&mut self) -> bool {
        let current = self.current.clone();
        match self.history.step_back(current) {
            Some(previous) => {
                debug!(from = %self.current, to = %previous, "Undo");
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone state.
    ///
    /// Returns `false` without changing anything when nothing was undone
    /// since the last forward transition.
    pub fn redo(&mut self) -> bool {
        let current = self.current.clone();
        match self.history.step_forward(current) {
            Some(next) => {
                debug!(from = %self.current, to = %next, "Redo");
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// Forget all past states. Redo entries and the current state are kept.
    pub fn clear_history(&mut self) {
        debug!(entries = self.history.past().len(), "Clearing history");
        self.history.clear_past();
    }

    /// Previously visited states, oldest first.
    pub fn history(&self) -> &[String] {
        self.history.past()
    }

    /// States available for redo; the next redo target is last.
    pub fn redo_stack(&self) -> &[String] {
        self.history.undone()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
