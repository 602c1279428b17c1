//! Undo/redo bookkeeping for visited states.
//!
//! History is kept as two stacks. `past` holds states that were left by a
//! forward transition (oldest first), `undone` holds states that were
//! stepped back from and can be redone (most recent last).

use serde::{Deserialize, Serialize};

/// Pair of stacks backing undo and redo.
///
/// Any forward transition invalidates pending redo entries, while undo and
/// redo move states between the two stacks without losing any.
///
/// # Example
///
/// ```rust
/// use rewind::core::UndoHistory;
///
/// let mut history = UndoHistory::new();
/// history.record("A".to_string());
///
/// // Currently in "B"; step back to "A".
/// let previous = history.step_back("B".to_string());
/// assert_eq!(previous.as_deref(), Some("A"));
/// assert!(history.can_redo());
///
/// // Now in "A"; step forward to "B" again.
/// let next = history.step_forward("A".to_string());
/// assert_eq!(next.as_deref(), Some("B"));
/// assert!(!history.can_redo());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoHistory {
    past: Vec<String>,
    undone: Vec<String>,
}

impl UndoHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state being left by a forward transition.
    ///
    /// Clears the redo stack.
    pub fn record(&mut self, previous: String) {
        self.past.push(previous);
        self.undone.clear();
    }

    /// Move one step back.
    ///
    /// On success `current` is parked on the redo stack and the state to
    /// return to is handed back. Returns `None` without touching either
    /// stack when there is nothing to undo.
    pub fn step_back(&mut self, current: String) -> Option<String> {
        let previous = self.past.pop()?;
        self.undone.push(current);
        Some(previous)
    }

    /// Move one step forward, the mirror of [`step_back`](Self::step_back).
    pub fn step_forward(&mut self, current: String) -> Option<String> {
        let next = self.undone.pop()?;
        self.past.push(current);
        Some(next)
    }

    /// Forget past states. Redo entries are kept.
    pub fn clear_past(&mut self) {
        self.past.clear();
    }

    /// Previously visited states, oldest first.
    pub fn past(&self) -> &[String] {
        &self.past
    }

    /// States available for redo; the next redo target is last.
    pub fn undone(&self) -> &[String] {
        &self.undone
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
}
