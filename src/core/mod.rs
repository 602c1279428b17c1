//! Core data types for the state machine.
//!
//! This module contains the plain data the engine works over:
//! - Declarative configuration (`Configuration`, `StateSpec`)
//! - Undo/redo history (`UndoHistory`)
//!
//! None of these types perform transitions themselves; see
//! [`Fsm`](crate::Fsm) for that.

mod config;
mod history;

pub use config::{Configuration, StateSpec};
pub use history::UndoHistory;
