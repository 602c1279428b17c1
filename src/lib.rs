//! Rewind: a configuration-driven finite state machine with undo/redo
//!
//! A machine is described by a plain [`Configuration`]: an initial state and,
//! for each state, a table mapping events to destination states. The
//! [`Fsm`] engine tracks the current state, applies direct or event-driven
//! transitions, and keeps a linear undo/redo history of visited states.
//!
//! # Core Concepts
//!
//! - **Configuration**: Declarative states and transition tables, checked lazily
//! - **Transitions**: Direct (`change_state`) or event-driven (`trigger`)
//! - **History**: Two stacks backing `undo` and `redo`; new forward motion clears redo
//!
//! # Example
//!
//! ```rust
//! use rewind::builder::ConfigurationBuilder;
//! use rewind::FsmError;
//!
//! let mut fsm = ConfigurationBuilder::new()
//!     .initial("A")
//!     .transition("A", "go", "B")
//!     .transition("B", "back", "A")
//!     .build_machine()
//!     .unwrap();
//!
//! fsm.trigger("go").unwrap();
//! assert_eq!(fsm.state(), "B");
//!
//! assert!(matches!(fsm.trigger("go"), Err(FsmError::UnknownEvent { .. })));
//! assert_eq!(fsm.state(), "B");
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "A");
//! assert_eq!(fsm.states(Some("go")), vec!["A"]);
//! ```

pub mod builder;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{Configuration, StateSpec, UndoHistory};
pub use error::{FsmError, Result};
pub use machine::Fsm;
