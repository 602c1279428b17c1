//! Error types for state machine construction and transitions.

use thiserror::Error;

/// Errors returned by the state machine and its configuration layer.
///
/// Every variant signals a caller mistake rather than a transient fault,
/// so none of them are worth retrying.
#[derive(Debug, Error)]
pub enum FsmError {
    /// No configuration was supplied at construction time.
    #[error("Configuration is missing. Supply a configuration with an initial state")]
    InvalidConfig,

    /// A direct transition named a state that is not configured.
    #[error("Unknown state '{state}'")]
    UnknownState { state: String },

    /// An event has no transition rule from the current state.
    #[error("Unknown event '{event}' in state '{state}'")]
    UnknownEvent { state: String, event: String },

    /// Configuration JSON could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, FsmError>;
