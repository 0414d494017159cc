//! Build errors for state machine definitions.

use crate::engine::HookKind;
use thiserror::Error;

/// Errors that can occur when building a definition or state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("States given both as a list and as a mapping. Use .states(..) or .state(..), not both")]
    MixedStateForms,

    #[error("Cannot attach {kind} to state '{state}'; it is undefined")]
    HookForUndefinedState { state: String, kind: HookKind },

    #[error("Invalid definition document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}
