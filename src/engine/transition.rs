//! Transition descriptors, outcomes and errors.

use crate::core::HookError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Description of a single transition attempt, passed to every guard and
/// hook involved in it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDescriptor {
    /// Resolved concrete source state
    pub from: String,
    /// Destination state
    pub to: String,
    /// Triggering event, `None` for direct `change_state` calls
    pub event: Option<String>,
}

/// Result of a well-formed transition attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The destination is now the active state
    Committed,

    /// The destination's guard refused the transition; nothing changed
    Rejected,
}

impl TransitionOutcome {
    pub fn is_committed(self) -> bool {
        matches!(self, Self::Committed)
    }

    pub fn is_rejected(self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// Which callback raised an error during a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookKind {
    Guard,
    Exit,
    Enter,
    StateChange,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Guard => "guard",
            Self::Exit => "on_exit",
            Self::Enter => "on_enter",
            Self::StateChange => "on_state_change",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during transitions.
///
/// All variants except `Hook` are raised before any callback runs. In every
/// case the active state is left as it was before the attempt.
#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    #[error("Cannot change to state '{to}'; it is undefined")]
    UndefinedDestinationState { to: String, event: Option<String> },

    #[error("Cannot change from state '{from}'; it is undefined")]
    UndefinedSourceState { from: String, event: Option<String> },

    #[error("Cannot change from state '{from}'; it is not the active state")]
    InactiveSourceState {
        from: String,
        active: Option<String>,
        event: Option<String>,
    },

    #[error("Cannot change from states {}; none are the active state", .candidates.join(" or "))]
    NoMatchingCandidateSource {
        candidates: Vec<String>,
        active: Option<String>,
        event: Option<String>,
    },

    #[error("Event '{event}' is undefined")]
    UnknownEvent { event: String },

    #[error("{kind} hook of state '{}' failed: {source}", .state.as_deref().unwrap_or("<machine>"))]
    Hook {
        kind: HookKind,
        state: Option<String>,
        #[source]
        source: HookError,
    },
}

impl TransitionError {
    /// Event name attached to the failed attempt, if any.
    pub fn event(&self) -> Option<&str> {
        match self {
            Self::UndefinedDestinationState { event, .. }
            | Self::UndefinedSourceState { event, .. }
            | Self::InactiveSourceState { event, .. }
            | Self::NoMatchingCandidateSource { event, .. } => event.as_deref(),
            Self::UnknownEvent { event } => Some(event.as_str()),
            Self::Hook { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_predicates() {
        assert!(TransitionOutcome::Committed.is_committed());
        assert!(!TransitionOutcome::Committed.is_rejected());
        assert!(TransitionOutcome::Rejected.is_rejected());
    }

    #[test]
    fn candidate_error_lists_candidates() {
        let err = TransitionError::NoMatchingCandidateSource {
            candidates: vec!["idle".to_string(), "done".to_string()],
            active: Some("brewing".to_string()),
            event: None,
        };

        assert_eq!(
            err.to_string(),
            "Cannot change from states idle or done; none are the active state"
        );
    }

    #[test]
    fn hook_error_names_kind_and_state() {
        let err = TransitionError::Hook {
            kind: HookKind::Enter,
            state: Some("brewing".to_string()),
            source: "boiler cold".into(),
        };

        assert_eq!(
            err.to_string(),
            "on_enter hook of state 'brewing' failed: boiler cold"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn event_accessor_reports_triggering_event() {
        let err = TransitionError::UndefinedDestinationState {
            to: "nowhere".to_string(),
            event: Some("wander".to_string()),
        };
        assert_eq!(err.event(), Some("wander"));

        let direct = TransitionError::UndefinedSourceState {
            from: "nowhere".to_string(),
            event: None,
        };
        assert_eq!(direct.event(), None);
    }
}
