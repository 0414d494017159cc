//! State transition history tracking.
//!
//! Provides immutable tracking of committed transitions over time,
//! following functional programming principles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use statewise::core::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: "idle".to_string(),
///     to: "brewing".to_string(),
///     event: Some("start".to_string()),
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being transitioned from
    pub from: String,
    /// The state being transitioned to
    pub to: String,
    /// The event that triggered the transition, `None` for direct calls
    pub event: Option<String>,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of committed transitions.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added.
///
/// # Example
///
/// ```rust
/// use statewise::core::{StateHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(TransitionRecord {
///         from: "idle".to_string(),
///         to: "brewing".to_string(),
///         event: Some("start".to_string()),
///         timestamp: Utc::now(),
///     })
///     .record(TransitionRecord {
///         from: "brewing".to_string(),
///         to: "done".to_string(),
///         event: Some("finish".to_string()),
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.get_path(), vec!["idle", "brewing", "done"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<TransitionRecord>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This does not mutate the existing history.
    pub fn record(&self, transition: TransitionRecord) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the source of the first transition, then the destination
    /// of each transition in order.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from.as_str());
        }
        for transition in &self.transitions {
            path.push(transition.to.as_str());
        }
        path
    }

    /// Time elapsed between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All transitions in commit order.
    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
