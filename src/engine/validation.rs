//! Reference checks over a machine's event table.
//!
//! Construction never fails on dangling event references; they surface
//! when the event fires. `validate` reports all of them up front using
//! Stillwater's `Validation`, which accumulates every issue instead of
//! stopping at the first.

use crate::engine::StateMachine;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A dangling state reference in an event definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionIssue {
    #[error("Event '{event}' leads to undefined state '{to}'")]
    UndefinedDestination { event: String, to: String },

    #[error("Event '{event}' starts from undefined state '{from}'")]
    UndefinedSource { event: String, from: String },
}

impl<P> StateMachine<P> {
    /// Check that every event references defined states.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statewise::builder::StateMachineBuilder;
    /// use statewise::engine::StateMachine;
    ///
    /// let machine: StateMachine = StateMachineBuilder::new()
    ///     .states(["idle", "brewing"])
    ///     .event("start", "idle", "brewnig")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(machine.validate().is_failure());
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<DefinitionIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<DefinitionIssue>>> = Vec::new();

        for event in self.event_records() {
            let check = if self.state(event.to()).is_some() {
                Validation::success(())
            } else {
                Validation::fail(DefinitionIssue::UndefinedDestination {
                    event: event.name().to_string(),
                    to: event.to().to_string(),
                })
            };
            checks.push(check);

            for from in event.from().names() {
                let check = if self.state(from).is_some() {
                    Validation::success(())
                } else {
                    Validation::fail(DefinitionIssue::UndefinedSource {
                        event: event.name().to_string(),
                        from: from.clone(),
                    })
                };
                checks.push(check);
            }
        }

        let result = Validation::all_vec(checks).map(|_| ());
        if result.is_failure() {
            tracing::debug!(
                events = self.event_records().len(),
                "definition has dangling state references"
            );
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StateMachineBuilder;

    #[test]
    fn consistent_definition_validates() {
        let machine: StateMachine = StateMachineBuilder::new()
            .states(["idle", "brewing", "done"])
            .event("start", "idle", "brewing")
            .event("refill", ["idle", "done"], "brewing")
            .event("reset", "any", "idle")
            .build()
            .unwrap();

        assert!(machine.validate().is_success());
    }

    #[test]
    fn validation_accumulates_all_issues() {
        let machine: StateMachine = StateMachineBuilder::new()
            .states(["idle", "brewing"])
            .event("start", "idel", "brewing")
            .event("finish", "brewing", "dnoe")
            .event("refill", ["idle", "empty"], "brewing")
            .build()
            .unwrap();

        match machine.validate() {
            Validation::Failure(issues) => {
                assert_eq!(issues.len(), 3);
                assert!(issues.iter().any(|issue| matches!(
                    issue,
                    DefinitionIssue::UndefinedSource { from, .. } if from == "idel"
                )));
                assert!(issues.iter().any(|issue| matches!(
                    issue,
                    DefinitionIssue::UndefinedDestination { to, .. } if to == "dnoe"
                )));
                assert!(issues.iter().any(|issue| matches!(
                    issue,
                    DefinitionIssue::UndefinedSource { from, .. } if from == "empty"
                )));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn dangling_reference_does_not_block_construction() {
        let mut machine: StateMachine = StateMachineBuilder::new()
            .states(["idle", "brewing"])
            .event("start", "idle", "brewing")
            .event("typo", "idle", "brewnig")
            .build()
            .unwrap();

        assert!(machine.validate().is_failure());
        assert!(machine.trigger("start", &()).unwrap().is_committed());
    }

    #[test]
    fn empty_machine_validates() {
        let machine: StateMachine = StateMachine::default();
        assert!(machine.validate().is_success());
    }
}
