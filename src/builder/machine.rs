//! Builder for constructing state machines.

use crate::builder::definition::{Definition, States};
use crate::builder::document::{DefinitionDocument, StatesDocument};
use crate::builder::error::BuildError;
use crate::core::{EventSpec, Guard, Hook, Source, StateSpec};
use crate::engine::{HookKind, StateMachine};

enum Attachment<P> {
    Enter(String, Hook<P>),
    Exit(String, Hook<P>),
    Guard(String, Guard<P>),
}

impl<P> Attachment<P> {
    fn state(&self) -> &str {
        match self {
            Self::Enter(state, _) | Self::Exit(state, _) | Self::Guard(state, _) => state,
        }
    }

    fn kind(&self) -> HookKind {
        match self {
            Self::Enter(..) => HookKind::Enter,
            Self::Exit(..) => HookKind::Exit,
            Self::Guard(..) => HookKind::Guard,
        }
    }

    fn apply(self, spec: &mut StateSpec<P>) {
        match self {
            Self::Enter(_, hook) => spec.on_enter = Some(hook),
            Self::Exit(_, hook) => spec.on_exit = Some(hook),
            Self::Guard(_, guard) => spec.guard = Some(guard),
        }
    }
}

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use statewise::builder::StateMachineBuilder;
/// use statewise::core::Hook;
///
/// let mut machine = StateMachineBuilder::<()>::new()
///     .states(["idle", "brewing", "done"])
///     .event("start", "idle", "brewing")
///     .event("finish", "brewing", "done")
///     .on_enter("brewing", Hook::new(|_, _| println!("brewing")))
///     .build()
///     .unwrap();
///
/// machine.trigger("start", &()).unwrap();
/// assert_eq!(machine.current_state(), Some("brewing"));
/// ```
pub struct StateMachineBuilder<P = ()> {
    list: Option<Vec<String>>,
    specs: Vec<(String, StateSpec<P>)>,
    events: Vec<(String, EventSpec)>,
    attachments: Vec<Attachment<P>>,
    on_state_change: Option<Hook<P>>,
}

impl<P> StateMachineBuilder<P> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            list: None,
            specs: Vec::new(),
            events: Vec::new(),
            attachments: Vec::new(),
            on_state_change: None,
        }
    }

    /// Start from a JSON definition document.
    ///
    /// The document supplies states, initial active flags and events;
    /// callbacks are attached with the other builder methods.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let document: DefinitionDocument = serde_json::from_str(json)?;
        let mut builder = Self::new();

        match document.states {
            StatesDocument::List(names) => builder.list = Some(names),
            StatesDocument::Map(states) => {
                builder.specs = states
                    .0
                    .into_iter()
                    .map(|(name, state)| {
                        let spec = if state.active {
                            StateSpec::new().active()
                        } else {
                            StateSpec::new()
                        };
                        (name, spec)
                    })
                    .collect();
            }
        }
        builder.events = document.events.0;

        Ok(builder)
    }

    /// Declare states as an ordered list; the first one starts active.
    pub fn states<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Declare a single state with its full spec.
    pub fn state(mut self, name: impl Into<String>, spec: StateSpec<P>) -> Self {
        self.specs.push((name.into(), spec));
        self
    }

    /// Declare an event.
    pub fn event(
        mut self,
        name: impl Into<String>,
        from: impl Into<Source>,
        to: impl Into<String>,
    ) -> Self {
        self.events.push((name.into(), EventSpec::new(from, to)));
        self
    }

    /// Attach an enter hook to a declared state.
    pub fn on_enter(mut self, state: impl Into<String>, hook: Hook<P>) -> Self {
        self.attachments.push(Attachment::Enter(state.into(), hook));
        self
    }

    /// Attach an exit hook to a declared state.
    pub fn on_exit(mut self, state: impl Into<String>, hook: Hook<P>) -> Self {
        self.attachments.push(Attachment::Exit(state.into(), hook));
        self
    }

    /// Attach a guard to a declared state.
    pub fn guard(mut self, state: impl Into<String>, guard: Guard<P>) -> Self {
        self.attachments.push(Attachment::Guard(state.into(), guard));
        self
    }

    /// Set the global hook run after every exit/enter pair.
    pub fn on_state_change(mut self, hook: Hook<P>) -> Self {
        self.on_state_change = Some(hook);
        self
    }

    /// Build the definition without constructing a machine.
    pub fn build_definition(self) -> Result<Definition<P>, BuildError> {
        let mut specs = match self.list {
            Some(_) if !self.specs.is_empty() => return Err(BuildError::MixedStateForms),
            Some(names) if self.attachments.is_empty() => {
                return Ok(Definition {
                    states: States::List(names),
                    events: self.events,
                    on_state_change: self.on_state_change,
                });
            }
            Some(names) => States::List(names).into_specs(),
            None => self.specs,
        };

        for attachment in self.attachments {
            // A later spec for the same name replaces the earlier one.
            let Some((_, spec)) = specs
                .iter_mut()
                .rev()
                .find(|(name, _)| name == attachment.state())
            else {
                return Err(BuildError::HookForUndefinedState {
                    state: attachment.state().to_string(),
                    kind: attachment.kind(),
                });
            };
            attachment.apply(spec);
        }

        Ok(Definition {
            states: States::Map(specs),
            events: self.events,
            on_state_change: self.on_state_change,
        })
    }

    /// Build the state machine.
    pub fn build(self) -> Result<StateMachine<P>, BuildError> {
        self.build_definition().map(StateMachine::new)
    }
}

impl<P> Default for StateMachineBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_without_hooks_stays_a_list() {
        let definition = StateMachineBuilder::<()>::new()
            .states(["idle", "brewing"])
            .build_definition()
            .unwrap();

        assert!(matches!(definition.states, States::List(ref names) if names.len() == 2));
    }

    #[test]
    fn hooks_on_list_states_convert_to_map() {
        let definition = StateMachineBuilder::<()>::new()
            .states(["idle", "brewing"])
            .on_enter("brewing", Hook::new(|_, _| {}))
            .build_definition()
            .unwrap();

        let States::Map(specs) = definition.states else {
            panic!("Expected map form");
        };
        assert!(specs[0].1.is_active());
        assert!(specs[1].1.on_enter.is_some());
    }

    #[test]
    fn mixing_state_forms_is_rejected() {
        let result = StateMachineBuilder::<()>::new()
            .states(["idle"])
            .state("brewing", StateSpec::new())
            .build_definition();

        assert!(matches!(result, Err(BuildError::MixedStateForms)));
    }

    #[test]
    fn hook_for_undefined_state_is_rejected() {
        let result = StateMachineBuilder::<()>::new()
            .states(["idle"])
            .guard("brewing", Guard::new(|_, _| true))
            .build_definition();

        match result {
            Err(BuildError::HookForUndefinedState { state, kind }) => {
                assert_eq!(state, "brewing");
                assert_eq!(kind, HookKind::Guard);
            }
            _ => panic!("Expected HookForUndefinedState"),
        }
    }

    #[test]
    fn from_json_builds_machine() {
        let machine = StateMachineBuilder::<()>::from_json(
            r#"{
                "states": {"idle": {}, "brewing": {"active": true}},
                "events": {"stop": {"from": "brewing", "to": "idle"}}
            }"#,
        )
        .unwrap()
        .build()
        .unwrap();

        assert_eq!(machine.current_state(), Some("brewing"));
        assert_eq!(machine.available_events(), vec!["stop"]);
    }

    #[test]
    fn from_json_accepts_attached_hooks() {
        let machine = StateMachineBuilder::<()>::from_json(r#"{"states": ["idle", "brewing"]}"#)
            .unwrap()
            .on_exit("idle", Hook::new(|_, _| {}))
            .build()
            .unwrap();

        assert!(machine.state("idle").unwrap().has_exit_hook());
    }

    #[test]
    fn from_json_reports_invalid_documents() {
        let result = StateMachineBuilder::<()>::from_json("{not json");

        assert!(matches!(result, Err(BuildError::InvalidDocument(_))));
    }

    #[test]
    fn empty_builder_builds_empty_machine() {
        let machine = StateMachineBuilder::<()>::new().build().unwrap();

        assert!(machine.available_states().is_empty());
        assert_eq!(machine.current_state(), None);
    }
}
