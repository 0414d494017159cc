//! Declarative machine definitions.

use crate::core::{EventSpec, Hook, StateSpec};

/// The two accepted shapes of a state declaration.
pub enum States<P = ()> {
    /// Ordered state names; the first one starts active.
    List(Vec<String>),
    /// Ordered mapping from state name to its partial definition.
    Map(Vec<(String, StateSpec<P>)>),
}

impl<P> States<P> {
    /// State list built from names, first one active.
    pub fn list<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(names.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Self::List(names) => names.len(),
            Self::Map(specs) => specs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve either shape into ordered specs. A list marks only its first
    /// element active.
    pub(crate) fn into_specs(self) -> Vec<(String, StateSpec<P>)> {
        match self {
            Self::List(names) => names
                .into_iter()
                .enumerate()
                .map(|(position, name)| {
                    let spec = if position == 0 {
                        StateSpec::new().active()
                    } else {
                        StateSpec::new()
                    };
                    (name, spec)
                })
                .collect(),
            Self::Map(specs) => specs,
        }
    }
}

impl<P> Default for States<P> {
    fn default() -> Self {
        Self::Map(Vec::new())
    }
}

/// Complete input to [`StateMachine::new`](crate::engine::StateMachine::new).
///
/// # Example
///
/// ```rust
/// use statewise::builder::{Definition, States};
/// use statewise::core::EventSpec;
/// use statewise::engine::StateMachine;
///
/// let definition: Definition = Definition::new(States::list(["idle", "brewing"]))
///     .event("start", EventSpec::new("idle", "brewing"));
///
/// let machine = StateMachine::new(definition);
/// assert_eq!(machine.current_state(), Some("idle"));
/// ```
pub struct Definition<P = ()> {
    pub states: States<P>,
    pub events: Vec<(String, EventSpec)>,
    pub on_state_change: Option<Hook<P>>,
}

impl<P> Definition<P> {
    pub fn new(states: States<P>) -> Self {
        Self {
            states,
            events: Vec::new(),
            on_state_change: None,
        }
    }

    /// Add a named event.
    pub fn event(mut self, name: impl Into<String>, spec: EventSpec) -> Self {
        self.events.push((name.into(), spec));
        self
    }

    /// Set the global hook run after every exit/enter pair.
    pub fn on_state_change(mut self, hook: Hook<P>) -> Self {
        self.on_state_change = Some(hook);
        self
    }
}

impl<P> Default for Definition<P> {
    fn default() -> Self {
        Self::new(States::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_marks_only_first_active() {
        let specs = States::<()>::list(["idle", "brewing", "done"]).into_specs();

        let active: Vec<_> = specs
            .iter()
            .filter(|(_, spec)| spec.is_active())
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(active, vec!["idle"]);
        assert_eq!(specs.len(), 3);
    }

    #[test]
    fn empty_list_yields_no_specs() {
        let specs = States::<()>::List(Vec::new()).into_specs();
        assert!(specs.is_empty());
    }

    #[test]
    fn map_keeps_declaration_order() {
        let states: States<()> = States::Map(vec![
            ("done".to_string(), StateSpec::new()),
            ("idle".to_string(), StateSpec::new().active()),
        ]);

        let names: Vec<_> = states.into_specs().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["done", "idle"]);
    }

    #[test]
    fn default_definition_is_empty() {
        let definition: Definition = Definition::default();

        assert!(definition.states.is_empty());
        assert!(definition.events.is_empty());
        assert!(definition.on_state_change.is_none());
    }
}
