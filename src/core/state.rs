//! State definitions and their normalized runtime records.

use super::guard::Guard;
use super::hook::Hook;

/// Partial definition of a state, as supplied by the consumer.
///
/// Every field is optional. The `active` flag marks the initial state; when
/// no spec sets it, the first declared state becomes active.
///
/// # Example
///
/// ```rust
/// use statewise::core::{Guard, Hook, StateSpec};
///
/// let brewing: StateSpec<()> = StateSpec::new()
///     .on_enter(Hook::new(|_, _| println!("grinding beans")))
///     .guard(Guard::new(|t, _| t.from == "idle"));
///
/// assert!(!brewing.is_active());
/// ```
pub struct StateSpec<P = ()> {
    pub(crate) active: bool,
    pub(crate) on_enter: Option<Hook<P>>,
    pub(crate) on_exit: Option<Hook<P>>,
    pub(crate) guard: Option<Guard<P>>,
}

impl<P> StateSpec<P> {
    /// Create an empty spec: inactive, no hooks, no guard.
    pub fn new() -> Self {
        Self {
            active: false,
            on_enter: None,
            on_exit: None,
            guard: None,
        }
    }

    /// Mark this state as the initial active state.
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    /// Hook run when this state is entered.
    pub fn on_enter(mut self, hook: Hook<P>) -> Self {
        self.on_enter = Some(hook);
        self
    }

    /// Hook run when this state is left.
    pub fn on_exit(mut self, hook: Hook<P>) -> Self {
        self.on_exit = Some(hook);
        self
    }

    /// Guard evaluated before entering this state.
    pub fn guard(mut self, guard: Guard<P>) -> Self {
        self.guard = Some(guard);
        self
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl<P> Default for StateSpec<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for StateSpec<P> {
    fn clone(&self) -> Self {
        Self {
            active: self.active,
            on_enter: self.on_enter.clone(),
            on_exit: self.on_exit.clone(),
            guard: self.guard.clone(),
        }
    }
}

impl<P> std::fmt::Debug for StateSpec<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateSpec")
            .field("active", &self.active)
            .field("on_enter", &self.on_enter.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .field("guard", &self.guard.is_some())
            .finish()
    }
}

/// Runtime record of a named state owned by a state machine.
///
/// Only the `active` flag changes after construction, and only the engine's
/// commit step changes it.
pub struct StateRecord<P = ()> {
    pub(crate) name: String,
    pub(crate) active: bool,
    pub(crate) on_enter: Option<Hook<P>>,
    pub(crate) on_exit: Option<Hook<P>>,
    pub(crate) guard: Option<Guard<P>>,
}

impl<P> StateRecord<P> {
    pub(crate) fn from_spec(name: String, spec: StateSpec<P>) -> Self {
        Self {
            name,
            active: spec.active,
            on_enter: spec.on_enter,
            on_exit: spec.on_exit,
            guard: spec.guard,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn has_guard(&self) -> bool {
        self.guard.is_some()
    }

    pub fn has_enter_hook(&self) -> bool {
        self.on_enter.is_some()
    }

    pub fn has_exit_hook(&self) -> bool {
        self.on_exit.is_some()
    }
}

impl<P> std::fmt::Debug for StateRecord<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateRecord")
            .field("name", &self.name)
            .field("active", &self.active)
            .field("on_enter", &self.on_enter.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .field("guard", &self.guard.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_spec_is_inactive_and_bare() {
        let spec: StateSpec<()> = StateSpec::new();

        assert!(!spec.is_active());
        assert!(spec.on_enter.is_none());
        assert!(spec.on_exit.is_none());
        assert!(spec.guard.is_none());
    }

    #[test]
    fn builder_methods_attach_hooks() {
        let spec: StateSpec<()> = StateSpec::new()
            .active()
            .on_enter(Hook::new(|_, _| {}))
            .on_exit(Hook::new(|_, _| {}))
            .guard(Guard::new(|_, _| true));

        assert!(spec.is_active());
        assert!(spec.on_enter.is_some());
        assert!(spec.on_exit.is_some());
        assert!(spec.guard.is_some());
    }

    #[test]
    fn record_carries_spec_fields() {
        let spec: StateSpec<()> = StateSpec::new().active().guard(Guard::new(|_, _| false));
        let record = StateRecord::from_spec("brewing".to_string(), spec);

        assert_eq!(record.name(), "brewing");
        assert!(record.is_active());
        assert!(record.has_guard());
        assert!(!record.has_enter_hook());
        assert!(!record.has_exit_hook());
    }

    #[test]
    fn debug_output_omits_callbacks() {
        let spec: StateSpec<()> = StateSpec::new().on_enter(Hook::new(|_, _| {}));
        let rendered = format!("{spec:?}");

        assert!(rendered.contains("on_enter: true"));
        assert!(rendered.contains("guard: false"));
    }
}
