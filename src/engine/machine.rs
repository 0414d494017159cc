//! State machine that owns the active state and runs transitions.

use crate::builder::Definition;
use crate::core::{
    EventRecord, Hook, Source, StateHistory, StateRecord, StateSpec, TransitionRecord,
};
use crate::engine::transition::{
    HookKind, TransitionDescriptor, TransitionError, TransitionOutcome,
};
use chrono::Utc;
use std::collections::HashMap;

/// Result of triggering an event or calling `change_state`.
pub type TriggerResult = Result<TransitionOutcome, TransitionError>;

/// Declarative finite state machine.
///
/// Exactly one state is active at any observable instant (for machines with
/// at least one state). Transitions take `&mut self`; the guard-then-commit
/// sequence is not atomic, so sharing a machine between threads requires
/// wrapping it in a `Mutex`.
///
/// # Example
///
/// ```rust
/// use statewise::builder::StateMachineBuilder;
/// use statewise::engine::{StateMachine, TransitionOutcome};
///
/// let mut machine: StateMachine = StateMachineBuilder::new()
///     .states(["idle", "brewing", "done"])
///     .event("start", "idle", "brewing")
///     .event("finish", "brewing", "done")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), Some("idle"));
/// assert_eq!(machine.trigger("start", &()).unwrap(), TransitionOutcome::Committed);
/// assert_eq!(machine.current_state(), Some("brewing"));
/// ```
pub struct StateMachine<P = ()> {
    states: Vec<StateRecord<P>>,
    state_index: HashMap<String, usize>,
    events: Vec<EventRecord>,
    event_index: HashMap<String, usize>,
    on_state_change: Option<Hook<P>>,
    history: StateHistory,
}

impl<P> StateMachine<P> {
    /// Normalize a definition into a runnable machine.
    ///
    /// A state list marks its first element active. When no state is
    /// flagged active the first declared state is activated; when several
    /// are, the first in declaration order wins and the rest are cleared.
    /// Event references are not checked here, see [`StateMachine::validate`].
    pub fn new(definition: Definition<P>) -> Self {
        let Definition {
            states,
            events,
            on_state_change,
        } = definition;

        let (mut states, state_index) = index_by_name(
            states.into_specs(),
            |(name, spec): (String, StateSpec<P>)| StateRecord::from_spec(name, spec),
            |record| &record.name,
        );
        normalize_active(&mut states);

        let (events, event_index) = index_by_name(
            events,
            |(name, spec)| EventRecord::from_spec(name, spec),
            |record| &record.name,
        );

        Self {
            states,
            state_index,
            events,
            event_index,
            on_state_change,
            history: StateHistory::new(),
        }
    }

    /// Name of the active state, `None` only for a machine without states.
    pub fn current_state(&self) -> Option<&str> {
        self.states
            .iter()
            .find(|record| record.active)
            .map(|record| record.name.as_str())
    }

    /// All state names in declaration order.
    pub fn available_states(&self) -> Vec<&str> {
        self.states.iter().map(|record| record.name.as_str()).collect()
    }

    /// All event names in declaration order.
    pub fn available_events(&self) -> Vec<&str> {
        self.events.iter().map(|record| record.name.as_str()).collect()
    }

    pub fn state(&self, name: &str) -> Option<&StateRecord<P>> {
        self.state_index.get(name).map(|&index| &self.states[index])
    }

    pub fn event(&self, name: &str) -> Option<&EventRecord> {
        self.event_index.get(name).map(|&index| &self.events[index])
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.state(name).is_some_and(StateRecord::is_active)
    }

    /// Committed transitions, oldest first.
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub(crate) fn event_records(&self) -> &[EventRecord] {
        &self.events
    }

    /// Fire a named event, forwarding `payload` to its guard and hooks.
    pub fn trigger(&mut self, event: &str, payload: &P) -> TriggerResult {
        let Some(record) = self.event(event) else {
            return Err(TransitionError::UnknownEvent {
                event: event.to_string(),
            });
        };
        let from = record.from.clone();
        let to = record.to.clone();

        self.change_state(from, &to, Some(event), payload)
    }

    /// Run a transition from `from` to `to`.
    ///
    /// `from` may name one state, list candidates (the active one is
    /// used), or be [`Source::Any`]. Checks run in order: candidate
    /// resolution, destination defined, source defined, source active. The
    /// destination's guard may then reject the transition; otherwise the
    /// source's exit hook, the destination's enter hook and the global
    /// state-change hook run in that order before the active flag moves.
    ///
    /// Errors leave the active state untouched. Side effects of hooks that
    /// already ran are not undone.
    pub fn change_state(
        &mut self,
        from: impl Into<Source>,
        to: &str,
        event: Option<&str>,
        payload: &P,
    ) -> TriggerResult {
        let from = self.resolve_source(&from.into(), event)?;

        let Some(&to_index) = self.state_index.get(to) else {
            return Err(TransitionError::UndefinedDestinationState {
                to: to.to_string(),
                event: event.map(str::to_string),
            });
        };
        let Some(&from_index) = self.state_index.get(&from) else {
            return Err(TransitionError::UndefinedSourceState {
                from,
                event: event.map(str::to_string),
            });
        };
        if !self.states[from_index].active {
            return Err(TransitionError::InactiveSourceState {
                from,
                active: self.current_state().map(str::to_string),
                event: event.map(str::to_string),
            });
        }

        let descriptor = TransitionDescriptor {
            from,
            to: to.to_string(),
            event: event.map(str::to_string),
        };

        if let Some(guard) = &self.states[to_index].guard {
            let allowed = guard
                .check(&descriptor, payload)
                .map_err(|source| TransitionError::Hook {
                    kind: HookKind::Guard,
                    state: Some(descriptor.to.clone()),
                    source,
                })?;
            if !allowed {
                tracing::debug!(
                    from = %descriptor.from,
                    to = %descriptor.to,
                    event = ?descriptor.event,
                    "transition rejected by guard"
                );
                return Ok(TransitionOutcome::Rejected);
            }
        }

        let exit = self.states[from_index].on_exit.clone();
        let enter = self.states[to_index].on_enter.clone();
        let on_state_change = self.on_state_change.clone();

        self.run_hook(exit, HookKind::Exit, Some(&descriptor.from), &descriptor, payload)?;
        self.run_hook(enter, HookKind::Enter, Some(&descriptor.to), &descriptor, payload)?;
        self.run_hook(on_state_change, HookKind::StateChange, None, &descriptor, payload)?;

        self.commit(to_index, descriptor);
        Ok(TransitionOutcome::Committed)
    }

    fn resolve_source(&self, from: &Source, event: Option<&str>) -> Result<String, TransitionError> {
        let active = self.current_state();
        match from {
            Source::State(name) => Ok(name.clone()),
            Source::AnyOf(candidates) => match active {
                Some(active) if candidates.iter().any(|candidate| candidate == active) => {
                    Ok(active.to_string())
                }
                _ => Err(TransitionError::NoMatchingCandidateSource {
                    candidates: candidates.clone(),
                    active: active.map(str::to_string),
                    event: event.map(str::to_string),
                }),
            },
            Source::Any => active.map(str::to_string).ok_or_else(|| {
                TransitionError::NoMatchingCandidateSource {
                    candidates: Vec::new(),
                    active: None,
                    event: event.map(str::to_string),
                }
            }),
        }
    }

    fn run_hook(
        &mut self,
        hook: Option<Hook<P>>,
        kind: HookKind,
        state: Option<&String>,
        descriptor: &TransitionDescriptor,
        payload: &P,
    ) -> Result<(), TransitionError> {
        let Some(hook) = hook else {
            return Ok(());
        };
        tracing::trace!(hook = %kind, state = ?state, "running hook");
        hook.call(self, descriptor, payload)
            .map_err(|source| TransitionError::Hook {
                kind,
                state: state.cloned(),
                source,
            })
    }

    /// The only place `active` flags change after construction.
    fn commit(&mut self, to_index: usize, descriptor: TransitionDescriptor) {
        // Hooks may have run nested transitions, so clear whatever is
        // active now rather than only the resolved source.
        for record in &mut self.states {
            record.active = false;
        }
        self.states[to_index].active = true;

        tracing::debug!(
            from = %descriptor.from,
            to = %descriptor.to,
            event = ?descriptor.event,
            "transition committed"
        );

        self.history = self.history.record(TransitionRecord {
            from: descriptor.from,
            to: descriptor.to,
            event: descriptor.event,
            timestamp: Utc::now(),
        });
    }
}

impl<P> Default for StateMachine<P> {
    fn default() -> Self {
        Self::new(Definition::default())
    }
}

impl<P> std::fmt::Debug for StateMachine<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("states", &self.states)
            .field("events", &self.events)
            .field("on_state_change", &self.on_state_change.is_some())
            .field("history", &self.history)
            .finish()
    }
}

/// Build records in declaration order. A repeated name keeps its first
/// position and takes the later definition.
fn index_by_name<I, R>(
    items: Vec<I>,
    mut into_record: impl FnMut(I) -> R,
    name_of: impl Fn(&R) -> &String,
) -> (Vec<R>, HashMap<String, usize>) {
    let mut records: Vec<R> = Vec::with_capacity(items.len());
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        let record = into_record(item);
        let name = name_of(&record).clone();
        if let Some(&position) = index.get(&name) {
            records[position] = record;
        } else {
            index.insert(name, records.len());
            records.push(record);
        }
    }
    (records, index)
}

fn normalize_active<P>(states: &mut [StateRecord<P>]) {
    let active: Vec<usize> = states
        .iter()
        .enumerate()
        .filter(|(_, record)| record.active)
        .map(|(position, _)| position)
        .collect();

    match active.as_slice() {
        [] => {
            if let Some(first) = states.first_mut() {
                tracing::debug!(state = %first.name, "no initial state flagged, activating first");
                first.active = true;
            }
        }
        [_] => {}
        [winner, rest @ ..] => {
            tracing::warn!(
                state = %states[*winner].name,
                dropped = rest.len(),
                "multiple initial states flagged, keeping first"
            );
            for &position in rest {
                states[position].active = false;
            }
        }
    }
}
