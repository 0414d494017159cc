//! Macros for ergonomic per-event trigger methods.

/// Generate a trait with one method per event, implemented for
/// `StateMachine<Payload>`.
///
/// Each method calls [`StateMachine::trigger`](crate::engine::StateMachine::trigger)
/// with the method's name as the event name.
///
/// # Example
///
/// ```
/// use statewise::builder::StateMachineBuilder;
/// use statewise::engine::StateMachine;
/// use statewise::event_triggers;
///
/// event_triggers! {
///     pub trait CoffeeEvents for StateMachine<()> {
///         start,
///         finish,
///     }
/// }
///
/// let mut machine: StateMachine = StateMachineBuilder::new()
///     .states(["idle", "brewing", "done"])
///     .event("start", "idle", "brewing")
///     .event("finish", "brewing", "done")
///     .build()
///     .unwrap();
///
/// machine.start(&()).unwrap();
/// machine.finish(&()).unwrap();
/// assert_eq!(machine.current_state(), Some("done"));
/// ```
#[macro_export]
macro_rules! event_triggers {
    (
        $(#[$meta:meta])*
        $vis:vis trait $name:ident for StateMachine<$payload:ty> {
            $(
                $(#[$event_meta:meta])*
                $event:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis trait $name {
            $(
                $(#[$event_meta])*
                fn $event(&mut self, payload: &$payload) -> $crate::engine::TriggerResult;
            )*
        }

        impl $name for $crate::engine::StateMachine<$payload> {
            $(
                fn $event(&mut self, payload: &$payload) -> $crate::engine::TriggerResult {
                    self.trigger(stringify!($event), payload)
                }
            )*
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::StateMachineBuilder;
    use crate::core::Guard;
    use crate::engine::{StateMachine, TransitionError};

    event_triggers! {
        trait CoffeeEvents for StateMachine<()> {
            start,
            finish,
            reset,
        }
    }

    event_triggers! {
        /// Events of an order-aware machine.
        pub trait OrderEvents for StateMachine<u32> {
            /// Begin brewing the ordered cups.
            brew,
        }
    }

    fn coffee_machine() -> StateMachine {
        StateMachineBuilder::new()
            .states(["idle", "brewing", "done"])
            .event("start", "idle", "brewing")
            .event("finish", "brewing", "done")
            .event("reset", "any", "idle")
            .build()
            .unwrap()
    }

    #[test]
    fn generated_methods_trigger_events() {
        let mut machine = coffee_machine();

        machine.start(&()).unwrap();
        assert_eq!(machine.current_state(), Some("brewing"));

        machine.finish(&()).unwrap();
        machine.reset(&()).unwrap();
        assert_eq!(machine.current_state(), Some("idle"));
    }

    #[test]
    fn generated_methods_surface_errors() {
        let mut machine = coffee_machine();

        let err = machine.finish(&()).unwrap_err();

        assert!(matches!(err, TransitionError::InactiveSourceState { .. }));
        assert_eq!(err.event(), Some("finish"));
    }

    #[test]
    fn generated_methods_forward_payload() {
        let mut machine: StateMachine<u32> = StateMachineBuilder::new()
            .states(["idle", "brewing"])
            .event("brew", "idle", "brewing")
            .guard("brewing", Guard::new(|_, cups: &u32| *cups > 0))
            .build()
            .unwrap();

        assert!(machine.brew(&0).unwrap().is_rejected());
        assert!(machine.brew(&1).unwrap().is_committed());
    }
}
