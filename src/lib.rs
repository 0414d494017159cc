//! Statewise: a declarative finite state machine engine
//!
//! A machine is described by named states and named events, where each event
//! maps a source state (or a set of candidates, or any state) to a single
//! destination. Exactly one state is active at a time. Triggering an event
//! evaluates the destination's guard, runs exit, enter and global hooks in a
//! fixed order, then moves the active flag.
//!
//! # Core Concepts
//!
//! - **States**: Declared as an ordered list or as a map of partial specs
//! - **Events**: Named transition templates (`from` -> `to`)
//! - **Guards**: Predicates on the destination that can veto a transition
//! - **Hooks**: `on_exit`, `on_enter` and `on_state_change` callbacks
//! - **History**: Immutable record of committed transitions
//!
//! # Example
//!
//! ```rust
//! use statewise::builder::StateMachineBuilder;
//! use statewise::core::{Guard, Hook};
//! use statewise::engine::{StateMachine, TransitionError};
//!
//! let mut machine: StateMachine<u32> = StateMachineBuilder::new()
//!     .states(["idle", "brewing", "done"])
//!     .event("start", "idle", "brewing")
//!     .event("finish", "brewing", "done")
//!     .event("reset", "any", "idle")
//!     .guard("brewing", Guard::new(|_, cups: &u32| *cups > 0))
//!     .on_enter("brewing", Hook::new(|_, cups: &u32| println!("brewing {cups} cups")))
//!     .build()
//!     .unwrap();
//!
//! // Guard vetoes an empty order
//! assert!(machine.trigger("start", &0).unwrap().is_rejected());
//! assert_eq!(machine.current_state(), Some("idle"));
//!
//! machine.trigger("start", &2).unwrap();
//! assert_eq!(machine.current_state(), Some("brewing"));
//!
//! // Direct calls from a state that is not active fail without side effects
//! let err = machine.change_state("done", "idle", None, &0).unwrap_err();
//! assert!(matches!(err, TransitionError::InactiveSourceState { .. }));
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, Definition, StateMachineBuilder, States};
pub use core::{EventSpec, Guard, Hook, HookError, Source, StateSpec};
pub use engine::{StateMachine, TransitionDescriptor, TransitionError, TransitionOutcome};
