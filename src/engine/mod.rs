//! The transition engine.
//!
//! This module owns the runtime side of a machine: the normalized state and
//! event records, the single active state, and the transition algorithm.
//!
//! # Key Concepts
//!
//! - **State Machine**: Normalizes a definition and runs transitions
//! - **Transition Descriptor**: `{from, to, event}` handed to guards and hooks
//! - **Outcome**: `Committed`, or `Rejected` by the destination's guard
//! - **Errors**: Structured failures raised before anything changes
//!
//! # Transition Order
//!
//! 1. Resolve the concrete source (candidate list or `any`)
//! 2. Validate destination, source, and that the source is active
//! 3. Evaluate the destination's guard
//! 4. Run source `on_exit`, destination `on_enter`, then `on_state_change`
//! 5. Flip the active flag and record the transition

mod machine;
mod transition;
mod validation;

pub use machine::{StateMachine, TriggerResult};
pub use transition::{HookKind, TransitionDescriptor, TransitionError, TransitionOutcome};
pub use validation::DefinitionIssue;
