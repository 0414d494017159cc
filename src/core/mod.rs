//! Core state machine types.
//!
//! This module contains the value types the engine is built from:
//! - State specs and their runtime records
//! - Event specs, sources and their runtime records
//! - Guards and lifecycle hooks
//! - Immutable transition history

mod event;
mod guard;
mod history;
mod hook;
mod state;

pub use event::{EventRecord, EventSpec, Source, ANY_STATE};
pub use guard::Guard;
pub use history::{StateHistory, TransitionRecord};
pub use hook::{Hook, HookError};
pub use state::{StateRecord, StateSpec};
