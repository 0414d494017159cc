//! Builder API for ergonomic state machine construction.
//!
//! This module provides the declarative definition types, a fluent builder,
//! JSON definition documents, and the `event_triggers!` macro for typed
//! per-event methods.

pub mod definition;
mod document;
pub mod error;
pub mod machine;
pub mod macros;

pub use definition::{Definition, States};
pub use error::BuildError;
pub use machine::StateMachineBuilder;
