//! Guard predicates for controlling state transitions.
//!
//! A guard belongs to a destination state. It is evaluated before any hook
//! runs; returning `false` vetoes the transition without raising an error.

use super::hook::HookError;
use crate::engine::TransitionDescriptor;
use std::fmt;
use std::sync::Arc;

type GuardFn<P> = dyn Fn(&TransitionDescriptor, &P) -> Result<bool, HookError> + Send + Sync;

/// Predicate that determines if a transition into a state may proceed.
///
/// # Example
///
/// ```rust
/// use statewise::core::Guard;
/// use statewise::engine::TransitionDescriptor;
///
/// // Only allow entering when at least one cup was ordered
/// let has_order = Guard::new(|_: &TransitionDescriptor, cups: &u32| *cups > 0);
///
/// let transition = TransitionDescriptor {
///     from: "idle".to_string(),
///     to: "brewing".to_string(),
///     event: Some("start".to_string()),
/// };
///
/// assert!(has_order.check(&transition, &1).unwrap());
/// assert!(!has_order.check(&transition, &0).unwrap());
/// ```
pub struct Guard<P = ()> {
    predicate: Arc<GuardFn<P>>,
}

impl<P: 'static> Guard<P> {
    /// Create a guard from a predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&TransitionDescriptor, &P) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(
                move |transition: &TransitionDescriptor, payload: &P| -> Result<bool, HookError> {
                    Ok(predicate(transition, payload))
                },
            ),
        }
    }

    /// Create a guard whose evaluation can fail.
    ///
    /// An error aborts the transition and is propagated to the caller.
    pub fn try_new<F>(predicate: F) -> Self
    where
        F: Fn(&TransitionDescriptor, &P) -> Result<bool, HookError> + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }
}

impl<P> Guard<P> {
    /// Check if the guard allows the given transition.
    pub fn check(&self, transition: &TransitionDescriptor, payload: &P) -> Result<bool, HookError> {
        (self.predicate)(transition, payload)
    }
}

impl<P> Clone for Guard<P> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<P> fmt::Debug for Guard<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
