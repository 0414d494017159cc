//! Lifecycle hooks invoked around committed transitions.
//!
//! A hook runs after the destination's guard has accepted a transition and
//! before the active flag flips. Hooks are caller-owned code: their return
//! values are ignored and their errors abort the transition.

use crate::engine::{StateMachine, TransitionDescriptor};
use std::fmt;
use std::sync::Arc;

/// Error type returned by fallible hooks and guards.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

type HookFn<P> =
    dyn Fn(&mut StateMachine<P>, &TransitionDescriptor, &P) -> Result<(), HookError> + Send + Sync;

/// Side-effecting callback attached to a state (`on_enter` / `on_exit`) or to
/// the whole machine (`on_state_change`).
///
/// # Example
///
/// ```rust
/// use statewise::core::Hook;
/// use statewise::engine::TransitionDescriptor;
///
/// let hook: Hook<()> = Hook::new(|transition: &TransitionDescriptor, _: &()| {
///     println!("{} -> {}", transition.from, transition.to);
/// });
/// ```
pub struct Hook<P = ()> {
    callback: Arc<HookFn<P>>,
}

impl<P: 'static> Hook<P> {
    /// Create a hook from an infallible callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&TransitionDescriptor, &P) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(
                move |_: &mut StateMachine<P>,
                      transition: &TransitionDescriptor,
                      payload: &P|
                      -> Result<(), HookError> {
                    callback(transition, payload);
                    Ok(())
                },
            ),
        }
    }

    /// Create a hook whose error aborts the transition before commit.
    pub fn try_new<F>(callback: F) -> Self
    where
        F: Fn(&TransitionDescriptor, &P) -> Result<(), HookError> + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(
                move |_: &mut StateMachine<P>,
                      transition: &TransitionDescriptor,
                      payload: &P|
                      -> Result<(), HookError> { callback(transition, payload) },
            ),
        }
    }

    /// Create a hook that receives the machine itself and may trigger
    /// nested transitions.
    ///
    /// A nested transition runs to completion, including its own hook chain,
    /// before the outer transition continues with its remaining hooks.
    pub fn reentrant<F>(callback: F) -> Self
    where
        F: Fn(&mut StateMachine<P>, &TransitionDescriptor, &P) -> Result<(), HookError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }
}

impl<P> Hook<P> {
    pub(crate) fn call(
        &self,
        machine: &mut StateMachine<P>,
        transition: &TransitionDescriptor,
        payload: &P,
    ) -> Result<(), HookError> {
        (self.callback)(machine, transition, payload)
    }
}

impl<P> Clone for Hook<P> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<P> fmt::Debug for Hook<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook").finish_non_exhaustive()
    }
}
