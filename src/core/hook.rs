//! Lifecycle hooks run around a state change.
//!
//! Hooks are caller-supplied synchronous callbacks. They receive the entity
//! mutably and may fail; the first failure stops the sequence.

use std::fmt;

/// Error type returned by hooks. Carried verbatim to the `trigger` caller.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type returned by hooks.
pub type HookResult = Result<(), HookError>;

/// Boxed hook over an entity of type `T`.
pub type Hook<T> = Box<dyn Fn(&mut T) -> HookResult + Send + Sync>;

/// Point in the trigger sequence at which a hook runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookPhase {
    /// Leaving the source state, before anything else
    Exit,
    /// Transition hook, still in the source state
    Before,
    /// Arriving in the destination state, after the state write
    Enter,
    /// Transition hook, last in the sequence
    After,
}

impl HookPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exit => "exit",
            Self::Before => "before",
            Self::Enter => "enter",
            Self::After => "after",
        }
    }

    /// Whether a failure in this phase happens after the state write
    /// and therefore requires a rollback.
    pub fn is_post_commit(&self) -> bool {
        matches!(self, Self::Enter | Self::After)
    }
}

impl fmt::Display for HookPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Box a closure as a [`Hook`].
pub(crate) fn boxed<T, F>(hook: F) -> Hook<T>
where
    F: Fn(&mut T) -> HookResult + Send + Sync + 'static,
{
    Box::new(hook)
}

/// Run `hooks` in order, stopping at the first failure.
pub(crate) fn run_all<T>(hooks: &[Hook<T>], entity: &mut T) -> HookResult {
    hooks.iter().try_for_each(|hook| hook(&mut *entity))
}
