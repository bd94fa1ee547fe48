//! Errors returned by `StateMachine::trigger`.

use crate::core::{HookError, HookPhase};
use thiserror::Error;

/// Errors that can occur when triggering an event.
///
/// `NoMatchingTransition` and `AmbiguousTransition` share a display message;
/// use [`TriggerError::is_no_transition`] to treat them alike or match on the
/// variant to tell them apart.
#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("unknown event {event} triggered from state {state}")]
    UnknownEvent { event: String, state: String },

    #[error("failed to perform event {event} from state {state}")]
    NoMatchingTransition { event: String, state: String },

    #[error("failed to perform event {event} from state {state}")]
    AmbiguousTransition {
        event: String,
        state: String,
        /// Destinations of every transition eligible from `state`
        candidates: Vec<String>,
    },

    #[error("{phase} hook failed during event {event} ({from} -> {to}): {source}")]
    Hook {
        phase: HookPhase,
        event: String,
        from: String,
        to: String,
        #[source]
        source: HookError,
    },
}

impl TriggerError {
    /// True when no single transition could be selected, either because none
    /// matched or because several did.
    pub fn is_no_transition(&self) -> bool {
        matches!(
            self,
            Self::NoMatchingTransition { .. } | Self::AmbiguousTransition { .. }
        )
    }

    /// Phase of the failing hook, if a hook failed.
    pub fn phase(&self) -> Option<HookPhase> {
        match self {
            Self::Hook { phase, .. } => Some(*phase),
            _ => None,
        }
    }

    /// The error returned by the failing hook, untouched.
    pub fn hook_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Hook { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }

    /// Consume the error, yielding the hook's own error if a hook failed.
    pub fn into_hook_error(self) -> Result<HookError, Self> {
        match self {
            Self::Hook { source, .. } => Ok(source),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, Error)]
    #[error("card declined")]
    struct Declined;

    #[test]
    fn no_match_and_ambiguous_display_identically() {
        let none = TriggerError::NoMatchingTransition {
            event: "cancel".into(),
            state: "draft".into(),
        };
        let many = TriggerError::AmbiguousTransition {
            event: "cancel".into(),
            state: "draft".into(),
            candidates: vec!["a".into(), "b".into()],
        };

        assert_eq!(none.to_string(), many.to_string());
        assert_eq!(none.to_string(), "failed to perform event cancel from state draft");
        assert!(none.is_no_transition());
        assert!(many.is_no_transition());
    }

    #[test]
    fn unknown_event_is_not_a_no_transition() {
        let err = TriggerError::UnknownEvent {
            event: "shipIt".into(),
            state: "draft".into(),
        };
        assert!(!err.is_no_transition());
        assert!(err.phase().is_none());
        assert!(err.hook_error().is_none());
    }

    #[test]
    fn hook_error_is_preserved_as_source() {
        let err = TriggerError::Hook {
            phase: HookPhase::Before,
            event: "pay".into(),
            from: "checkout".into(),
            to: "paid".into(),
            source: Box::new(Declined),
        };

        assert_eq!(err.phase(), Some(HookPhase::Before));
        assert_eq!(err.source().unwrap().to_string(), "card declined");
        assert!(err.hook_error().unwrap().is::<Declined>());
        assert_eq!(
            err.to_string(),
            "before hook failed during event pay (checkout -> paid): card declined"
        );

        let inner = err.into_hook_error().unwrap();
        assert!(inner.downcast_ref::<Declined>().is_some());
    }
}
