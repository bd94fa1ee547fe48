//! Transition definitions: source set, destination, before and after hooks.

use crate::core::{boxed, Hook, HookResult, SourceSet};

/// One destination of an event, with the states it may fire from.
///
/// Obtained from [`EventDef::to`](crate::builder::EventDef::to). Calling
/// `to` again with the same destination returns this definition, so sources
/// and hooks accumulate across calls.
pub struct TransitionDef<T> {
    to: String,
    froms: SourceSet,
    befores: Vec<Hook<T>>,
    afters: Vec<Hook<T>>,
}

impl<T> TransitionDef<T> {
    pub(crate) fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            froms: SourceSet::new(),
            befores: Vec::new(),
            afters: Vec::new(),
        }
    }

    /// Add eligible source states. Names already present are skipped.
    ///
    /// A transition with no sources at all fires from any state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::core::StateField;
    /// use turnstile::machine::StateMachine;
    ///
    /// let mut machine = StateMachine::<StateField>::new();
    /// machine
    ///     .event("cancel")
    ///     .to("cancelled")
    ///     .from(["draft", "draft", "checkout"])
    ///     .from(["checkout"]);
    ///
    /// let definition = machine.definition();
    /// assert_eq!(definition.events[0].transitions[0].from, ["draft", "checkout"]);
    /// ```
    pub fn from<I, S>(&mut self, states: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.froms.extend(states);
        self
    }

    /// Append a hook run before the state write, after the source state's exit hooks.
    pub fn before<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&mut T) -> HookResult + Send + Sync + 'static,
    {
        self.befores.push(boxed(hook));
        self
    }

    /// Append a hook run last, after the destination state's enter hooks.
    pub fn after<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&mut T) -> HookResult + Send + Sync + 'static,
    {
        self.afters.push(boxed(hook));
        self
    }

    pub fn destination(&self) -> &str {
        &self.to
    }

    pub fn sources(&self) -> &SourceSet {
        &self.froms
    }

    /// Whether this transition may fire while the entity is in `state`.
    pub fn matches(&self, state: &str) -> bool {
        self.froms.admits(state)
    }

    pub(crate) fn before_hooks(&self) -> &[Hook<T>] {
        &self.befores
    }

    pub(crate) fn after_hooks(&self) -> &[Hook<T>] {
        &self.afters
    }
}

impl<T> std::fmt::Debug for TransitionDef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionDef")
            .field("to", &self.to)
            .field("froms", &self.froms)
            .field("befores", &self.befores.len())
            .field("afters", &self.afters.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::run_all;

    #[test]
    fn new_transition_is_wildcard() {
        let transition: TransitionDef<String> = TransitionDef::new("cancelled");
        assert_eq!(transition.destination(), "cancelled");
        assert!(transition.sources().is_wildcard());
        assert!(transition.matches("draft"));
        assert!(transition.matches("paid"));
    }

    #[test]
    fn from_deduplicates_across_calls() {
        let mut transition: TransitionDef<String> = TransitionDef::new("checkout");
        transition.from(["a", "a", "b"]).from(["b", "c"]);

        assert_eq!(transition.sources().as_slice(), ["a", "b", "c"]);
        assert!(transition.matches("c"));
        assert!(!transition.matches("d"));
    }

    #[test]
    fn hooks_accumulate_in_order() {
        let mut transition: TransitionDef<Vec<u8>> = TransitionDef::new("paid");
        transition
            .before(|log| {
                log.push(1);
                Ok(())
            })
            .before(|log| {
                log.push(2);
                Ok(())
            })
            .after(|log| {
                log.push(3);
                Ok(())
            });

        assert_eq!(transition.before_hooks().len(), 2);
        assert_eq!(transition.after_hooks().len(), 1);

        let mut log = Vec::new();
        run_all(transition.before_hooks(), &mut log).unwrap();
        run_all(transition.after_hooks(), &mut log).unwrap();
        assert_eq!(log, vec![1, 2, 3]);
    }
}
