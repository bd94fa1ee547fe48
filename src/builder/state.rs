//! State definitions with enter and exit hooks.

use crate::core::{boxed, Hook, HookResult};

/// A named state and its ordered lifecycle hooks.
///
/// Obtained from [`StateMachine::state`](crate::machine::StateMachine::state),
/// which creates it on first use and hands back the same definition after
/// that, so hooks added through separate calls accumulate.
pub struct StateDef<T> {
    name: String,
    enters: Vec<Hook<T>>,
    exits: Vec<Hook<T>>,
}

impl<T> StateDef<T> {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enters: Vec::new(),
            exits: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a hook run after the entity has moved into this state.
    pub fn enter<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&mut T) -> HookResult + Send + Sync + 'static,
    {
        self.enters.push(boxed(hook));
        self
    }

    /// Append a hook run before the entity leaves this state.
    pub fn exit<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&mut T) -> HookResult + Send + Sync + 'static,
    {
        self.exits.push(boxed(hook));
        self
    }

    pub(crate) fn enter_hooks(&self) -> &[Hook<T>] {
        &self.enters
    }

    pub(crate) fn exit_hooks(&self) -> &[Hook<T>] {
        &self.exits
    }
}

impl<T> std::fmt::Debug for StateDef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateDef")
            .field("name", &self.name)
            .field("enters", &self.enters.len())
            .field("exits", &self.exits.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::run_all;

    #[test]
    fn new_state_has_no_hooks() {
        let state: StateDef<String> = StateDef::new("draft");
        assert_eq!(state.name(), "draft");
        assert!(state.enter_hooks().is_empty());
        assert!(state.exit_hooks().is_empty());
    }

    #[test]
    fn hooks_chain_and_keep_append_order() {
        let mut state: StateDef<Vec<&'static str>> = StateDef::new("checkout");
        state
            .enter(|log| {
                log.push("enter-1");
                Ok(())
            })
            .exit(|log| {
                log.push("exit-1");
                Ok(())
            })
            .enter(|log| {
                log.push("enter-2");
                Ok(())
            });

        let mut log = Vec::new();
        run_all(state.enter_hooks(), &mut log).unwrap();
        run_all(state.exit_hooks(), &mut log).unwrap();
        assert_eq!(log, vec!["enter-1", "enter-2", "exit-1"]);
    }
}
