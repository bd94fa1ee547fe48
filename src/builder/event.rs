//! Event definitions: a named group of transitions keyed by destination.

use crate::builder::transition::TransitionDef;
use std::collections::BTreeMap;

/// A named event holding at most one transition per destination state.
pub struct EventDef<T> {
    name: String,
    transitions: BTreeMap<String, TransitionDef<T>>,
}

impl<T> EventDef<T> {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get or create the transition leading to `destination`.
    pub fn to(&mut self, destination: &str) -> &mut TransitionDef<T> {
        self.transitions
            .entry(destination.to_string())
            .or_insert_with(|| TransitionDef::new(destination))
    }

    /// All transitions, ordered by destination name.
    pub fn transitions(&self) -> impl Iterator<Item = &TransitionDef<T>> {
        self.transitions.values()
    }

    /// Transitions eligible while the entity is in `state`.
    pub fn matching<'a>(&'a self, state: &'a str) -> impl Iterator<Item = &'a TransitionDef<T>> {
        self.transitions().filter(move |t| t.matches(state))
    }
}

impl<T> std::fmt::Debug for EventDef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDef")
            .field("name", &self.name)
            .field("transitions", &self.transitions)
            .finish()
    }
}
