//! Serializable snapshot of a machine's registries.
//!
//! Hooks are closures and cannot be serialized, so the snapshot records how
//! many of each kind are attached instead.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineDefinition {
    /// State assigned to entities with an empty state
    pub initial: String,

    /// Registered states, ordered by name
    pub states: Vec<StateDefinition>,

    /// Registered events, ordered by name
    pub events: Vec<EventDefinition>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    pub name: String,
    pub enter_hooks: usize,
    pub exit_hooks: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDefinition {
    pub name: String,

    /// Transitions ordered by destination name
    pub transitions: Vec<TransitionDefinition>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDefinition {
    pub to: String,

    /// Eligible sources in the order they were added; empty means any state
    pub from: Vec<String>,
    pub before_hooks: usize,
    pub after_hooks: usize,
}

impl MachineDefinition {
    pub fn state(&self, name: &str) -> Option<&StateDefinition> {
        self.states.iter().find(|s| s.name == name)
    }

    pub fn event(&self, name: &str) -> Option<&EventDefinition> {
        self.events.iter().find(|e| e.name == name)
    }

    /// Every state name mentioned anywhere: the initial state, registered
    /// states and transition endpoints. Sorted and de-duplicated.
    pub fn referenced_states(&self) -> Vec<&str> {
        let mut names: Vec<&str> = std::iter::once(self.initial.as_str())
            .filter(|name| !name.is_empty())
            .chain(self.states.iter().map(|s| s.name.as_str()))
            .chain(self.events.iter().flat_map(|e| {
                e.transitions.iter().flat_map(|t| {
                    std::iter::once(t.to.as_str()).chain(t.from.iter().map(String::as_str))
                })
            }))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl EventDefinition {
    pub fn transition(&self, to: &str) -> Option<&TransitionDefinition> {
        self.transitions.iter().find(|t| t.to == to)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::StateField;
    use crate::machine::StateMachine;

    fn machine() -> StateMachine<StateField> {
        let mut machine = StateMachine::<StateField>::new();
        machine.initial("draft");
        machine.state("checkout").enter(|_| Ok(())).exit(|_| Ok(()));
        machine
            .event("cancel")
            .to("paid_cancelled")
            .from(["paid"])
            .after(|_| Ok(()));
        machine.event("cancel").to("cancelled").from(["draft", "checkout"]);
        machine
    }

    #[test]
    fn definition_reports_hook_counts_and_sources() {
        let definition = machine().definition();

        assert_eq!(definition.initial, "draft");

        let checkout = definition.state("checkout").unwrap();
        assert_eq!(checkout.enter_hooks, 1);
        assert_eq!(checkout.exit_hooks, 1);

        let cancel = definition.event("cancel").unwrap();
        let destinations: Vec<_> = cancel.transitions.iter().map(|t| t.to.as_str()).collect();
        assert_eq!(destinations, vec!["cancelled", "paid_cancelled"]);

        let paid_cancelled = cancel.transition("paid_cancelled").unwrap();
        assert_eq!(paid_cancelled.from, vec!["paid"]);
        assert_eq!(paid_cancelled.after_hooks, 1);
        assert_eq!(paid_cancelled.before_hooks, 0);
    }

    #[test]
    fn referenced_states_include_unregistered_endpoints() {
        let definition = machine().definition();
        assert_eq!(
            definition.referenced_states(),
            vec!["cancelled", "checkout", "draft", "paid", "paid_cancelled"]
        );
    }

    #[test]
    fn definition_serializes_to_json() {
        let definition = machine().definition();
        let json = serde_json::to_value(&definition).unwrap();

        assert_eq!(json["initial"], "draft");
        assert_eq!(json["events"][0]["name"], "cancel");
        assert_eq!(json["events"][0]["transitions"][0]["from"][1], "checkout");

        let back: super::MachineDefinition = serde_json::from_value(json).unwrap();
        assert_eq!(back, definition);
    }
}
