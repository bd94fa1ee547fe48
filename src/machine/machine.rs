//! State machine registries and the trigger engine.

use crate::builder::{EventDef, StateDef, TransitionDef};
use crate::core::{run_all, Hook, HookError, HookPhase, HookResult, Stater};
use crate::machine::definition::{
    EventDefinition, MachineDefinition, StateDefinition, TransitionDefinition,
};
use crate::machine::error::TriggerError;
use std::collections::BTreeMap;

/// Registries of states and events plus the initial state name.
///
/// A machine is configured once through [`initial`](Self::initial),
/// [`state`](Self::state) and [`event`](Self::event), then drives any number
/// of entities through [`trigger`](Self::trigger). Triggering borrows the
/// machine immutably, so a configured machine can be shared; each entity must
/// only be triggered by one caller at a time.
pub struct StateMachine<T: Stater> {
    initial: String,
    states: BTreeMap<String, StateDef<T>>,
    events: BTreeMap<String, EventDef<T>>,
}

impl<T: Stater> StateMachine<T> {
    /// Create an empty machine for entities of type `T`.
    pub fn new() -> Self {
        Self {
            initial: String::new(),
            states: BTreeMap::new(),
            events: BTreeMap::new(),
        }
    }

    /// Create an empty machine, inferring the entity type from `sample`.
    ///
    /// The sample is only used for type inference and is not retained.
    pub fn for_entity(_sample: &T) -> Self {
        Self::new()
    }

    /// Set the state assigned to entities whose state is still empty.
    ///
    /// Does not register a state definition by itself.
    pub fn initial(&mut self, name: &str) -> &mut Self {
        name.clone_into(&mut self.initial);
        self
    }

    pub fn initial_state(&self) -> &str {
        &self.initial
    }

    /// Get or create the state named `name`.
    pub fn state(&mut self, name: &str) -> &mut StateDef<T> {
        self.states
            .entry(name.to_string())
            .or_insert_with(|| StateDef::new(name))
    }

    /// Get or create the event named `name`.
    pub fn event(&mut self, name: &str) -> &mut EventDef<T> {
        self.events
            .entry(name.to_string())
            .or_insert_with(|| EventDef::new(name))
    }

    pub fn has_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    pub fn has_event(&self, name: &str) -> bool {
        self.events.contains_key(name)
    }

    /// Apply event `name` to `entity`.
    ///
    /// An entity with an empty state is first moved to the initial state;
    /// that write is kept even if the trigger then fails. Exactly one
    /// transition of the event must be eligible from the current state.
    /// Hooks run in the order exit, before, enter, after, with the state
    /// write between before and enter. A failing enter or after hook restores
    /// the pre-transition state without re-running any hook.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::core::StateField;
    /// use turnstile::machine::StateMachine;
    ///
    /// let mut machine = StateMachine::<StateField>::new();
    /// machine.initial("draft");
    /// machine.event("checkout").to("checkout").from(["draft"]);
    ///
    /// let mut order = StateField::default();
    /// machine.trigger("checkout", &mut order).unwrap();
    /// assert_eq!(order.as_str(), "checkout");
    ///
    /// // No transition of "checkout" starts from "checkout".
    /// let err = machine.trigger("checkout", &mut order).unwrap_err();
    /// assert!(err.is_no_transition());
    /// ```
    pub fn trigger(&self, name: &str, entity: &mut T) -> Result<(), TriggerError> {
        let state_was = self.current_state(entity);
        let transition = self.select(name, &state_was)?;
        let to = transition.destination();

        tracing::debug!(event = %name, from = %state_was, to = %to, "Triggering transition");

        let hook_failed = |phase: HookPhase, source: HookError| TriggerError::Hook {
            phase,
            event: name.to_string(),
            from: state_was.clone(),
            to: to.to_string(),
            source,
        };

        if let Some(state) = self.states.get(&state_was) {
            self.run_phase(HookPhase::Exit, state.exit_hooks(), entity)
                .map_err(|e| hook_failed(HookPhase::Exit, e))?;
        }

        self.run_phase(HookPhase::Before, transition.before_hooks(), entity)
            .map_err(|e| hook_failed(HookPhase::Before, e))?;

        entity.set_state(to);

        if let Some(state) = self.states.get(to) {
            if let Err(e) = self.run_phase(HookPhase::Enter, state.enter_hooks(), entity) {
                self.roll_back(entity, &state_was, to);
                return Err(hook_failed(HookPhase::Enter, e));
            }
        }

        if let Err(e) = self.run_phase(HookPhase::After, transition.after_hooks(), entity) {
            self.roll_back(entity, &state_was, to);
            return Err(hook_failed(HookPhase::After, e));
        }

        tracing::debug!(event = %name, from = %state_was, to = %to, "Transition complete");
        Ok(())
    }

    /// Whether `trigger(name, entity)` would find exactly one transition.
    ///
    /// Runs no hooks and does not touch the entity. An empty entity state is
    /// evaluated as the initial state.
    pub fn can_trigger(&self, name: &str, entity: &T) -> bool {
        let state = self.effective_state(entity);
        self.events
            .get(name)
            .is_some_and(|event| event.matching(state).count() == 1)
    }

    /// Names of all events [`can_trigger`](Self::can_trigger) accepts for `entity`,
    /// in name order.
    pub fn available_events(&self, entity: &T) -> Vec<&str> {
        let state = self.effective_state(entity);
        self.events
            .values()
            .filter(|event| event.matching(state).count() == 1)
            .map(|event| event.name())
            .collect()
    }

    /// Serializable snapshot of everything registered so far.
    pub fn definition(&self) -> MachineDefinition {
        MachineDefinition {
            initial: self.initial.clone(),
            states: self
                .states
                .values()
                .map(|state| StateDefinition {
                    name: state.name().to_string(),
                    enter_hooks: state.enter_hooks().len(),
                    exit_hooks: state.exit_hooks().len(),
                })
                .collect(),
            events: self
                .events
                .values()
                .map(|event| EventDefinition {
                    name: event.name().to_string(),
                    transitions: event
                        .transitions()
                        .map(|t| TransitionDefinition {
                            to: t.destination().to_string(),
                            from: t.sources().as_slice().to_vec(),
                            before_hooks: t.before_hooks().len(),
                            after_hooks: t.after_hooks().len(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Read the entity's state, writing the initial state first if it is empty.
    fn current_state(&self, entity: &mut T) -> String {
        let state = entity.state();
        if !state.is_empty() {
            return state.to_string();
        }

        tracing::trace!(initial = %self.initial, "Entity has no state, assigning initial state");
        entity.set_state(&self.initial);
        self.initial.clone()
    }

    fn effective_state<'a>(&'a self, entity: &'a T) -> &'a str {
        match entity.state() {
            "" => &self.initial,
            state => state,
        }
    }

    /// Pick the single transition of `name` eligible from `state`.
    fn select(&self, name: &str, state: &str) -> Result<&TransitionDef<T>, TriggerError> {
        let event = self
            .events
            .get(name)
            .ok_or_else(|| TriggerError::UnknownEvent {
                event: name.to_string(),
                state: state.to_string(),
            })?;

        let mut matched = event.transitions().filter(|t| t.matches(state));
        match (matched.next(), matched.next()) {
            (Some(transition), None) => Ok(transition),
            (None, _) => Err(TriggerError::NoMatchingTransition {
                event: name.to_string(),
                state: state.to_string(),
            }),
            (Some(_), Some(_)) => Err(TriggerError::AmbiguousTransition {
                event: name.to_string(),
                state: state.to_string(),
                candidates: event
                    .transitions()
                    .filter(|t| t.matches(state))
                    .map(|t| t.destination().to_string())
                    .collect(),
            }),
        }
    }

    fn run_phase(&self, phase: HookPhase, hooks: &[Hook<T>], entity: &mut T) -> HookResult {
        if !hooks.is_empty() {
            tracing::trace!(phase = %phase, count = hooks.len(), "Running hooks");
        }
        run_all(hooks, entity)
    }

    fn roll_back(&self, entity: &mut T, state_was: &str, to: &str) {
        tracing::debug!(from = %to, to = %state_was, "Rolling back state after hook failure");
        entity.set_state(state_was);
    }
}

impl<T: Stater> Default for StateMachine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Stater> std::fmt::Debug for StateMachine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("initial", &self.initial)
            .field("states", &self.states)
            .field("events", &self.events)
            .finish()
    }
}
