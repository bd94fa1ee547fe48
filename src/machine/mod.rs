//! The state machine: registries plus the trigger engine.
//!
//! # Key Concepts
//!
//! - **Registries**: states and events, created on first reference
//! - **Trigger**: selects the single eligible transition and runs hooks
//!   around the state write, rolling back on enter/after failure
//! - **Definition**: serializable snapshot of what has been registered

mod definition;
mod error;
#[allow(clippy::module_inception)]
mod machine;

pub use definition::{EventDefinition, MachineDefinition, StateDefinition, TransitionDefinition};
pub use error::TriggerError;
pub use machine::StateMachine;
