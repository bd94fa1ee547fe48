//! Turnstile: a string-named finite state machine engine.
//!
//! A machine holds named states and named events. Each event maps one or more
//! sets of source states to a destination state. Triggering an event on an
//! entity selects the single eligible transition, runs the lifecycle hooks
//! around the state change and leaves the entity's state field as the only
//! side effect. Persisting the entity afterwards is up to the caller.
//!
//! # Core Concepts
//!
//! - **Stater**: the two-method capability (`state`/`set_state`) entities implement
//! - **States**: carry ordered enter and exit hooks
//! - **Events**: group transitions keyed by destination; each transition has a
//!   de-duplicated source set (empty means any state) and before/after hooks
//! - **Trigger**: exit → before → state write → enter → after, with rollback
//!   when an enter or after hook fails
//!
//! # Example
//!
//! ```rust
//! use turnstile::core::{StateField, Stater};
//! use turnstile::impl_stater;
//! use turnstile::machine::StateMachine;
//!
//! #[derive(Default)]
//! struct Order {
//!     address: String,
//!     transition: StateField,
//! }
//!
//! impl_stater!(Order, transition);
//!
//! let mut machine = StateMachine::<Order>::new();
//! machine.initial("draft");
//! machine.state("checkout").enter(|order| {
//!     order.address = "set on checkout".to_string();
//!     Ok(())
//! });
//! machine.event("checkout").to("checkout").from(["draft"]);
//! machine.event("pay").to("paid").from(["checkout"]);
//!
//! let mut order = Order::default();
//! machine.trigger("checkout", &mut order).unwrap();
//! assert_eq!(order.state(), "checkout");
//! assert_eq!(order.address, "set on checkout");
//!
//! machine.trigger("pay", &mut order).unwrap();
//! assert_eq!(order.state(), "paid");
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{HookError, HookPhase, HookResult, StateField, Stater};
pub use builder::{EventDef, StateDef, TransitionDef};
pub use machine::{MachineDefinition, StateMachine, TriggerError};
