//! Fluent definition API for states, events and transitions.
//!
//! Every definition is reached through get-or-create lookups on
//! [`StateMachine`](crate::machine::StateMachine), and every mutator returns
//! `&mut Self`, so definitions can be built in one chained expression or
//! spread over several calls that accumulate.
//!
//! # Example
//!
//! ```
//! use turnstile::core::StateField;
//! use turnstile::machine::StateMachine;
//!
//! let mut machine = StateMachine::<StateField>::new();
//! machine.initial("draft");
//! machine.state("checkout").enter(|_| Ok(())).exit(|_| Ok(()));
//! machine
//!     .event("checkout")
//!     .to("checkout")
//!     .from(["draft"])
//!     .before(|_| Ok(()))
//!     .after(|_| Ok(()));
//!
//! let mut entity = StateField::default();
//! machine.trigger("checkout", &mut entity).unwrap();
//! assert_eq!(entity.as_str(), "checkout");
//! ```

pub mod event;
pub mod macros;
pub mod state;
pub mod transition;

pub use event::EventDef;
pub use state::StateDef;
pub use transition::TransitionDef;
