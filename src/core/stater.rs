//! The `Stater` capability and an embeddable state holder.
//!
//! The engine never owns entities. It reads and writes an entity's current
//! state name through this trait and nothing else.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability required of every entity driven by a state machine.
///
/// Both methods must be free of side effects other than reading or
/// writing the state name itself.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Stater;
///
/// struct Ticket {
///     status: String,
/// }
///
/// impl Stater for Ticket {
///     fn state(&self) -> &str {
///         &self.status
///     }
///
///     fn set_state(&mut self, name: &str) {
///         self.status = name.to_string();
///     }
/// }
///
/// let mut ticket = Ticket { status: String::new() };
/// ticket.set_state("open");
/// assert_eq!(ticket.state(), "open");
/// ```
pub trait Stater {
    /// Current state name. An empty string means "not yet initialized".
    fn state(&self) -> &str;

    /// Overwrite the current state name. Does not persist anything.
    fn set_state(&mut self, name: &str);
}

/// Bare state-name holder meant to be embedded in caller types.
///
/// Serializes as a plain string so entities that embed it keep a flat
/// representation when the caller persists them. Pair it with
/// [`impl_stater!`](crate::impl_stater) to forward the [`Stater`] methods.
///
/// # Example
///
/// ```rust
/// use turnstile::core::{StateField, Stater};
///
/// let mut field = StateField::default();
/// assert!(field.is_empty());
///
/// field.set_state("draft");
/// assert_eq!(field.state(), "draft");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateField {
    state: String,
}

impl StateField {
    /// Create a holder already set to `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { state: name.into() }
    }

    /// True while no state has been assigned.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.state
    }
}

impl Stater for StateField {
    fn state(&self) -> &str {
        &self.state
    }

    fn set_state(&mut self, name: &str) {
        name.clone_into(&mut self.state);
    }
}

impl fmt::Display for StateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.state)
    }
}

impl From<&str> for StateField {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for StateField {
    fn from(state: String) -> Self {
        Self { state }
    }
}

impl Stater for String {
    fn state(&self) -> &str {
        self
    }

    fn set_state(&mut self, name: &str) {
        name.clone_into(self);
    }
}
