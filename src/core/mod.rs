//! Core types shared by the definition API and the trigger engine.
//!
//! This module contains:
//! - The `Stater` capability entities implement, plus the embeddable `StateField`
//! - Hook types and phases
//! - The de-duplicated `SourceSet` of eligible source states

mod hook;
mod source_set;
mod stater;

pub use hook::{Hook, HookError, HookPhase, HookResult};
pub(crate) use hook::{boxed, run_all};
pub use source_set::SourceSet;
pub use stater::{StateField, Stater};
