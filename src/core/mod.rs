//! Core state machine types.
//!
//! This module contains the pure building blocks shared by every
//! table-driven machine in the crate:
//! - State and trigger vocabularies via the `State` and `Trigger` traits
//! - Guard predicates for conditional rows
//! - Immutable transition history

mod guard;
mod history;
mod state;
mod trigger;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{State, UnknownVariant};
pub use trigger::Trigger;
