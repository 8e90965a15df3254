//! Table-driven state machine engine.
//!
//! A machine holds a current state and a shared, validated
//! `TransitionTable`. Firing a trigger either follows exactly one row or
//! fails with a `TransitionError`; there is no third outcome.
//!
//! Everything here is synchronous. Callers that share a machine across
//! threads must synchronize access themselves.

mod engine;
mod transition;

pub use engine::{StateMachine, TransitionListener};
pub use transition::{TransitionError, TransitionRule, TransitionTable};
