//! Orderly: a table-driven order lifecycle and a restartable org-tree cursor
//!
//! Two independent pieces live here:
//!
//! - **Order lifecycle**: a finite-state machine whose every move is a row
//!   in an explicit, validated transition table. Triggers without a row are
//!   rejected with a recoverable error and leave the order untouched.
//! - **Org-tree cursor**: an external iterator over an arena-backed
//!   employee hierarchy that walks in pre-order without recursion, climbing
//!   parent links after each leaf, and can be reset and replayed.
//!
//! # Core Concepts
//!
//! - **State / Trigger**: vocabularies declared with `state_enum!` and
//!   `trigger_enum!`
//! - **TransitionTable**: the only source of truth for allowed moves
//! - **StateHistory**: immutable record of accepted transitions
//! - **OrgTreeIterator**: cursor with per-node child progress
//!
//! # Example
//!
//! ```rust
//! use orderly::order::{OrderState, OrderStateMachine, OrderTrigger};
//!
//! let mut order = OrderStateMachine::new();
//! order.fire(OrderTrigger::CreateOrder).unwrap();
//! assert_eq!(order.state(), OrderState::New);
//!
//! order.fire(OrderTrigger::RegisterOrder).unwrap();
//! assert!(order.fire(OrderTrigger::Delivering).is_err());
//! assert_eq!(order.state(), OrderState::Registered);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod order;
pub mod org;
pub mod samples;

// Re-export commonly used types
pub use builder::{BuildError, TransitionTableBuilder};
pub use core::{Guard, State, StateHistory, StateTransition, Trigger};
pub use machine::{StateMachine, TransitionError, TransitionTable};
pub use order::{OrderState, OrderStateMachine, OrderTrigger};
pub use org::{Employee, NodeId, OrgTree, OrgTreeIterator};
