//! Purchase-order lifecycle.
//!
//! ```text
//! New ─CreateOrder─▶ New
//! New ─SaveAsDraft─▶ Draft ─RegisterOrder─▶ Registered
//! New ─RegisterOrder─▶ Registered ─BeginProcessing─▶ Processing
//! Registered ─CancellByCustomer─▶ Cancelled
//! Processing ─CancellBySupplier─▶ Cancelled
//! Processing ─Packaging─▶ Packaged ─Shipping─▶ Shipped ─Delivering─▶ Completed
//! Packaged | Shipped ─ReturnByShipment─▶ ReturnedByShipment
//! Shipped ─ReturnByCustomer─▶ ReturnedByCustomer
//! ```
//!
//! `Completed`, `Cancelled`, `ReturnedByShipment` and `ReturnedByCustomer`
//! are absorbing.

mod lifecycle;
mod states;

pub use lifecycle::{build_order_table, order_transition_table, OrderStateMachine};
pub use states::{OrderState, OrderTrigger};
