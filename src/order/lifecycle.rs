//! The purchase-order transition table and the order entity.

use super::states::{OrderState, OrderTrigger};
use crate::builder::{BuildError, TransitionTableBuilder};
use crate::core::{State, StateHistory, StateTransition, Trigger};
use crate::machine::{StateMachine, TransitionError, TransitionTable};
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};
use uuid::Uuid;

/// Build the order lifecycle table.
///
/// `New` accepts `CreateOrder` as a reentry; the four terminal states have
/// no rows at all.
pub fn build_order_table() -> Result<TransitionTable<OrderState, OrderTrigger>, BuildError> {
    use OrderState::*;
    use OrderTrigger::*;

    TransitionTableBuilder::new()
        .permit_reentry(New, CreateOrder)
        .permit(New, SaveAsDraft, Draft)
        .permit(New, RegisterOrder, Registered)
        .permit(Draft, RegisterOrder, Registered)
        .permit(Registered, CancellByCustomer, Cancelled)
        .permit(Registered, BeginProcessing, Processing)
        .permit(Processing, CancellBySupplier, Cancelled)
        .permit(Processing, Packaging, Packaged)
        .permit(Packaged, Shipping, Shipped)
        .permit(Packaged, ReturnByShipment, ReturnedByShipment)
        .permit(Shipped, Delivering, Completed)
        .permit(Shipped, ReturnByShipment, ReturnedByShipment)
        .permit(Shipped, ReturnByCustomer, ReturnedByCustomer)
        .build()
}

/// Shared, lazily built order table.
pub fn order_transition_table() -> Arc<TransitionTable<OrderState, OrderTrigger>> {
    static TABLE: OnceLock<Arc<TransitionTable<OrderState, OrderTrigger>>> = OnceLock::new();
    TABLE
        .get_or_init(|| Arc::new(build_order_table().expect("Order table should always build")))
        .clone()
}

/// A purchase order driven through its lifecycle by triggers.
pub struct OrderStateMachine {
    id: Uuid,
    machine: StateMachine<OrderState, OrderTrigger>,
}

impl OrderStateMachine {
    /// Create an order in `New` with a fresh id.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    pub fn with_id(id: Uuid) -> Self {
        Self {
            id,
            machine: StateMachine::with_shared_table(OrderState::New, order_transition_table()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> OrderState {
        *self.machine.current_state()
    }

    /// True once the order reached one of its four endings.
    pub fn is_terminal(&self) -> bool {
        self.machine.is_final()
    }

    pub fn can_fire(&self, trigger: OrderTrigger) -> bool {
        self.machine.can_fire(&trigger)
    }

    pub fn permitted_triggers(&self) -> Vec<OrderTrigger> {
        self.machine.permitted_triggers()
    }

    pub fn history(&self) -> &StateHistory<OrderState, OrderTrigger> {
        self.machine.history()
    }

    pub fn on_transition<F>(&mut self, listener: F)
    where
        F: Fn(&StateTransition<OrderState, OrderTrigger>) + Send + Sync + 'static,
    {
        self.machine.on_transition(listener);
    }

    /// Fire a trigger against this order.
    ///
    /// Rejected triggers leave the order untouched and return
    /// `TransitionError::IllegalTransition`.
    pub fn fire(&mut self, trigger: OrderTrigger) -> Result<OrderState, TransitionError> {
        match self.machine.fire(trigger) {
            Ok(state) => {
                debug!(
                    order_id = %self.id,
                    trigger = trigger.name(),
                    state = state.name(),
                    "order moved"
                );
                Ok(state)
            }
            Err(err) => {
                warn!(order_id = %self.id, error = %err, "order trigger rejected");
                Err(err)
            }
        }
    }
}

impl Default for OrderStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OrderStateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderStateMachine")
            .field("id", &self.id)
            .field("state", &self.state())
            .field("transitions", &self.history().len())
            .finish()
    }
}
