//! Purchase-order states and triggers.

use crate::{state_enum, trigger_enum};

state_enum! {
    /// Lifecycle position of a purchase order.
    #[derive(Default)]
    pub enum OrderState {
        /// Freshly created, nothing recorded yet
        #[default]
        New,
        /// Saved for later, not yet registered
        Draft,
        Registered,
        Processing,
        Packaged,
        Shipped,
        /// Delivered to the customer
        Completed,
        Cancelled,
        ReturnedByShipment,
        ReturnedByCustomer,
    }
    final: [Completed, Cancelled, ReturnedByShipment, ReturnedByCustomer]
    error: [Cancelled, ReturnedByShipment, ReturnedByCustomer]
}

trigger_enum! {
    /// Business events that move an order through its lifecycle.
    pub enum OrderTrigger {
        CreateOrder,
        SaveAsDraft,
        RegisterOrder,
        CancellByCustomer,
        CancellBySupplier,
        BeginProcessing,
        Packaging,
        Shipping,
        Delivering,
        ReturnByShipment,
        ReturnByCustomer,
    }
}
