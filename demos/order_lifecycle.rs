//! Purchase Order Lifecycle
//!
//! Drives one order down the happy path and a second one into a return,
//! showing rejected triggers along the way.
//!
//! Key concepts:
//! - Every move is a row in the order transition table
//! - Illegal triggers return an error and leave the order untouched
//! - `CreateOrder` in `New` is a reentrant self-loop
//! - Terminal states absorb every trigger
//!
//! Run with: cargo run --example order_lifecycle

use orderly::order::{OrderStateMachine, OrderTrigger};

fn drive(order: &mut OrderStateMachine, script: &[OrderTrigger]) {
    for trigger in script {
        match order.fire(*trigger) {
            Ok(state) => println!("  {trigger:<18} -> {state}"),
            Err(err) => println!("  {trigger:<18} !! {err}"),
        }
    }
}

fn main() {
    println!("=== Happy path ===");
    let mut order = OrderStateMachine::new();
    order.on_transition(|t| {
        if t.is_reentry() {
            println!("  (reentered {})", t.to);
        }
    });
    drive(
        &mut order,
        &[
            OrderTrigger::CreateOrder,
            OrderTrigger::Delivering,
            OrderTrigger::RegisterOrder,
            OrderTrigger::BeginProcessing,
            OrderTrigger::Packaging,
            OrderTrigger::Shipping,
            OrderTrigger::Delivering,
        ],
    );
    println!("Order {} finished in {}", order.id(), order.state());
    println!("Terminal: {}", order.is_terminal());

    println!("\n=== Returned by the customer ===");
    let mut order = OrderStateMachine::new();
    drive(
        &mut order,
        &[
            OrderTrigger::SaveAsDraft,
            OrderTrigger::RegisterOrder,
            OrderTrigger::BeginProcessing,
            OrderTrigger::Packaging,
            OrderTrigger::Shipping,
        ],
    );
    println!("Permitted from {}: {:?}", order.state(), order.permitted_triggers());
    drive(
        &mut order,
        &[OrderTrigger::ReturnByCustomer, OrderTrigger::Delivering],
    );

    let path: Vec<String> = order
        .history()
        .get_path()
        .iter()
        .map(|state| state.to_string())
        .collect();
    println!("Path: {}", path.join(" -> "));
}
