//! Order lifecycle scenarios, end to end through the public API.

use orderly::core::State;
use orderly::machine::TransitionError;
use orderly::order::{OrderState, OrderStateMachine, OrderTrigger};
use orderly::samples;
use std::sync::{Arc, Mutex};

fn order_in(path: &[OrderTrigger]) -> OrderStateMachine {
    let mut order = OrderStateMachine::new();
    for trigger in path {
        order.fire(*trigger).unwrap();
    }
    order
}

#[test]
fn happy_path_ends_completed() {
    let order = order_in(&[
        OrderTrigger::RegisterOrder,
        OrderTrigger::BeginProcessing,
        OrderTrigger::Packaging,
        OrderTrigger::Shipping,
        OrderTrigger::Delivering,
    ]);

    assert_eq!(order.state(), OrderState::Completed);
    assert!(order.is_terminal());
    assert_eq!(
        order.history().triggers(),
        vec![
            &OrderTrigger::RegisterOrder,
            &OrderTrigger::BeginProcessing,
            &OrderTrigger::Packaging,
            &OrderTrigger::Shipping,
            &OrderTrigger::Delivering
        ]
    );
}

#[test]
fn create_order_is_reentrant_in_new() {
    let mut order = OrderStateMachine::new();

    assert_eq!(order.fire(OrderTrigger::CreateOrder), Ok(OrderState::New));
    assert_eq!(order.fire(OrderTrigger::CreateOrder), Ok(OrderState::New));
    assert_eq!(order.state(), OrderState::New);
    assert!(order
        .history()
        .transitions()
        .iter()
        .all(|t| t.is_reentry()));
}

#[test]
fn create_order_outside_new_is_illegal() {
    let mut order = order_in(&[OrderTrigger::SaveAsDraft]);

    assert!(order.fire(OrderTrigger::CreateOrder).is_err());
    assert_eq!(order.state(), OrderState::Draft);
}

#[test]
fn delivering_a_new_order_is_rejected() {
    let mut order = OrderStateMachine::new();

    let err = order.fire(OrderTrigger::Delivering).unwrap_err();

    assert_eq!(
        err,
        TransitionError::IllegalTransition {
            state: "New".to_string(),
            trigger: "Delivering".to_string(),
        }
    );
    assert_eq!(order.state(), OrderState::New);
    assert!(order.history().is_empty());
}

#[test]
fn every_terminal_state_absorbs_every_trigger() {
    let routes: [&[OrderTrigger]; 5] = [
        &[
            OrderTrigger::RegisterOrder,
            OrderTrigger::BeginProcessing,
            OrderTrigger::Packaging,
            OrderTrigger::Shipping,
            OrderTrigger::Delivering,
        ],
        &[OrderTrigger::RegisterOrder, OrderTrigger::CancellByCustomer],
        &[
            OrderTrigger::RegisterOrder,
            OrderTrigger::BeginProcessing,
            OrderTrigger::Packaging,
            OrderTrigger::ReturnByShipment,
        ],
        &[
            OrderTrigger::RegisterOrder,
            OrderTrigger::BeginProcessing,
            OrderTrigger::Packaging,
            OrderTrigger::Shipping,
            OrderTrigger::ReturnByCustomer,
        ],
        &[
            OrderTrigger::SaveAsDraft,
            OrderTrigger::RegisterOrder,
            OrderTrigger::BeginProcessing,
            OrderTrigger::CancellBySupplier,
        ],
    ];

    let mut endings = Vec::new();
    for route in routes {
        let mut order = order_in(route);
        let ending = order.state();
        assert!(ending.is_final());
        assert!(order.permitted_triggers().is_empty());

        for trigger in OrderTrigger::ALL {
            assert!(
                matches!(
                    order.fire(*trigger),
                    Err(TransitionError::IllegalTransition { .. })
                ),
                "{trigger} escaped {ending}"
            );
        }
        assert_eq!(order.state(), ending);
        endings.push(ending);
    }

    assert_eq!(
        endings,
        vec![
            OrderState::Completed,
            OrderState::Cancelled,
            OrderState::ReturnedByShipment,
            OrderState::ReturnedByCustomer,
            OrderState::Cancelled
        ]
    );
}

#[test]
fn shipped_orders_can_be_returned_by_shipment() {
    let mut order = order_in(&[
        OrderTrigger::RegisterOrder,
        OrderTrigger::BeginProcessing,
        OrderTrigger::Packaging,
        OrderTrigger::Shipping,
    ]);

    assert_eq!(
        order.permitted_triggers(),
        vec![
            OrderTrigger::Delivering,
            OrderTrigger::ReturnByShipment,
            OrderTrigger::ReturnByCustomer
        ]
    );
    assert_eq!(
        order.fire(OrderTrigger::ReturnByShipment),
        Ok(OrderState::ReturnedByShipment)
    );
    assert!(order.state().is_error());
}

#[test]
fn listeners_observe_the_lifecycle() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut order = OrderStateMachine::new();
    order.on_transition(move |t| sink.lock().unwrap().push(t.to));

    order.fire(OrderTrigger::CreateOrder).unwrap();
    order.fire(OrderTrigger::Shipping).unwrap_err();
    order.fire(OrderTrigger::RegisterOrder).unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![OrderState::New, OrderState::Registered]
    );
}

#[test]
fn state_sample_prints_the_happy_path() {
    let mut out = Vec::new();
    let order = samples::state::run(&mut out, samples::state::DEFAULT_SCRIPT).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("Behavioral - State\nstate: New\nstate: Registered\n"));
    assert!(text.ends_with("state: Completed\n"));
    assert_eq!(order.state(), OrderState::Completed);
}
