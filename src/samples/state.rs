//! State sample: drive one order through a trigger script.

use super::SampleError;
use crate::core::State;
use crate::order::{OrderStateMachine, OrderTrigger};
use std::io::Write;
use tracing::info;

/// The happy path: create, register, process, pack, ship, deliver.
pub const DEFAULT_SCRIPT: &[OrderTrigger] = &[
    OrderTrigger::CreateOrder,
    OrderTrigger::RegisterOrder,
    OrderTrigger::BeginProcessing,
    OrderTrigger::Packaging,
    OrderTrigger::Shipping,
    OrderTrigger::Delivering,
];

/// Fire `script` in order, printing the state after each step.
///
/// A rejected trigger is printed and the script carries on; the order is
/// returned so callers can inspect its final state and history.
pub fn run<W: Write>(
    out: &mut W,
    script: &[OrderTrigger],
) -> Result<OrderStateMachine, SampleError> {
    writeln!(out, "Behavioral - State")?;

    let mut order = OrderStateMachine::new();
    let order_id = order.id();
    order.on_transition(move |t| {
        info!(
            %order_id,
            from = t.from.name(),
            to = t.to.name(),
            trigger = %t.trigger,
            "order transition"
        );
    });

    for trigger in script {
        match order.fire(*trigger) {
            Ok(state) => writeln!(out, "state: {state}")?,
            Err(err) => writeln!(out, "rejected: {err}")?,
        }
    }

    Ok(order)
}

/// Render an order's history as pretty JSON.
pub fn history_json(order: &OrderStateMachine) -> Result<String, SampleError> {
    Ok(serde_json::to_string_pretty(order.history())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderState;

    fn output_of(script: &[OrderTrigger]) -> (Vec<String>, OrderStateMachine) {
        let mut out = Vec::new();
        let order = run(&mut out, script).unwrap();
        let text = String::from_utf8(out).unwrap();
        (text.lines().map(str::to_string).collect(), order)
    }

    #[test]
    fn default_script_completes_the_order() {
        let (lines, order) = output_of(DEFAULT_SCRIPT);

        assert_eq!(
            lines,
            vec![
                "Behavioral - State",
                "state: New",
                "state: Registered",
                "state: Processing",
                "state: Packaged",
                "state: Shipped",
                "state: Completed"
            ]
        );
        assert_eq!(order.state(), OrderState::Completed);
        assert_eq!(order.history().len(), 6);
    }

    #[test]
    fn rejected_steps_are_reported_and_skipped() {
        let (lines, order) = output_of(&[
            OrderTrigger::RegisterOrder,
            OrderTrigger::CancellByCustomer,
            OrderTrigger::BeginProcessing,
        ]);

        assert_eq!(lines[2], "state: Cancelled");
        assert_eq!(
            lines[3],
            "rejected: Illegal transition: 'BeginProcessing' is not permitted in state 'Cancelled'"
        );
        assert_eq!(order.state(), OrderState::Cancelled);
    }

    #[test]
    fn history_renders_as_json() {
        let (_, order) = output_of(&[OrderTrigger::SaveAsDraft]);
        let rendered = history_json(&order).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(json["transitions"][0]["from"], "New");
        assert_eq!(json["transitions"][0]["to"], "Draft");
        assert_eq!(json["transitions"][0]["trigger"], "SaveAsDraft");
    }
}
