//! Trigger trait for the events that drive transitions.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A named event that may cause a state transition.
///
/// Triggers carry no data; the transition table alone decides what a
/// trigger means in a given state.
///
/// # Example
///
/// ```rust
/// use orderly::core::Trigger;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Close,
/// }
///
/// impl Trigger for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Close => "Close",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait Trigger:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the trigger's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestTrigger {
        Ship,
        Deliver,
    }

    impl Trigger for TestTrigger {
        fn name(&self) -> &str {
            match self {
                Self::Ship => "Ship",
                Self::Deliver => "Deliver",
            }
        }
    }

    #[test]
    fn trigger_name_returns_correct_value() {
        assert_eq!(TestTrigger::Ship.name(), "Ship");
        assert_eq!(TestTrigger::Deliver.name(), "Deliver");
    }

    #[test]
    fn trigger_serializes_correctly() {
        let json = serde_json::to_string(&TestTrigger::Deliver).unwrap();
        let back: TestTrigger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TestTrigger::Deliver);
    }
}
