//! Core State trait for table-driven machines.
//!
//! States are plain values; every method here is pure and only inspects
//! the value itself. Whether a state is absorbing in a particular machine
//! is decided by that machine's transition table, not by this trait.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history records
/// - `PartialEq`: transition lookup compares states
/// - `Debug`: states appear in diagnostics
/// - `Serialize` + `Deserialize`: history can be rendered as JSON
///
/// # Example
///
/// ```rust
/// use orderly::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum ParcelState {
///     Packed,
///     InTransit,
///     Delivered,
///     Lost,
/// }
///
/// impl State for ParcelState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Packed => "Packed",
///             Self::InTransit => "InTransit",
///             Self::Delivered => "Delivered",
///             Self::Lost => "Lost",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Delivered | Self::Lost)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Lost)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// A table builder refuses outgoing rows from final states, so a
    /// final state is always absorbing in a built table.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state (an unhappy ending).
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// A state or trigger name that matched no variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} '{name}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub name: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}
