//! Guard predicates for conditional transitions.
//!
//! A guard is attached to a single table row. The row is only taken when
//! the guard accepts the machine's current state; otherwise firing the
//! trigger is rejected and nothing changes.

use super::state::State;
use std::fmt;
use std::sync::Arc;

/// Pure predicate that decides whether a guarded row may be taken.
///
/// # Example
///
/// ```rust
/// use orderly::core::{Guard, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Stock {
///     Available,
///     Reserved,
///     SoldOut,
/// }
///
/// impl State for Stock {
///     fn name(&self) -> &str {
///         match self {
///             Self::Available => "Available",
///             Self::Reserved => "Reserved",
///             Self::SoldOut => "SoldOut",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::SoldOut)
///     }
/// }
///
/// let not_sold_out = Guard::new(|s: &Stock| !s.is_final());
///
/// assert!(not_sold_out.check(&Stock::Available));
/// assert!(not_sold_out.check(&Stock::Reserved));
/// assert!(!not_sold_out.check(&Stock::SoldOut));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows the transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
