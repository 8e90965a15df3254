//! Transition history tracking.
//!
//! Every successful fire appends one record. Records are immutable and
//! the history itself is an immutable value: `record` returns a new
//! history and leaves the receiver untouched.

use super::state::State;
use super::trigger::Trigger;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single accepted transition.
///
/// # Example
///
/// ```rust
/// use orderly::core::{State, StateTransition, Trigger};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Light { Off, On }
///
/// impl State for Light {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Switch { Flip }
///
/// impl Trigger for Switch {
///     fn name(&self) -> &str { "Flip" }
/// }
///
/// let transition = StateTransition {
///     from: Light::Off,
///     to: Light::On,
///     trigger: Switch::Flip,
///     timestamp: Utc::now(),
/// };
/// assert!(!transition.is_reentry());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, T: Trigger> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// The trigger that was fired
    pub trigger: T,
    /// When the transition was accepted
    pub timestamp: DateTime<Utc>,
}

impl<S: State, T: Trigger> StateTransition<S, T> {
    /// True for self-loops, i.e. explicitly permitted reentry.
    pub fn is_reentry(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of accepted transitions.
///
/// # Example
///
/// ```rust
/// use orderly::core::{State, StateHistory, StateTransition, Trigger};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Step { Start, Middle, End }
///
/// impl State for Step {
///     fn name(&self) -> &str {
///         match self {
///             Self::Start => "Start",
///             Self::Middle => "Middle",
///             Self::End => "End",
///         }
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Go { Next }
///
/// impl Trigger for Go {
///     fn name(&self) -> &str { "Next" }
/// }
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Step::Start,
///         to: Step::Middle,
///         trigger: Go::Next,
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: Step::Middle,
///         to: Step::End,
///         trigger: Go::Next,
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.get_path(), vec![&Step::Start, &Step::Middle, &Step::End]);
/// assert_eq!(history.triggers().len(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, T: Trigger> {
    transitions: Vec<StateTransition<S, T>>,
}

impl<S: State, T: Trigger> Default for StateHistory<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: Trigger> StateHistory<S, T> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// Copies every existing record. Owners that append on each step
    /// should use [`push`](Self::push) instead.
    pub fn record(&self, transition: StateTransition<S, T>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub(crate) fn push(&mut self, transition: StateTransition<S, T>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first record's `from` state followed by the `to` state
    /// of every record. Reentries show up as repeated states.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Triggers that were accepted, in firing order.
    pub fn triggers(&self) -> Vec<&T> {
        self.transitions.iter().map(|t| &t.trigger).collect()
    }

    /// Duration between the first and last record, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S, T>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
