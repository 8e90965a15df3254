//! Transition rows, the validated table, and firing errors.

use crate::core::{Guard, State, Trigger};

/// Errors returned when a trigger cannot be fired.
///
/// In both cases the machine is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("Illegal transition: '{trigger}' is not permitted in state '{state}'")]
    IllegalTransition { state: String, trigger: String },

    #[error("Guard blocked '{trigger}' in state '{state}'")]
    GuardBlocked { state: String, trigger: String },
}

impl TransitionError {
    pub(crate) fn illegal<S: State, T: Trigger>(state: &S, trigger: &T) -> Self {
        Self::IllegalTransition {
            state: state.name().to_string(),
            trigger: trigger.name().to_string(),
        }
    }

    pub(crate) fn guard_blocked<S: State, T: Trigger>(state: &S, trigger: &T) -> Self {
        Self::GuardBlocked {
            state: state.name().to_string(),
            trigger: trigger.name().to_string(),
        }
    }
}

/// One row of a transition table: `from --trigger--> to`.
#[derive(Debug, Clone)]
pub struct TransitionRule<S: State, T: Trigger> {
    pub from: S,
    pub trigger: T,
    pub to: S,
    pub guard: Option<Guard<S>>,
}

impl<S: State, T: Trigger> TransitionRule<S, T> {
    /// True if this row starts at `state` and is fired by `trigger`.
    pub fn matches(&self, state: &S, trigger: &T) -> bool {
        self.from == *state && self.trigger == *trigger
    }

    /// True if the row's guard (if any) accepts `state`.
    pub fn guard_allows(&self, state: &S) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(state))
    }

    pub fn is_reentry(&self) -> bool {
        self.from == self.to
    }
}

/// Validated set of transition rows.
///
/// Only a `TransitionTableBuilder` can produce one, so every table is
/// deterministic (at most one row per state/trigger pair) and has no rows
/// leaving a final state.
#[derive(Debug, Clone)]
pub struct TransitionTable<S: State, T: Trigger> {
    rules: Vec<TransitionRule<S, T>>,
}

impl<S: State, T: Trigger> TransitionTable<S, T> {
    pub(crate) fn from_rules(rules: Vec<TransitionRule<S, T>>) -> Self {
        Self { rules }
    }

    /// Find the row for a state/trigger pair.
    pub fn lookup(&self, state: &S, trigger: &T) -> Option<&TransitionRule<S, T>> {
        self.rules.iter().find(|rule| rule.matches(state, trigger))
    }

    /// Triggers that would currently succeed from `state`, in table order.
    pub fn permitted_triggers(&self, state: &S) -> Vec<T> {
        self.rules
            .iter()
            .filter(|rule| rule.from == *state && rule.guard_allows(state))
            .map(|rule| rule.trigger.clone())
            .collect()
    }

    /// A state is absorbing when no row leaves it.
    pub fn is_absorbing(&self, state: &S) -> bool {
        !self.rules.iter().any(|rule| rule.from == *state)
    }

    pub fn rules(&self) -> &[TransitionRule<S, T>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
