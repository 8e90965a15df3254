//! State machine that fires triggers against a transition table.

use crate::core::{State, StateHistory, StateTransition, Trigger};
use crate::machine::transition::{TransitionError, TransitionTable};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Callback invoked after every accepted transition.
pub type TransitionListener<S, T> = Box<dyn Fn(&StateTransition<S, T>) + Send + Sync>;

/// Synchronous, table-driven state machine.
///
/// The machine owns its current state and history. The table is shared,
/// so many machines can run over one validated table.
pub struct StateMachine<S: State, T: Trigger> {
    current: S,
    table: Arc<TransitionTable<S, T>>,
    history: StateHistory<S, T>,
    listeners: Vec<TransitionListener<S, T>>,
}

impl<S: State, T: Trigger> StateMachine<S, T> {
    /// Create a machine in `initial` that owns `table`.
    pub fn new(initial: S, table: TransitionTable<S, T>) -> Self {
        Self::with_shared_table(initial, Arc::new(table))
    }

    /// Create a machine in `initial` over a table shared with other machines.
    pub fn with_shared_table(initial: S, table: Arc<TransitionTable<S, T>>) -> Self {
        Self {
            current: initial,
            table,
            history: StateHistory::new(),
            listeners: Vec::new(),
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if the current state is declared final (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Check if the table has no row leaving the current state (pure)
    pub fn is_absorbing(&self) -> bool {
        self.table.is_absorbing(&self.current)
    }

    /// Get transition history (pure)
    pub fn history(&self) -> &StateHistory<S, T> {
        &self.history
    }

    pub fn table(&self) -> &TransitionTable<S, T> {
        &self.table
    }

    /// Check whether `trigger` would be accepted right now.
    pub fn can_fire(&self, trigger: &T) -> bool {
        self.table
            .lookup(&self.current, trigger)
            .is_some_and(|rule| rule.guard_allows(&self.current))
    }

    /// Triggers accepted from the current state, in table order.
    pub fn permitted_triggers(&self) -> Vec<T> {
        self.table.permitted_triggers(&self.current)
    }

    /// Register a callback run after each accepted transition.
    ///
    /// Listeners run in registration order and also see reentries.
    pub fn on_transition<F>(&mut self, listener: F)
    where
        F: Fn(&StateTransition<S, T>) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Fire a trigger.
    ///
    /// On success the machine moves to the row's target state, records the
    /// transition, notifies listeners and returns the new state. A missing
    /// row or a rejecting guard returns an error and changes nothing.
    pub fn fire(&mut self, trigger: T) -> Result<S, TransitionError> {
        let Some(rule) = self.table.lookup(&self.current, &trigger) else {
            warn!(
                state = self.current.name(),
                trigger = trigger.name(),
                "rejected illegal transition"
            );
            return Err(TransitionError::illegal(&self.current, &trigger));
        };

        if !rule.guard_allows(&self.current) {
            warn!(
                state = self.current.name(),
                trigger = trigger.name(),
                "guard blocked transition"
            );
            return Err(TransitionError::guard_blocked(&self.current, &trigger));
        }

        let to = rule.to.clone();
        let record = StateTransition {
            from: self.current.clone(),
            to: to.clone(),
            trigger,
            timestamp: Utc::now(),
        };

        debug!(
            from = record.from.name(),
            to = record.to.name(),
            trigger = record.trigger.name(),
            reentry = record.is_reentry(),
            "transition accepted"
        );

        self.history.push(record.clone());
        self.current = to.clone();
        for listener in &self.listeners {
            listener(&record);
        }

        Ok(to)
    }
}

impl<S: State, T: Trigger> fmt::Debug for StateMachine<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("rows", &self.table.len())
            .field("history", &self.history.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
