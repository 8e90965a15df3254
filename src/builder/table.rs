//! Builder for constructing transition tables.

use crate::builder::error::{BuildError, TableIssue};
use crate::core::{Guard, State, Trigger};
use crate::machine::{TransitionRule, TransitionTable};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type TableCheck = Validation<(), NonEmptyVec<TableIssue>>;

/// Fluent builder for `TransitionTable`.
///
/// Rows keep the order they were added in; that order is what
/// `permitted_triggers` reports.
///
/// # Example
///
/// ```
/// use orderly::builder::TransitionTableBuilder;
/// use orderly::machine::StateMachine;
/// use orderly::{state_enum, trigger_enum};
///
/// state_enum! {
///     enum Door { Closed, Open, Bricked }
///     final: [Bricked]
/// }
///
/// trigger_enum! {
///     enum Push { Open, Close, Brick }
/// }
///
/// let table = TransitionTableBuilder::new()
///     .permit(Door::Closed, Push::Open, Door::Open)
///     .permit(Door::Open, Push::Close, Door::Closed)
///     .permit_reentry(Door::Closed, Push::Close)
///     .permit(Door::Closed, Push::Brick, Door::Bricked)
///     .build()
///     .unwrap();
///
/// let mut door = StateMachine::new(Door::Closed, table);
/// assert_eq!(door.fire(Push::Open), Ok(Door::Open));
/// assert!(door.fire(Push::Brick).is_err());
/// ```
pub struct TransitionTableBuilder<S: State, T: Trigger> {
    rules: Vec<TransitionRule<S, T>>,
}

impl<S: State, T: Trigger> TransitionTableBuilder<S, T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Permit `trigger` to move `from` to `to`.
    pub fn permit(mut self, from: S, trigger: T, to: S) -> Self {
        self.rules.push(TransitionRule {
            from,
            trigger,
            to,
            guard: None,
        });
        self
    }

    /// Permit `trigger` as a self-loop on `state`.
    pub fn permit_reentry(self, state: S, trigger: T) -> Self {
        let to = state.clone();
        self.permit(state, trigger, to)
    }

    /// Permit `trigger` to move `from` to `to` only while `guard` holds.
    pub fn permit_if(mut self, from: S, trigger: T, to: S, guard: Guard<S>) -> Self {
        self.rules.push(TransitionRule {
            from,
            trigger,
            to,
            guard: Some(guard),
        });
        self
    }

    /// Validate and build the table.
    ///
    /// Every problem is reported at once rather than stopping at the first.
    pub fn build(self) -> Result<TransitionTable<S, T>, BuildError> {
        if self.rules.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut checks: Vec<TableCheck> = Vec::new();
        for (index, rule) in self.rules.iter().enumerate() {
            checks.push(check_unique(&self.rules[..index], rule));
            checks.push(check_leaves_non_final(rule));
        }

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(TransitionTable::from_rules(self.rules)),
            Validation::Failure(issues) => Err(BuildError::InvalidTable {
                issues: issues.iter().cloned().collect(),
            }),
        }
    }
}

impl<S: State, T: Trigger> Default for TransitionTableBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_unique<S: State, T: Trigger>(
    earlier: &[TransitionRule<S, T>],
    rule: &TransitionRule<S, T>,
) -> TableCheck {
    if earlier.iter().any(|e| e.matches(&rule.from, &rule.trigger)) {
        Validation::fail(TableIssue::DuplicateRow {
            state: rule.from.name().to_string(),
            trigger: rule.trigger.name().to_string(),
        })
    } else {
        Validation::success(())
    }
}

fn check_leaves_non_final<S: State, T: Trigger>(rule: &TransitionRule<S, T>) -> TableCheck {
    if rule.from.is_final() {
        Validation::fail(TableIssue::ExitFromFinal {
            state: rule.from.name().to_string(),
            trigger: rule.trigger.name().to_string(),
        })
    } else {
        Validation::success(())
    }
}
