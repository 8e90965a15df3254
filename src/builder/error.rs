//! Build errors for transition tables.

use thiserror::Error;

/// A single problem found while validating a transition table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableIssue {
    #[error("'{trigger}' is permitted more than once from '{state}'")]
    DuplicateRow { state: String, trigger: String },

    #[error("final state '{state}' has an outgoing row for '{trigger}'")]
    ExitFromFinal { state: String, trigger: String },
}

/// Errors that can occur when building a transition table.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No transitions defined. Add at least one row")]
    NoTransitions,

    #[error("Invalid transition table ({} issue(s)): {}", .issues.len(), join_issues(.issues))]
    InvalidTable { issues: Vec<TableIssue> },
}

fn join_issues(issues: &[TableIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_table_lists_every_issue() {
        let err = BuildError::InvalidTable {
            issues: vec![
                TableIssue::DuplicateRow {
                    state: "New".to_string(),
                    trigger: "Go".to_string(),
                },
                TableIssue::ExitFromFinal {
                    state: "Done".to_string(),
                    trigger: "Go".to_string(),
                },
            ],
        };

        assert_eq!(
            err.to_string(),
            "Invalid transition table (2 issue(s)): 'Go' is permitted more than once from 'New'; \
             final state 'Done' has an outgoing row for 'Go'"
        );
    }
}
