//! Console sample drivers.
//!
//! Each driver writes its illustration to any `io::Write`, so the binary
//! prints to stdout and tests capture into a buffer.

pub mod iterator;
pub mod state;

use crate::org::{NodeId, OrgTree, TreeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("Failed to write sample output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// The organisation used by the iterator sample.
///
/// ```text
/// Boss
/// ├── Employee 1
/// │   ├── Emp 1.1
/// │   ├── Emp 1.2
/// │   ├── Emp 1.3
/// │   │   ├── Emp 1.3.1
/// │   │   ├── Emp 1.3.2
/// │   │   └── Emp 1.3.3
/// │   └── Emp 1.4
/// └── Employee 2
///     └── Emp 2.1
/// ```
pub fn sample_organisation() -> Result<(OrgTree, NodeId), TreeError> {
    let mut tree = OrgTree::new();
    let boss = tree.add_root("Boss");

    let emp1 = tree.add_under(boss, "Employee 1")?;
    tree.add_under(emp1, "Emp 1.1")?;
    tree.add_under(emp1, "Emp 1.2")?;
    let emp13 = tree.add_under(emp1, "Emp 1.3")?;
    tree.add_under(emp13, "Emp 1.3.1")?;
    tree.add_under(emp13, "Emp 1.3.2")?;
    tree.add_under(emp13, "Emp 1.3.3")?;
    tree.add_under(emp1, "Emp 1.4")?;

    let emp2 = tree.add_under(boss, "Employee 2")?;
    tree.add_under(emp2, "Emp 2.1")?;

    Ok((tree, boss))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_organisation_has_eleven_employees() {
        let (tree, boss) = sample_organisation().unwrap();
        assert_eq!(tree.len(), 11);
        assert_eq!(tree.roots().collect::<Vec<_>>(), vec![boss]);
        assert_eq!(tree.children(boss).len(), 2);
    }
}
