//! Employee hierarchy and its traversal cursor.
//!
//! The hierarchy is an arena: employees live in one flat table and refer
//! to their boss and reports by `NodeId`. A cursor borrows the tree, so
//! the tree cannot change while a walk is in progress.

mod iter;
mod tree;

pub use iter::OrgTreeIterator;
pub use tree::{Employee, NodeId, OrgTree, TreeError};
