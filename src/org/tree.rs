//! Arena-backed employee hierarchy.

use super::iter::OrgTreeIterator;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Stable handle of an employee inside one `OrgTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Unknown employee {0}")]
    UnknownNode(NodeId),
}

/// One employee record.
///
/// `parent` is fixed when the record is created, which is what keeps the
/// hierarchy acyclic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Employee {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The boss, `None` for a root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Direct reports in the order they were added.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Flat table of employees linked by `NodeId`.
///
/// Records are never removed, so every handle handed out stays valid for
/// the life of the tree.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrgTree {
    employees: Vec<Employee>,
}

impl OrgTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an employee with no boss.
    pub fn add_root(&mut self, name: impl Into<String>) -> NodeId {
        self.push(name.into(), None)
    }

    /// Add an employee reporting to `parent`, appended after its existing
    /// reports.
    pub fn add_under(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
    ) -> Result<NodeId, TreeError> {
        if self.get(parent).is_none() {
            return Err(TreeError::UnknownNode(parent));
        }
        let id = self.push(name.into(), Some(parent));
        self.employees[parent.0].children.push(id);
        Ok(id)
    }

    fn push(&mut self, name: String, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.employees.len());
        self.employees.push(Employee {
            name,
            parent,
            children: Vec::new(),
        });
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Employee> {
        self.employees.get(id.0)
    }

    // Handles only come from this tree and records are never removed.
    pub(crate) fn node(&self, id: NodeId) -> &Employee {
        &self.employees[id.0]
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(Employee::name)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Employee::parent)
    }

    /// Direct reports of `id`; empty for unknown handles.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Employee::children).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Every employee without a boss, in creation order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.employees
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_root())
            .map(|(i, _)| NodeId(i))
    }

    /// Start a cursor over the subtree rooted at `root`.
    pub fn iter(&self, root: NodeId) -> Result<OrgTreeIterator<'_>, TreeError> {
        OrgTreeIterator::new(self, root)
    }
}
