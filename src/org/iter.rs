//! Restartable pre-order cursor over an `OrgTree`.

use super::tree::{Employee, NodeId, OrgTree, TreeError};
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// External cursor that walks a subtree without recursion or a stack.
///
/// For every node it has descended from, the cursor remembers which child
/// to try next. After a leaf it climbs parent links until it finds a node
/// with an untried child. The climb never yields, so callers see exactly
/// one pre-order pass in child insertion order.
///
/// The per-node progress lives in the cursor, so any number of cursors can
/// walk the same tree independently.
///
/// # Example
///
/// ```
/// use orderly::org::OrgTree;
///
/// let mut tree = OrgTree::new();
/// let boss = tree.add_root("Boss");
/// let lead = tree.add_under(boss, "Lead").unwrap();
/// tree.add_under(lead, "Dev").unwrap();
/// tree.add_under(boss, "Ops").unwrap();
///
/// let names: Vec<_> = tree.iter(boss).unwrap().map(|(_, e)| e.name()).collect();
/// assert_eq!(names, ["Boss", "Lead", "Dev", "Ops"]);
/// ```
#[derive(Debug, Clone)]
pub struct OrgTreeIterator<'a> {
    tree: &'a OrgTree,
    root: NodeId,
    current: NodeId,
    // indexed by NodeId, grown on demand; missing entries mean "no child tried"
    next_child: Vec<usize>,
    started: bool,
}

impl<'a> OrgTreeIterator<'a> {
    pub fn new(tree: &'a OrgTree, root: NodeId) -> Result<Self, TreeError> {
        if tree.get(root).is_none() {
            return Err(TreeError::UnknownNode(root));
        }
        Ok(Self {
            tree,
            root,
            current: root,
            next_child: Vec::new(),
            started: false,
        })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The node produced by the last successful `advance`, or the root
    /// before the first one.
    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn current_employee(&self) -> &'a Employee {
        self.tree.node(self.current)
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Move to the next node in pre-order.
    ///
    /// Returns `false` once the whole subtree has been produced, and keeps
    /// returning `false` until `reset`.
    pub fn advance(&mut self) -> bool {
        if !self.started {
            self.started = true;
            self.current = self.root;
            trace!(node = %self.current, "cursor started");
            return true;
        }

        loop {
            let node = self.current;
            let next = self.next_child_of(node);
            if let Some(&child) = self.tree.children(node).get(next) {
                self.set_next_child(node, next + 1);
                self.current = child;
                trace!(node = %child, parent = %node, "cursor descended");
                return true;
            }

            if node == self.root {
                return false;
            }
            match self.tree.parent(node) {
                Some(parent) => self.current = parent,
                None => return false,
            }
        }
    }

    /// Rewind to the pre-start condition.
    pub fn reset(&mut self) {
        self.current = self.root;
        self.next_child.clear();
        self.started = false;
        debug!(root = %self.root, "cursor reset");
    }

    fn next_child_of(&self, node: NodeId) -> usize {
        self.next_child.get(node.index()).copied().unwrap_or(0)
    }

    fn set_next_child(&mut self, node: NodeId, next: usize) {
        let index = node.index();
        if self.next_child.len() <= index {
            self.next_child.resize(index + 1, 0);
        }
        self.next_child[index] = next;
    }
}

impl<'a> Iterator for OrgTreeIterator<'a> {
    type Item = (NodeId, &'a Employee);

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            Some((self.current, self.current_employee()))
        } else {
            None
        }
    }
}

impl FusedIterator for OrgTreeIterator<'_> {}
