//! Forest disjoint set with union by rank and path compression.

use crate::error::StructureError;

use super::{DisjointSet, checked_slot};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Node {
    Root { rank: u32 },
    Child { parent: usize },
}

/// Disjoint set backed by a parent-pointer forest.
///
/// Roots carry a rank bounding their height. `find` rewrites every visited
/// node to point straight at the root it discovers.
///
/// # Examples
/// ```
/// use spanwise_core::{DisjointSet, TreeSet};
///
/// let mut sets = TreeSet::with_universe(5);
/// let left = sets.union(1, 2)?;
/// let right = sets.union(3, 4)?;
/// let root = sets.union(left, right)?;
/// assert_eq!(sets.find(4)?, root);
/// assert_eq!(sets.find(5)?, 5);
/// # Ok::<(), spanwise_core::StructureError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TreeSet {
    nodes: Vec<Node>,
}

impl TreeSet {
    /// Returns the rank of `root`, or `None` when the label is not a root.
    #[must_use]
    pub fn rank(&self, root: usize) -> Option<u32> {
        match self.nodes.get(root) {
            Some(Node::Root { rank }) if root != 0 => Some(*rank),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn parent_of(&self, element: usize) -> Option<usize> {
        match self.nodes.get(element) {
            Some(Node::Child { parent }) => Some(*parent),
            _ => None,
        }
    }
}

impl DisjointSet for TreeSet {
    fn with_universe(universe: usize) -> Self {
        Self {
            nodes: vec![Node::Root { rank: 0 }; universe.saturating_add(1)],
        }
    }

    fn universe(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    fn find(&mut self, element: usize) -> Result<usize, StructureError> {
        let mut root = checked_slot(element, self.universe())?;
        while let Node::Child { parent } = self.nodes[root] {
            root = parent;
        }

        let mut current = element;
        while let Node::Child { parent } = self.nodes[current] {
            self.nodes[current] = Node::Child { parent: root };
            current = parent;
        }

        Ok(root)
    }

    fn union(&mut self, first: usize, second: usize) -> Result<usize, StructureError> {
        let universe = self.universe();
        let first_slot = checked_slot(first, universe)?;
        let second_slot = checked_slot(second, universe)?;
        let invalid = StructureError::InvalidOperand { first, second };
        if first_slot == second_slot {
            return Err(invalid);
        }
        let (Some(first_rank), Some(second_rank)) = (self.rank(first_slot), self.rank(second_slot))
        else {
            return Err(invalid);
        };

        let (root, child) = if first_rank > second_rank {
            (first_slot, second_slot)
        } else {
            (second_slot, first_slot)
        };

        if first_rank == second_rank {
            self.nodes[root] = Node::Root {
                rank: first_rank.saturating_add(1),
            };
        }
        self.nodes[child] = Node::Child { parent: root };

        Ok(root)
    }
}
