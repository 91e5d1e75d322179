//! Linked-list disjoint set with union by size.
//!
//! Sets are chains threaded through the `next` table, starting at the
//! representative. The representative slot records the set size and the
//! chain tail, so a union splices the smaller chain onto the larger tail and
//! relabels only the spliced elements.

use crate::error::StructureError;

use super::{DisjointSet, checked_slot};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Membership {
    Representative { size: usize },
    Member { representative: usize },
}

/// Disjoint set backed by index-linked chains with eager relabelling.
///
/// # Examples
/// ```
/// use spanwise_core::{DisjointSet, LinkedListSet};
///
/// let mut sets = LinkedListSet::with_universe(4);
/// let merged = sets.union(1, 2)?;
/// assert_eq!(sets.find(2)?, merged);
/// assert_eq!(sets.find(3)?, 3);
/// # Ok::<(), spanwise_core::StructureError>(())
/// ```
#[derive(Clone, Debug)]
pub struct LinkedListSet {
    membership: Vec<Membership>,
    next: Vec<Option<usize>>,
    tails: Vec<usize>,
}

impl LinkedListSet {
    /// Returns the size of the set represented by `representative`, or `None`
    /// when the label is not currently a representative.
    #[must_use]
    pub fn set_size(&self, representative: usize) -> Option<usize> {
        match self.membership.get(representative) {
            Some(Membership::Representative { size }) if representative != 0 => Some(*size),
            _ => None,
        }
    }

    fn representative_size(&self, element: usize) -> Result<Option<usize>, StructureError> {
        let slot = checked_slot(element, self.universe())?;
        Ok(match self.membership[slot] {
            Membership::Representative { size } => Some(size),
            Membership::Member { .. } => None,
        })
    }
}

impl DisjointSet for LinkedListSet {
    fn with_universe(universe: usize) -> Self {
        let slots = universe.saturating_add(1);
        Self {
            membership: vec![Membership::Representative { size: 1 }; slots],
            next: vec![None; slots],
            tails: (0..slots).collect(),
        }
    }

    fn universe(&self) -> usize {
        self.membership.len().saturating_sub(1)
    }

    fn find(&mut self, element: usize) -> Result<usize, StructureError> {
        let slot = checked_slot(element, self.universe())?;
        Ok(match self.membership[slot] {
            Membership::Representative { .. } => slot,
            Membership::Member { representative } => representative,
        })
    }

    fn union(&mut self, first: usize, second: usize) -> Result<usize, StructureError> {
        let first_size = self.representative_size(first)?;
        let second_size = self.representative_size(second)?;
        let invalid = StructureError::InvalidOperand { first, second };
        if first == second {
            return Err(invalid);
        }
        let (Some(first_size), Some(second_size)) = (first_size, second_size) else {
            return Err(invalid);
        };

        let (smaller, larger) = if first_size < second_size {
            (first, second)
        } else {
            (second, first)
        };

        let larger_tail = self.tails[larger];
        self.next[larger_tail] = Some(smaller);
        self.tails[larger] = self.tails[smaller];
        self.membership[larger] = Membership::Representative {
            size: first_size.saturating_add(second_size),
        };

        let mut cursor = Some(smaller);
        while let Some(element) = cursor {
            self.membership[element] = Membership::Member {
                representative: larger,
            };
            cursor = self.next[element];
        }

        Ok(larger)
    }
}
