//! Disjoint-set (union-find) structures over element labels `1..=universe`.
//!
//! Two strategies share the [`DisjointSet`] contract:
//!
//! - [`LinkedListSet`] keeps every set as an index-linked chain with an eager
//!   representative table, so `find` is a single lookup and `union` relabels
//!   the smaller chain (union by size).
//! - [`TreeSet`] keeps parent pointers, attaches the lower-ranked root under
//!   the higher one (union by rank), and compresses paths during `find`.
//!
//! `union` only accepts two distinct current representatives; callers resolve
//! elements through `find` first.

mod linked_list;
mod tree;

use std::{fmt, str::FromStr, sync::Arc};

use crate::error::{MstError, StructureError};

pub use self::{linked_list::LinkedListSet, tree::TreeSet};

/// Union-find capability shared by every disjoint-set strategy.
pub trait DisjointSet {
    /// Creates `universe` singleton sets labelled `1..=universe`.
    fn with_universe(universe: usize) -> Self
    where
        Self: Sized;

    /// Number of elements tracked by the structure.
    fn universe(&self) -> usize;

    /// Returns the representative of the set containing `element`.
    ///
    /// # Errors
    /// Returns [`StructureError::ElementOutOfRange`] when `element` is not in
    /// `1..=universe`.
    fn find(&mut self, element: usize) -> Result<usize, StructureError>;

    /// Merges the sets represented by `first` and `second` and returns the
    /// surviving representative.
    ///
    /// # Errors
    /// Returns [`StructureError::InvalidOperand`] when the arguments are equal
    /// or either is not currently a representative, and
    /// [`StructureError::ElementOutOfRange`] for labels outside the universe.
    fn union(&mut self, first: usize, second: usize) -> Result<usize, StructureError>;
}

/// Selects a [`DisjointSet`] strategy by name.
///
/// # Examples
/// ```
/// use spanwise_core::DisjointSetKind;
///
/// let kind: DisjointSetKind = "tree".parse()?;
/// assert_eq!(kind, DisjointSetKind::Tree);
/// # Ok::<(), spanwise_core::MstError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DisjointSetKind {
    /// Linked chains with union by size and O(1) `find`.
    LinkedList,
    /// Parent-pointer forest with union by rank and path compression.
    Tree,
}

impl DisjointSetKind {
    /// Every supported strategy.
    pub const ALL: [Self; 2] = [Self::LinkedList, Self::Tree];

    /// Stable selector name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LinkedList => "linked-list",
            Self::Tree => "tree",
        }
    }
}

impl fmt::Display for DisjointSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisjointSetKind {
    type Err = MstError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == raw)
            .ok_or_else(|| MstError::UnsupportedVariant {
                name: Arc::from(raw),
            })
    }
}

/// Maps a label to its slot, rejecting the unused slot `0` and anything past
/// the universe.
fn checked_slot(element: usize, universe: usize) -> Result<usize, StructureError> {
    if element == 0 || element > universe {
        return Err(StructureError::ElementOutOfRange { element, universe });
    }
    Ok(element)
}
