//! Binary min-heap over arbitrary payloads.

use crate::error::StructureError;

use super::{HeapEntry, heapify, lower_priority, sift_down, sift_up, swap_slots};

/// A binary min-heap of [`HeapEntry`] values stored in a flat vector.
///
/// Entries with equal priority leave in an unspecified order.
///
/// # Examples
/// ```
/// use spanwise_core::{HeapEntry, MinHeap};
///
/// let mut heap = MinHeap::from_entries(vec![
///     HeapEntry::new(5, 'e'),
///     HeapEntry::new(1, 'a'),
///     HeapEntry::new(3, 'c'),
/// ]);
/// assert_eq!(heap.extract_min()?.payload, 'a');
/// assert_eq!(heap.extract_min()?.payload, 'c');
/// # Ok::<(), spanwise_core::StructureError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MinHeap<T> {
    entries: Vec<HeapEntry<T>>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> MinHeap<T> {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a heap from `entries` in O(n).
    #[must_use]
    pub fn from_entries(mut entries: Vec<HeapEntry<T>>) -> Self {
        let len = entries.len();
        heapify(&mut entries, len, lower_priority, swap_slots);
        Self { entries }
    }

    /// Inserts `entry`, restoring heap order in O(log n).
    pub fn push(&mut self, entry: HeapEntry<T>) {
        self.entries.push(entry);
        let last = self.entries.len().saturating_sub(1);
        sift_up(&mut self.entries, last, lower_priority, swap_slots);
    }

    /// Removes and returns the entry with the smallest priority.
    ///
    /// # Errors
    /// Returns [`StructureError::EmptyStructure`] when the heap holds no
    /// entries.
    pub fn extract_min(&mut self) -> Result<HeapEntry<T>, StructureError> {
        let last = self
            .entries
            .len()
            .checked_sub(1)
            .ok_or(StructureError::EmptyStructure)?;
        self.entries.swap(0, last);
        let min = self.entries.pop().ok_or(StructureError::EmptyStructure)?;
        let len = self.entries.len();
        sift_down(&mut self.entries, len, 0, lower_priority, swap_slots);
        Ok(min)
    }

    /// Returns the entry with the smallest priority without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&HeapEntry<T>> {
        self.entries.first()
    }

    /// Number of entries currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the heap holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[HeapEntry<T>] {
        &self.entries
    }
}

impl<T> FromIterator<HeapEntry<T>> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = HeapEntry<T>>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}
