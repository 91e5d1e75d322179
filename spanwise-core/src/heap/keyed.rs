//! Min-heap keyed by dense integer labels with in-place decrease-key.
//!
//! A position index maps every key still in the heap to its current slot. The
//! index is rewritten on every exchange, so lookups and decrease-key never
//! scan the heap.

use crate::error::StructureError;

use super::{HeapEntry, Priority, heapify, lower_priority, sift_down, sift_up};

/// A binary min-heap whose payloads are keys in `0..=key_bound`.
///
/// # Examples
/// ```
/// use spanwise_core::KeyedMinHeap;
///
/// let mut heap = KeyedMinHeap::from_priorities(3, [(1, 0), (2, 10), (3, 7)])?;
/// heap.decrease_key(2, 4)?;
/// assert_eq!(heap.priority(2), Some(4));
/// assert_eq!(heap.extract_min()?.payload, 1);
/// assert_eq!(heap.extract_min()?.payload, 2);
/// # Ok::<(), spanwise_core::StructureError>(())
/// ```
#[derive(Clone, Debug)]
pub struct KeyedMinHeap {
    entries: Vec<HeapEntry<usize>>,
    positions: Vec<Option<usize>>,
}

impl KeyedMinHeap {
    /// Builds a heap from `(key, priority)` pairs in O(n + key_bound).
    ///
    /// # Errors
    /// Returns [`StructureError::ElementOutOfRange`] when a key exceeds
    /// `key_bound`, or [`StructureError::DuplicateKey`] when a key repeats.
    pub fn from_priorities(
        key_bound: usize,
        items: impl IntoIterator<Item = (usize, Priority)>,
    ) -> Result<Self, StructureError> {
        let mut positions = vec![None; key_bound.saturating_add(1)];
        let mut entries = Vec::new();
        for (key, priority) in items {
            let position = positions
                .get_mut(key)
                .ok_or(StructureError::ElementOutOfRange {
                    element: key,
                    universe: key_bound,
                })?;
            if position.is_some() {
                return Err(StructureError::DuplicateKey { key });
            }
            *position = Some(entries.len());
            entries.push(HeapEntry::new(priority, key));
        }

        let len = entries.len();
        heapify(&mut entries, len, lower_priority, |items, first, second| {
            swap_tracked(items, &mut positions, first, second);
        });
        Ok(Self { entries, positions })
    }

    /// Removes and returns the entry with the smallest priority.
    ///
    /// # Errors
    /// Returns [`StructureError::EmptyStructure`] when the heap holds no
    /// entries.
    pub fn extract_min(&mut self) -> Result<HeapEntry<usize>, StructureError> {
        let Self { entries, positions } = self;
        let last = entries
            .len()
            .checked_sub(1)
            .ok_or(StructureError::EmptyStructure)?;
        swap_tracked(entries, positions, 0, last);
        let min = entries.pop().ok_or(StructureError::EmptyStructure)?;
        if let Some(position) = positions.get_mut(min.payload) {
            *position = None;
        }
        let len = entries.len();
        sift_down(entries, len, 0, lower_priority, |items, first, second| {
            swap_tracked(items, positions, first, second);
        });
        Ok(min)
    }

    /// Returns the priority currently stored for `key`, if it is still queued.
    #[must_use]
    pub fn priority(&self, key: usize) -> Option<Priority> {
        self.slot(key)
            .and_then(|slot| self.entries.get(slot))
            .map(|entry| entry.priority)
    }

    /// Returns `true` while `key` has not been extracted.
    #[must_use]
    pub fn contains(&self, key: usize) -> bool {
        self.slot(key).is_some()
    }

    /// Lowers the priority of `key` to `priority` and restores heap order.
    ///
    /// # Errors
    /// Returns [`StructureError::UnknownKey`] when `key` is not queued, or
    /// [`StructureError::InvalidDecrease`] when `priority` is not strictly
    /// below the stored priority.
    pub fn decrease_key(&mut self, key: usize, priority: Priority) -> Result<(), StructureError> {
        let slot = self.slot(key).ok_or(StructureError::UnknownKey { key })?;
        let Self { entries, positions } = self;
        let entry = entries
            .get_mut(slot)
            .ok_or(StructureError::UnknownKey { key })?;
        if priority >= entry.priority {
            return Err(StructureError::InvalidDecrease {
                key,
                current: entry.priority,
                requested: priority,
            });
        }
        entry.priority = priority;
        sift_up(entries, slot, lower_priority, |items, first, second| {
            swap_tracked(items, positions, first, second);
        });
        Ok(())
    }

    /// Number of keys still queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` once every key has been extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn slot(&self, key: usize) -> Option<usize> {
        self.positions.get(key).copied().flatten()
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[HeapEntry<usize>] {
        &self.entries
    }

    /// Returns `true` when every queued key maps to the slot holding it.
    #[cfg(test)]
    pub(crate) fn positions_consistent(&self) -> bool {
        let indexed = self.positions.iter().filter(|slot| slot.is_some()).count();
        indexed == self.entries.len()
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(slot, entry)| self.slot(entry.payload) == Some(slot))
    }
}

fn swap_tracked(
    items: &mut [HeapEntry<usize>],
    positions: &mut [Option<usize>],
    first: usize,
    second: usize,
) {
    items.swap(first, second);
    for slot in [first, second] {
        if let Some(entry) = items.get(slot)
            && let Some(position) = positions.get_mut(entry.payload)
        {
            *position = Some(slot);
        }
    }
}
