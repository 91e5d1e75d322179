//! Array-backed binary heaps over `(priority, payload)` entries.
//!
//! [`MinHeap`] serves the edge-keyed Prim frontier and any caller that only
//! needs build, push, and extract-min. [`KeyedMinHeap`] adds O(1) key-to-slot
//! resolution so a payload's priority can be looked up and lowered in place,
//! which the vertex-keyed Prim variant relies on.
//!
//! The sift routines are shared with [`crate::sort::heap_sort`], which runs
//! them with a max ordering.

mod keyed;
mod min_heap;

pub use self::{keyed::KeyedMinHeap, min_heap::MinHeap};

/// Integer priority carried by every heap entry.
pub type Priority = i64;

/// A payload paired with the integer priority it is ordered by.
///
/// # Examples
/// ```
/// use spanwise_core::HeapEntry;
///
/// let entry = HeapEntry::new(3, "three");
/// assert_eq!(entry.priority, 3);
/// assert_eq!(entry.payload, "three");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct HeapEntry<T> {
    /// Ordering key; smaller values leave a min-heap first.
    pub priority: Priority,
    /// Caller data travelling with the priority.
    pub payload: T,
}

impl<T> HeapEntry<T> {
    /// Pairs `payload` with `priority`.
    #[must_use]
    pub const fn new(priority: Priority, payload: T) -> Self {
        Self { priority, payload }
    }
}

pub(crate) fn left_child(index: usize) -> usize {
    index.saturating_mul(2).saturating_add(1)
}

pub(crate) fn parent(index: usize) -> usize {
    index.saturating_sub(1) / 2
}

/// Moves `items[index]` down within `items[..len]` until neither child
/// outranks it.
///
/// `outranks(a, b)` holds when `a` belongs above `b`. Every exchange goes
/// through `swap` so callers can keep side tables in step.
pub(crate) fn sift_down<T, O, S>(items: &mut [T], len: usize, mut index: usize, outranks: O, mut swap: S)
where
    O: Fn(&T, &T) -> bool,
    S: FnMut(&mut [T], usize, usize),
{
    let len = len.min(items.len());
    loop {
        let left = left_child(index);
        let right = left.saturating_add(1);
        let mut top = index;
        if left < len && outranks(&items[left], &items[top]) {
            top = left;
        }
        if right < len && outranks(&items[right], &items[top]) {
            top = right;
        }
        if top == index {
            return;
        }
        swap(items, index, top);
        index = top;
    }
}

/// Moves `items[index]` towards the root while it outranks its parent.
pub(crate) fn sift_up<T, O, S>(items: &mut [T], mut index: usize, outranks: O, mut swap: S)
where
    O: Fn(&T, &T) -> bool,
    S: FnMut(&mut [T], usize, usize),
{
    while index > 0 && index < items.len() {
        let above = parent(index);
        if !outranks(&items[index], &items[above]) {
            return;
        }
        swap(items, index, above);
        index = above;
    }
}

/// Arranges `items[..len]` into heap order in O(n) by sifting every internal
/// node down, from the last parent back to the root.
pub(crate) fn heapify<T, O, S>(items: &mut [T], len: usize, outranks: O, mut swap: S)
where
    O: Fn(&T, &T) -> bool,
    S: FnMut(&mut [T], usize, usize),
{
    for index in (0..len / 2).rev() {
        sift_down(items, len, index, &outranks, &mut swap);
    }
}

pub(crate) fn lower_priority<T>(left: &HeapEntry<T>, right: &HeapEntry<T>) -> bool {
    left.priority < right.priority
}

pub(crate) fn swap_slots<T>(items: &mut [T], first: usize, second: usize) {
    items.swap(first, second);
}

/// Returns `true` when no entry has a lower priority than its parent.
#[cfg(test)]
pub(crate) fn is_min_heap<T>(entries: &[HeapEntry<T>]) -> bool {
    (1..entries.len()).all(|index| entries[parent(index)].priority <= entries[index].priority)
}

#[cfg(test)]
mod tests;
