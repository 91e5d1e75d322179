//! Sorting primitives over [`HeapEntry`] lists.
//!
//! [`heap_sort`] is the comparison-based option: in place, O(n log n), not
//! stable. [`counting_sort`] buckets by priority in O(n + k), where `k` is the
//! spread between the lowest and highest priority, and keeps equal priorities
//! in input order.

use crate::{
    error::StructureError,
    heap::{HeapEntry, Priority, heapify, sift_down, swap_slots},
};

fn higher_priority<T>(left: &HeapEntry<T>, right: &HeapEntry<T>) -> bool {
    left.priority > right.priority
}

/// Sorts `entries` by ascending priority in place.
///
/// Builds a max-heap, then repeatedly moves the root behind the shrinking heap
/// prefix.
///
/// # Examples
/// ```
/// use spanwise_core::{HeapEntry, heap_sort};
///
/// let mut entries = vec![HeapEntry::new(4, 'd'), HeapEntry::new(1, 'a'), HeapEntry::new(2, 'b')];
/// heap_sort(&mut entries);
/// let order: Vec<char> = entries.iter().map(|entry| entry.payload).collect();
/// assert_eq!(order, vec!['a', 'b', 'd']);
/// ```
pub fn heap_sort<T>(entries: &mut [HeapEntry<T>]) {
    let len = entries.len();
    heapify(entries, len, higher_priority, swap_slots);
    for end in (1..len).rev() {
        entries.swap(0, end);
        sift_down(entries, end, 0, higher_priority, swap_slots);
    }
}

/// Returns `entries` ordered by ascending priority using one bucket per
/// priority between the lowest and highest present, all of which must lie in
/// `0..=max_priority`.
///
/// Entries sharing a priority keep their relative input order.
///
/// # Errors
/// Returns [`StructureError::PriorityOutOfRange`] when any priority is
/// negative or exceeds `max_priority`, and
/// [`StructureError::BucketAllocation`] when the buckets for the priority span
/// cannot be allocated.
///
/// # Examples
/// ```
/// use spanwise_core::{HeapEntry, counting_sort};
///
/// let entries = vec![HeapEntry::new(2, "x"), HeapEntry::new(0, "y"), HeapEntry::new(2, "z")];
/// let sorted = counting_sort(entries, 2)?;
/// let order: Vec<&str> = sorted.iter().map(|entry| entry.payload).collect();
/// assert_eq!(order, vec!["y", "x", "z"]);
/// # Ok::<(), spanwise_core::StructureError>(())
/// ```
pub fn counting_sort<T>(
    entries: Vec<HeapEntry<T>>,
    max_priority: Priority,
) -> Result<Vec<HeapEntry<T>>, StructureError> {
    let out_of_range = |priority| StructureError::PriorityOutOfRange {
        priority,
        max_priority,
    };
    if let Some(entry) = entries
        .iter()
        .find(|entry| entry.priority < 0 || entry.priority > max_priority)
    {
        return Err(out_of_range(entry.priority));
    }
    let (Some(lowest), Some(highest)) = (
        entries.iter().map(|entry| entry.priority).min(),
        entries.iter().map(|entry| entry.priority).max(),
    ) else {
        return Ok(entries);
    };

    // Both ends lie in `0..=max_priority`, so the span cannot overflow.
    let span = highest.saturating_sub(lowest);
    let requested = u64::try_from(span).map_or(u64::MAX, |span| span.saturating_add(1));
    let allocation_failed = || StructureError::BucketAllocation { buckets: requested };
    let bucket_count = usize::try_from(requested).map_err(|_| allocation_failed())?;
    let mut buckets: Vec<Vec<HeapEntry<T>>> = Vec::new();
    buckets
        .try_reserve_exact(bucket_count)
        .map_err(|_| allocation_failed())?;
    buckets.resize_with(bucket_count, Vec::new);

    for entry in entries {
        let bucket = usize::try_from(entry.priority.saturating_sub(lowest))
            .ok()
            .and_then(|index| buckets.get_mut(index))
            .ok_or_else(|| out_of_range(entry.priority))?;
        bucket.push(entry);
    }

    Ok(buckets.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests;
