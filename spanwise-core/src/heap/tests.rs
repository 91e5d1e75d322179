//! Unit tests for the binary heaps.

use proptest::prelude::*;
use rstest::rstest;

use crate::{error::StructureError, test_utils::suite_proptest_config};

use super::{HeapEntry, KeyedMinHeap, MinHeap, is_min_heap};

fn drain<T>(heap: &mut MinHeap<T>) -> Vec<HeapEntry<T>> {
    let mut drained = Vec::with_capacity(heap.len());
    while !heap.is_empty() {
        drained.push(heap.extract_min().expect("non-empty heap must yield"));
    }
    drained
}

fn drain_keyed(heap: &mut KeyedMinHeap) -> Vec<HeapEntry<usize>> {
    let mut drained = Vec::with_capacity(heap.len());
    while !heap.is_empty() {
        drained.push(heap.extract_min().expect("non-empty heap must yield"));
        assert!(heap.positions_consistent());
    }
    drained
}

#[test]
fn extract_from_empty_heap_fails() {
    let mut heap: MinHeap<()> = MinHeap::new();
    assert_eq!(heap.extract_min(), Err(StructureError::EmptyStructure));
    assert!(heap.peek().is_none());
}

#[rstest]
#[case::ascending(vec![1, 2, 3, 4, 5])]
#[case::descending(vec![9, 7, 5, 3, 1])]
#[case::duplicates(vec![4, 1, 4, 1, 0, 4])]
#[case::single(vec![42])]
fn from_entries_builds_a_valid_heap(#[case] priorities: Vec<i64>) {
    let entries: Vec<_> = priorities
        .iter()
        .enumerate()
        .map(|(index, &priority)| HeapEntry::new(priority, index))
        .collect();
    let mut heap = MinHeap::from_entries(entries);
    assert!(is_min_heap(heap.entries()));

    let mut expected = priorities.clone();
    expected.sort_unstable();
    let drained: Vec<i64> = drain(&mut heap).iter().map(|entry| entry.priority).collect();
    assert_eq!(drained, expected);
}

#[test]
fn push_interleaves_with_extraction() {
    let mut heap = MinHeap::new();
    heap.push(HeapEntry::new(5, 'e'));
    heap.push(HeapEntry::new(2, 'b'));
    assert_eq!(heap.peek().map(|entry| entry.payload), Some('b'));
    assert_eq!(heap.extract_min().map(|entry| entry.payload), Ok('b'));

    heap.push(HeapEntry::new(1, 'a'));
    heap.push(HeapEntry::new(9, 'i'));
    assert!(is_min_heap(heap.entries()));
    let order: Vec<char> = drain(&mut heap).into_iter().map(|entry| entry.payload).collect();
    assert_eq!(order, vec!['a', 'e', 'i']);
}

#[test]
fn collect_builds_a_heap() {
    let mut heap: MinHeap<&str> = [HeapEntry::new(3, "c"), HeapEntry::new(0, "a")]
        .into_iter()
        .collect();
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.extract_min().map(|entry| entry.payload), Ok("a"));
}

#[test]
fn keyed_heap_reports_priorities_until_extraction() {
    let mut heap =
        KeyedMinHeap::from_priorities(4, [(1, 8), (2, 3), (4, 5)]).expect("valid keys");
    assert!(heap.positions_consistent());
    assert_eq!(heap.priority(2), Some(3));
    assert_eq!(heap.priority(3), None);
    assert!(!heap.contains(3));

    let min = heap.extract_min().expect("heap holds entries");
    assert_eq!(min, HeapEntry::new(3, 2));
    assert!(!heap.contains(2));
    assert_eq!(heap.priority(2), None);
    assert!(heap.positions_consistent());
}

#[test]
fn decrease_key_reorders_the_heap() {
    let mut heap = KeyedMinHeap::from_priorities(5, (1..=5).map(|key| (key, 100)))
        .expect("valid keys");
    heap.decrease_key(4, 10).expect("lower priority must be accepted");
    heap.decrease_key(2, 20).expect("lower priority must be accepted");
    heap.decrease_key(4, 5).expect("repeat decrease must be accepted");
    assert!(heap.positions_consistent());

    let order: Vec<usize> = drain_keyed(&mut heap)
        .into_iter()
        .take(2)
        .map(|entry| entry.payload)
        .collect();
    assert_eq!(order, vec![4, 2]);
}

#[rstest]
#[case::equal(7)]
#[case::higher(8)]
fn decrease_key_rejects_non_decreasing_priorities(#[case] requested: i64) {
    let mut heap = KeyedMinHeap::from_priorities(2, [(1, 7), (2, 9)]).expect("valid keys");
    let err = heap
        .decrease_key(1, requested)
        .expect_err("non-decreasing priority must be rejected");
    assert_eq!(
        err,
        StructureError::InvalidDecrease {
            key: 1,
            current: 7,
            requested,
        }
    );
    assert_eq!(heap.priority(1), Some(7));
}

#[test]
fn decrease_key_rejects_extracted_keys() {
    let mut heap = KeyedMinHeap::from_priorities(2, [(1, 0), (2, 9)]).expect("valid keys");
    heap.extract_min().expect("heap holds entries");
    assert_eq!(
        heap.decrease_key(1, -1),
        Err(StructureError::UnknownKey { key: 1 })
    );
    assert_eq!(
        heap.decrease_key(99, 0),
        Err(StructureError::UnknownKey { key: 99 })
    );
}

#[rstest]
#[case::duplicate(vec![(1, 0), (1, 3)], StructureError::DuplicateKey { key: 1 })]
#[case::out_of_range(
    vec![(1, 0), (4, 3)],
    StructureError::ElementOutOfRange { element: 4, universe: 3 },
)]
fn keyed_heap_rejects_invalid_keys(
    #[case] items: Vec<(usize, i64)>,
    #[case] expected: StructureError,
) {
    let err = KeyedMinHeap::from_priorities(3, items).expect_err("invalid keys must fail");
    assert_eq!(err, expected);
}

#[test]
fn keyed_heap_extracts_to_empty() {
    let mut heap = KeyedMinHeap::from_priorities(1, [(1, 0)]).expect("valid keys");
    assert_eq!(heap.extract_min().map(|entry| entry.payload), Ok(1));
    assert!(heap.is_empty());
    assert_eq!(heap.extract_min(), Err(StructureError::EmptyStructure));
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn min_heap_drains_in_sorted_order(priorities in prop::collection::vec(-50_i64..50, 0..64)) {
        let mut heap: MinHeap<usize> = priorities
            .iter()
            .enumerate()
            .map(|(index, &priority)| HeapEntry::new(priority, index))
            .collect();
        prop_assert!(is_min_heap(heap.entries()));
        let drained: Vec<i64> = drain(&mut heap).iter().map(|entry| entry.priority).collect();
        let mut expected = priorities;
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn keyed_heap_tracks_positions_through_decreases(
        priorities in prop::collection::vec(0_i64..1_000, 1..48),
        decreases in prop::collection::vec((any::<prop::sample::Index>(), 0_i64..1_000), 0..64),
    ) {
        let key_bound = priorities.len();
        let mut expected: Vec<i64> = priorities.clone();
        let mut heap = KeyedMinHeap::from_priorities(
            key_bound,
            priorities.iter().enumerate().map(|(index, &priority)| (index + 1, priority)),
        )
        .expect("keys are distinct and in range");

        for (index, requested) in decreases {
            let slot = index.index(key_bound);
            let key = slot + 1;
            let result = heap.decrease_key(key, requested);
            if requested < expected[slot] {
                prop_assert!(result.is_ok());
                expected[slot] = requested;
            } else {
                prop_assert!(result.is_err());
            }
            prop_assert!(heap.positions_consistent());
            prop_assert!(is_min_heap(heap.entries()));
        }

        let drained: Vec<i64> = drain_keyed(&mut heap).iter().map(|entry| entry.priority).collect();
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
    }
}
