//! Unit tests for the sorting routines.

use proptest::prelude::*;
use rstest::rstest;

use crate::{error::StructureError, heap::HeapEntry, test_utils::suite_proptest_config};

use super::{counting_sort, heap_sort};

fn entries(priorities: &[i64]) -> Vec<HeapEntry<usize>> {
    priorities
        .iter()
        .enumerate()
        .map(|(index, &priority)| HeapEntry::new(priority, index))
        .collect()
}

fn priorities<T>(entries: &[HeapEntry<T>]) -> Vec<i64> {
    entries.iter().map(|entry| entry.priority).collect()
}

#[rstest]
#[case::empty(vec![])]
#[case::single(vec![3])]
#[case::reversed(vec![5, 4, 3, 2, 1, 0])]
#[case::duplicates(vec![2, 0, 2, 1, 0, 2])]
#[case::negative(vec![-4, 7, -9, 0])]
fn heap_sort_orders_by_priority(#[case] input: Vec<i64>) {
    let mut sorted = entries(&input);
    heap_sort(&mut sorted);

    let mut expected = input.clone();
    expected.sort_unstable();
    assert_eq!(priorities(&sorted), expected);
}

#[test]
fn counting_sort_keeps_equal_priorities_in_input_order() {
    let sorted = counting_sort(entries(&[3, 1, 3, 0, 1, 3]), 3).expect("priorities in range");
    let payloads: Vec<usize> = sorted.iter().map(|entry| entry.payload).collect();
    assert_eq!(payloads, vec![3, 1, 4, 0, 2, 5]);
}

#[test]
fn counting_sort_accepts_empty_input_with_any_bound() {
    let sorted = counting_sort(Vec::<HeapEntry<()>>::new(), 0).expect("empty input sorts");
    assert!(sorted.is_empty());
}

#[rstest]
#[case::above_bound(vec![0, 5, 1], 4, 5)]
#[case::negative(vec![2, -1], 4, -1)]
fn counting_sort_rejects_out_of_range_priorities(
    #[case] input: Vec<i64>,
    #[case] max_priority: i64,
    #[case] rejected: i64,
) {
    let err = counting_sort(entries(&input), max_priority).expect_err("out of range must fail");
    assert_eq!(
        err,
        StructureError::PriorityOutOfRange {
            priority: rejected,
            max_priority,
        }
    );
}

#[test]
fn counting_sort_reports_unallocatable_bucket_ranges() {
    let err =
        counting_sort(entries(&[0, i64::MAX]), i64::MAX).expect_err("bucket range cannot fit");
    assert!(matches!(err, StructureError::BucketAllocation { .. }));
    assert_eq!(err.code().as_str(), "STRUCTURE_BUCKET_ALLOCATION");
}

#[test]
fn counting_sort_sizes_buckets_by_the_present_span() {
    let huge = i64::from(i32::MAX);
    let sorted = counting_sort(entries(&[huge, huge - 2, huge - 1, huge - 2]), i64::MAX)
        .expect("a narrow span must sort");
    assert_eq!(priorities(&sorted), vec![huge - 2, huge - 2, huge - 1, huge]);
    let order: Vec<usize> = sorted.iter().map(|entry| entry.payload).collect();
    assert_eq!(order, vec![1, 3, 2, 0]);
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn both_sorts_produce_sorted_permutations(input in prop::collection::vec(0_i64..40, 0..96)) {
        let mut expected = input.clone();
        expected.sort_unstable();

        let mut by_heap = entries(&input);
        heap_sort(&mut by_heap);
        prop_assert_eq!(priorities(&by_heap), expected.clone());
        let mut payloads: Vec<usize> = by_heap.iter().map(|entry| entry.payload).collect();
        payloads.sort_unstable();
        prop_assert_eq!(payloads, (0..input.len()).collect::<Vec<_>>());

        let by_counting = counting_sort(entries(&input), 39).expect("priorities in range");
        prop_assert_eq!(priorities(&by_counting), expected);
        let counting_is_stable = by_counting.windows(2).all(|pair| {
            pair[0].priority < pair[1].priority || pair[0].payload < pair[1].payload
        });
        prop_assert!(counting_is_stable);
    }
}
