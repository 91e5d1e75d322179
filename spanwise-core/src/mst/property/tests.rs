//! Property-based test runners for the spanning tree strategies.
//!
//! Hosts the proptest runners, rstest cases pinned to each graph family, and
//! unit tests for the oracle itself.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::test_utils::suite_proptest_config;

use super::equivalence::run_oracle_equivalence_property;
use super::metamorphic::{run_reordering_property, run_weight_shift_property};
use super::oracle::reverse_delete;
use super::strategies::{generate_fixture, mst_fixture_strategy};
use super::types::GraphFamily;

/// Expands into an rstest function running `$runner` over a fixed grid of
/// families and seeds.
macro_rules! parameterised_property_test {
    ($test_name:ident, $runner:expr, $expectation:expr) => {
        #[rstest::rstest]
        #[case::sparse_42(GraphFamily::Sparse, 42)]
        #[case::sparse_999(GraphFamily::Sparse, 999)]
        #[case::dense_42(GraphFamily::Dense, 42)]
        #[case::dense_999(GraphFamily::Dense, 999)]
        #[case::ties_42(GraphFamily::ManyTies, 42)]
        #[case::ties_7777(GraphFamily::ManyTies, 7777)]
        #[case::loops_42(GraphFamily::SelfLoops, 42)]
        #[case::split_42(GraphFamily::Split, 42)]
        #[case::split_999(GraphFamily::Split, 999)]
        fn $test_name(#[case] family: GraphFamily, #[case] seed: u64) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let fixture = generate_fixture(family, &mut rng);
            ($runner)(&fixture, seed).expect($expectation);
        }
    };
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn mst_oracle_equivalence(fixture in mst_fixture_strategy()) {
        run_oracle_equivalence_property(&fixture)?;
    }

    #[test]
    fn mst_reordering_invariance(fixture in mst_fixture_strategy(), seed in any::<u64>()) {
        run_reordering_property(&fixture, seed)?;
    }

    #[test]
    fn mst_weight_shift(fixture in mst_fixture_strategy()) {
        run_weight_shift_property(&fixture)?;
    }
}

parameterised_property_test!(
    oracle_equivalence_rstest,
    |fixture, _seed| run_oracle_equivalence_property(fixture),
    "oracle equivalence must hold"
);

parameterised_property_test!(
    reordering_invariance_rstest,
    run_reordering_property,
    "reordering must not change costs"
);

parameterised_property_test!(
    weight_shift_rstest,
    |fixture, _seed| run_weight_shift_property(fixture),
    "weight shift must raise costs uniformly"
);

#[test]
fn oracle_triangle() {
    let rows = vec![vec![3], vec![1, 2, 1], vec![2, 3, 2], vec![1, 3, 3]];
    assert_eq!(reverse_delete(&rows), Some(3));
}

#[test]
fn oracle_ignores_self_loops() {
    let rows = vec![vec![2], vec![1, 1, 0], vec![1, 2, 4]];
    assert_eq!(reverse_delete(&rows), Some(4));
}

#[test]
fn oracle_flags_disconnected_graphs() {
    let rows = vec![vec![4], vec![1, 2, 1], vec![3, 4, 1]];
    assert_eq!(reverse_delete(&rows), None);
}

#[test]
fn oracle_handles_trivial_graphs() {
    assert_eq!(reverse_delete(&[vec![0]]), Some(0));
    assert_eq!(reverse_delete(&[vec![1]]), Some(0));
}

#[test]
fn generated_families_match_their_connectivity() {
    for family in GraphFamily::ALL {
        let fixture = generate_fixture(family, &mut SmallRng::seed_from_u64(5));
        assert_eq!(
            reverse_delete(&fixture.rows).is_none(),
            family == GraphFamily::Split,
            "{family:?}"
        );
    }
}
