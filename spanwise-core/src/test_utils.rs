//! Shared test utilities for `spanwise-core`.

use proptest::test_runner::Config as ProptestConfig;
use spanwise_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::graph::Graph;

/// Builds a proptest configuration from the shared CI profile so every
/// property suite honours `PROGTEST_CASES` and `SPANWISE_PBT_FORK`.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph from `(from, to, weight)` triples over `vertex_count`
/// vertices, panicking on invalid input.
pub(crate) fn graph(vertex_count: i64, edges: &[(i64, i64, i64)]) -> Graph {
    let rows: Vec<Vec<i64>> = std::iter::once(vec![vertex_count])
        .chain(edges.iter().map(|&(from, to, weight)| vec![from, to, weight]))
        .collect();
    Graph::from_rows(&rows).expect("test graph must be valid")
}
