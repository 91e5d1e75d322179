//! Agreement between every strategy and the reverse-delete oracle.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    Graph, MstErrorCode,
    mst::{Algorithm, minimum_spanning_cost},
};

use super::{oracle::reverse_delete, types::MstFixture};

/// Checks that all six strategies return the oracle's cost on connected
/// fixtures and fail with a disconnection error otherwise.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = Graph::from_rows(&fixture.rows).map_err(|err| {
        TestCaseError::fail(format!("generated rows rejected: {err} ({:?})", fixture.family))
    })?;
    let expected = reverse_delete(&fixture.rows);

    for algorithm in Algorithm::ALL {
        let actual = minimum_spanning_cost(&graph, algorithm);
        let agrees = match (&actual, expected) {
            (Ok(cost), Some(oracle)) => *cost == oracle,
            (Err(err), None) => err.code() == MstErrorCode::Disconnected,
            _ => false,
        };
        if !agrees {
            return Err(TestCaseError::fail(format!(
                "{algorithm} returned {actual:?}, oracle expected {expected:?} \
                 (family={:?}, vertices={}, edges={})",
                fixture.family,
                fixture.vertex_count(),
                fixture.edge_count(),
            )));
        }
    }
    Ok(())
}
