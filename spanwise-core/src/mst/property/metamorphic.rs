//! Cost invariants under input rewrites that cannot change the answer.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{
    Graph, MstError,
    mst::{Algorithm, minimum_spanning_cost},
};

use super::types::MstFixture;

/// Uniform increment applied to every weight by the shift property.
const SHIFT: i64 = 7;

fn costs(rows: &[Vec<i64>]) -> Result<Vec<Result<i64, MstError>>, TestCaseError> {
    let graph = Graph::from_rows(rows)
        .map_err(|err| TestCaseError::fail(format!("rows rejected: {err}")))?;
    Ok(Algorithm::ALL
        .into_iter()
        .map(|algorithm| minimum_spanning_cost(&graph, algorithm))
        .collect())
}

/// Shuffling rows and swapping endpoints leaves every cost unchanged.
pub(super) fn run_reordering_property(fixture: &MstFixture, seed: u64) -> TestCaseResult {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut rows = fixture.rows.clone();
    rows[1..].shuffle(&mut rng);
    for row in rows.iter_mut().skip(1) {
        if rng.gen_bool(0.5) {
            row.swap(0, 1);
        }
    }

    let before = costs(&fixture.rows)?;
    let after = costs(&rows)?;
    if before != after {
        return Err(TestCaseError::fail(format!(
            "reordering changed costs: {before:?} -> {after:?} (family={:?})",
            fixture.family,
        )));
    }
    Ok(())
}

/// Adding `SHIFT` to every weight raises a spanning tree cost by
/// `SHIFT * (V - 1)`.
pub(super) fn run_weight_shift_property(fixture: &MstFixture) -> TestCaseResult {
    let shifted: Vec<Vec<i64>> = fixture
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let mut row = row.clone();
            if index > 0 {
                row[2] += SHIFT;
            }
            row
        })
        .collect();
    let tree_edges = i64::try_from(fixture.vertex_count().saturating_sub(1))
        .map_err(|_| TestCaseError::fail("vertex count overflows i64"))?;

    for (before, after) in costs(&fixture.rows)?.into_iter().zip(costs(&shifted)?) {
        let consistent = match (&before, &after) {
            (Ok(base), Ok(raised)) => *raised == base + SHIFT * tree_edges,
            (Err(left), Err(right)) => left.code() == right.code(),
            _ => false,
        };
        if !consistent {
            return Err(TestCaseError::fail(format!(
                "shift by {SHIFT} mapped {before:?} to {after:?} (family={:?})",
                fixture.family,
            )));
        }
    }
    Ok(())
}
