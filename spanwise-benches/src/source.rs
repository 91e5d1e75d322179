//! Seeded graph instances for benchmarks.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use spanwise_core::{Algorithm, Graph, minimum_spanning_cost};
use spanwise_test_support::graphs::{GraphShape, connected_rows};

use crate::error::BenchSetupError;
use crate::params::{Density, MstBenchParams};

/// Generates a connected graph described by `params` from `seed`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `params.vertex_count` is zero,
/// and [`BenchSetupError::Graph`] if the generated rows are rejected.
pub fn generate(params: &MstBenchParams, seed: u64) -> Result<Graph, BenchSetupError> {
    if params.vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }
    let shape = match params.density {
        Density::Sparse => GraphShape::sparse(params.vertex_count, params.max_weight),
        Density::Dense => GraphShape::dense(params.vertex_count, params.max_weight),
    };
    let mut rng = SmallRng::seed_from_u64(seed);
    let rows = connected_rows(&shape, &mut rng);
    Ok(Graph::from_rows(&rows)?)
}

/// Runs every strategy once on `graph` and returns the shared cost.
///
/// Benchmarks call this during setup so a timing is never reported for a
/// strategy that computes the wrong answer.
///
/// # Errors
/// Returns [`BenchSetupError::Mst`] when a strategy fails and
/// [`BenchSetupError::CostMismatch`] when two strategies disagree.
pub fn agreed_cost(graph: &Graph, params: &MstBenchParams) -> Result<i64, BenchSetupError> {
    let mut expected = None;
    for algorithm in Algorithm::ALL {
        let found = minimum_spanning_cost(graph, algorithm)?;
        match expected {
            None => expected = Some(found),
            Some(cost) if cost != found => {
                return Err(BenchSetupError::CostMismatch {
                    instance: params.to_string(),
                    algorithm,
                    expected: cost,
                    found,
                });
            }
            Some(_) => {}
        }
    }
    Ok(expected.unwrap_or_default())
}
