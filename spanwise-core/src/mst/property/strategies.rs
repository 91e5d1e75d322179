//! Fixture generators for spanning tree property tests.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use spanwise_test_support::graphs::{GraphShape, connected_rows, split_rows};

use super::types::{GraphFamily, MstFixture};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 40;
/// Dense graphs stay small to keep the oracle quick.
const DENSE_MAX_VERTICES: usize = 20;

/// Draws a family and a seed, then expands them into a fixture.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (prop::sample::select(GraphFamily::ALL.to_vec()), any::<u64>()).prop_map(|(family, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(family, &mut rng)
    })
}

/// Generates a fixture for one family, for targeted rstest cases.
pub(super) fn generate_fixture(family: GraphFamily, rng: &mut SmallRng) -> MstFixture {
    let rows = match family {
        GraphFamily::Sparse => {
            let vertices = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            connected_rows(&GraphShape::sparse(vertices, 1_000), rng)
        }
        GraphFamily::Dense => {
            let vertices = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            connected_rows(&GraphShape::dense(vertices, 50), rng)
        }
        GraphFamily::ManyTies => {
            let vertices = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let shape = GraphShape {
                extra_edge_probability: 0.2,
                ..GraphShape::sparse(vertices, 2)
            };
            connected_rows(&shape, rng)
        }
        GraphFamily::SelfLoops => {
            let vertices = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let shape = GraphShape {
                self_loops: true,
                ..GraphShape::sparse(vertices, 30)
            };
            connected_rows(&shape, rng)
        }
        GraphFamily::Split => {
            let vertices = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            split_rows(&GraphShape::sparse(vertices, 100), rng)
        }
    };
    MstFixture { rows, family }
}
