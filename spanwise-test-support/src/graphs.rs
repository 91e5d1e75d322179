//! Seeded generators for graph instance rows.
//!
//! Generators emit the row format the core library parses: row `0` holds the
//! vertex count and every later row holds `from to weight` with labels in
//! `1..=V`. No undirected pair is emitted twice, endpoint order is randomised,
//! and row order is shuffled.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;

/// Instance rows as accepted by `Graph::from_rows`.
pub type Rows = Vec<Vec<i64>>;

/// Shape parameters shared by the generators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphShape {
    /// Number of vertices `V`.
    pub vertex_count: usize,
    /// Probability of adding each non-tree pair on top of the random
    /// spanning tree. Clamped to `0.0..=1.0`.
    pub extra_edge_probability: f64,
    /// Weights are drawn uniformly from `0..=max_weight`.
    pub max_weight: i64,
    /// Whether vertices may also carry a self-loop.
    pub self_loops: bool,
}

impl GraphShape {
    /// A sparse shape with roughly `V - 1` plus a few extra edges.
    #[must_use]
    pub const fn sparse(vertex_count: usize, max_weight: i64) -> Self {
        Self {
            vertex_count,
            extra_edge_probability: 0.05,
            max_weight,
            self_loops: false,
        }
    }

    /// A dense shape keeping about half of all vertex pairs.
    #[must_use]
    pub const fn dense(vertex_count: usize, max_weight: i64) -> Self {
        Self {
            vertex_count,
            extra_edge_probability: 0.5,
            max_weight,
            self_loops: false,
        }
    }
}

/// Generates a connected graph: a random spanning tree plus extra edges.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use spanwise_test_support::graphs::{GraphShape, connected_rows};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let rows = connected_rows(&GraphShape::sparse(10, 20), &mut rng);
/// assert_eq!(rows[0], vec![10]);
/// assert!(rows.len() > 9);
/// ```
pub fn connected_rows<R: Rng>(shape: &GraphShape, rng: &mut R) -> Rows {
    let mut pairs = BTreeSet::new();
    add_component(&mut pairs, 1..=shape.vertex_count, shape, rng);
    finish(shape, pairs, rng)
}

/// Generates a graph with exactly two components split at a random label.
///
/// Each side is internally connected. Needs at least two vertices; smaller
/// shapes fall back to [`connected_rows`].
pub fn split_rows<R: Rng>(shape: &GraphShape, rng: &mut R) -> Rows {
    if shape.vertex_count < 2 {
        return connected_rows(shape, rng);
    }
    let split = rng.gen_range(1..shape.vertex_count);
    let mut pairs = BTreeSet::new();
    add_component(&mut pairs, 1..=split, shape, rng);
    add_component(&mut pairs, (split + 1)..=shape.vertex_count, shape, rng);
    finish(shape, pairs, rng)
}

/// Builds rows for a path `1 - 2 - ... - V` carrying `weights` in order.
///
/// # Examples
/// ```
/// use spanwise_test_support::graphs::path_rows;
///
/// assert_eq!(
///     path_rows(&[5, 4]),
///     vec![vec![3], vec![1, 2, 5], vec![2, 3, 4]],
/// );
/// ```
#[must_use]
pub fn path_rows(weights: &[i64]) -> Rows {
    let mut rows = Vec::with_capacity(weights.len() + 1);
    rows.push(vec![label(weights.len() + 1)]);
    for (index, &weight) in weights.iter().enumerate() {
        rows.push(vec![label(index + 1), label(index + 2), weight]);
    }
    rows
}

fn add_component<R: Rng>(
    pairs: &mut BTreeSet<(usize, usize)>,
    labels: RangeInclusive<usize>,
    shape: &GraphShape,
    rng: &mut R,
) {
    let (first, last) = (*labels.start(), *labels.end());
    for vertex in (first + 1)..=last {
        pairs.insert((rng.gen_range(first..vertex), vertex));
    }

    let probability = shape.extra_edge_probability.clamp(0.0, 1.0);
    for low in labels.clone() {
        if shape.self_loops && rng.gen_bool(0.1) {
            pairs.insert((low, low));
        }
        for high in (low + 1)..=last {
            if rng.gen_bool(probability) {
                pairs.insert((low, high));
            }
        }
    }
}

fn finish<R: Rng>(shape: &GraphShape, pairs: BTreeSet<(usize, usize)>, rng: &mut R) -> Rows {
    let max_weight = shape.max_weight.max(0);
    let mut edges: Rows = pairs
        .into_iter()
        .map(|(low, high)| {
            let (from, to) = if rng.gen_bool(0.5) { (low, high) } else { (high, low) };
            vec![label(from), label(to), rng.gen_range(0..=max_weight)]
        })
        .collect();
    edges.shuffle(rng);

    let mut rows = Vec::with_capacity(edges.len() + 1);
    rows.push(vec![label(shape.vertex_count)]);
    rows.extend(edges);
    rows
}

fn label(vertex: usize) -> i64 {
    i64::try_from(vertex).unwrap_or(i64::MAX)
}
