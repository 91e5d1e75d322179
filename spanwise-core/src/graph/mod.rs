//! Weighted undirected graph built once from edge rows.
//!
//! Input rows follow the instance format: row `0` holds the vertex count `V`,
//! every later row holds `from to weight` with labels in `1..=V`. Each edge is
//! stored in both endpoints' adjacency lists; a self-loop is stored once.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::{
    error::GraphError,
    heap::{HeapEntry, Priority},
};

/// Integer edge weight.
pub type Weight = Priority;

/// Largest edge weight a graph accepts (`i32::MAX`).
///
/// Keeps counting-sort buckets allocatable, leaves `Weight::MAX` free as the
/// unreached marker in vertex-keyed Prim, and keeps any tree over fewer than
/// 2^32 vertices from overflowing its total.
pub const MAX_WEIGHT: Weight = i32::MAX as Weight;

/// One adjacency-list slot: the vertex on the far end and the edge weight.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Neighbour {
    vertex: usize,
    weight: Weight,
}

impl Neighbour {
    /// Returns the far endpoint label.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex(&self) -> usize { self.vertex }

    /// Returns the weight of the connecting edge.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Weight { self.weight }
}

/// An undirected edge reported once, with `from <= to`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    weight: Weight,
    from: usize,
    to: usize,
}

impl Edge {
    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Weight { self.weight }

    /// Returns the smaller endpoint label.
    #[must_use]
    #[rustfmt::skip]
    pub fn from(&self) -> usize { self.from }

    /// Returns the larger endpoint label.
    #[must_use]
    #[rustfmt::skip]
    pub fn to(&self) -> usize { self.to }

    /// Converts the edge into a heap entry keyed by weight.
    #[must_use]
    pub fn to_entry(self) -> HeapEntry<(usize, usize)> {
        HeapEntry::new(self.weight, (self.from, self.to))
    }
}

#[derive(Clone, Copy, Debug)]
struct RowEdge {
    from: usize,
    to: usize,
    weight: Weight,
}

/// Immutable adjacency-list graph over dense vertex labels.
///
/// # Examples
/// ```
/// use spanwise_core::Graph;
///
/// let graph = Graph::from_rows(&[vec![3], vec![1, 2, 1], vec![2, 3, 2], vec![1, 3, 3]])?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.max_weight(), 3);
/// assert_eq!(graph.edges().count(), 3);
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    adjacency: BTreeMap<usize, Vec<Neighbour>>,
    vertices: Vec<usize>,
    label_bound: usize,
    edge_count: usize,
    max_weight: Weight,
}

impl Graph {
    /// Builds a graph from instance rows.
    ///
    /// The vertex count is the declared `V` and the edge count is the number
    /// of edge rows.
    ///
    /// # Errors
    /// Returns [`GraphError`] when the rows are empty, the vertex count is
    /// missing or negative, the header or an edge row is malformed, an edge
    /// references a label outside `1..=V`, carries a negative weight or one
    /// above [`MAX_WEIGHT`], or repeats an undirected pair.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, GraphError> {
        let (vertex_count, edges) = parse_rows(rows)?;
        let mut graph = Self::assemble(&edges, |_| true);
        graph.vertices = (1..=vertex_count).collect();
        graph.label_bound = vertex_count;
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count,
            max_weight = graph.max_weight,
            "graph constructed"
        );
        Ok(graph)
    }

    /// Builds a randomly thinned graph that keeps each edge row with
    /// probability `percent / 100`.
    ///
    /// Counts are recomputed from what survives: the vertex count becomes the
    /// number of labels that kept at least one edge, not the declared `V`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidRetention`] when `percent > 100`, and the
    /// same validation errors as [`Graph::from_rows`] for the full input.
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::SmallRng};
    /// use spanwise_core::Graph;
    ///
    /// let rows = [vec![3], vec![1, 2, 1], vec![2, 3, 2]];
    /// let mut rng = SmallRng::seed_from_u64(7);
    /// let graph = Graph::from_rows_sampled(&rows, 100, &mut rng)?;
    /// assert_eq!(graph.edge_count(), 2);
    /// let empty = Graph::from_rows_sampled(&rows, 0, &mut rng)?;
    /// assert_eq!(empty.vertex_count(), 0);
    /// # Ok::<(), spanwise_core::GraphError>(())
    /// ```
    #[cfg(feature = "sampling")]
    pub fn from_rows_sampled<R, G>(rows: &[R], percent: u8, rng: &mut G) -> Result<Self, GraphError>
    where
        R: AsRef<[i64]>,
        G: rand::Rng,
    {
        if percent > 100 {
            return Err(GraphError::InvalidRetention { percent });
        }
        let (_, edges) = parse_rows(rows)?;
        let mut graph = Self::assemble(&edges, |_| rng.gen_range(0..100_u8) < percent);
        graph.vertices = graph.adjacency.keys().copied().collect();
        graph.label_bound = graph.vertices.last().copied().unwrap_or(0);
        debug!(
            percent,
            vertices = graph.vertex_count(),
            edges = graph.edge_count,
            "sampled graph constructed"
        );
        Ok(graph)
    }

    fn assemble(edges: &[RowEdge], mut keep: impl FnMut(&RowEdge) -> bool) -> Self {
        let mut adjacency: BTreeMap<usize, Vec<Neighbour>> = BTreeMap::new();
        let mut edge_count = 0_usize;
        let mut max_weight: Weight = 0;
        for edge in edges.iter().filter(|&edge| keep(edge)) {
            adjacency.entry(edge.from).or_default().push(Neighbour {
                vertex: edge.to,
                weight: edge.weight,
            });
            if edge.from != edge.to {
                adjacency.entry(edge.to).or_default().push(Neighbour {
                    vertex: edge.from,
                    weight: edge.weight,
                });
            }
            max_weight = max_weight.max(edge.weight);
            edge_count = edge_count.saturating_add(1);
        }

        Self {
            adjacency,
            vertices: Vec::new(),
            label_bound: 0,
            edge_count,
            max_weight,
        }
    }

    /// Number of vertices the spanning tree must cover.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges stored.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Largest edge weight, or `0` for an edgeless graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn max_weight(&self) -> Weight { self.max_weight }

    /// Largest vertex label any per-vertex table must be able to index.
    #[must_use]
    #[rustfmt::skip]
    pub fn label_bound(&self) -> usize { self.label_bound }

    /// Labels of the vertices the spanning tree must cover, ascending.
    #[must_use]
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Adjacency list of `vertex`; empty for labels without edges.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> &[Neighbour] {
        self.adjacency
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Enumerates every undirected edge exactly once.
    ///
    /// An adjacency slot is reported only from the owner whose label does not
    /// exceed the neighbour's, so mirrored entries are skipped and a self-loop
    /// appears once. The sequence is recomputed from the adjacency lists on
    /// every call.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().flat_map(|(&owner, neighbours)| {
            neighbours
                .iter()
                .filter(move |neighbour| neighbour.vertex >= owner)
                .map(move |neighbour| Edge {
                    weight: neighbour.weight,
                    from: owner,
                    to: neighbour.vertex,
                })
        })
    }
}

fn parse_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<(usize, Vec<RowEdge>), GraphError> {
    let (header, body) = rows.split_first().ok_or(GraphError::EmptyInput)?;
    let declared = match header.as_ref() {
        [] => return Err(GraphError::MissingVertexCount),
        &[count] => count,
        values => return Err(GraphError::MalformedHeader { len: values.len() }),
    };
    let vertex_count =
        usize::try_from(declared).map_err(|_| GraphError::InvalidVertexCount { got: declared })?;

    let mut seen = HashSet::with_capacity(body.len());
    let mut edges = Vec::with_capacity(body.len());
    for (offset, values) in body.iter().enumerate() {
        let row = offset.saturating_add(1);
        let &[from, to, weight] = values.as_ref() else {
            return Err(GraphError::MalformedRow {
                row,
                len: values.as_ref().len(),
            });
        };
        let from = vertex_label(row, from, vertex_count)?;
        let to = vertex_label(row, to, vertex_count)?;
        if weight < 0 {
            return Err(GraphError::NegativeWeight { row, weight });
        }
        if weight > MAX_WEIGHT {
            return Err(GraphError::WeightTooLarge {
                row,
                weight,
                max_weight: MAX_WEIGHT,
            });
        }
        let pair = (from.min(to), from.max(to));
        if !seen.insert(pair) {
            return Err(GraphError::DuplicateEdge {
                row,
                from: pair.0,
                to: pair.1,
            });
        }
        edges.push(RowEdge { from, to, weight });
    }
    Ok((vertex_count, edges))
}

fn vertex_label(row: usize, raw: i64, vertex_count: usize) -> Result<usize, GraphError> {
    usize::try_from(raw)
        .ok()
        .filter(|label| (1..=vertex_count).contains(label))
        .ok_or(GraphError::VertexOutOfRange {
            row,
            vertex: raw,
            vertex_count,
        })
}
