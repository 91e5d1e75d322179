//! Minimum spanning tree weight computation.
//!
//! Six strategies are exposed through [`Algorithm`]: Kruskal over the product
//! of [`DisjointSetKind`] and [`SortStrategy`], and Prim over the two
//! [`PrimVariant`] frontiers. Every strategy returns the same cost for the
//! same connected graph and fails with [`MstError::Disconnected`] otherwise.

mod kruskal;
mod prim;

use std::{fmt, str::FromStr, sync::Arc};

use crate::{
    disjoint_set::DisjointSetKind,
    error::MstError,
    graph::{Graph, Weight},
};

pub use self::{kruskal::kruskal, prim::prim};

fn unsupported(raw: &str) -> MstError {
    MstError::UnsupportedVariant {
        name: Arc::from(raw),
    }
}

/// Edge-ordering routine used by Kruskal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SortStrategy {
    /// In-place comparison sort, O(E log E).
    HeapSort,
    /// Bucket sort over `0..=max_weight`, O(E + W).
    CountingSort,
}

impl SortStrategy {
    /// Every supported sort.
    pub const ALL: [Self; 2] = [Self::HeapSort, Self::CountingSort];

    /// Stable selector name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HeapSort => "heap-sort",
            Self::CountingSort => "counting-sort",
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortStrategy {
    type Err = MstError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str() == raw)
            .ok_or_else(|| unsupported(raw))
    }
}

/// One point of Kruskal's disjoint-set by sort product.
///
/// The selector name joins both halves, e.g. `tree-counting-sort`.
///
/// # Examples
/// ```
/// use spanwise_core::{DisjointSetKind, KruskalVariant, SortStrategy};
///
/// let variant: KruskalVariant = "linked-list-heap-sort".parse()?;
/// assert_eq!(variant.disjoint_set, DisjointSetKind::LinkedList);
/// assert_eq!(variant.sort, SortStrategy::HeapSort);
/// assert!("forest-heap-sort".parse::<KruskalVariant>().is_err());
/// # Ok::<(), spanwise_core::MstError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct KruskalVariant {
    /// Structure tracking which vertices are already joined.
    pub disjoint_set: DisjointSetKind,
    /// Routine ordering the edges by weight.
    pub sort: SortStrategy,
}

impl KruskalVariant {
    /// Every supported combination.
    pub const ALL: [Self; 4] = [
        Self::new(DisjointSetKind::LinkedList, SortStrategy::HeapSort),
        Self::new(DisjointSetKind::Tree, SortStrategy::HeapSort),
        Self::new(DisjointSetKind::LinkedList, SortStrategy::CountingSort),
        Self::new(DisjointSetKind::Tree, SortStrategy::CountingSort),
    ];

    /// Pairs a disjoint-set strategy with a sort.
    #[must_use]
    pub const fn new(disjoint_set: DisjointSetKind, sort: SortStrategy) -> Self {
        Self { disjoint_set, sort }
    }

    /// Stable selector name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match (self.disjoint_set, self.sort) {
            (DisjointSetKind::LinkedList, SortStrategy::HeapSort) => "linked-list-heap-sort",
            (DisjointSetKind::Tree, SortStrategy::HeapSort) => "tree-heap-sort",
            (DisjointSetKind::LinkedList, SortStrategy::CountingSort) => {
                "linked-list-counting-sort"
            }
            (DisjointSetKind::Tree, SortStrategy::CountingSort) => "tree-counting-sort",
        }
    }
}

impl fmt::Display for KruskalVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KruskalVariant {
    type Err = MstError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == raw)
            .ok_or_else(|| unsupported(raw))
    }
}

/// Frontier representation used by Prim.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PrimVariant {
    /// Min-heap of candidate edges with lazy deletion of stale entries.
    EdgeKeyed,
    /// Keyed min-heap of vertices lowered in place through decrease-key.
    VertexKeyed,
}

impl PrimVariant {
    /// Every supported frontier.
    pub const ALL: [Self; 2] = [Self::EdgeKeyed, Self::VertexKeyed];

    /// Stable selector name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EdgeKeyed => "edge",
            Self::VertexKeyed => "vertex",
        }
    }
}

impl fmt::Display for PrimVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimVariant {
    type Err = MstError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == raw)
            .ok_or_else(|| unsupported(raw))
    }
}

/// Any of the six spanning tree strategies.
///
/// Selector names prefix the variant name with the algorithm, e.g.
/// `kruskal-tree-heap-sort` or `prim-vertex`.
///
/// # Examples
/// ```
/// use spanwise_core::{Algorithm, Graph, minimum_spanning_cost};
///
/// let graph = Graph::from_rows(&[vec![3], vec![1, 2, 1], vec![2, 3, 2], vec![1, 3, 3]])?;
/// for algorithm in Algorithm::ALL {
///     assert_eq!(minimum_spanning_cost(&graph, algorithm)?, 3);
/// }
/// let parsed: Algorithm = "prim-edge".parse()?;
/// assert_eq!(parsed.to_string(), "prim-edge");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Kruskal with the given disjoint set and sort.
    Kruskal(KruskalVariant),
    /// Prim with the given frontier.
    Prim(PrimVariant),
}

impl Algorithm {
    /// Every supported strategy, Kruskal first.
    pub const ALL: [Self; 6] = [
        Self::Kruskal(KruskalVariant::ALL[0]),
        Self::Kruskal(KruskalVariant::ALL[1]),
        Self::Kruskal(KruskalVariant::ALL[2]),
        Self::Kruskal(KruskalVariant::ALL[3]),
        Self::Prim(PrimVariant::EdgeKeyed),
        Self::Prim(PrimVariant::VertexKeyed),
    ];

    /// Stable selector name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal(variant) => match (variant.disjoint_set, variant.sort) {
                (DisjointSetKind::LinkedList, SortStrategy::HeapSort) => {
                    "kruskal-linked-list-heap-sort"
                }
                (DisjointSetKind::Tree, SortStrategy::HeapSort) => "kruskal-tree-heap-sort",
                (DisjointSetKind::LinkedList, SortStrategy::CountingSort) => {
                    "kruskal-linked-list-counting-sort"
                }
                (DisjointSetKind::Tree, SortStrategy::CountingSort) => {
                    "kruskal-tree-counting-sort"
                }
            },
            Self::Prim(PrimVariant::EdgeKeyed) => "prim-edge",
            Self::Prim(PrimVariant::VertexKeyed) => "prim-vertex",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = MstError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == raw)
            .ok_or_else(|| unsupported(raw))
    }
}

/// Computes the minimum spanning tree weight of `graph` with `algorithm`.
///
/// Graphs with zero or one vertex cost `0`.
///
/// # Errors
/// Returns [`MstError::Disconnected`] when no spanning tree exists, and
/// [`MstError::Structure`] if a supporting structure rejects an operation.
pub fn minimum_spanning_cost(graph: &Graph, algorithm: Algorithm) -> Result<Weight, MstError> {
    match algorithm {
        Algorithm::Kruskal(variant) => kruskal(graph, variant),
        Algorithm::Prim(variant) => prim(graph, variant),
    }
}

/// Builds the error for a search that accepted `tree_edges` edges but needed
/// one per vertex beyond the first.
fn disconnected(graph: &Graph, tree_edges: usize) -> MstError {
    MstError::Disconnected {
        tree_edges,
        required_edges: graph.vertex_count().saturating_sub(1),
    }
}

/// Adds an accepted edge weight to the running tree cost.
fn add_weight(cost: Weight, weight: Weight) -> Result<Weight, MstError> {
    cost.checked_add(weight)
        .ok_or(MstError::CostOverflow { cost, weight })
}


#[cfg(test)]
mod property;
