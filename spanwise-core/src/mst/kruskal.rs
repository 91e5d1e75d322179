//! Kruskal's algorithm over pluggable disjoint sets and edge sorts.

use tracing::{debug, instrument};

use crate::{
    disjoint_set::{DisjointSet, DisjointSetKind, LinkedListSet, TreeSet},
    error::MstError,
    graph::{Edge, Graph, Weight},
    heap::HeapEntry,
    sort::{counting_sort, heap_sort},
};

use super::{KruskalVariant, SortStrategy, add_weight, disconnected};

/// Computes the minimum spanning tree weight of `graph` with Kruskal.
///
/// Edges are ordered by weight with the variant's sort, then scanned in
/// order. An edge joining two different sets is accepted and its sets merged;
/// the scan stops once `V - 1` edges have been accepted. Equal weights may be
/// visited in any order without changing the total.
///
/// # Errors
/// Returns [`MstError::Disconnected`] when the edges run out before `V - 1`
/// are accepted.
///
/// # Examples
/// ```
/// use spanwise_core::{Graph, KruskalVariant, kruskal};
///
/// let graph = Graph::from_rows(&[vec![4], vec![1, 2, 5], vec![2, 3, 4], vec![3, 4, 3]])?;
/// let variant: KruskalVariant = "tree-counting-sort".parse()?;
/// assert_eq!(kruskal(&graph, variant)?, 12);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "mst.kruskal",
    err,
    skip(graph),
    fields(
        variant = %variant,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
    ),
)]
pub fn kruskal(graph: &Graph, variant: KruskalVariant) -> Result<Weight, MstError> {
    let entries: Vec<_> = graph.edges().map(Edge::to_entry).collect();
    let sorted = match variant.sort {
        SortStrategy::HeapSort => {
            let mut entries = entries;
            heap_sort(&mut entries);
            entries
        }
        SortStrategy::CountingSort => counting_sort(entries, graph.max_weight())?,
    };

    let cost = match variant.disjoint_set {
        DisjointSetKind::LinkedList => scan::<LinkedListSet>(graph, &sorted)?,
        DisjointSetKind::Tree => scan::<TreeSet>(graph, &sorted)?,
    };
    debug!(cost, "kruskal completed");
    Ok(cost)
}

fn scan<D: DisjointSet>(
    graph: &Graph,
    sorted: &[HeapEntry<(usize, usize)>],
) -> Result<Weight, MstError> {
    let required = graph.vertex_count().saturating_sub(1);
    let mut sets = D::with_universe(graph.label_bound());
    let mut edges = sorted.iter();
    let mut accepted = 0_usize;
    let mut cost: Weight = 0;

    while accepted < required {
        let Some(entry) = edges.next() else {
            return Err(disconnected(graph, accepted));
        };
        let (from, to) = entry.payload;
        let left = sets.find(from)?;
        let right = sets.find(to)?;
        if left == right {
            continue;
        }
        sets.union(left, right)?;
        cost = add_weight(cost, entry.priority)?;
        accepted = accepted.saturating_add(1);
    }

    Ok(cost)
}
