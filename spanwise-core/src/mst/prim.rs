//! Prim's algorithm with an edge-keyed or vertex-keyed frontier.

use tracing::{debug, instrument};

use crate::{
    error::MstError,
    graph::{Graph, Weight},
    heap::{HeapEntry, KeyedMinHeap, MinHeap, Priority},
};

use super::{PrimVariant, add_weight, disconnected};

/// Priority of a vertex no explored vertex has reached yet. Edge weights are
/// capped at [`crate::MAX_WEIGHT`], so no real edge carries this value.
const UNREACHED: Priority = Priority::MAX;

/// Computes the minimum spanning tree weight of `graph` with Prim.
///
/// The tree grows from the smallest vertex label, which is `1` for any graph
/// built with [`Graph::from_rows`].
///
/// # Errors
/// Returns [`MstError::Disconnected`] when the frontier empties (edge-keyed)
/// or only unreached vertices remain (vertex-keyed) before every vertex has
/// joined the tree.
#[instrument(
    name = "mst.prim",
    err,
    skip(graph),
    fields(
        variant = %variant,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
    ),
)]
pub fn prim(graph: &Graph, variant: PrimVariant) -> Result<Weight, MstError> {
    let Some(&start) = graph.vertices().first() else {
        return Ok(0);
    };
    let cost = match variant {
        PrimVariant::EdgeKeyed => edge_keyed(graph, start)?,
        PrimVariant::VertexKeyed => vertex_keyed(graph, start)?,
    };
    debug!(cost, start, "prim completed");
    Ok(cost)
}

/// Lazy Prim: every edge leaving the tree is queued, and entries whose
/// endpoints have both joined the tree are discarded when they surface.
fn edge_keyed(graph: &Graph, start: usize) -> Result<Weight, MstError> {
    let mut explored = vec![false; graph.label_bound().saturating_add(1)];
    let mut frontier = MinHeap::new();
    explore(graph, start, &mut explored, &mut frontier);
    let mut reached = 1_usize;
    let mut cost: Weight = 0;

    while !frontier.is_empty() {
        let entry = frontier.extract_min()?;
        let (from, to) = entry.payload;
        let next = match (is_explored(&explored, from), is_explored(&explored, to)) {
            (true, true) => continue,
            (true, false) => to,
            _ => from,
        };
        cost = add_weight(cost, entry.priority)?;
        explore(graph, next, &mut explored, &mut frontier);
        reached = reached.saturating_add(1);
    }

    if reached < graph.vertex_count() {
        return Err(disconnected(graph, reached.saturating_sub(1)));
    }
    Ok(cost)
}

fn is_explored(explored: &[bool], vertex: usize) -> bool {
    explored.get(vertex).copied().unwrap_or(false)
}

/// Marks `vertex` explored and queues its edges towards unexplored vertices.
fn explore(
    graph: &Graph,
    vertex: usize,
    explored: &mut [bool],
    frontier: &mut MinHeap<(usize, usize)>,
) {
    if let Some(flag) = explored.get_mut(vertex) {
        *flag = true;
    }
    for neighbour in graph.neighbours(vertex) {
        if !is_explored(explored, neighbour.vertex()) {
            frontier.push(HeapEntry::new(
                neighbour.weight(),
                (vertex, neighbour.vertex()),
            ));
        }
    }
}

/// Eager Prim: one heap slot per vertex holding the cheapest known edge into
/// the tree, lowered through decrease-key as the tree grows.
fn vertex_keyed(graph: &Graph, start: usize) -> Result<Weight, MstError> {
    let mut queue = KeyedMinHeap::from_priorities(
        graph.label_bound(),
        graph.vertices().iter().map(|&vertex| {
            let priority = if vertex == start { 0 } else { UNREACHED };
            (vertex, priority)
        }),
    )?;
    let mut reached = 0_usize;
    let mut cost: Weight = 0;

    while !queue.is_empty() {
        let entry = queue.extract_min()?;
        if entry.priority == UNREACHED {
            return Err(disconnected(graph, reached.saturating_sub(1)));
        }
        cost = add_weight(cost, entry.priority)?;
        reached = reached.saturating_add(1);

        for neighbour in graph.neighbours(entry.payload) {
            let vertex = neighbour.vertex();
            if queue
                .priority(vertex)
                .is_some_and(|current| neighbour.weight() < current)
            {
                queue.decrease_key(vertex, neighbour.weight())?;
            }
        }
    }

    Ok(cost)
}
