//! Spanwise core library.
//!
//! Computes the total weight of a minimum spanning tree of a weighted
//! undirected graph with several interchangeable strategies: Kruskal over two
//! disjoint-set implementations and two edge-sorting routines, and Prim over
//! an edge-keyed or a vertex-keyed priority queue.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod graph;
mod heap;
mod mst;
mod sort;

#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_set::{DisjointSet, DisjointSetKind, LinkedListSet, TreeSet},
    error::{GraphError, GraphErrorCode, MstError, MstErrorCode, StructureError, StructureErrorCode},
    graph::{Edge, Graph, MAX_WEIGHT, Neighbour, Weight},
    heap::{HeapEntry, KeyedMinHeap, MinHeap, Priority},
    mst::{
        Algorithm, KruskalVariant, PrimVariant, SortStrategy, kruskal, minimum_spanning_cost, prim,
    },
    sort::{counting_sort, heap_sort},
};
