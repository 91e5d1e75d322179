//! Error types for the spanwise core library.
//!
//! Each public error enum is paired with a stable, machine-readable code enum
//! so callers (and the CLI's structured logs) can match on failures without
//! parsing display strings.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building a [`crate::Graph`] from edge rows.
///
/// Row numbers are zero-based positions in the input, so row `0` is always the
/// vertex-count row.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The input contained no rows at all.
    #[error("graph input contains no rows")]
    EmptyInput,
    /// The first row did not carry a vertex count.
    #[error("first row must hold the vertex count")]
    MissingVertexCount,
    /// The first row held more than the vertex count.
    #[error("first row must hold only the vertex count, found {len} values")]
    MalformedHeader {
        /// Number of values in the first row.
        len: usize,
    },
    /// The declared vertex count was negative.
    #[error("vertex count must be non-negative (got {got})")]
    InvalidVertexCount {
        /// The value found in the first row.
        got: i64,
    },
    /// An edge row did not hold exactly `from to weight`.
    #[error("row {row} has {len} values; expected 3 (from, to, weight)")]
    MalformedRow {
        /// Offending row index.
        row: usize,
        /// Number of values present in the row.
        len: usize,
    },
    /// An edge endpoint fell outside `1..=vertex_count`.
    #[error("row {row} references vertex {vertex}, but vertex labels run from 1 to {vertex_count}")]
    VertexOutOfRange {
        /// Offending row index.
        row: usize,
        /// The invalid vertex label.
        vertex: i64,
        /// Declared vertex count.
        vertex_count: usize,
    },
    /// An edge carried a negative weight.
    #[error("row {row} has negative weight {weight}")]
    NegativeWeight {
        /// Offending row index.
        row: usize,
        /// The rejected weight.
        weight: i64,
    },
    /// An edge weight exceeded [`crate::MAX_WEIGHT`].
    #[error("row {row} has weight {weight}, above the maximum {max_weight}")]
    WeightTooLarge {
        /// Offending row index.
        row: usize,
        /// The rejected weight.
        weight: i64,
        /// Largest accepted weight.
        max_weight: i64,
    },
    /// The same undirected pair appeared twice.
    #[error("row {row} repeats the undirected edge ({from}, {to})")]
    DuplicateEdge {
        /// Offending row index.
        row: usize,
        /// Smaller endpoint of the repeated pair.
        from: usize,
        /// Larger endpoint of the repeated pair.
        to: usize,
    },
    /// The retention percentage for a sampled graph exceeded 100.
    #[error("retention percentage must be within 0..=100 (got {percent})")]
    InvalidRetention {
        /// The rejected percentage.
        percent: u8,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The input contained no rows at all.
        EmptyInput => EmptyInput => "GRAPH_EMPTY_INPUT",
        /// The first row did not carry a vertex count.
        MissingVertexCount => MissingVertexCount => "GRAPH_MISSING_VERTEX_COUNT",
        /// The first row held more than the vertex count.
        MalformedHeader => MalformedHeader { .. } => "GRAPH_MALFORMED_HEADER",
        /// The declared vertex count was negative.
        InvalidVertexCount => InvalidVertexCount { .. } => "GRAPH_INVALID_VERTEX_COUNT",
        /// An edge row did not hold exactly three values.
        MalformedRow => MalformedRow { .. } => "GRAPH_MALFORMED_ROW",
        /// An edge endpoint fell outside the declared vertex range.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// An edge carried a negative weight.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
        /// An edge weight exceeded the supported maximum.
        WeightTooLarge => WeightTooLarge { .. } => "GRAPH_WEIGHT_TOO_LARGE",
        /// The same undirected pair appeared twice.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
        /// The retention percentage exceeded 100.
        InvalidRetention => InvalidRetention { .. } => "GRAPH_INVALID_RETENTION",
    }
}

/// A contract violation raised by a disjoint set, heap, or sorting routine.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum StructureError {
    /// `union` was called with equal arguments or with a non-representative.
    #[error("cannot union {first} and {second}: both must be distinct set representatives")]
    InvalidOperand {
        /// First union argument.
        first: usize,
        /// Second union argument.
        second: usize,
    },
    /// An element label fell outside the disjoint set's universe.
    #[error("element {element} is outside the universe 1..={universe}")]
    ElementOutOfRange {
        /// The rejected element label.
        element: usize,
        /// Size of the universe.
        universe: usize,
    },
    /// Extraction was attempted on an empty heap.
    #[error("cannot extract from an empty priority structure")]
    EmptyStructure,
    /// `decrease_key` was asked to raise or keep a priority.
    #[error(
        "decrease_key for key {key} requires a priority below {current} (requested {requested})"
    )]
    InvalidDecrease {
        /// Key whose priority was to be lowered.
        key: usize,
        /// Priority currently stored for the key.
        current: i64,
        /// Priority requested by the caller.
        requested: i64,
    },
    /// A keyed lookup referenced a key absent from the heap.
    #[error("key {key} is not present in the heap")]
    UnknownKey {
        /// The missing key.
        key: usize,
    },
    /// A keyed heap was built with the same key twice.
    #[error("key {key} appears more than once")]
    DuplicateKey {
        /// The repeated key.
        key: usize,
    },
    /// Counting sort met a priority outside `0..=max_priority`.
    #[error("priority {priority} lies outside the counting range 0..={max_priority}")]
    PriorityOutOfRange {
        /// The rejected priority.
        priority: i64,
        /// Upper bound supplied to the sort.
        max_priority: i64,
    },
    /// Counting sort could not allocate one bucket per priority.
    #[error("cannot allocate {buckets} counting buckets")]
    BucketAllocation {
        /// Buckets requested, one per priority in the observed span.
        buckets: u64,
    },
}

define_error_codes! {
    /// Stable codes describing [`StructureError`] variants.
    enum StructureErrorCode for StructureError {
        /// Union arguments were equal or not representatives.
        InvalidOperand => InvalidOperand { .. } => "STRUCTURE_INVALID_OPERAND",
        /// An element label fell outside the universe.
        ElementOutOfRange => ElementOutOfRange { .. } => "STRUCTURE_ELEMENT_OUT_OF_RANGE",
        /// Extraction was attempted on an empty heap.
        EmptyStructure => EmptyStructure => "STRUCTURE_EMPTY",
        /// A decrease-key request did not lower the priority.
        InvalidDecrease => InvalidDecrease { .. } => "STRUCTURE_INVALID_DECREASE",
        /// A keyed lookup referenced an absent key.
        UnknownKey => UnknownKey { .. } => "STRUCTURE_UNKNOWN_KEY",
        /// A keyed heap was built with a repeated key.
        DuplicateKey => DuplicateKey { .. } => "STRUCTURE_DUPLICATE_KEY",
        /// Counting sort met an out-of-range priority.
        PriorityOutOfRange => PriorityOutOfRange { .. } => "STRUCTURE_PRIORITY_OUT_OF_RANGE",
        /// Counting sort could not allocate its buckets.
        BucketAllocation => BucketAllocation { .. } => "STRUCTURE_BUCKET_ALLOCATION",
    }
}

/// Error type produced by the minimum spanning tree entry points.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// An algorithm selector named no supported variant.
    #[error("unsupported algorithm variant `{name}`")]
    UnsupportedVariant {
        /// The selector text supplied by the caller.
        name: Arc<str>,
    },
    /// The graph is not connected, so no spanning tree exists.
    #[error("graph must be connected: found {tree_edges} of {required_edges} spanning edges")]
    Disconnected {
        /// Tree edges accepted before the edges or frontier ran out.
        tree_edges: usize,
        /// Edges a spanning tree over every vertex needs (`V - 1`).
        required_edges: usize,
    },
    /// The tree weight does not fit in a [`crate::Weight`].
    #[error("spanning tree cost overflowed after adding weight {weight} to {cost}")]
    CostOverflow {
        /// Cost accumulated before the failing addition.
        cost: i64,
        /// Weight of the edge that overflowed the total.
        weight: i64,
    },
    /// A supporting data structure rejected an operation.
    #[error(transparent)]
    Structure(#[from] StructureError),
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// An algorithm selector named no supported variant.
        UnsupportedVariant => UnsupportedVariant { .. } => "MST_UNSUPPORTED_VARIANT",
        /// The graph is not connected.
        Disconnected => Disconnected { .. } => "MST_DISCONNECTED",
        /// The total weight overflowed.
        CostOverflow => CostOverflow { .. } => "MST_COST_OVERFLOW",
        /// A supporting data structure rejected an operation.
        StructureFailure => Structure(..) => "MST_STRUCTURE_FAILURE",
    }
}

impl MstError {
    /// Retrieve the inner [`StructureErrorCode`] when the error originated in
    /// a supporting data structure.
    #[must_use]
    pub const fn structure_code(&self) -> Option<StructureErrorCode> {
        match self {
            Self::Structure(error) => Some(error.code()),
            _ => None,
        }
    }
}
