//! Benchmark setup error type.
//!
//! Setup functions propagate failures with `?` and the Criterion entry point
//! turns them into a single panic message.

use spanwise_core::{GraphError, MstError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Generated rows did not form a valid graph.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// A strategy failed while computing the reference cost.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// Strategies disagreed on the cost of the same instance.
    #[error("{algorithm} returned {found} on {instance}, expected {expected}")]
    CostMismatch {
        /// Instance label.
        instance: String,
        /// Strategy that disagreed.
        algorithm: spanwise_core::Algorithm,
        /// Cost from the first strategy.
        expected: i64,
        /// Cost from `algorithm`.
        found: i64,
    },
}
