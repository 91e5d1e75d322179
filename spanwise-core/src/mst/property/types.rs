//! Fixture types for spanning tree property tests.

/// Graph family a fixture was drawn from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum GraphFamily {
    /// Random spanning tree plus a few extra edges, wide weight range.
    Sparse,
    /// About half of all vertex pairs present.
    Dense,
    /// Weights drawn from `0..=2`, so most edges tie.
    ManyTies,
    /// Sparse graph with self-loops sprinkled in.
    SelfLoops,
    /// Two internally connected components with no bridge.
    Split,
}

impl GraphFamily {
    pub(super) const ALL: [Self; 5] = [
        Self::Sparse,
        Self::Dense,
        Self::ManyTies,
        Self::SelfLoops,
        Self::Split,
    ];
}

/// A generated instance with enough context to diagnose failures.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Instance rows, header first.
    pub rows: Vec<Vec<i64>>,
    /// Family used during generation.
    pub family: GraphFamily,
}

impl MstFixture {
    pub(super) fn vertex_count(&self) -> usize {
        self.rows
            .first()
            .and_then(|header| header.first())
            .and_then(|&count| usize::try_from(count).ok())
            .unwrap_or(0)
    }

    pub(super) fn edge_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }
}
