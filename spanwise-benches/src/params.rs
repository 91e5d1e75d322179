//! Benchmark parameter types.

use std::fmt;

/// Edge density of a generated instance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Density {
    /// A random spanning tree plus about five percent of the other pairs.
    Sparse,
    /// A random spanning tree plus about half of the other pairs.
    Dense,
}

impl Density {
    /// Label used in benchmark identifiers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sparse => "sparse",
            Self::Dense => "dense",
        }
    }
}

/// Parameters for one generated benchmark instance.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edge density.
    pub density: Density,
    /// Weights are drawn from `0..=max_weight`.
    pub max_weight: i64,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},{},w<={}",
            self.vertex_count,
            self.density.as_str(),
            self.max_weight,
        )
    }
}
