/// Default number of live paths permitted per graph vertex.
pub const DEFAULT_CEILING_FACTOR: usize = 100;

/// Bound on the number of live paths during elimination.
///
/// Densely fused ring systems can grow the path table combinatorially; the
/// ceiling turns that growth into a clean
/// [`PerceptionError::RingSystemTooComplex`](crate::engine::error::PerceptionError)
/// instead of unbounded allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCeiling {
    /// Ceiling proportional to the vertex count of the input graph.
    PerVertex(usize),
    /// Fixed ceiling independent of graph size.
    Absolute(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerceptionConfig {
    pub ceiling: PathCeiling,
}

impl Default for PerceptionConfig {
    fn default() -> Self {
        Self {
            ceiling: PathCeiling::PerVertex(DEFAULT_CEILING_FACTOR),
        }
    }
}

impl PerceptionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ceiling(ceiling: PathCeiling) -> Self {
        Self { ceiling }
    }

    /// The absolute live-path bound for a run over `vertex_count` vertices.
    pub fn resolve_ceiling(&self, vertex_count: usize) -> usize {
        match self.ceiling {
            PathCeiling::PerVertex(factor) => vertex_count.saturating_mul(factor),
            PathCeiling::Absolute(count) => count,
        }
    }
}
