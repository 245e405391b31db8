use super::ids::{EdgeId, VertexId};
use super::path::Path;
use std::fmt;

/// A simple cycle, stored as its vertices in traversal order with the
/// closing duplicate dropped.
///
/// `edges()[i]` is the edge between `vertices()[i]` and
/// `vertices()[(i + 1) % size()]`, so consumers can recover the implied
/// connectivity including the wraparound bond. The smallest ring has size
/// 2: a pair of parallel edges between the same two vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    vertices: Vec<VertexId>,
    edges: Vec<EdgeId>,
}

/// Canonical identity of a ring: its vertex set together with its edge set.
///
/// Rings over the same vertices through different parallel edges compare
/// unequal; the same cycle traversed from a different start or in the
/// opposite direction compares equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RingKey {
    vertices: Vec<VertexId>,
    edges: Vec<EdgeId>,
}

impl Ring {
    /// Canonicalizes a closed path into a ring.
    ///
    /// The path must be closed (first vertex == last vertex, length ≥ 3).
    pub(crate) fn from_closed_path(path: &Path) -> Self {
        debug_assert!(path.is_closed());
        let vertices = path.vertices()[..path.len() - 1].to_vec();
        Self {
            vertices,
            edges: path.edges().to_vec(),
        }
    }

    /// Number of distinct vertices, which equals the number of edges.
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Vertices in cyclic traversal order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Edges in traversal order, including the wraparound edge.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn key(&self) -> RingKey {
        let mut vertices = self.vertices.clone();
        let mut edges = self.edges.clone();
        vertices.sort_unstable();
        edges.sort_unstable();
        RingKey { vertices, edges }
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ring of size {}:", self.vertices.len())?;
        for vertex in &self.vertices {
            write!(f, " v{}", vertex.index())?;
        }
        Ok(())
    }
}
