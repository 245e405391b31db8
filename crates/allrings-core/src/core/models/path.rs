use super::graph::Edge;
use super::ids::{EdgeId, VertexId};
use std::collections::HashSet;
use std::fmt;

/// An immutable walk through the graph: an ordered vertex sequence of
/// length ≥ 2 together with the edges traversed between them.
///
/// While a path is open (first ≠ last) no vertex repeats. Paths are only
/// ever created from a single edge ([`Path::elementary`]) or by joining two
/// existing paths at a shared endpoint ([`Path::join`]); both reorientation
/// and joining produce new values and never mutate their inputs, so a path
/// may be referenced from several places at once without risk of
/// corruption.
///
/// Edge identity is carried alongside the vertices so that two walks over
/// the same vertices through different parallel edges remain
/// distinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    vertices: Vec<VertexId>,
    edges: Vec<EdgeId>,
}

impl Path {
    /// The length-2 path formed by a single edge.
    pub fn elementary(edge_id: EdgeId, edge: Edge) -> Self {
        Self {
            vertices: vec![edge.a, edge.b],
            edges: vec![edge_id],
        }
    }

    /// Number of vertices on the path.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn first(&self) -> VertexId {
        self.vertices[0]
    }

    pub fn last(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    /// The endpoint opposite to `endpoint`.
    ///
    /// `endpoint` must be one of the two endpoints of an open path.
    pub fn other_end(&self, endpoint: VertexId) -> VertexId {
        if self.first() == endpoint {
            self.last()
        } else {
            self.first()
        }
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// True once the walk returns to its starting vertex.
    pub fn is_closed(&self) -> bool {
        self.vertices.len() >= 3 && self.first() == self.last()
    }

    /// Number of vertices present on both paths.
    pub fn shared_vertex_count(&self, other: &Path) -> usize {
        let mine: HashSet<VertexId> = self.vertices.iter().copied().collect();
        other
            .vertices
            .iter()
            .filter(|vertex| mine.contains(vertex))
            .count()
    }

    /// A new path traversing the same vertices and edges in reverse order.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        let mut edges = self.edges.clone();
        vertices.reverse();
        edges.reverse();
        Self { vertices, edges }
    }

    /// Joins two paths that both end at `pivot`.
    ///
    /// `p1` is oriented so the pivot is its last vertex and `p2` so the
    /// pivot is its first; the concatenation keeps the pivot once at the
    /// seam. The result is open when the outer endpoints differ and closed
    /// when they coincide. Both inputs are left untouched.
    pub fn join(p1: &Path, p2: &Path, pivot: VertexId) -> Self {
        let head = if p1.last() == pivot {
            p1.clone()
        } else {
            p1.reversed()
        };
        let tail = if p2.first() == pivot {
            p2.clone()
        } else {
            p2.reversed()
        };

        let mut vertices = head.vertices;
        vertices.extend_from_slice(&tail.vertices[1..]);
        let mut edges = head.edges;
        edges.extend_from_slice(&tail.edges);
        Self { vertices, edges }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path of length {}:", self.vertices.len())?;
        for vertex in &self.vertices {
            write!(f, " v{}", vertex.index())?;
        }
        Ok(())
    }
}
