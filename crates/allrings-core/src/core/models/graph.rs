use super::ids::{EdgeId, VertexId};
use slotmap::{SecondaryMap, SlotMap};
use thiserror::Error;

/// Errors raised while assembling a molecular graph.
///
/// Both variants are fatal for the offending edge: no partially valid
/// graph is ever observable through a [`GraphView`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("Edge connects vertex v{} to itself", .vertex.index())]
    SelfEdge { vertex: VertexId },

    #[error("Edge references vertex v{} which is not part of this graph", .vertex.index())]
    UnknownVertex { vertex: VertexId },
}

/// An unordered pair of distinct vertices.
///
/// Parallel edges between the same vertex pair are permitted (multigraph);
/// each carries its own [`EdgeId`] and counts as a distinct elementary path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
}

impl Edge {
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.a == vertex || self.b == vertex
    }

    /// The endpoint opposite to `vertex`, or `None` if `vertex` is not an endpoint.
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.a {
            Some(self.b)
        } else if vertex == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Incrementally assembles a graph, validating every edge as it is added.
///
/// Vertices carry no chemical payload; callers map their own atom objects
/// to the returned [`VertexId`] handles and bonds to [`EdgeId`] handles.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    vertices: SlotMap<VertexId, ()>,
    edges: SlotMap<EdgeId, Edge>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new vertex and returns its stable handle.
    pub fn add_vertex(&mut self) -> VertexId {
        self.vertices.insert(())
    }

    /// Registers an edge between two previously added vertices.
    ///
    /// Handles are only meaningful within the builder that minted them; a
    /// foreign handle whose slot happens to alias a live local vertex is
    /// indistinguishable from that vertex.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfEdge`] if `a == b`, or
    /// [`GraphError::UnknownVertex`] if either handle does not refer to a
    /// live vertex of this builder.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<EdgeId, GraphError> {
        if a == b {
            return Err(GraphError::SelfEdge { vertex: a });
        }
        for vertex in [a, b] {
            if !self.vertices.contains_key(vertex) {
                return Err(GraphError::UnknownVertex { vertex });
            }
        }
        Ok(self.edges.insert(Edge { a, b }))
    }

    /// Freezes the builder into an immutable [`GraphView`].
    pub fn build(self) -> GraphView {
        let mut adjacency: SecondaryMap<VertexId, Vec<(EdgeId, VertexId)>> = SecondaryMap::new();
        for vertex in self.vertices.keys() {
            adjacency.insert(vertex, Vec::new());
        }
        for (edge_id, edge) in self.edges.iter() {
            adjacency[edge.a].push((edge_id, edge.b));
            adjacency[edge.b].push((edge_id, edge.a));
        }
        GraphView {
            vertices: self.vertices,
            edges: self.edges,
            adjacency,
        }
    }
}

/// Immutable topological view of a molecular graph.
///
/// Built once per perception run and read-only thereafter; it is a plain
/// value with no interior mutability, so shared references are safe to use
/// across threads for component-level parallelism.
#[derive(Debug, Clone)]
pub struct GraphView {
    vertices: SlotMap<VertexId, ()>,
    edges: SlotMap<EdgeId, Edge>,
    adjacency: SecondaryMap<VertexId, Vec<(EdgeId, VertexId)>>,
}

impl GraphView {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys()
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains_key(vertex)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, Edge)> + '_ {
        self.edges.iter().map(|(id, edge)| (id, *edge))
    }

    pub fn edge(&self, id: EdgeId) -> Option<Edge> {
        self.edges.get(id).copied()
    }

    /// Incident edges of `vertex` as `(edge, opposite endpoint)` pairs.
    ///
    /// Unknown vertices yield an empty slice.
    pub fn neighbors(&self, vertex: VertexId) -> &[(EdgeId, VertexId)] {
        self.adjacency
            .get(vertex)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// Number of incident edges; parallel edges each contribute one.
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.neighbors(vertex).len()
    }
}
