use crate::core::models::graph::Edge;
use crate::core::models::ids::{EdgeId, VertexId};
use crate::core::models::path::Path;
use slotmap::{SecondaryMap, SlotMap, new_key_type};
use std::collections::HashSet;

new_key_type! {
    pub(crate) struct PathId;
}

/// The working set of live open paths, indexed by both endpoints.
///
/// Every open path is registered under its first and its last vertex, so
/// all paths meeting at an elimination pivot can be collected in one
/// lookup. A path stays live until one of its endpoints is eliminated, at
/// which point [`PathTable::remove`] retires it from both buckets.
#[derive(Debug, Default)]
pub(crate) struct PathTable {
    paths: SlotMap<PathId, Path>,
    buckets: SecondaryMap<VertexId, Vec<PathId>>,
}

impl PathTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the table with the length-2 path of one edge.
    pub fn insert_elementary(&mut self, edge_id: EdgeId, edge: Edge) -> PathId {
        self.insert(Path::elementary(edge_id, edge))
    }

    /// Registers an open path under both of its endpoints.
    pub fn insert(&mut self, path: Path) -> PathId {
        let first = path.first();
        let last = path.last();
        let id = self.paths.insert(path);
        for endpoint in [first, last] {
            if let Some(entry) = self.buckets.entry(endpoint) {
                entry.or_default().push(id);
            }
        }
        id
    }

    /// Live paths having `vertex` as an endpoint.
    pub fn paths_at(&self, vertex: VertexId) -> &[PathId] {
        self.buckets
            .get(vertex)
            .map(|bucket| bucket.as_slice())
            .unwrap_or(&[])
    }

    /// Resolves a live path id. The id must not have been removed.
    pub fn path(&self, id: PathId) -> &Path {
        &self.paths[id]
    }

    /// Retires a path from the table and both endpoint buckets.
    pub fn remove(&mut self, id: PathId) -> Option<Path> {
        let path = self.paths.remove(id)?;
        for endpoint in [path.first(), path.last()] {
            if let Some(bucket) = self.buckets.get_mut(endpoint) {
                bucket.retain(|&other| other != id);
            }
        }
        Some(path)
    }

    /// Total number of live paths.
    pub fn live_count(&self) -> usize {
        self.paths.len()
    }

    /// Remaining degree of `vertex`: the number of distinct opposite
    /// endpoints over its live paths.
    ///
    /// Elimination changes effective connectivity, so this is re-derived
    /// from the table rather than read off the original graph view.
    pub fn remaining_degree(&self, vertex: VertexId) -> usize {
        let others: HashSet<VertexId> = self
            .paths_at(vertex)
            .iter()
            .map(|&id| self.paths[id].other_end(vertex))
            .collect();
        others.len()
    }
}
