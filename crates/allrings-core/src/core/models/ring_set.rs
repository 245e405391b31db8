use super::ids::VertexId;
use super::ring::{Ring, RingKey};
use std::collections::HashSet;

/// The accumulated, deduplicated set of rings discovered during a run.
///
/// A ring set only grows. Two rings are considered the same when they share
/// both their vertex set and their edge set (see [`RingKey`]); a returned
/// set is always exhaustive for the graph it was perceived from, never a
/// truncated or partial variant.
#[derive(Debug, Clone, Default)]
pub struct RingSet {
    rings: Vec<Ring>,
    seen: HashSet<RingKey>,
}

impl RingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `ring` unless an equivalent ring is already present.
    ///
    /// Returns `true` when the ring was new.
    pub fn add(&mut self, ring: Ring) -> bool {
        if self.seen.insert(ring.key()) {
            self.rings.push(ring);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// All rings in discovery order.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ring> {
        self.rings.iter()
    }

    /// True if any ring passes through `vertex`.
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.rings.iter().any(|ring| ring.contains(vertex))
    }

    /// Lazily yields the rings passing through `vertex`; call again to
    /// restart the traversal.
    pub fn rings_containing(&self, vertex: VertexId) -> impl Iterator<Item = &Ring> {
        self.rings.iter().filter(move |ring| ring.contains(vertex))
    }

    /// Size of the smallest ring, or `None` for an empty set.
    pub fn smallest_ring_size(&self) -> Option<usize> {
        self.rings.iter().map(Ring::size).min()
    }

    /// Absorbs another set, keeping deduplication intact.
    pub(crate) fn merge(&mut self, other: RingSet) {
        for ring in other.rings {
            self.add(ring);
        }
    }
}
