use crate::core::models::graph::GraphView;
use crate::core::models::ids::VertexId;
use crate::core::models::path::Path;
use crate::core::models::ring::Ring;
use crate::core::models::ring_set::RingSet;
use crate::engine::error::PerceptionError;
use crate::engine::path_table::{PathId, PathTable};
use crate::engine::progress::{Diagnostic, DiagnosticReporter};
use itertools::Itertools;
use std::collections::HashSet;
use tracing::{debug, instrument, trace};

/// Runs the elimination loop over one connected component.
///
/// Every vertex of the component is retired exactly once, in ascending
/// remaining-degree order with ties broken by vertex id. The order is a
/// performance heuristic only: any elimination order yields the same ring
/// content, but low-degree-first keeps the intermediate path table small.
///
/// The `ceiling` bounds the live path count; crossing it aborts the run
/// with [`PerceptionError::RingSystemTooComplex`] and discards all partial
/// results.
#[instrument(skip_all, name = "ring_perception", fields(vertices = component.len()))]
pub(crate) fn perceive_component(
    graph: &GraphView,
    component: &[VertexId],
    ceiling: usize,
    reporter: &DiagnosticReporter<'_>,
) -> Result<RingSet, PerceptionError> {
    reporter.report(Diagnostic::ComponentStart {
        vertices: component.len(),
    });

    let members: HashSet<VertexId> = component.iter().copied().collect();
    let mut table = PathTable::new();
    for (edge_id, edge) in graph.edges() {
        // Edges never cross components, so one endpoint check suffices.
        if members.contains(&edge.a) {
            table.insert_elementary(edge_id, edge);
        }
    }
    if table.live_count() > ceiling {
        return Err(PerceptionError::RingSystemTooComplex {
            live_paths: table.live_count(),
            ceiling,
        });
    }

    let mut rings = RingSet::new();
    let mut pending: Vec<VertexId> = component.to_vec();

    while !pending.is_empty() {
        // Remaining degree is re-derived from the table each pass; the
        // original graph degrees go stale as vertices are retired.
        let Some((index, _)) = pending
            .iter()
            .enumerate()
            .min_by_key(|&(_, &vertex)| (table.remaining_degree(vertex), vertex))
        else {
            break;
        };
        let pivot = pending.swap_remove(index);

        let at_pivot: Vec<PathId> = table.paths_at(pivot).to_vec();
        let mut joins = 0;
        for pair in at_pivot.iter().copied().combinations(2) {
            let p1 = table.path(pair[0]);
            let p2 = table.path(pair[1]);

            let shared = p1.shared_vertex_count(p2);
            let closes = shared == 2 && p1.other_end(pivot) == p2.other_end(pivot);
            if shared > 1 && !closes {
                // Overlap beyond the pivot: the join would self-intersect.
                continue;
            }

            let joined = Path::join(p1, p2, pivot);
            if closes {
                let ring = Ring::from_closed_path(&joined);
                trace!(%ring, "Join closed a ring");
                let size = ring.size();
                if rings.add(ring) {
                    reporter.report(Diagnostic::RingClosed { size });
                }
            } else {
                trace!(path = %joined, "Joined two paths");
                table.insert(joined);
                joins += 1;
                if table.live_count() > ceiling {
                    return Err(PerceptionError::RingSystemTooComplex {
                        live_paths: table.live_count(),
                        ceiling,
                    });
                }
            }
        }

        // Every path that terminated at the pivot is superseded, either by
        // a ring or by one of the freshly joined paths.
        for id in at_pivot {
            table.remove(id);
        }
        debug!(
            vertex = pivot.index(),
            joins,
            live_paths = table.live_count(),
            "Eliminated vertex"
        );
        reporter.report(Diagnostic::VertexEliminated {
            vertex: pivot,
            joins,
            live_paths: table.live_count(),
        });
    }

    Ok(rings)
}
