use crate::core::models::graph::GraphView;
use crate::core::models::ring_set::RingSet;
use crate::engine::config::PerceptionConfig;
use crate::engine::error::PerceptionError;
use crate::engine::perception::perceive_component;
use crate::engine::progress::{Diagnostic, DiagnosticReporter};
use crate::engine::utils::components::connected_components;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Perceives the exhaustive set of simple rings of `graph`.
///
/// The graph is split into connected components, each component is run
/// through the elimination engine independently (in parallel with the
/// `parallel` feature enabled), and the per-component results are merged.
/// The returned set contains *every* simple ring of the input, not merely
/// a cycle basis.
///
/// # Errors
///
/// Returns [`PerceptionError::RingSystemTooComplex`] when any component
/// exceeds the configured live-path ceiling; no partial ring set is
/// returned in that case.
#[instrument(skip_all, name = "ring_perception_workflow")]
pub fn run(
    graph: &GraphView,
    config: &PerceptionConfig,
    reporter: &DiagnosticReporter<'_>,
) -> Result<RingSet, PerceptionError> {
    reporter.report(Diagnostic::RunStart {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
    });
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "Starting exhaustive ring perception."
    );

    let ceiling = config.resolve_ceiling(graph.vertex_count());
    let components = connected_components(graph);

    #[cfg(not(feature = "parallel"))]
    let iterator = components.iter();

    #[cfg(feature = "parallel")]
    let iterator = components.par_iter();

    let partial: Result<Vec<RingSet>, PerceptionError> = iterator
        .map(|component| perceive_component(graph, component, ceiling, reporter))
        .collect();

    let mut rings = RingSet::new();
    for set in partial? {
        rings.merge(set);
    }

    info!(rings = rings.len(), "Ring perception complete.");
    reporter.report(Diagnostic::RunFinish { rings: rings.len() });
    Ok(rings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::graph::GraphBuilder;
    use crate::core::models::ids::VertexId;
    use crate::core::models::ring::{Ring, RingKey};
    use crate::engine::config::PathCeiling;
    use std::collections::HashSet;
    use std::sync::Mutex;

    fn perceive(graph: &GraphView) -> RingSet {
        run(graph, &PerceptionConfig::default(), &DiagnosticReporter::new()).unwrap()
    }

    fn sizes(set: &RingSet) -> Vec<usize> {
        let mut sizes: Vec<usize> = set.iter().map(Ring::size).collect();
        sizes.sort_unstable();
        sizes
    }

    fn keys(set: &RingSet) -> HashSet<RingKey> {
        set.iter().map(Ring::key).collect()
    }

    fn assert_ring_valid(graph: &GraphView, ring: &Ring) {
        let vertices = ring.vertices();
        let edges = ring.edges();
        assert_eq!(vertices.len(), ring.size());
        assert_eq!(edges.len(), vertices.len());

        let distinct: HashSet<VertexId> = vertices.iter().copied().collect();
        assert_eq!(distinct.len(), ring.size());

        for i in 0..vertices.len() {
            let a = vertices[i];
            let b = vertices[(i + 1) % vertices.len()];
            let edge = graph.edge(edges[i]).unwrap();
            assert_eq!(edge.other(a), Some(b), "ring edge {i} does not match");
        }
    }

    fn cycle(builder: &mut GraphBuilder, n: usize) -> Vec<VertexId> {
        let vs: Vec<VertexId> = (0..n).map(|_| builder.add_vertex()).collect();
        for i in 0..n {
            builder.add_edge(vs[i], vs[(i + 1) % n]).unwrap();
        }
        vs
    }

    // Two fused six-membered rings sharing one bond: 10 vertices, 11 edges.
    fn naphthalene() -> GraphView {
        let mut builder = GraphBuilder::new();
        let vs: Vec<VertexId> = (0..10).map(|_| builder.add_vertex()).collect();
        for i in 0..6 {
            builder.add_edge(vs[i], vs[(i + 1) % 6]).unwrap();
        }
        // Second ring reuses the v5-v0 bond as the fusion edge.
        let second = [vs[5], vs[6], vs[7], vs[8], vs[9]];
        for pair in second.windows(2) {
            builder.add_edge(pair[0], pair[1]).unwrap();
        }
        builder.add_edge(vs[9], vs[0]).unwrap();
        builder.build()
    }

    #[test]
    fn tree_has_no_rings() {
        let mut builder = GraphBuilder::new();
        let root = builder.add_vertex();
        let mut frontier = vec![root];
        for _ in 0..3 {
            let mut next = Vec::new();
            for &parent in &frontier {
                for _ in 0..2 {
                    let child = builder.add_vertex();
                    builder.add_edge(parent, child).unwrap();
                    next.push(child);
                }
            }
            frontier = next;
        }
        let graph = builder.build();
        assert_eq!(graph.edge_count(), graph.vertex_count() - 1);

        let rings = perceive(&graph);
        assert!(rings.is_empty());
        assert_eq!(rings.smallest_ring_size(), None);
    }

    #[test]
    fn six_cycle_yields_exactly_one_ring() {
        let mut builder = GraphBuilder::new();
        let vs = cycle(&mut builder, 6);
        let graph = builder.build();

        let rings = perceive(&graph);
        assert_eq!(rings.len(), 1);
        assert_eq!(rings.smallest_ring_size(), Some(6));
        for &vertex in &vs {
            assert!(rings.contains_vertex(vertex));
            assert_eq!(rings.rings_containing(vertex).count(), 1);
        }
        assert_ring_valid(&graph, &rings.rings()[0]);
    }

    #[test]
    fn naphthalene_topology_yields_three_rings() {
        let graph = naphthalene();
        assert_eq!(graph.vertex_count(), 10);
        assert_eq!(graph.edge_count(), 11);

        let rings = perceive(&graph);
        assert_eq!(sizes(&rings), vec![6, 6, 10]);
        for ring in rings.iter() {
            assert_ring_valid(&graph, ring);
        }
    }

    #[test]
    fn complete_graph_k4_yields_all_seven_cycles() {
        let mut builder = GraphBuilder::new();
        let vs: Vec<VertexId> = (0..4).map(|_| builder.add_vertex()).collect();
        for i in 0..4 {
            for j in i + 1..4 {
                builder.add_edge(vs[i], vs[j]).unwrap();
            }
        }
        let graph = builder.build();

        // K4 has four triangles and three quadrilaterals.
        let rings = perceive(&graph);
        assert_eq!(sizes(&rings), vec![3, 3, 3, 3, 4, 4, 4]);
        for ring in rings.iter() {
            assert_ring_valid(&graph, ring);
        }
    }

    #[test]
    fn repeated_runs_return_identical_ring_content() {
        let graph = naphthalene();
        let first = perceive(&graph);
        let second = perceive(&graph);
        assert_eq!(keys(&first), keys(&second));
    }

    #[test]
    fn parallel_edges_form_a_two_membered_ring() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex();
        let b = builder.add_vertex();
        builder.add_edge(a, b).unwrap();
        builder.add_edge(a, b).unwrap();
        let graph = builder.build();

        let rings = perceive(&graph);
        assert_eq!(rings.len(), 1);
        assert_eq!(rings.smallest_ring_size(), Some(2));
        assert_ring_valid(&graph, &rings.rings()[0]);
    }

    #[test]
    fn doubled_triangle_edge_yields_three_distinct_rings() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex();
        let b = builder.add_vertex();
        let c = builder.add_vertex();
        builder.add_edge(a, b).unwrap();
        builder.add_edge(a, b).unwrap();
        builder.add_edge(b, c).unwrap();
        builder.add_edge(c, a).unwrap();
        let graph = builder.build();

        // The 2-ring plus two triangles equal in vertex set but not edge set.
        let rings = perceive(&graph);
        assert_eq!(sizes(&rings), vec![2, 3, 3]);
        for ring in rings.iter() {
            assert_ring_valid(&graph, ring);
        }
    }

    #[test]
    fn rings_never_span_components() {
        let mut builder = GraphBuilder::new();
        let first = cycle(&mut builder, 3);
        let second = cycle(&mut builder, 4);
        builder.add_vertex();
        let graph = builder.build();

        let rings = perceive(&graph);
        assert_eq!(sizes(&rings), vec![3, 4]);
        for ring in rings.iter() {
            let in_first = ring.vertices().iter().all(|v| first.contains(v));
            let in_second = ring.vertices().iter().all(|v| second.contains(v));
            assert!(in_first ^ in_second);
        }
    }

    #[test]
    fn dense_graph_exceeding_the_ceiling_fails_cleanly() {
        let mut builder = GraphBuilder::new();
        let vs: Vec<VertexId> = (0..6).map(|_| builder.add_vertex()).collect();
        for i in 0..6 {
            for j in i + 1..6 {
                builder.add_edge(vs[i], vs[j]).unwrap();
            }
        }
        let graph = builder.build();

        // K6 seeds 15 elementary paths; the first elimination joins past 20.
        let config = PerceptionConfig::with_ceiling(PathCeiling::Absolute(20));
        let result = run(&graph, &config, &DiagnosticReporter::new());
        assert!(matches!(
            result,
            Err(PerceptionError::RingSystemTooComplex { ceiling: 20, .. })
        ));

        // The same graph succeeds with the default proportional ceiling.
        assert!(!perceive(&graph).is_empty());
    }

    #[test]
    fn reporter_observes_the_run() {
        let events: Mutex<Vec<Diagnostic>> = Mutex::new(Vec::new());
        let reporter = DiagnosticReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));

        let graph = naphthalene();
        let rings = run(&graph, &PerceptionConfig::default(), &reporter).unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        let count = |matcher: fn(&Diagnostic) -> bool| events.iter().filter(|e| matcher(e)).count();
        assert_eq!(count(|e| matches!(e, Diagnostic::RunStart { .. })), 1);
        assert_eq!(count(|e| matches!(e, Diagnostic::ComponentStart { .. })), 1);
        assert_eq!(
            count(|e| matches!(e, Diagnostic::VertexEliminated { .. })),
            graph.vertex_count()
        );
        assert_eq!(
            count(|e| matches!(e, Diagnostic::RingClosed { .. })),
            rings.len()
        );
        assert_eq!(count(|e| matches!(e, Diagnostic::RunFinish { .. })), 1);
    }
}
