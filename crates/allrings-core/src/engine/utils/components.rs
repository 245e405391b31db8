use crate::core::models::graph::GraphView;
use crate::core::models::ids::VertexId;
use std::collections::{HashSet, VecDeque};

/// Partitions the graph into connected components by breadth-first search.
///
/// Rings never span components, so each returned vertex set is an
/// independent unit of work for the perception engine. Isolated vertices
/// form singleton components.
pub(crate) fn connected_components(graph: &GraphView) -> Vec<Vec<VertexId>> {
    let mut visited: HashSet<VertexId> = HashSet::with_capacity(graph.vertex_count());
    let mut components = Vec::new();

    for start in graph.vertices() {
        if !visited.insert(start) {
            continue;
        }
        let mut component = vec![start];
        let mut queue = VecDeque::from([start]);
        while let Some(vertex) = queue.pop_front() {
            for &(_, neighbor) in graph.neighbors(vertex) {
                if visited.insert(neighbor) {
                    component.push(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }
        components.push(component);
    }
    components
}
