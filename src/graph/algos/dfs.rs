use crate::graph::types::{PathResult, VertexId};
use crate::graph::Graph;
use std::fmt;

/// Find a path from `from` to `to` by depth-first search.
///
/// Explores adjacency entries in insertion order and backtracks on dead
/// ends, so the reported path is the first one discovered, not necessarily
/// the shortest. Missing endpoints or no path yield a not-found result.
#[tracing::instrument(skip(graph), fields(from = %from, to = %to))]
pub fn dfs_find_path<T: Clone + Eq + fmt::Display>(
    graph: &Graph<T>,
    from: &T,
    to: &T,
) -> PathResult<T> {
    let (Some(start), Some(goal)) = (graph.index_of(from), graph.index_of(to)) else {
        return PathResult::not_found(from.clone(), to.clone());
    };

    let mut visited = vec![false; graph.vertex_count()];
    let mut trail: Vec<VertexId> = Vec::new();

    if !visit(graph, start, goal, &mut visited, &mut trail) {
        return PathResult::not_found(from.clone(), to.clone());
    }

    PathResult {
        from: from.clone(),
        to: to.clone(),
        found: true,
        path: trail
            .into_iter()
            .map(|id| graph.vertices[id.0].info.clone())
            .collect(),
        cost: None,
    }
}

fn visit<T: Clone + Eq + fmt::Display>(
    graph: &Graph<T>,
    current: VertexId,
    goal: VertexId,
    visited: &mut [bool],
    trail: &mut Vec<VertexId>,
) -> bool {
    visited[current.0] = true;
    trail.push(current);

    if current == goal {
        return true;
    }

    for edge in graph.vertices[current.0].edges() {
        if !visited[edge.to.0] && visit(graph, edge.to, goal, visited, trail) {
            return true;
        }
    }

    // Dead end, drop this vertex from the trail
    trail.pop();
    false
}
