use crate::graph::algos::shared::reconstruct_path;
use crate::graph::types::{PathResult, VertexId};
use crate::graph::Graph;
use std::collections::VecDeque;
use std::fmt;

/// Find a path from `from` to `to` by breadth-first search.
///
/// Level-order exploration with a predecessor table, so the reported path
/// has the fewest edges (not the least weight). Missing endpoints or no
/// path yield a not-found result.
#[tracing::instrument(skip(graph), fields(from = %from, to = %to))]
pub fn bfs_find_path<T: Clone + Eq + fmt::Display>(
    graph: &Graph<T>,
    from: &T,
    to: &T,
) -> PathResult<T> {
    let (Some(start), Some(goal)) = (graph.index_of(from), graph.index_of(to)) else {
        return PathResult::not_found(from.clone(), to.clone());
    };

    let mut visited = vec![false; graph.vertex_count()];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; graph.vertex_count()];
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    queue.push_back(start);
    visited[start.0] = true;

    let mut found = false;

    while let Some(current) = queue.pop_front() {
        if current == goal {
            found = true;
            break;
        }

        for edge in graph.vertices[current.0].edges() {
            if !visited[edge.to.0] {
                visited[edge.to.0] = true;
                predecessors[edge.to.0] = Some(current);
                queue.push_back(edge.to);
            }
        }
    }

    if !found {
        return PathResult::not_found(from.clone(), to.clone());
    }

    PathResult {
        from: from.clone(),
        to: to.clone(),
        found: true,
        path: reconstruct_path(graph, &predecessors, start, goal),
        cost: None,
    }
}
