use crate::graph::types::VertexId;
use crate::graph::Graph;
use std::fmt;

/// Walk a predecessor table backwards from goal to start and return the
/// vertex values in start-to-goal order. The caller guarantees the goal was
/// reached, so every step back has a predecessor until start.
pub(crate) fn reconstruct_path<T: Clone + Eq + fmt::Display>(
    graph: &Graph<T>,
    predecessors: &[Option<VertexId>],
    start: VertexId,
    goal: VertexId,
) -> Vec<T> {
    let mut ids = vec![goal];
    let mut current = goal;

    while current != start {
        if let Some(pred) = predecessors[current.0] {
            ids.push(pred);
            current = pred;
        } else {
            break;
        }
    }

    ids.reverse();
    ids.into_iter()
        .map(|id| graph.vertices[id.0].info.clone())
        .collect()
}
