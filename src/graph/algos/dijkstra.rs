use crate::error::Result;
use crate::graph::algos::shared::reconstruct_path;
use crate::graph::types::{Distance, PathResult, VertexId};
use crate::graph::Graph;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use std::io::Write;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub vertex: VertexId,
    pub dist: Distance,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex && self.dist == other.dist
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.dist.value().total_cmp(&other.dist.value())
    }
}

/// Run the shortest-path engine from `start`.
///
/// Re-initializes every vertex's `dist` (infinity everywhere, zero at the
/// start), then relaxes edges greedily in increasing-distance order. On
/// completion each vertex carries its minimum distance from `start` and the
/// returned table holds its predecessor on a minimum-weight path. Returns
/// `None` when `start` is not in the graph.
pub(crate) fn run<T: Clone + Eq + fmt::Display>(
    graph: &mut Graph<T>,
    start: &T,
) -> Option<Vec<Option<VertexId>>> {
    let start_id = graph.index_of(start)?;

    for vertex in &mut graph.vertices {
        vertex.dist = Distance::INFINITE;
    }
    graph.vertices[start_id.0].dist = Distance::ZERO;

    let mut predecessors: Vec<Option<VertexId>> = vec![None; graph.vertex_count()];
    let mut settled = vec![false; graph.vertex_count()];
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    heap.push(Reverse(HeapEntry {
        vertex: start_id,
        dist: Distance::ZERO,
    }));

    while let Some(Reverse(HeapEntry { vertex, dist })) = heap.pop() {
        if settled[vertex.0] {
            continue;
        }
        settled[vertex.0] = true;

        // Snapshot the adjacency list so relaxation can write back dists
        let edges = graph.vertices[vertex.0].adjacency.clone();
        for edge in edges {
            let candidate = dist + Distance::new(edge.weight);
            if candidate < graph.vertices[edge.to.0].dist {
                graph.vertices[edge.to.0].dist = candidate;
                predecessors[edge.to.0] = Some(vertex);
                heap.push(Reverse(HeapEntry {
                    vertex: edge.to,
                    dist: candidate,
                }));
            }
        }
    }

    Some(predecessors)
}

/// Find a minimum-weight path from `from` to `to`.
#[tracing::instrument(skip(graph), fields(from = %from, to = %to))]
pub fn dijkstra_find_path<T: Clone + Eq + fmt::Display>(
    graph: &mut Graph<T>,
    from: &T,
    to: &T,
) -> PathResult<T> {
    let (Some(start), Some(goal)) = (graph.index_of(from), graph.index_of(to)) else {
        return PathResult::not_found(from.clone(), to.clone());
    };
    let Some(predecessors) = run(graph, from) else {
        return PathResult::not_found(from.clone(), to.clone());
    };

    let cost = graph.vertices[goal.0].dist;
    if !cost.is_finite() {
        return PathResult::not_found(from.clone(), to.clone());
    }

    PathResult {
        from: from.clone(),
        to: to.clone(),
        found: true,
        path: reconstruct_path(graph, &predecessors, start, goal),
        cost: Some(cost),
    }
}

/// Write the minimum distance and path from `start` to every reachable
/// vertex, in insertion order. An absent start or an empty graph writes
/// nothing.
#[tracing::instrument(skip(graph, out), fields(start = %start))]
pub fn print_shortest_paths<T, W>(graph: &mut Graph<T>, out: &mut W, start: &T) -> Result<()>
where
    T: Clone + Eq + fmt::Display,
    W: Write,
{
    let Some(start_id) = graph.index_of(start) else {
        return Ok(());
    };
    let Some(predecessors) = run(graph, start) else {
        return Ok(());
    };

    for index in 0..graph.vertex_count() {
        if index == start_id.0 {
            continue;
        }
        let dist = graph.vertices[index].dist;
        if !dist.is_finite() {
            continue;
        }

        let path = reconstruct_path(graph, &predecessors, start_id, VertexId(index));
        let steps: Vec<String> = path.iter().map(ToString::to_string).collect();
        writeln!(
            out,
            "{} ({}): {}",
            graph.vertices[index].info,
            dist,
            steps.join(" -> ")
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// HeapEntry orders by tentative distance with insertion-order ties
    #[test]
    fn test_heap_entry_ordering() {
        let near = HeapEntry {
            vertex: VertexId(0),
            dist: Distance::new(150.0),
        };
        let far = HeapEntry {
            vertex: VertexId(1),
            dist: Distance::new(200.0),
        };
        let near_twin = HeapEntry {
            vertex: VertexId(2),
            dist: Distance::new(150.0),
        };

        assert_eq!(near.cmp(&far), std::cmp::Ordering::Less);
        assert_eq!(far.cmp(&near), std::cmp::Ordering::Greater);
        assert_eq!(near.cmp(&near_twin), std::cmp::Ordering::Equal);

        assert_eq!(near, near.clone());
        assert_ne!(near, far);
    }

    #[test]
    fn test_min_heap_pops_smallest_first() {
        let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
        for (index, dist) in [(0, 780.0), (1, 160.0), (2, 200.0)] {
            heap.push(Reverse(HeapEntry {
                vertex: VertexId(index),
                dist: Distance::new(dist),
            }));
        }

        let Reverse(first) = heap.pop().unwrap();
        assert_eq!(first.vertex, VertexId(1));
        let Reverse(second) = heap.pop().unwrap();
        assert_eq!(second.vertex, VertexId(2));
    }
}
