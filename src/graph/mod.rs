//! Directed weighted graph core
//!
//! `Graph<T>` owns its vertices in insertion order and stores adjacency as
//! index handles into that collection, so removing a vertex is a safe
//! scrub-and-repoint pass instead of a dangling-reference hazard.

pub mod algos;
pub mod types;

pub use algos::{bfs_find_path, dfs_find_path, dijkstra_find_path, print_shortest_paths};
pub use types::{Distance, EdgeEntry, PathResult, SearchMode, Vertex, VertexId};

use crate::error::Result;
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// Directed, weighted graph over a vertex value type.
///
/// Vertex values are unique within one graph; all lookups are by value.
/// Operations referencing an absent vertex degrade to no-ops or not-found
/// results rather than failing.
#[derive(Debug, Clone, Serialize)]
pub struct Graph<T> {
    vertices: Vec<Vertex<T>>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Graph {
            vertices: Vec::new(),
        }
    }
}

impl<T: Clone + Eq + fmt::Display> Graph<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Handle for the vertex holding `value`, valid until the next
    /// structural mutation
    pub fn index_of(&self, value: &T) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|v| v.info == *value)
            .map(VertexId)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.0)
    }

    /// Insert a vertex. Duplicate values are ignored, returning false.
    pub fn add_vertex(&mut self, value: T) -> bool {
        if self.index_of(&value).is_some() {
            return false;
        }
        self.vertices.push(Vertex::new(value));
        true
    }

    /// Remove a vertex and every edge referencing it. Surviving adjacency
    /// handles are re-pointed to the shifted collection. Returns false when
    /// the value is absent.
    pub fn remove_vertex(&mut self, value: &T) -> bool {
        let Some(id) = self.index_of(value) else {
            return false;
        };

        self.vertices.remove(id.0);
        for vertex in &mut self.vertices {
            vertex.adjacency.retain(|edge| edge.to != id);
            for edge in &mut vertex.adjacency {
                if edge.to.0 > id.0 {
                    edge.to.0 -= 1;
                }
            }
        }
        true
    }

    /// Add a directed edge. Both endpoints must already exist; otherwise a
    /// no-op returning false.
    pub fn add_edge(&mut self, from: &T, to: &T, weight: f64) -> bool {
        let (Some(from_id), Some(to_id)) = (self.index_of(from), self.index_of(to)) else {
            return false;
        };
        self.vertices[from_id.0]
            .adjacency
            .push(EdgeEntry { to: to_id, weight });
        true
    }

    /// Remove the first adjacency entry matching target and weight.
    /// Returns false when no entry matches.
    pub fn remove_edge(&mut self, from: &T, to: &T, weight: f64) -> bool {
        let (Some(from_id), Some(to_id)) = (self.index_of(from), self.index_of(to)) else {
            return false;
        };
        let adjacency = &mut self.vertices[from_id.0].adjacency;
        match adjacency
            .iter()
            .position(|edge| edge.to == to_id && edge.weight == weight)
        {
            Some(position) => {
                adjacency.remove(position);
                true
            }
            None => false,
        }
    }

    /// Write the adjacency-list text form: per vertex in insertion order,
    /// `<value> <out-degree>` then one `<weight> <target>` line per edge.
    /// An empty graph writes nothing.
    pub fn print<W: Write>(&self, out: &mut W) -> Result<()> {
        for vertex in &self.vertices {
            writeln!(out, "{} {}", vertex.info, vertex.out_degree())?;
            for edge in &vertex.adjacency {
                writeln!(out, "{} {}", edge.weight, self.vertices[edge.to.0].info)?;
            }
        }
        Ok(())
    }

    /// Depth-first path search, see [`algos::dfs_find_path`]
    pub fn depth_first_search(&self, start: &T, goal: &T) -> PathResult<T> {
        algos::dfs_find_path(self, start, goal)
    }

    /// Breadth-first path search, see [`algos::bfs_find_path`]
    pub fn breadth_first_search(&self, start: &T, goal: &T) -> PathResult<T> {
        algos::bfs_find_path(self, start, goal)
    }

    /// Write the minimum distance and path from `start` to every reachable
    /// vertex. Leaves each vertex's `dist` holding its distance from
    /// `start`. Absent start or empty graph writes nothing.
    pub fn shortest_path<W: Write>(&mut self, out: &mut W, start: &T) -> Result<()> {
        algos::print_shortest_paths(self, out, start)
    }

    /// Search for a path with the chosen algorithm and write the trace:
    /// one line per step then `DONE!`, or `Cannot find a path!` when there
    /// is no path or an endpoint is missing.
    pub fn print_path<W: Write>(
        &mut self,
        out: &mut W,
        start: &T,
        goal: &T,
        mode: SearchMode,
    ) -> Result<()> {
        let result = match mode {
            SearchMode::DepthFirst => algos::dfs_find_path(self, start, goal),
            SearchMode::BreadthFirst => algos::bfs_find_path(self, start, goal),
            SearchMode::Shortest => algos::dijkstra_find_path(self, start, goal),
        };

        if result.found {
            for step in &result.path {
                writeln!(out, "{}", step)?;
            }
            writeln!(out, "DONE!")?;
        } else {
            writeln!(out, "Cannot find a path!")?;
        }
        Ok(())
    }
}
