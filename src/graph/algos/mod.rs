//! Path-search algorithms over a route graph
//!
//! - DFS for reachability in adjacency order
//! - BFS for fewest-edge paths
//! - Dijkstra for minimum-weight paths and the shortest-path report

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
mod shared;

pub use bfs::bfs_find_path;
pub use dfs::dfs_find_path;
pub use dijkstra::{dijkstra_find_path, print_shortest_paths};
