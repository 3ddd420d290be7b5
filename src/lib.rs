//! Routegraph
//!
//! Directed, weighted graph over a generic vertex value type, with
//! depth-first, breadth-first, and Dijkstra shortest-path route search.

pub mod error;
pub mod graph;
pub mod loader;
pub mod logging;

pub use error::{GraphError, Result};
pub use graph::{Distance, EdgeEntry, Graph, PathResult, SearchMode, Vertex, VertexId};
pub use loader::{load_routes, load_routes_file};
