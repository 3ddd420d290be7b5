use serde::Serialize;
use std::fmt;

/// Tentative distance used by the shortest-path engine.
///
/// Comparison follows the underlying float: strictly smaller is less,
/// strictly larger is greater, and equal distances are neither.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);
    pub const INFINITE: Distance = Distance(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Distance(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::INFINITE
    }
}

impl std::ops::Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Distance(self.0 + other.0)
    }
}

impl From<f64> for Distance {
    fn from(value: f64) -> Self {
        Distance(value)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Index-based handle into a graph's vertex collection.
///
/// Valid only until the next structural mutation (add/remove vertex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Directed outgoing edge stored in a vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeEntry {
    pub to: VertexId,
    pub weight: f64,
}

/// A named node in the graph.
///
/// `dist` is the tentative distance written by the last shortest-path run;
/// it is re-initialized at the start of every run.
#[derive(Debug, Clone, Serialize)]
pub struct Vertex<T> {
    pub info: T,
    pub dist: Distance,
    pub(crate) adjacency: Vec<EdgeEntry>,
}

impl<T> Vertex<T> {
    pub(crate) fn new(info: T) -> Self {
        Vertex {
            info,
            dist: Distance::INFINITE,
            adjacency: Vec::new(),
        }
    }

    /// Outgoing edges in insertion order
    pub fn edges(&self) -> &[EdgeEntry] {
        &self.adjacency
    }

    pub fn out_degree(&self) -> usize {
        self.adjacency.len()
    }
}

/// Search algorithm selector for path printing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    DepthFirst,
    BreadthFirst,
    Shortest,
}

impl SearchMode {
    /// Parse the legacy single-character flags 'd', 'b', 's'
    pub fn from_flag(flag: char) -> Option<Self> {
        match flag.to_ascii_lowercase() {
            'd' => Some(SearchMode::DepthFirst),
            'b' => Some(SearchMode::BreadthFirst),
            's' => Some(SearchMode::Shortest),
            _ => None,
        }
    }
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "d" | "dfs" | "depth-first" => Ok(SearchMode::DepthFirst),
            "b" | "bfs" | "breadth-first" => Ok(SearchMode::BreadthFirst),
            "s" | "shortest" => Ok(SearchMode::Shortest),
            other => Err(format!(
                "unknown search mode '{}' (expected: dfs, bfs, shortest)",
                other
            )),
        }
    }
}

/// Path search result
#[derive(Debug, Clone, Serialize)]
pub struct PathResult<T> {
    pub from: T,
    pub to: T,
    pub found: bool,
    /// Vertex values from start to goal inclusive; empty when not found
    pub path: Vec<T>,
    /// Total weight of the path (shortest-path mode only)
    pub cost: Option<Distance>,
}

impl<T> PathResult<T> {
    pub(crate) fn not_found(from: T, to: T) -> Self {
        PathResult {
            from,
            to,
            found: false,
            path: Vec::new(),
            cost: None,
        }
    }

    pub fn path_length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_ordering_strict() {
        assert!(Distance::new(150.0) < Distance::new(200.0));
        assert!(!(Distance::new(1500.0) < Distance::new(200.0)));
        assert!(Distance::new(1500.0) > Distance::new(200.0));
        assert!(!(Distance::new(150.0) > Distance::new(200.0)));
    }

    #[test]
    fn test_distance_ordering_equal() {
        let a = Distance::new(150.0);
        let b = Distance::new(150.0);
        assert!(!(a < b));
        assert!(!(a > b));
    }

    #[test]
    fn test_distance_default_is_infinite() {
        assert!(!Distance::default().is_finite());
        assert!(Distance::ZERO.is_finite());
    }

    #[test]
    fn test_distance_addition() {
        let total = Distance::new(200.0) + Distance::new(780.0);
        assert_eq!(total.value(), 980.0);
    }

    #[test]
    fn test_distance_display_drops_fraction() {
        assert_eq!(Distance::new(200.0).to_string(), "200");
        assert_eq!(Distance::new(160.5).to_string(), "160.5");
    }

    #[test]
    fn test_search_mode_from_flag() {
        assert_eq!(SearchMode::from_flag('d'), Some(SearchMode::DepthFirst));
        assert_eq!(SearchMode::from_flag('b'), Some(SearchMode::BreadthFirst));
        assert_eq!(SearchMode::from_flag('s'), Some(SearchMode::Shortest));
        assert_eq!(SearchMode::from_flag('x'), None);
    }

    #[test]
    fn test_search_mode_from_str() {
        assert_eq!("dfs".parse::<SearchMode>(), Ok(SearchMode::DepthFirst));
        assert_eq!("Shortest".parse::<SearchMode>(), Ok(SearchMode::Shortest));
        assert!("dijkstra-ish".parse::<SearchMode>().is_err());
    }
}
