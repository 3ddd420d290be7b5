//! Error types for routegraph
//!
//! Graph operations themselves never fail hard: a missing vertex or edge
//! degrades to a no-op or an empty search result. Errors are reserved for
//! I/O on print targets and malformed route data in the loader.

use thiserror::Error;

/// Errors that can occur during routegraph operations
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid route data: expected {expected} at token {position}, found '{found}'")]
    InvalidRouteData {
        expected: &'static str,
        position: usize,
        found: String,
    },

    #[error("truncated route data: expected {expected} after token {position}")]
    TruncatedRouteData {
        expected: &'static str,
        position: usize,
    },
}

/// Result type alias for routegraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
