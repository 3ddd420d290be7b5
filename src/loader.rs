//! Route dataset loader
//!
//! Parses whitespace-separated route tokens into a `Graph<String>`:
//! `<from> <outDegree> [<weight> <to>]*` repeated per source vertex until
//! end of input. Targets may be referenced before their own line; the
//! loader registers them up front so `add_edge` keeps its
//! both-endpoints-exist contract.

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a route network from a token stream
pub fn load_routes<R: BufRead>(reader: R) -> Result<Graph<String>> {
    let mut tokens: Vec<String> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        tokens.extend(line.split_whitespace().map(str::to_string));
    }
    parse_tokens(&tokens)
}

/// Load a route network from a file path
pub fn load_routes_file<P: AsRef<Path>>(path: P) -> Result<Graph<String>> {
    let file = File::open(path)?;
    load_routes(BufReader::new(file))
}

fn parse_tokens(tokens: &[String]) -> Result<Graph<String>> {
    let mut graph = Graph::new();
    let mut edge_count = 0usize;
    let mut position = 0;

    while position < tokens.len() {
        let from = tokens[position].clone();
        position += 1;
        graph.add_vertex(from.clone());

        let degree_token = next_token(tokens, &mut position, "out-degree")?;
        let out_degree: usize =
            degree_token
                .parse()
                .map_err(|_| GraphError::InvalidRouteData {
                    expected: "out-degree",
                    position: position - 1,
                    found: degree_token.clone(),
                })?;

        for _ in 0..out_degree {
            let weight_token = next_token(tokens, &mut position, "edge weight")?;
            let weight: f64 = weight_token
                .parse()
                .map_err(|_| GraphError::InvalidRouteData {
                    expected: "edge weight",
                    position: position - 1,
                    found: weight_token.clone(),
                })?;

            let to = next_token(tokens, &mut position, "target vertex")?.clone();
            graph.add_vertex(to.clone());
            graph.add_edge(&from, &to, weight);
            edge_count += 1;
        }
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = edge_count,
        "loaded route network"
    );
    Ok(graph)
}

fn next_token<'a>(
    tokens: &'a [String],
    position: &mut usize,
    expected: &'static str,
) -> Result<&'a String> {
    let token = tokens
        .get(*position)
        .ok_or(GraphError::TruncatedRouteData {
            expected,
            position: *position,
        })?;
    *position += 1;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_single_route() {
        let graph = load_routes("Austin 1 200 Dallas".as_bytes()).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        let austin = graph.vertices().first().unwrap();
        assert_eq!(austin.info, "Austin");
        assert_eq!(austin.out_degree(), 1);
    }

    #[test]
    fn test_load_forward_reference() {
        // Dallas is a target before its own line defines it
        let data = "Austin 1 200 Dallas\nDallas 1 200 Austin";
        let graph = load_routes(data.as_bytes()).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        let dallas = graph
            .vertex(graph.index_of(&"Dallas".to_string()).unwrap())
            .unwrap();
        assert_eq!(dallas.out_degree(), 1);
    }

    #[test]
    fn test_load_empty_input() {
        let graph = load_routes("".as_bytes()).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_load_bad_out_degree() {
        let err = load_routes("Austin x".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            GraphError::InvalidRouteData {
                expected: "out-degree",
                ..
            }
        ));
    }

    #[test]
    fn test_load_truncated_edge() {
        let err = load_routes("Austin 2 200 Dallas 160".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            GraphError::TruncatedRouteData {
                expected: "target vertex",
                ..
            }
        ));
    }

    #[test]
    fn test_load_routes_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Austin 2 200 Dallas 160 Houston").unwrap();
        writeln!(file, "Dallas 1 250 Houston").unwrap();

        let graph = load_routes_file(file.path()).unwrap();
        assert_eq!(graph.vertex_count(), 3);

        let mut printed = Vec::new();
        graph.print(&mut printed).unwrap();
        let text = String::from_utf8(printed).unwrap();
        assert!(text.starts_with("Austin 2\n200 Dallas\n160 Houston\n"));
    }
}
