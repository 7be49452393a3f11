// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Adjacency matrix and adjacency list builders
//!
//! Both builders construct a fresh [`GraphModel`] and only replace the
//! caller's graph once every vertex and edge was added, so a failure never
//! leaves a half-built graph behind.

use crate::error::{GraphError, ValidationError};
use crate::graph::GraphModel;
use crate::types::{weights_match, InputFormat, Vertex, VertexId};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::info;

/// Largest graph the text builders will create
pub const MAX_VERTICES: usize = 10_000;

/// Weight used when a list entry has no `(weight)` annotation
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Parsed adjacency list: source id to `(target, weight)` entries in input order
pub type AdjacencyList = BTreeMap<VertexId, Vec<(VertexId, f64)>>;

fn edge_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:→|->)\s*(\d+)(?:\(\s*([\d.,]+)\s*\))?").expect("edge pattern is valid")
    })
}

/// Parse a number, accepting `,` as the decimal mark
#[must_use]
pub fn parse_number(token: &str) -> Option<f64> {
    let normalized = token.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().ok()
}

/// Non-blank lines of a text block
pub(crate) fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r']).filter(|line| !line.trim().is_empty())
}

/// Tokens of one matrix row
pub(crate) fn row_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split([' ', '\t', ',']).filter(|token| !token.is_empty())
}

/// Read matrix text into an N x N grid, N being the number of non-blank lines.
///
/// Non-numeric tokens read as 0, missing cells as 0, and cells past column N
/// are ignored. Shape problems are the validator's concern.
#[must_use]
pub fn parse_matrix_text(text: &str) -> Vec<Vec<f64>> {
    let lines: Vec<&str> = content_lines(text).collect();
    let n = lines.len();

    lines
        .iter()
        .map(|line| {
            let mut row: Vec<f64> = row_tokens(line)
                .take(n)
                .map(|token| parse_number(token).unwrap_or(0.0))
                .collect();
            row.resize(n, 0.0);
            row
        })
        .collect()
}

/// Read adjacency-list text.
///
/// Lines whose source id is not a number are skipped, as are weights that
/// fail to parse (they fall back to [`DEFAULT_WEIGHT`]).
pub fn parse_adjacency_list(text: &str) -> Result<AdjacencyList, GraphError> {
    let mut adjacency = AdjacencyList::new();

    for line in content_lines(text) {
        let Some((head, rest)) = line.split_once(':') else {
            continue;
        };
        let Some(from) = parse_vertex_id(head.trim())? else {
            continue;
        };
        let targets = adjacency.entry(from).or_default();

        for captures in edge_pattern().captures_iter(rest) {
            let Some(to) = parse_vertex_id(&captures[1])? else {
                continue;
            };
            let weight = captures
                .get(2)
                .and_then(|m| parse_number(m.as_str()))
                .unwrap_or(DEFAULT_WEIGHT);
            targets.push((to, weight));
        }
    }

    Ok(adjacency)
}

/// `Ok(None)` for non-numeric text, an error for digits that overflow
fn parse_vertex_id(token: &str) -> Result<Option<VertexId>, GraphError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }
    token
        .parse()
        .map(Some)
        .map_err(|_| ValidationError::InvalidVertexId { token: token.to_string() }.into())
}

/// Whole-list directedness: undirected only if every entry has a
/// reciprocal entry with a matching weight. An empty list is undirected.
#[must_use]
pub fn is_symmetric(adjacency: &AdjacencyList) -> bool {
    adjacency.iter().all(|(&from, targets)| {
        targets.iter().all(|&(to, weight)| {
            adjacency.get(&to).is_some_and(|back| {
                back.iter()
                    .any(|&(reverse_to, reverse_weight)| reverse_to == from && weights_match(reverse_weight, weight))
            })
        })
    })
}

fn add_vertices(graph: &mut GraphModel, count: usize, names: Option<&[String]>) -> Result<(), GraphError> {
    if count > MAX_VERTICES {
        return Err(GraphError::TooManyVertices {
            requested: count,
            limit: MAX_VERTICES,
        });
    }
    for id in 0..count {
        let name = names
            .and_then(|names| names.get(id))
            .cloned()
            .unwrap_or_else(|| Vertex::default_name(id));
        graph.add_vertex(name);
    }
    Ok(())
}

/// Build a graph from an N x N matrix into `graph`.
///
/// Each non-zero cell is directed when it does not match its mirror cell.
/// Undirected pairs are submitted once, from the upper triangle.
pub fn build_from_matrix(
    graph: &mut GraphModel,
    rows: &[Vec<f64>],
    names: Option<&[String]>,
) -> Result<(), GraphError> {
    let built = matrix_graph(rows, names).map_err(|e| GraphError::parse_failure(InputFormat::Matrix, e))?;
    info!(
        vertices = built.vertex_count(),
        edges = built.edge_count(),
        "built graph from adjacency matrix"
    );
    *graph = built;
    Ok(())
}

fn matrix_graph(rows: &[Vec<f64>], names: Option<&[String]>) -> Result<GraphModel, GraphError> {
    let n = rows.len();
    let cell = |i: usize, j: usize| rows[i].get(j).copied().unwrap_or(0.0);

    let mut graph = GraphModel::new();
    add_vertices(&mut graph, n, names)?;

    for i in 0..n {
        for j in 0..n {
            let weight = cell(i, j);
            if weight == 0.0 {
                continue;
            }
            let mirror = cell(j, i);
            let is_directed = mirror == 0.0 || !weights_match(weight, mirror);
            if !is_directed && i > j {
                continue;
            }
            graph.add_edge(i, j, weight, is_directed)?;
        }
    }

    Ok(graph)
}

/// Build a graph from adjacency-list text into `graph`.
///
/// Vertex ids are dense: every id up to the largest one mentioned exists,
/// mentioned or not.
pub fn build_from_adjacency_list(
    graph: &mut GraphModel,
    text: &str,
    names: Option<&[String]>,
) -> Result<(), GraphError> {
    let built = list_graph(text, names).map_err(|e| GraphError::parse_failure(InputFormat::List, e))?;
    info!(
        vertices = built.vertex_count(),
        edges = built.edge_count(),
        directed = built.is_directed(),
        "built graph from adjacency list"
    );
    *graph = built;
    Ok(())
}

fn list_graph(text: &str, names: Option<&[String]>) -> Result<GraphModel, GraphError> {
    let adjacency = parse_adjacency_list(text)?;

    let max_id = adjacency
        .iter()
        .flat_map(|(&from, targets)| std::iter::once(from).chain(targets.iter().map(|&(to, _)| to)))
        .max();
    let count = match max_id {
        Some(id) => id.checked_add(1).ok_or(GraphError::TooManyVertices {
            requested: usize::MAX,
            limit: MAX_VERTICES,
        })?,
        None => 0,
    };

    let mut graph = GraphModel::new();
    add_vertices(&mut graph, count, names)?;

    let undirected = is_symmetric(&adjacency);
    for (&from, targets) in &adjacency {
        for &(to, weight) in targets {
            if undirected && from > to {
                continue;
            }
            graph.add_edge(from, to, weight, !undirected)?;
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_matrix(rows: &[Vec<f64>]) -> GraphModel {
        let mut graph = GraphModel::new();
        build_from_matrix(&mut graph, rows, None).unwrap();
        graph
    }

    fn from_list(text: &str) -> GraphModel {
        let mut graph = GraphModel::new();
        build_from_adjacency_list(&mut graph, text, None).unwrap();
        graph
    }

    #[test]
    fn test_parse_number_accepts_comma() {
        assert_eq!(parse_number("2,5"), Some(2.5));
        assert_eq!(parse_number(" 3 "), Some(3.0));
        assert_eq!(parse_number("x"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_parse_matrix_text() {
        let rows = parse_matrix_text("0 1\t2\n\n1,0 abc\n3 0 0 9\n");

        assert_eq!(rows, vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 0.0],
            vec![3.0, 0.0, 0.0],
        ]);
    }

    #[test]
    fn test_matrix_symmetric_is_undirected() {
        let graph = from_matrix(&[
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 1.0],
            vec![0.0, 1.0, 0.0],
        ]);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 4);
        assert!(!graph.is_directed());
        assert_eq!(graph.vertex_names(), vec!["V0", "V1", "V2"]);
    }

    #[test]
    fn test_matrix_one_way_is_directed() {
        let graph = from_matrix(&[vec![0.0, 2.0], vec![0.0, 0.0]]);

        assert_eq!(graph.edge_count(), 1);
        assert!(graph.edges()[0].is_directed);
        assert!(graph.is_directed());
    }

    #[test]
    fn test_matrix_reciprocal_different_weights() {
        let graph = from_matrix(&[vec![0.0, 2.0], vec![3.0, 0.0]]);

        assert_eq!(graph.edge_weight(0, 1), Some(2.0));
        assert_eq!(graph.edge_weight(1, 0), Some(3.0));
        assert!(graph.is_directed());
    }

    #[test]
    fn test_matrix_tiny_one_way_cells_stay_directed() {
        for rows in [
            [vec![0.0, 0.0], vec![5e-5, 0.0]],
            [vec![0.0, 5e-5], vec![0.0, 0.0]],
        ] {
            let graph = from_matrix(&rows);

            assert_eq!(graph.edge_count(), 1);
            assert!(graph.edges()[0].is_directed);
            assert!(graph.is_directed());
            assert_eq!(graph.adjacency_matrix(), rows.to_vec());
        }
    }

    #[test]
    fn test_list_sparse_high_ids() {
        let graph = from_list("0: ->9999\n9999: ->0");

        assert_eq!(graph.vertex_count(), MAX_VERTICES);
        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.is_directed());
        assert_eq!(graph.vertex(5000).map(|v| v.name.as_str()), Some("V5000"));
    }

    #[test]
    fn test_matrix_short_rows_read_as_zero() {
        let graph = from_matrix(&[vec![0.0, 1.0], vec![]]);

        assert_eq!(graph.vertex_count(), 2);
        assert!(graph.is_directed());
    }

    #[test]
    fn test_matrix_invalid_weight_leaves_graph_untouched() {
        let mut graph = GraphModel::new();
        graph.add_vertex("keep");

        let err = build_from_matrix(&mut graph, &[vec![0.0, -1.0], vec![0.0, 0.0]], None).unwrap_err();

        assert!(matches!(err, GraphError::ParseFailure { format: InputFormat::Matrix, .. }));
        assert_eq!(graph.vertex_names(), vec!["keep"]);
    }

    #[test]
    fn test_matrix_uses_given_names() {
        let names = vec!["a".to_string()];
        let mut graph = GraphModel::new();
        build_from_matrix(&mut graph, &[vec![0.0, 1.0], vec![1.0, 0.0]], Some(&names)).unwrap();

        assert_eq!(graph.vertex_names(), vec!["a", "V1"]);
    }

    #[test]
    fn test_parse_adjacency_list_arrows_and_weights() {
        let adjacency = parse_adjacency_list("0: →1 ->2(2.5)\n1: -> 0 (3)\n2: →0(1,5)").unwrap();

        assert_eq!(adjacency[&0], vec![(1, 1.0), (2, 2.5)]);
        assert_eq!(adjacency[&1], vec![(0, 1.0)]);
        assert_eq!(adjacency[&2], vec![(0, 1.5)]);
    }

    #[test]
    fn test_list_reciprocal_is_undirected() {
        let graph = from_list("0: →1\n1: →0");

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.is_directed());
    }

    #[test]
    fn test_list_missing_reciprocal_is_directed() {
        let graph = from_list("0: →1\n1: →2");

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.edges().iter().all(|e| e.is_directed));
        assert!(graph.is_directed());
    }

    #[test]
    fn test_list_weight_mismatch_is_directed() {
        let graph = from_list("0: →1(2)\n1: →0(3)");

        assert!(graph.is_directed());
        assert_eq!(graph.edge_weight(0, 1), Some(2.0));
        assert_eq!(graph.edge_weight(1, 0), Some(3.0));
    }

    #[test]
    fn test_list_creates_dense_ids() {
        let graph = from_list("0: →3\n3: →0");

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.vertex_names(), vec!["V0", "V1", "V2", "V3"]);
        assert_eq!(graph.edges_from(1).count(), 0);
    }

    #[test]
    fn test_list_isolated_vertex_line() {
        let graph = from_list("2:");

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.is_directed());
    }

    #[test]
    fn test_empty_list_has_no_vertices() {
        let adjacency = parse_adjacency_list("").unwrap();
        assert!(is_symmetric(&adjacency));

        let graph = from_list("");
        assert!(graph.is_empty());
    }

    #[test]
    fn test_list_vertex_ceiling() {
        let mut graph = GraphModel::new();

        let err = build_from_adjacency_list(&mut graph, "0: ->20000", None).unwrap_err();

        match err {
            GraphError::ParseFailure { format, source } => {
                assert_eq!(format, InputFormat::List);
                assert!(matches!(*source, GraphError::TooManyVertices { requested: 20001, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_list_overflowing_id() {
        let mut graph = GraphModel::new();

        let err = build_from_adjacency_list(&mut graph, "0: ->99999999999999999999999", None).unwrap_err();

        assert!(err.to_string().contains("out of range"));
    }
}
