// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Shortest path queries
//!
//! Dijkstra with a linear scan for the next vertex: graphs here have tens of
//! vertices, so O(V^2) beats maintaining a heap. Queries never fail; an
//! unreachable target or a bad endpoint yields an empty path.

use crate::graph::GraphModel;
use crate::types::{is_valid_weight, VertexId};
use tracing::debug;

/// Shortest path from `start` to `end`, both inclusive.
///
/// Returns `[start]` when the endpoints are equal and an empty vector when
/// either endpoint is out of range or `end` is unreachable.
#[must_use]
pub fn shortest_path(graph: &GraphModel, start: VertexId, end: VertexId) -> Vec<VertexId> {
    let n = graph.vertex_count();
    if start >= n || end >= n {
        debug!(start, end, vertices = n, "path endpoints out of range");
        return Vec::new();
    }
    if start == end {
        return vec![start];
    }

    let mut distances = vec![f64::INFINITY; n];
    let mut previous: Vec<Option<VertexId>> = vec![None; n];
    let mut visited = vec![false; n];
    distances[start] = 0.0;

    for _ in 0..n {
        // First minimum wins, so ties settle on the lowest id
        let Some(current) = (0..n)
            .filter(|&v| !visited[v] && distances[v].is_finite())
            .min_by(|&a, &b| distances[a].total_cmp(&distances[b]))
        else {
            break;
        };
        if current == end {
            break;
        }
        visited[current] = true;

        for edge in graph.edges_from(current) {
            let neighbor = edge.to;
            if neighbor >= n || visited[neighbor] || !is_valid_weight(edge.weight) {
                continue;
            }
            let candidate = distances[current] + edge.weight;
            if candidate < distances[neighbor] {
                distances[neighbor] = candidate;
                previous[neighbor] = Some(current);
            }
        }
    }

    if distances[end].is_infinite() {
        debug!(start, end, "no path");
        return Vec::new();
    }

    let path = reconstruct_path(&previous, start, end);
    debug!(start, end, distance = distances[end], hops = path.len().saturating_sub(1), "found path");
    path
}

/// Walk predecessors back from `end`. A chain longer than the vertex count
/// can only come from a cycle, which yields an empty path.
fn reconstruct_path(previous: &[Option<VertexId>], start: VertexId, end: VertexId) -> Vec<VertexId> {
    let mut path = Vec::new();
    let mut node = Some(end);

    while let Some(current) = node {
        if current >= previous.len() || path.len() >= previous.len() {
            return Vec::new();
        }
        path.push(current);
        node = previous[current];
    }

    path.reverse();
    if path.first() == Some(&start) {
        path
    } else {
        Vec::new()
    }
}

/// Sum of record weights along `path`, or `None` if a hop has no record
#[must_use]
pub fn path_weight(graph: &GraphModel, path: &[VertexId]) -> Option<f64> {
    if path.is_empty() {
        return None;
    }
    path.windows(2)
        .map(|hop| graph.edge_weight(hop[0], hop[1]))
        .sum()
}
