// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Human-readable and machine exports of a [`GraphModel`]

use crate::graph::GraphModel;
use anyhow::{Context, Result};
use std::fmt::Write as _;

/// Placeholder text for exports of an empty graph
pub const EMPTY_GRAPH: &str = "Graph is empty";

/// Format a weight with at most one decimal, dropping a trailing `.0`
#[must_use]
pub fn format_weight(weight: f64) -> String {
    let text = format!("{weight:.1}");
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

impl GraphModel {
    /// Tabular adjacency matrix with vertex names as row and column headers
    #[must_use]
    pub fn adjacency_matrix_text(&self) -> String {
        let n = self.vertex_count();
        if n == 0 {
            return EMPTY_GRAPH.to_string();
        }

        let matrix = self.adjacency_matrix();
        let mut out = String::from("     ");
        for vertex in self.vertices() {
            let _ = write!(out, "{:>5}", vertex.name);
        }
        out.push('\n');
        out.push_str(&"-".repeat(6 + n * 5));
        out.push('\n');

        for (vertex, row) in self.vertices().iter().zip(&matrix) {
            let _ = write!(out, "{:>4} |", vertex.name);
            for &weight in row {
                let _ = write!(out, "{:>5}", format_weight(weight));
            }
            out.push('\n');
        }

        out
    }

    /// One line per vertex: ` i (name): →j →k(2.5)`
    #[must_use]
    pub fn adjacency_list_text(&self) -> String {
        if self.is_empty() {
            return EMPTY_GRAPH.to_string();
        }

        let mut out = String::new();
        for (vertex, neighbors) in self.vertices().iter().zip(self.adjacency_list()) {
            let _ = write!(out, "{:>2} ({}): ", vertex.id, vertex.name);
            if neighbors.is_empty() {
                out.push_str("no adjacent vertices");
            } else {
                let entries: Vec<String> = neighbors
                    .iter()
                    .map(|&(to, weight)| {
                        if weight == 1.0 {
                            format!("→{to}")
                        } else {
                            format!("→{to}({})", format_weight(weight))
                        }
                    })
                    .collect();
                out.push_str(&entries.join(" "));
            }
            out.push('\n');
        }

        out
    }

    /// Export to DOT format for Graphviz.
    ///
    /// An undirected graph is written as `graph` with each pair once.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let directed = self.is_directed();
        let (keyword, arrow) = if directed { ("digraph", "->") } else { ("graph", "--") };

        let mut dot = format!("{keyword} G {{\n");
        dot.push_str("  node [shape=circle];\n");

        for vertex in self.vertices() {
            let _ = writeln!(dot, "  {} [label=\"{}\"];", vertex.id, vertex.name.replace('"', "\\\""));
        }

        for edge in self.edges() {
            if !directed && edge.from > edge.to {
                continue;
            }
            let _ = writeln!(
                dot,
                "  {} {} {} [label=\"{}\"];",
                edge.from,
                arrow,
                edge.to,
                format_weight(edge.weight)
            );
        }

        dot.push_str("}\n");
        dot
    }

    /// Export vertices and edge records to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize graph to JSON")
    }
}
