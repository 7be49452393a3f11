// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Rendering capability and the terminal renderer
//!
//! The core never draws; it hands the graph and the highlighted path to a
//! [`Renderer`]. Deciding which edge records become one drawn line lives
//! here too, since it is purely presentational.

use crate::graph::GraphModel;
use crate::types::{weights_match, VertexId};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::collections::HashSet;
use std::io::Write;

/// Anything that can display a graph with an optional highlighted path
pub trait Renderer {
    /// Draw `graph`, emphasising consecutive vertices of `highlight`
    fn render(&mut self, graph: &GraphModel, highlight: &[VertexId]) -> Result<()>;
}

/// Renderer that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _graph: &GraphModel, _highlight: &[VertexId]) -> Result<()> {
        Ok(())
    }
}

/// One line to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawEdge {
    /// Start vertex
    pub from: VertexId,
    /// End vertex
    pub to: VertexId,
    /// Label weight
    pub weight: f64,
    /// Draw an arrow head at `to`
    pub arrow: bool,
    /// Part of the highlighted path
    pub in_path: bool,
}

/// Whether `a` and `b` are consecutive on `path`, in either order
#[must_use]
pub fn is_edge_in_path(path: &[VertexId], a: VertexId, b: VertexId) -> bool {
    path.windows(2)
        .any(|hop| (hop[0] == a && hop[1] == b) || (hop[0] == b && hop[1] == a))
}

/// Collapse edge records into drawable lines.
///
/// Undirected pairs and reciprocal directed records of equal weight become
/// one line without arrows. Arrows are drawn only on directed records of a
/// directed graph that are not on the highlighted path.
#[must_use]
pub fn drawable_edges(graph: &GraphModel, highlight: &[VertexId]) -> Vec<DrawEdge> {
    let graph_directed = graph.is_directed();
    let mut drawn: HashSet<(VertexId, VertexId)> = HashSet::new();
    let mut lines = Vec::new();

    for edge in graph.edges() {
        let pair = (edge.from.min(edge.to), edge.from.max(edge.to));
        let reciprocal = edge.is_directed
            && graph.edges().iter().any(|e| {
                e.connects(edge.to, edge.from) && e.is_directed && weights_match(e.weight, edge.weight)
            });

        let single_line = !edge.is_directed || reciprocal;
        let key = if single_line { pair } else { (edge.from, edge.to) };
        if !drawn.insert(key) {
            continue;
        }

        let in_path = is_edge_in_path(highlight, edge.from, edge.to);
        lines.push(DrawEdge {
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
            arrow: graph_directed && !single_line && !in_path,
            in_path,
        });
    }

    lines
}

/// Weight label as drawn on edges: always one decimal
#[must_use]
pub fn weight_label(weight: f64) -> String {
    format!("{weight:.1}")
}

/// Plain-text renderer writing one frame per call
pub struct TextRenderer<W: Write> {
    out: W,
    color: bool,
}

impl TextRenderer<std::io::Stdout> {
    /// Render to standard output
    #[must_use]
    pub fn stdout(color: bool) -> Self {
        Self::new(std::io::stdout(), color)
    }
}

impl<W: Write> TextRenderer<W> {
    /// Render to any writer
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emphasise(&self, text: String, on: bool) -> String {
        if on && self.color {
            text.green().bold().to_string()
        } else if on {
            format!("*{text}*")
        } else {
            text
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, graph: &GraphModel, highlight: &[VertexId]) -> Result<()> {
        let kind = if graph.is_directed() { "directed" } else { "undirected" };
        writeln!(
            self.out,
            "Graph ({kind}): {} vertices, {} edge records",
            graph.vertex_count(),
            graph.edge_count()
        )?;

        for vertex in graph.vertices() {
            let label = self.emphasise(format!("[{}] {}", vertex.id, vertex.name), highlight.contains(&vertex.id));
            writeln!(self.out, "  {label} @ ({:.0}, {:.0})", vertex.x, vertex.y)?;
        }

        for line in drawable_edges(graph, highlight) {
            let glyph = if line.arrow { "->" } else { "--" };
            let text = format!("{} {glyph} {} ({})", line.from, line.to, weight_label(line.weight));
            let text = self.emphasise(text, line.in_path);
            writeln!(self.out, "  {text}")?;
        }

        if !highlight.is_empty() {
            let path: Vec<String> = highlight.iter().map(ToString::to_string).collect();
            writeln!(self.out, "  path: {}", path.join(" → "))?;
        }

        self.out.flush()?;
        Ok(())
    }
}
