// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Editing session: graph, highlighted path, layout and renderer
//!
//! Every state change re-renders. Render failures are logged and swallowed
//! so a broken display never aborts the session.

use crate::config::LayoutConfig;
use crate::error::GraphError;
use crate::graph::GraphModel;
use crate::layout::arrange_on_circle;
use crate::parser::{build_from_adjacency_list, build_from_matrix, parse_matrix_text};
use crate::path::shortest_path;
use crate::render::{NullRenderer, Renderer};
use crate::types::{InputFormat, VertexId};
use crate::validate::validate;
use tracing::{info, warn};

/// Single-owner editing session over a [`GraphModel`]
pub struct GraphEditor {
    graph: GraphModel,
    highlight: Vec<VertexId>,
    layout: LayoutConfig,
    renderer: Box<dyn Renderer>,
}

impl Default for GraphEditor {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl GraphEditor {
    /// Create an empty session that draws nothing
    #[must_use]
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            graph: GraphModel::new(),
            highlight: Vec::new(),
            layout,
            renderer: Box::new(NullRenderer),
        }
    }

    /// Replace the renderer; the next change draws through it
    pub fn set_renderer(&mut self, renderer: Box<dyn Renderer>) {
        self.renderer = renderer;
    }

    /// The graph being edited
    #[must_use]
    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    /// Currently highlighted path, empty if none
    #[must_use]
    pub fn highlight(&self) -> &[VertexId] {
        &self.highlight
    }

    /// Draw the current state
    pub fn redraw(&mut self) {
        if let Err(err) = self.renderer.render(&self.graph, &self.highlight) {
            warn!(error = %err, "render failed");
        }
    }

    /// Add a vertex and lay the graph out again
    pub fn add_vertex(&mut self, name: impl Into<String>) -> VertexId {
        let id = self.graph.add_vertex(name);
        arrange_on_circle(&mut self.graph, &self.layout);
        self.redraw();
        id
    }

    /// Add or update an edge
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: f64,
        is_directed: bool,
    ) -> Result<(), GraphError> {
        self.graph.add_edge(from, to, weight, is_directed)?;
        self.redraw();
        Ok(())
    }

    /// Move a vertex, e.g. after a drag
    pub fn move_vertex(&mut self, id: VertexId, x: f64, y: f64) -> Result<(), GraphError> {
        self.graph.set_position(id, x, y)?;
        self.redraw();
        Ok(())
    }

    /// Query a shortest path and highlight it; an empty result clears the
    /// highlight instead.
    pub fn find_shortest_path(&mut self, start: VertexId, end: VertexId) -> Vec<VertexId> {
        let path = shortest_path(&self.graph, start, end);
        self.highlight.clone_from(&path);
        self.redraw();
        path
    }

    /// Drop the highlighted path
    pub fn clear_path(&mut self) {
        self.highlight.clear();
        self.redraw();
    }

    /// Remove all vertices, edges and the highlight
    pub fn clear_graph(&mut self) {
        self.graph.clear();
        self.highlight.clear();
        self.redraw();
    }

    /// Validate and build from matrix text
    pub fn build_from_matrix_text(&mut self, text: &str, names: Option<&[String]>) -> Result<(), GraphError> {
        validate(InputFormat::Matrix, text).map_err(|e| GraphError::parse_failure(InputFormat::Matrix, e))?;
        let rows = parse_matrix_text(text);
        build_from_matrix(&mut self.graph, &rows, names)?;
        self.after_build(InputFormat::Matrix);
        Ok(())
    }

    /// Validate and build from adjacency-list text
    pub fn build_from_list_text(&mut self, text: &str, names: Option<&[String]>) -> Result<(), GraphError> {
        validate(InputFormat::List, text).map_err(|e| GraphError::parse_failure(InputFormat::List, e))?;
        build_from_adjacency_list(&mut self.graph, text, names)?;
        self.after_build(InputFormat::List);
        Ok(())
    }

    /// Build from text in either format
    pub fn build_from_text(
        &mut self,
        format: InputFormat,
        text: &str,
        names: Option<&[String]>,
    ) -> Result<(), GraphError> {
        match format {
            InputFormat::Matrix => self.build_from_matrix_text(text, names),
            InputFormat::List => self.build_from_list_text(text, names),
        }
    }

    fn after_build(&mut self, format: InputFormat) {
        self.highlight.clear();
        arrange_on_circle(&mut self.graph, &self.layout);
        info!(%format, vertices = self.graph.vertex_count(), "graph replaced");
        self.redraw();
    }
}
