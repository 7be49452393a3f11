// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph data structures and the single mutation entry point for edges

use crate::error::GraphError;
use crate::types::{is_valid_weight, weights_match, Edge, Vertex, VertexId};
use petgraph::algo::connected_components;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Weighted graph with dense vertex ids and directed edge records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphModel {
    /// Vertices in id order
    vertices: Vec<Vertex>,
    /// Edge records, at most one per ordered pair
    edges: Vec<Edge>,
}

impl GraphModel {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex and return its id
    pub fn add_vertex(&mut self, name: impl Into<String>) -> VertexId {
        let id = self.vertices.len();
        let vertex = Vertex::new(id, name);
        debug!(id, name = %vertex.name, "added vertex");
        self.vertices.push(vertex);
        id
    }

    /// Add or update an edge.
    ///
    /// An existing `(from, to)` record is updated in place. When
    /// `is_directed` is false the reverse record `(to, from)` is created or
    /// updated as well so both records carry the same weight.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: f64,
        is_directed: bool,
    ) -> Result<(), GraphError> {
        let count = self.vertices.len();
        if from >= count || to >= count {
            return Err(GraphError::InvalidVertexReference { from, to, count });
        }
        if !is_valid_weight(weight) {
            return Err(GraphError::InvalidWeight { weight });
        }

        self.upsert(from, to, weight, is_directed);
        if !is_directed {
            self.upsert(to, from, weight, false);
        }

        debug!(from, to, weight, is_directed, "added edge");
        Ok(())
    }

    fn upsert(&mut self, from: VertexId, to: VertexId, weight: f64, is_directed: bool) {
        if let Some(existing) = self.edges.iter_mut().find(|e| e.connects(from, to)) {
            existing.weight = weight;
            existing.is_directed = is_directed;
        } else {
            self.edges.push(Edge::new(from, to, weight, is_directed));
        }
    }

    /// Move a vertex; positions are display metadata only
    pub fn set_position(&mut self, id: VertexId, x: f64, y: f64) -> Result<(), GraphError> {
        let count = self.vertices.len();
        let vertex = self
            .vertices
            .get_mut(id)
            .ok_or(GraphError::InvalidVertexReference { from: id, to: id, count })?;
        vertex.x = x;
        vertex.y = y;
        Ok(())
    }

    /// Remove every vertex and edge
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    /// Whole-graph directedness.
    ///
    /// True when any record was added as directed, or when the weighted
    /// adjacency is not symmetric under the symmetry tolerance.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        if self.edges.iter().any(|e| e.is_directed) {
            return true;
        }

        // Zero-weight records read as "no edge", as in the matrix view
        let weights: HashMap<(VertexId, VertexId), f64> =
            self.edges.iter().map(|e| ((e.from, e.to), e.weight)).collect();

        self.edges.iter().filter(|e| e.weight != 0.0).any(|edge| {
            let backward = weights.get(&(edge.to, edge.from)).copied().unwrap_or(0.0);
            backward == 0.0 || !weights_match(edge.weight, backward)
        })
    }

    /// Number of weakly connected components; isolated vertices count as one each
    #[must_use]
    pub fn component_count(&self) -> usize {
        connected_components(&self.to_petgraph())
    }

    /// Dense weight matrix, 0 meaning "no edge". Later records win a cell.
    #[must_use]
    pub fn adjacency_matrix(&self) -> Vec<Vec<f64>> {
        let n = self.vertices.len();
        let mut matrix = vec![vec![0.0; n]; n];
        for edge in &self.edges {
            matrix[edge.from][edge.to] = edge.weight;
        }
        matrix
    }

    /// Outgoing `(neighbor, weight)` pairs per vertex, in record order
    #[must_use]
    pub fn adjacency_list(&self) -> Vec<Vec<(VertexId, f64)>> {
        let mut list = vec![Vec::new(); self.vertices.len()];
        for edge in &self.edges {
            list[edge.from].push((edge.to, edge.weight));
        }
        list
    }

    /// Get a vertex by id
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Get all vertices
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Get all edge records
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get edge records leaving a vertex
    pub fn edges_from(&self, id: VertexId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.from == id)
    }

    /// Weight of the `(from, to)` record, if present
    #[must_use]
    pub fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<f64> {
        self.edges
            .iter()
            .find(|e| e.connects(from, to))
            .map(|e| e.weight)
    }

    /// Vertex names in id order
    #[must_use]
    pub fn vertex_names(&self) -> Vec<String> {
        self.vertices.iter().map(|v| v.name.clone()).collect()
    }

    /// Get vertex count
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get edge record count (an undirected edge counts twice)
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph has no vertices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Copy into a petgraph `DiGraph` for algorithms this crate does not
    /// provide. Node indices equal vertex ids.
    #[must_use]
    pub fn to_petgraph(&self) -> DiGraph<String, f64> {
        let mut graph = DiGraph::with_capacity(self.vertices.len(), self.edges.len());
        for vertex in &self.vertices {
            graph.add_node(vertex.name.clone());
        }
        for edge in &self.edges {
            graph.add_edge(NodeIndex::new(edge.from), NodeIndex::new(edge.to), edge.weight);
        }
        graph
    }
}
