// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Graphpath library - weighted graph editor core
//!
//! This crate provides the graph model behind an interactive graph editor:
//! vertex and edge storage with directedness inference, construction from
//! adjacency-matrix and adjacency-list text, and shortest-path queries.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod graph;
pub mod layout;
pub mod parser;
pub mod path;
pub mod render;
pub mod validate;

/// Core data types shared by the model, parsers and renderers
pub mod types {
    use serde::{Deserialize, Serialize};
    use std::fmt;

    /// Dense, zero-based vertex identifier (also the vertex's index)
    pub type VertexId = usize;

    /// Two weights closer than this are considered equal when deciding
    /// whether a pair of edge records forms one undirected edge.
    pub const SYMMETRY_TOLERANCE: f64 = 1e-4;

    /// Weight equality under [`SYMMETRY_TOLERANCE`]
    #[must_use]
    pub fn weights_match(a: f64, b: f64) -> bool {
        (a - b).abs() < SYMMETRY_TOLERANCE
    }

    /// Edge weights must be finite and non-negative
    #[must_use]
    pub fn is_valid_weight(weight: f64) -> bool {
        weight.is_finite() && weight >= 0.0
    }

    // =========================================================================
    // Vertex
    // =========================================================================

    /// A vertex with display metadata
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Vertex {
        /// Identifier, equal to the vertex count at creation time
        pub id: VertexId,
        /// Display name
        pub name: String,
        /// Horizontal position (owned by the layout collaborator)
        pub x: f64,
        /// Vertical position (owned by the layout collaborator)
        pub y: f64,
    }

    impl Vertex {
        /// Create a vertex at the origin
        #[must_use]
        pub fn new(id: VertexId, name: impl Into<String>) -> Self {
            Self {
                id,
                name: name.into(),
                x: 0.0,
                y: 0.0,
            }
        }

        /// Name given to vertices created by the text builders
        #[must_use]
        pub fn default_name(id: VertexId) -> String {
            format!("V{id}")
        }
    }

    // =========================================================================
    // Edge
    // =========================================================================

    /// A single directed edge record.
    ///
    /// Undirected edges are stored as two records, `(from, to)` and
    /// `(to, from)`, both with `is_directed == false` and the same weight.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Edge {
        /// Source vertex
        pub from: VertexId,
        /// Target vertex
        pub to: VertexId,
        /// Non-negative, finite weight
        pub weight: f64,
        /// Whether this record was added as a one-way edge
        pub is_directed: bool,
    }

    impl Edge {
        /// Create an edge record
        #[must_use]
        pub fn new(from: VertexId, to: VertexId, weight: f64, is_directed: bool) -> Self {
            Self {
                from,
                to,
                weight,
                is_directed,
            }
        }

        /// Whether this record connects the ordered pair `(from, to)`
        #[must_use]
        pub fn connects(&self, from: VertexId, to: VertexId) -> bool {
            self.from == from && self.to == to
        }
    }

    // =========================================================================
    // Input formats
    // =========================================================================

    /// Textual graph formats accepted by the builders
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum InputFormat {
        /// Dense N x N weight grid
        Matrix,
        /// `<id>: ->neighbor(weight) ...` lines
        List,
    }

    impl fmt::Display for InputFormat {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Matrix => f.write_str("adjacency matrix"),
                Self::List => f.write_str("adjacency list"),
            }
        }
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::editor::GraphEditor;
    pub use crate::error::{GraphError, ValidationError};
    pub use crate::graph::GraphModel;
    pub use crate::path::{path_weight, shortest_path};
    pub use crate::render::Renderer;
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
