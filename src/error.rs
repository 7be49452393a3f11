// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types for graph mutation and text import

use crate::types::{InputFormat, VertexId};
use thiserror::Error;

/// Errors raised by graph mutations and builders.
///
/// Queries never return these: a missing path is an empty result.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An edge endpoint does not name an existing vertex
    #[error("invalid vertex reference: from={from}, to={to}, vertex count={count}")]
    InvalidVertexReference {
        /// Requested source
        from: VertexId,
        /// Requested target
        to: VertexId,
        /// Vertices in the graph at the time of the call
        count: usize,
    },

    /// Weight is NaN, infinite or negative
    #[error("invalid edge weight: {weight}")]
    InvalidWeight {
        /// The rejected weight
        weight: f64,
    },

    /// Input would create more vertices than the builders allow
    #[error("{requested} vertices requested, limit is {limit}")]
    TooManyVertices {
        /// Vertex count implied by the input
        requested: usize,
        /// Builder ceiling
        limit: usize,
    },

    /// Input text was rejected before parsing
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Building a graph from text failed; the target graph is untouched
    #[error("failed to parse {format}: {source}")]
    ParseFailure {
        /// Which builder failed
        format: InputFormat,
        /// Underlying cause
        #[source]
        source: Box<GraphError>,
    },
}

impl GraphError {
    /// Wrap any builder error as a [`GraphError::ParseFailure`]
    #[must_use]
    pub fn parse_failure(format: InputFormat, cause: impl Into<GraphError>) -> Self {
        Self::ParseFailure {
            format,
            source: Box::new(cause.into()),
        }
    }
}

/// Problems found by the pre-parse validators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No content at all
    #[error("{format} input is empty")]
    Empty {
        /// Format being validated
        format: InputFormat,
    },

    /// Matrix row with the wrong number of values
    #[error("row {row}: expected {expected} values, found {found}")]
    RowLength {
        /// One-based row number
        row: usize,
        /// Number of rows, which every row must match
        expected: usize,
        /// Values actually present
        found: usize,
    },

    /// Matrix token that is not a number
    #[error("row {row}, value '{token}': not a number")]
    InvalidNumber {
        /// One-based row number
        row: usize,
        /// Offending token
        token: String,
    },

    /// Adjacency-list line that does not match the grammar
    #[error("malformed line '{line}', expected '<vertex>: ->neighbor(weight) ->neighbor(weight)'")]
    MalformedLine {
        /// Offending line
        line: String,
    },

    /// Vertex id that does not fit in a vertex index
    #[error("vertex id '{token}' is out of range")]
    InvalidVertexId {
        /// Offending digits
        token: String,
    },
}
