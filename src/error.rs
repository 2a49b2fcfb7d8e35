// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types for graph, layout and search operations

use thiserror::Error;

/// Failures raised by the library components
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An id is referenced where no entry for it exists
    #[error("graph integrity violated: no entry for node '{id}'")]
    GraphIntegrity {
        /// The missing node id
        id: String,
    },

    /// An operation was called before its required state was set up
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Placement gave up on a node after the configured number of draws
    #[error("layout infeasible: could not place node '{id}' after {attempts} attempts")]
    LayoutInfeasible {
        /// Node that could not be placed
        id: String,
        /// Random draws spent on it
        attempts: u32,
    },

    /// The search reached a node already on the current path
    #[error("cycle detected along path {}", .path.join(" -> "))]
    CycleDetected {
        /// Path ending with the repeated node
        path: Vec<String>,
    },

    /// A path weight left the `i64` range
    #[error("weight overflow along path {}", .path.join(" -> "))]
    WeightOverflow {
        /// Path ending with the edge whose weight overflowed
        path: Vec<String>,
    },

    /// The requested start node does not occur in the graph
    #[error("unknown node '{id}'")]
    UnknownNode {
        /// The requested id
        id: String,
    },
}

/// Result alias for library operations
pub type GraphResult<T> = Result<T, GraphError>;

impl GraphError {
    pub(crate) fn missing(id: &str) -> Self {
        Self::GraphIntegrity { id: id.to_string() }
    }
}
