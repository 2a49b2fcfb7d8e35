// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Pathtrace library - weighted graph layout and traced path search
//!
//! This crate provides the core of an interactive graph visualizer:
//! a weighted adjacency model, random non-overlapping node placement,
//! pointer-driven node dragging, and an exhaustive depth-first path
//! search that records every call frame so a renderer can scrub
//! through the search as an animation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod drag;
pub mod error;
pub mod graph;
pub mod layout;
pub mod navigator;
pub mod search;
pub mod session;

/// Core data types shared by every component
pub mod types {
    use indexmap::IndexMap;
    use serde::{Deserialize, Serialize};
    use std::fmt;

    // =========================================================================
    // Graph Edges
    // =========================================================================

    /// Directed edge target: the neighbor reached from some source node
    ///
    /// Two `GraphNode`s are the same node reference when their ids match,
    /// regardless of weight. Use [`GraphNode::same_node`] for that comparison;
    /// the derived `PartialEq` is structural.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct GraphNode {
        /// Target node id
        pub id: String,
        /// Edge weight (any integer, no validation)
        pub weight: i64,
    }

    impl GraphNode {
        /// Create an edge entry towards `id`
        #[must_use]
        pub fn new(id: impl Into<String>, weight: i64) -> Self {
            Self {
                id: id.into(),
                weight,
            }
        }

        /// Identity comparison by id only
        #[must_use]
        pub fn same_node(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl fmt::Display for GraphNode {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} : {}", self.id, self.weight)
        }
    }

    /// Node id to ordered outgoing edges. Key and edge order are significant.
    pub type Graph = IndexMap<String, Vec<GraphNode>>;

    // =========================================================================
    // Layout
    // =========================================================================

    /// A node placed on the canvas
    ///
    /// `x`/`y` are the top-left corner of the node's bounding square; the
    /// drawing center is `(x + radius, y + radius)`.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct LayoutNode {
        /// Node id, empty for the "no node" sentinel
        pub id: String,
        /// Left edge of the bounding square
        pub x: f32,
        /// Top edge of the bounding square
        pub y: f32,
        /// Circle radius
        pub radius: f32,
        /// Display copy of the weight of the last edge stamped onto this node
        pub weight: i64,
    }

    impl LayoutNode {
        /// The sentinel meaning "no node found"
        #[must_use]
        pub fn empty() -> Self {
            Self {
                id: String::new(),
                x: -1.0,
                y: -1.0,
                radius: -1.0,
                weight: -1,
            }
        }

        /// Whether this is the empty sentinel
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.id.is_empty()
        }

        /// Drawing center of the circle
        #[must_use]
        pub fn center(&self) -> (f32, f32) {
            (self.x + self.radius, self.y + self.radius)
        }

        /// Whether `(px, py)` lies in the node's bounding square, edges inclusive
        #[must_use]
        pub fn contains(&self, px: f32, py: f32) -> bool {
            let side = 2.0 * self.radius;
            px >= self.x && px <= self.x + side && py >= self.y && py <= self.y + side
        }

        /// Identity comparison by id only
        #[must_use]
        pub fn same_node(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl Default for LayoutNode {
        fn default() -> Self {
            Self::empty()
        }
    }

    impl fmt::Display for LayoutNode {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "{} - {} : {} : {}, weight {}",
                self.id, self.x, self.y, self.radius, self.weight
            )
        }
    }

    /// Drawable surface supplied by the display owner
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Bounds {
        /// Surface width
        pub width: f32,
        /// Surface height
        pub height: f32,
        /// Top inset (status bar height)
        #[serde(default)]
        pub top: f32,
    }

    impl Bounds {
        /// Bounds without a top inset
        #[must_use]
        pub fn new(width: f32, height: f32) -> Self {
            Self {
                width,
                height,
                top: 0.0,
            }
        }

        /// Set the status bar inset
        #[must_use]
        pub fn with_top(mut self, top: f32) -> Self {
            self.top = top;
            self
        }
    }

    // =========================================================================
    // Search Trace
    // =========================================================================

    /// One recorded DFS call frame: a path prefix and its accumulated weight
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ShortestPathStep {
        /// Node ids from the start to the frame's node
        pub path: Vec<String>,
        /// Sum of edge weights along `path`
        pub weight: i64,
        /// Whether the frame's node has no outgoing edges
        pub leaf: bool,
    }

    impl fmt::Display for ShortestPathStep {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.path.join(" -> "))?;
            if self.path.len() > 1 {
                write!(f, " = {}", self.weight)?;
            }
            Ok(())
        }
    }

    // =========================================================================
    // Pointer Input
    // =========================================================================

    /// Phase of a pointer event
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum PointerPhase {
        /// Pointer pressed
        Down,
        /// Pointer moved while pressed
        Move,
        /// Pointer released
        Up,
    }

    /// Pointer event forwarded by the host's event dispatch
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct PointerEvent {
        /// Event phase
        pub phase: PointerPhase,
        /// Pointer x in surface coordinates
        pub x: f32,
        /// Pointer y in surface coordinates
        pub y: f32,
    }

    impl PointerEvent {
        /// Pointer pressed at `(x, y)`
        #[must_use]
        pub fn down(x: f32, y: f32) -> Self {
            Self { phase: PointerPhase::Down, x, y }
        }

        /// Pointer moved to `(x, y)`
        #[must_use]
        pub fn moved(x: f32, y: f32) -> Self {
            Self { phase: PointerPhase::Move, x, y }
        }

        /// Pointer released at `(x, y)`
        #[must_use]
        pub fn up(x: f32, y: f32) -> Self {
            Self { phase: PointerPhase::Up, x, y }
        }
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::{GraphError, GraphResult};
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
