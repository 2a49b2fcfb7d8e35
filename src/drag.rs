// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Pointer-driven node dragging
//!
//! A drag starts on pointer down inside the graph area. The first move
//! event hit-tests the layout and latches the result: either a node, which
//! then follows every later move, or a miss, which ignores moves until the
//! pointer is released.

use crate::config::DragPolicy;
use crate::error::GraphResult;
use crate::layout::Layout;
use crate::types::{LayoutNode, PointerEvent, PointerPhase};
use tracing::debug;

/// What the current gesture has latched onto
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Grab {
    #[default]
    Idle,
    Missed,
    Holding(String),
}

/// First node (in layout order) whose bounding square contains `(x, y)`
#[must_use]
pub fn hit_test(layout: &Layout, x: f32, y: f32) -> Option<&LayoutNode> {
    layout.nodes().values().find(|node| node.contains(x, y))
}

/// Tracks one pointer gesture at a time
#[derive(Debug, Clone, Default)]
pub struct DragController {
    policy: DragPolicy,
    active: bool,
    grab: Grab,
}

impl DragController {
    /// Controller using `policy` for moves
    #[must_use]
    pub fn new(policy: DragPolicy) -> Self {
        Self {
            policy,
            active: false,
            grab: Grab::Idle,
        }
    }

    /// Bounds policy in use
    #[must_use]
    pub fn policy(&self) -> DragPolicy {
        self.policy
    }

    /// Whether a gesture is in progress
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Id of the node being dragged
    #[must_use]
    pub fn dragging(&self) -> Option<&str> {
        match &self.grab {
            Grab::Holding(id) => Some(id),
            Grab::Idle | Grab::Missed => None,
        }
    }

    /// Start a gesture if `(x, y)` lies in the graph area above the trace strip
    pub fn begin_drag(&mut self, layout: &Layout, x: f32, y: f32) -> bool {
        let bounds = layout.bounds();
        let bottom = bounds.height - layout.config().bottom_margin;
        if x >= 0.0 && x <= bounds.width && y >= 0.0 && y <= bottom {
            self.active = true;
        }
        self.active
    }

    /// Feed a move event; returns whether a node was repositioned
    pub fn continue_drag(&mut self, layout: &mut Layout, x: f32, y: f32) -> GraphResult<bool> {
        if self.policy == DragPolicy::Bounded && !within_screen(layout, x, y) {
            return Ok(false);
        }
        if !self.active {
            return Ok(false);
        }

        if let Grab::Holding(id) = &self.grab {
            layout.move_node(id, x, y)?;
            return Ok(true);
        }

        if self.grab == Grab::Idle {
            self.grab = match hit_test(layout, x, y) {
                Some(node) => {
                    debug!("Grabbed node {} at ({}, {})", node.id, x, y);
                    Grab::Holding(node.id.clone())
                }
                None => Grab::Missed,
            };
        }
        Ok(false)
    }

    /// Release whatever is held
    pub fn end_drag(&mut self) {
        self.active = false;
        self.grab = Grab::Idle;
    }

    /// Dispatch a pointer event; returns whether the layout changed
    pub fn handle(&mut self, layout: &mut Layout, event: PointerEvent) -> GraphResult<bool> {
        match event.phase {
            PointerPhase::Down => {
                self.begin_drag(layout, event.x, event.y);
                Ok(false)
            }
            PointerPhase::Move => self.continue_drag(layout, event.x, event.y),
            PointerPhase::Up => {
                self.end_drag();
                Ok(false)
            }
        }
    }
}

/// A dragged node centered on `(x, y)` stays inside the graph area
fn within_screen(layout: &Layout, x: f32, y: f32) -> bool {
    let bounds = layout.bounds();
    let cfg = layout.config();
    let r = cfg.node_radius;
    x - r >= 0.0
        && x + r <= bounds.width
        && y >= bounds.top + cfg.top_margin
        && y + r <= bounds.height - cfg.bottom_margin
}
