// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Random, collision-free node placement
//!
//! Each graph key is placed by rejection sampling: a uniformly random
//! center is drawn from the sampling rectangle and accepted only when the
//! circle is fully on screen and keeps its distance from every node placed
//! before it. Edge targets are then resolved into an adjacency view.

use crate::config::LayoutConfig;
use crate::error::{GraphError, GraphResult};
use crate::graph::GraphModel;
use crate::types::{Bounds, LayoutNode};
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

/// Node id to ordered neighbor ids, resolved through [`Layout::neighbors`]
pub type AdjacencyView = IndexMap<String, Vec<String>>;

/// Weight label for one drawn edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeLabel {
    /// Source node id
    pub from: String,
    /// Target node id
    pub to: String,
    /// Edge weight
    pub weight: i64,
    /// Label x (midpoint of the two top-left corners)
    pub x: f32,
    /// Label y
    pub y: f32,
}

/// Node positions plus the adjacency used to draw and drag them
#[derive(Debug, Clone)]
pub struct Layout {
    nodes: IndexMap<String, LayoutNode>,
    adjacency: AdjacencyView,
    bounds: Bounds,
    config: LayoutConfig,
}

impl Layout {
    /// Placed nodes in graph key order
    #[must_use]
    pub fn nodes(&self) -> &IndexMap<String, LayoutNode> {
        &self.nodes
    }

    /// Look up a placed node
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.get(id)
    }

    /// Adjacency by id
    #[must_use]
    pub fn adjacency(&self) -> &AdjacencyView {
        &self.adjacency
    }

    /// Resolved neighbors of `id`, in edge order
    pub fn neighbors(&self, id: &str) -> GraphResult<Vec<&LayoutNode>> {
        let ids = self.adjacency.get(id).ok_or_else(|| GraphError::missing(id))?;
        ids.iter()
            .map(|n| self.nodes.get(n).ok_or_else(|| GraphError::missing(n)))
            .collect()
    }

    /// Surface the layout was computed for
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Geometry the layout was computed with
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Center node `id` on `(x, y)` without any bounds check
    pub fn move_node(&mut self, id: &str, x: f32, y: f32) -> GraphResult<()> {
        let node = self.nodes.get_mut(id).ok_or_else(|| GraphError::missing(id))?;
        node.x = x - node.radius;
        node.y = y - node.radius;
        Ok(())
    }

    /// Weight labels for every adjacency edge
    ///
    /// The weight comes from the model's edge table, so a pair listed twice
    /// shows the weight of its last entry.
    pub fn edge_labels(&self, model: &GraphModel) -> GraphResult<Vec<EdgeLabel>> {
        let mut labels = Vec::new();
        for (from, targets) in &self.adjacency {
            let source = self.nodes.get(from).ok_or_else(|| GraphError::missing(from))?;
            for to in targets {
                let target = self.nodes.get(to).ok_or_else(|| GraphError::missing(to))?;
                let weight = model
                    .edge_weight(from, to)
                    .ok_or_else(|| GraphError::missing(to))?;
                labels.push(EdgeLabel {
                    from: from.clone(),
                    to: to.clone(),
                    weight,
                    x: (source.x + target.x) / 2.0,
                    y: (source.y + target.y) / 2.0,
                });
            }
        }
        Ok(labels)
    }

    /// Y coordinate of the line separating the graph from the trace strip
    #[must_use]
    pub fn divider_y(&self) -> f32 {
        self.bounds.height - self.config.bottom_margin
    }
}

/// A circle already committed during one layout run
#[derive(Debug, Clone, Copy)]
struct Placed {
    x: f32,
    y: f32,
    radius: f32,
}

/// Places graph nodes on a bounded surface
pub struct LayoutEngine<R = StdRng> {
    config: LayoutConfig,
    rng: R,
}

impl LayoutEngine<StdRng> {
    /// Engine seeded from OS entropy
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine with a reproducible sequence of draws
    #[must_use]
    pub fn seeded(config: LayoutConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> LayoutEngine<R> {
    /// Engine drawing from `rng`
    pub fn with_rng(config: LayoutConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Geometry in use
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Place every graph key and resolve the adjacency view
    pub fn layout(&mut self, model: &GraphModel, bounds: Bounds) -> GraphResult<Layout> {
        let cfg = self.config;
        let radius = cfg.node_radius;
        let (x_lo, x_hi) = (cfg.start_margin, bounds.width - cfg.end_margin);
        let (y_lo, y_hi) = (bounds.top + cfg.top_margin, bounds.height - cfg.bottom_margin);

        let mut placed: Vec<Placed> = Vec::with_capacity(model.node_count());
        let mut nodes = IndexMap::with_capacity(model.node_count());

        for id in model.graph().keys() {
            // NaN fails every comparison; an infinite span has no uniform range
            let finite = [x_lo, x_hi, y_lo, y_hi, x_hi - x_lo, y_hi - y_lo]
                .iter()
                .all(|v| v.is_finite());
            if !finite || x_lo >= x_hi || y_lo >= y_hi {
                return Err(GraphError::LayoutInfeasible {
                    id: id.clone(),
                    attempts: 0,
                });
            }

            let mut attempts = 0;
            let candidate = loop {
                if attempts >= cfg.max_attempts {
                    return Err(GraphError::LayoutInfeasible {
                        id: id.clone(),
                        attempts,
                    });
                }
                attempts += 1;

                let candidate = Placed {
                    x: self.rng.gen_range(x_lo..x_hi),
                    y: self.rng.gen_range(y_lo..y_hi),
                    radius,
                };
                if self.can_place(candidate, &placed, bounds) {
                    break candidate;
                }
            };

            debug!(node = %id, attempts, x = candidate.x, y = candidate.y, "placed node");
            placed.push(candidate);
            nodes.insert(
                id.clone(),
                LayoutNode {
                    id: id.clone(),
                    x: candidate.x - radius,
                    y: candidate.y - radius,
                    radius,
                    weight: 0,
                },
            );
        }

        let adjacency = build_adjacency(model, &mut nodes)?;
        info!("Laid out {} nodes on {}x{}", nodes.len(), bounds.width, bounds.height);

        Ok(Layout {
            nodes,
            adjacency,
            bounds,
            config: cfg,
        })
    }

    fn can_place(&self, candidate: Placed, placed: &[Placed], bounds: Bounds) -> bool {
        on_screen(candidate, bounds, self.config.bottom_margin)
            && !placed
                .iter()
                .any(|other| too_close(candidate, *other, &self.config))
    }
}

fn on_screen(node: Placed, bounds: Bounds, bottom_margin: f32) -> bool {
    node.x - node.radius >= 0.0
        && node.x + node.radius < bounds.width
        && node.y - node.radius >= bounds.top
        && node.y + node.radius <= bounds.height - bottom_margin
}

/// Overlapping, tangent, or within the spacing box on both axes
fn too_close(a: Placed, b: Placed, config: &LayoutConfig) -> bool {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dr = a.radius - b.radius;
    let sr = a.radius + b.radius;
    let sum = dx * dx + dy * dy;

    let overlapping = sum >= dr * dr && sum <= sr * sr;
    let spacing = config.node_radius + config.node_spacing;
    overlapping || (dx.abs() < spacing && dy.abs() < spacing)
}

/// Stamp edge weights onto targets (last writer wins) and collect neighbor ids
fn build_adjacency(
    model: &GraphModel,
    nodes: &mut IndexMap<String, LayoutNode>,
) -> GraphResult<AdjacencyView> {
    let mut adjacency = AdjacencyView::with_capacity(model.node_count());
    for (id, neighbours) in model.graph() {
        let mut targets = Vec::with_capacity(neighbours.len());
        for neighbour in neighbours {
            let node = nodes
                .get_mut(&neighbour.id)
                .ok_or_else(|| GraphError::missing(&neighbour.id))?;
            node.weight = neighbour.weight;
            targets.push(neighbour.id.clone());
        }
        adjacency.insert(id.clone(), targets);
    }
    Ok(adjacency)
}
