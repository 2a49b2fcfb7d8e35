// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Layout command - places nodes and prints the resulting scene

use super::{load_graph, Output};
use crate::config::Config;
use crate::session::GraphSession;
use crate::types::Bounds;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Arguments for the layout command
pub struct LayoutArgs {
    /// Surface width
    pub width: f32,
    /// Surface height
    pub height: f32,
    /// Status bar inset
    pub top: f32,
    /// Seed for reproducible placement
    pub seed: Option<u64>,
    /// Optionally run a search so the scene highlights its first step
    pub from: Option<String>,
}

/// Run the layout command
pub fn run(graph: &Path, args: LayoutArgs, config: Config, out: Output) -> Result<()> {
    let model = load_graph(graph)?;
    let bounds = Bounds::new(args.width, args.height).with_top(args.top);

    let mut session = match args.seed {
        Some(seed) => GraphSession::seeded(config, seed),
        None => GraphSession::new(config),
    };
    session.set_graph(model.graph().clone());
    session
        .resize(bounds)
        .with_context(|| format!("Failed to lay out {}", graph.display()))?;
    info!("Layout ready for {} nodes", model.node_count());

    if let Some(from) = args.from.as_deref() {
        session.find_shortest_path(from)?;
    }

    let scene = session.scene()?;
    if out.json {
        println!("{}", serde_json::to_string_pretty(&scene)?);
    } else {
        for node in &scene.nodes {
            let (cx, cy) = node.center();
            println!("{:<12} center=({:.1}, {:.1}) r={}", node.id, cx, cy, node.radius);
        }
        for edge in &scene.edges {
            println!("{} -> {} [{}] label at ({:.1}, {:.1})", edge.from, edge.to, edge.weight, edge.x, edge.y);
        }
        if let Some(trace) = &scene.trace {
            println!("trace: {trace}");
        }
    }
    Ok(())
}
