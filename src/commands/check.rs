// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Check command - reports dangling targets and cycles

use super::load_graph;
use crate::error::GraphError;
use anyhow::{bail, Result};
use std::path::Path;

/// Run the check command
///
/// Dangling targets are reported but are not an error; a cycle reachable
/// from any checked root is.
pub fn run(graph: &Path, from: Option<&str>) -> Result<()> {
    let model = load_graph(graph)?;

    println!("Nodes: {}", model.node_count());
    println!("Edges: {}", model.edge_count());

    let dangling = model.dangling_targets();
    if !dangling.is_empty() {
        println!("Leaf targets without an entry (cannot be laid out): {}", dangling.join(", "));
    }

    let roots: Vec<&str> = match from {
        Some(id) => vec![id],
        None => model.graph().keys().map(String::as_str).collect(),
    };

    for root in roots {
        match model.check_acyclic_from(root) {
            Ok(()) => {}
            Err(GraphError::CycleDetected { path }) => {
                bail!("Cycle reachable from {}: {}", root, path.join(" -> "));
            }
            Err(err) => return Err(err.into()),
        }
    }

    println!("OK: no cycles reachable");
    Ok(())
}
