// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod check;
pub mod completions;
pub mod config;
pub mod export;
pub mod layout;
pub mod search;
pub mod walk;

use crate::graph::GraphModel;
use anyhow::{Context, Result};
use std::path::Path;

/// How command results are printed
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    /// Emit JSON instead of text
    pub json: bool,
    /// Use ANSI colors in text output
    pub color: bool,
}

/// Load a graph file, warning when it is empty
pub fn load_graph(path: &Path) -> Result<GraphModel> {
    let model = GraphModel::load(path)
        .with_context(|| format!("Failed to load graph from {}", path.display()))?;
    if model.is_empty() {
        tracing::warn!("Graph in {} has no nodes", path.display());
    }
    Ok(model)
}
