// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Export command - exports the graph to various formats

use super::load_graph;
use crate::graph::GraphModel;
use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Render the graph as `format`; returns the text and its file extension
fn render(model: &GraphModel, format: &str) -> Result<(String, &'static str)> {
    match format.to_lowercase().as_str() {
        "dot" | "graphviz" => Ok((model.to_dot(), "dot")),
        "json" => Ok((model.to_json()?, "json")),
        other => bail!("Unknown export format: {other}. Supported: dot, json"),
    }
}

/// Run the export command
pub fn run(graph: &Path, format: &str, output: Option<PathBuf>) -> Result<()> {
    info!("Exporting to {}", format);

    let model = load_graph(graph)?;
    let (content, extension) = render(&model, format)?;

    match output {
        Some(path) => {
            let path = if path.extension().is_none() {
                path.with_extension(extension)
            } else {
                path
            };
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Graph, GraphNode};

    fn model() -> GraphModel {
        let mut graph = Graph::new();
        graph.insert("A".into(), vec![GraphNode::new("B", 2)]);
        graph.insert("B".into(), vec![]);
        GraphModel::from_graph(graph)
    }

    #[test]
    fn test_render_formats() {
        let (dot, ext) = render(&model(), "GraphViz").unwrap();
        assert_eq!(ext, "dot");
        assert!(dot.contains("\"A\" -> \"B\" [label=\"2\"]"));

        let (json, ext) = render(&model(), "json").unwrap();
        assert_eq!(ext, "json");
        assert!(json.contains("\"weight\": 2"));

        let err = render(&model(), "yaml").unwrap_err();
        assert!(err.to_string().contains("Unknown export format: yaml"));
    }
}
