// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Search command - prints the full DFS trace and the best path

use super::{load_graph, Output};
use crate::search::{PathSearchEngine, SearchResult};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;

/// Run the search command
pub fn run(graph: &Path, from: &str, out: Output) -> Result<()> {
    let model = load_graph(graph)?;
    if !model.contains(from) {
        tracing::warn!("Start node {} does not occur in the graph", from);
    }

    let result = PathSearchEngine::new()
        .find_all_paths(&model, from)
        .with_context(|| format!("Search from {from} failed"))?;

    if out.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render(&result, out.color));
    }
    Ok(())
}

/// Text form of a search result, one step per line
#[must_use]
pub fn render(result: &SearchResult, color: bool) -> String {
    let mut text = String::new();
    for (i, step) in result.steps.iter().enumerate() {
        let marker = if step.leaf { "*" } else { " " };
        text.push_str(&format!("{i:>4} {marker} {step}\n"));
    }

    let best = result.best_step().to_string();
    if color {
        text.push_str(&format!("best: {}\n", best.green().bold()));
    } else {
        text.push_str(&format!("best: {best}\n"));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphModel;

    #[test]
    fn test_render_marks_leaves() {
        let model = GraphModel::from_json(
            r#"{"A": [{"id": "B", "weight": 1}, {"id": "C", "weight": 4}], "B": [{"id": "D", "weight": 2}]}"#,
        )
        .unwrap();
        let result = PathSearchEngine::new().find_all_paths(&model, "A").unwrap();
        let text = render(&result, false);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "   0   A");
        assert_eq!(lines[2], "   2 * A -> B -> D = 3");
        assert_eq!(lines[4], "best: A -> B -> D = 3");
    }
}
