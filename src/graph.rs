// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Weighted adjacency model with petgraph backing for structural checks

use crate::error::{GraphError, GraphResult};
use crate::types::{Graph, GraphNode};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, VecDeque};
use std::fs;
use std::path::Path;

/// The weighted directed graph as supplied by the caller
///
/// Only ever replaced as a whole; edges to ids without an entry of their
/// own are legal and denote leaves.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    graph: Graph,
    /// (from, to) -> weight, last entry wins
    edge_weights: HashMap<(String, String), i64>,
}

impl GraphModel {
    /// Create an empty model
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from an adjacency mapping
    #[must_use]
    pub fn from_graph(graph: Graph) -> Self {
        let mut model = Self::new();
        model.set(graph);
        model
    }

    /// Replace the entire adjacency mapping
    pub fn set(&mut self, graph: Graph) {
        self.edge_weights.clear();
        for (from, neighbours) in &graph {
            for neighbour in neighbours {
                self.edge_weights
                    .insert((from.clone(), neighbour.id.clone()), neighbour.weight);
            }
        }
        self.graph = graph;
    }

    /// Outgoing edges of `id`, empty when it has no entry
    #[must_use]
    pub fn neighbors(&self, id: &str) -> &[GraphNode] {
        self.graph.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Weight of the edge `from -> to` used for edge labels
    #[must_use]
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<i64> {
        self.edge_weights
            .get(&(from.to_string(), to.to_string()))
            .copied()
    }

    /// The underlying mapping
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Whether `id` appears as a key or as an edge target
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.graph.contains_key(id)
            || self
                .graph
                .values()
                .any(|neighbours| neighbours.iter().any(|n| n.id == id))
    }

    /// Get node count (keys only)
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.len()
    }

    /// Get edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.values().map(Vec::len).sum()
    }

    /// Check if the graph is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Edge targets that have no entry of their own, in first-seen order
    #[must_use]
    pub fn dangling_targets(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for neighbours in self.graph.values() {
            for neighbour in neighbours {
                let id = neighbour.id.as_str();
                if !self.graph.contains_key(id) && !seen.contains(&id) {
                    seen.push(id);
                }
            }
        }
        seen
    }

    /// Fail with a cycle error when a cycle is reachable from `start`
    pub fn check_acyclic_from(&self, start: &str) -> GraphResult<()> {
        if !self.contains(start) {
            return Err(GraphError::UnknownNode {
                id: start.to_string(),
            });
        }

        let (graph, indices) = self.reachable_subgraph(start);
        if !petgraph::algo::is_cyclic_directed(&graph) {
            return Ok(());
        }

        // Report one concrete cycle for the message
        let cycle = petgraph::algo::kosaraju_scc(&graph)
            .into_iter()
            .find(|component| {
                component.len() > 1
                    || component
                        .first()
                        .is_some_and(|&n| graph.contains_edge(n, n))
            })
            .map(|component| {
                let mut path: Vec<String> =
                    component.iter().rev().map(|&n| graph[n].clone()).collect();
                if let Some(first) = path.first().cloned() {
                    path.push(first);
                }
                path
            })
            .unwrap_or_else(|| vec![start.to_string()]);

        tracing::debug!("cycle reachable from {} across {} nodes", start, indices.len());
        Err(GraphError::CycleDetected { path: cycle })
    }

    /// Build a petgraph of everything reachable from `start`
    fn reachable_subgraph(&self, start: &str) -> (DiGraph<String, i64>, HashMap<String, NodeIndex>) {
        let mut graph = DiGraph::new();
        let mut indices: HashMap<String, NodeIndex> = HashMap::new();
        let mut queue = VecDeque::from([start.to_string()]);

        indices.insert(start.to_string(), graph.add_node(start.to_string()));

        while let Some(id) = queue.pop_front() {
            let from_idx = indices[&id];
            for neighbour in self.neighbors(&id) {
                let to_idx = match indices.get(&neighbour.id) {
                    Some(&idx) => idx,
                    None => {
                        let idx = graph.add_node(neighbour.id.clone());
                        indices.insert(neighbour.id.clone(), idx);
                        queue.push_back(neighbour.id.clone());
                        idx
                    }
                };
                graph.add_edge(from_idx, to_idx, neighbour.weight);
            }
        }

        (graph, indices)
    }

    /// Load a graph from a JSON file mapping id to `[{"id", "weight"}]`
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse a graph from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        let graph: IndexMap<String, Vec<GraphNode>> =
            serde_json::from_str(content).context("Invalid graph JSON")?;
        Ok(Self::from_graph(graph))
    }

    /// Save graph to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        }
        fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Export to DOT format for Graphviz
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph pathtrace {\n");
        dot.push_str("  node [shape=circle];\n\n");

        for id in self.graph.keys() {
            dot.push_str(&format!("  \"{id}\";\n"));
        }
        for id in self.dangling_targets() {
            dot.push_str(&format!("  \"{id}\";\n"));
        }

        dot.push('\n');

        for (from, neighbours) in &self.graph {
            for neighbour in neighbours {
                dot.push_str(&format!(
                    "  \"{}\" -> \"{}\" [label=\"{}\"];\n",
                    from, neighbour.id, neighbour.weight
                ));
            }
        }

        dot.push_str("}\n");
        dot
    }

    /// Export to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.graph).context("Failed to serialize graph to JSON")
    }
}
