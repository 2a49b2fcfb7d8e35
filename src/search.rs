// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Exhaustive depth-first path enumeration with a recorded call trace
//!
//! This is not Dijkstra: every walk from the start to a leaf is explored
//! in edge order, and every call frame is recorded as a step so the search
//! can be replayed. A node that reappears on its own path aborts the search
//! with [`GraphError::CycleDetected`].

use crate::error::{GraphError, GraphResult};
use crate::graph::GraphModel;
use crate::types::ShortestPathStep;
use serde::Serialize;
use tracing::{info, trace};

/// Outcome of one search run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Every DFS call frame in pre-order
    pub steps: Vec<ShortestPathStep>,
    /// Weight of `best_path`
    pub min_weight: i64,
    /// First-found complete path of minimum weight
    pub best_path: Vec<String>,
}

impl SearchResult {
    /// Steps that ended at a leaf
    pub fn complete_paths(&self) -> impl Iterator<Item = &ShortestPathStep> {
        self.steps.iter().filter(|step| step.leaf)
    }

    /// The best path as a step, for display
    #[must_use]
    pub fn best_step(&self) -> ShortestPathStep {
        ShortestPathStep {
            path: self.best_path.clone(),
            weight: self.min_weight,
            leaf: true,
        }
    }
}

/// Runs path searches over a [`GraphModel`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSearchEngine;

/// State accumulated during one search run
#[derive(Default)]
struct Walk {
    steps: Vec<ShortestPathStep>,
    best: Option<(i64, Vec<String>)>,
}

impl PathSearchEngine {
    /// Create an engine
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Enumerate every path from `start` to a leaf
    ///
    /// A start id without outgoing edges (or unknown to the graph) is itself
    /// a leaf and yields a single step of weight 0.
    pub fn find_all_paths(&self, model: &GraphModel, start: &str) -> GraphResult<SearchResult> {
        let mut walk = Walk::default();
        let mut path = Vec::new();
        Self::visit(model, start, &mut path, 0, &mut walk)?;

        let (min_weight, best_path) = walk.best.unwrap_or_default();
        info!(
            "Search from {} recorded {} steps, min weight {}",
            start,
            walk.steps.len(),
            min_weight
        );

        Ok(SearchResult {
            steps: walk.steps,
            min_weight,
            best_path,
        })
    }

    fn visit(
        model: &GraphModel,
        id: &str,
        path: &mut Vec<String>,
        weight: i64,
        walk: &mut Walk,
    ) -> GraphResult<()> {
        if path.iter().any(|seen| seen == id) {
            let mut cycle = path.clone();
            cycle.push(id.to_string());
            return Err(GraphError::CycleDetected { path: cycle });
        }

        let neighbours = model.neighbors(id);
        path.push(id.to_string());

        let step = ShortestPathStep {
            path: path.clone(),
            weight,
            leaf: neighbours.is_empty(),
        };
        trace!("step {}: {}", walk.steps.len(), step);
        walk.steps.push(step);

        if neighbours.is_empty() {
            // Strict comparison keeps the earliest path on ties
            if walk.best.as_ref().map_or(true, |(min, _)| weight < *min) {
                walk.best = Some((weight, path.clone()));
            }
        } else {
            for neighbour in neighbours {
                let Some(total) = weight.checked_add(neighbour.weight) else {
                    let mut overflowed = path.clone();
                    overflowed.push(neighbour.id.clone());
                    return Err(GraphError::WeightOverflow { path: overflowed });
                };
                Self::visit(model, &neighbour.id, path, total, walk)?;
            }
        }

        path.pop();
        Ok(())
    }
}

/// Convenience wrapper around [`PathSearchEngine::find_all_paths`]
pub fn find_all_paths(model: &GraphModel, start: &str) -> GraphResult<SearchResult> {
    PathSearchEngine::new().find_all_paths(model, start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Graph, GraphNode};

    fn model(edges: &[(&str, &[(&str, i64)])]) -> GraphModel {
        let mut graph = Graph::new();
        for (from, targets) in edges {
            graph.insert(
                (*from).to_string(),
                targets.iter().map(|(to, w)| GraphNode::new(*to, *w)).collect(),
            );
        }
        GraphModel::from_graph(graph)
    }

    fn trace(result: &SearchResult) -> Vec<(Vec<&str>, i64)> {
        result
            .steps
            .iter()
            .map(|s| (s.path.iter().map(String::as_str).collect(), s.weight))
            .collect()
    }

    #[test]
    fn test_records_every_frame_in_preorder() {
        let m = model(&[
            ("A", &[("B", 1), ("C", 4)]),
            ("B", &[("D", 2)]),
            ("C", &[]),
            ("D", &[]),
        ]);
        let result = find_all_paths(&m, "A").unwrap();

        assert_eq!(
            trace(&result),
            vec![
                (vec!["A"], 0),
                (vec!["A", "B"], 1),
                (vec!["A", "B", "D"], 3),
                (vec!["A", "C"], 4),
            ]
        );
        assert_eq!(result.best_path, vec!["A", "B", "D"]);
        assert_eq!(result.min_weight, 3);
        assert_eq!(result.complete_paths().count(), 2);
    }

    #[test]
    fn test_tie_keeps_first_found() {
        let m = model(&[("S", &[("X", 2), ("Y", 1)]), ("Y", &[("Z", 1)])]);
        let result = find_all_paths(&m, "S").unwrap();
        assert_eq!(result.min_weight, 2);
        assert_eq!(result.best_path, vec!["S", "X"]);
    }

    #[test]
    fn test_negative_weights_are_summed() {
        let m = model(&[("A", &[("B", 5), ("C", -3)]), ("C", &[("D", -1)])]);
        let result = find_all_paths(&m, "A").unwrap();
        assert_eq!(result.min_weight, -4);
        assert_eq!(result.best_path, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_shared_descendant_is_visited_per_walk() {
        let m = model(&[
            ("A", &[("B", 1), ("C", 1)]),
            ("B", &[("D", 1)]),
            ("C", &[("D", 1)]),
        ]);
        let result = find_all_paths(&m, "A").unwrap();
        assert_eq!(result.steps.len(), 5);
        assert_eq!(result.best_path, vec!["A", "B", "D"]);
    }

    #[test]
    fn test_start_without_edges_is_leaf() {
        let m = model(&[("A", &[("B", 1)])]);
        let result = find_all_paths(&m, "B").unwrap();
        assert_eq!(trace(&result), vec![(vec!["B"], 0)]);
        assert_eq!(result.best_path, vec!["B"]);
        assert_eq!(result.min_weight, 0);

        let unknown = find_all_paths(&m, "nowhere").unwrap();
        assert_eq!(unknown.steps.len(), 1);
    }

    #[test]
    fn test_cycle_is_reported() {
        let m = model(&[("A", &[("B", 1)]), ("B", &[("C", 1)]), ("C", &[("A", 1)])]);
        let err = find_all_paths(&m, "A").unwrap_err();
        assert_eq!(
            err,
            GraphError::CycleDetected {
                path: vec!["A".into(), "B".into(), "C".into(), "A".into()]
            }
        );
    }

    #[test]
    fn test_weight_overflow_is_reported() {
        let m = model(&[("A", &[("B", i64::MAX)]), ("B", &[("C", 1)])]);
        let err = find_all_paths(&m, "A").unwrap_err();
        assert_eq!(
            err,
            GraphError::WeightOverflow {
                path: vec!["A".into(), "B".into(), "C".into()]
            }
        );

        let low = model(&[("A", &[("B", i64::MIN)]), ("B", &[("C", -1)])]);
        assert!(matches!(
            find_all_paths(&low, "A"),
            Err(GraphError::WeightOverflow { .. })
        ));
    }

    #[test]
    fn test_extreme_weights_without_overflow() {
        let m = model(&[("A", &[("B", i64::MAX), ("C", i64::MIN)])]);
        let result = find_all_paths(&m, "A").unwrap();
        assert_eq!(result.min_weight, i64::MIN);
        assert_eq!(result.best_path, vec!["A", "C"]);
    }

    #[test]
    fn test_repeat_runs_are_identical() {
        let m = model(&[("A", &[("B", 1), ("C", 4)]), ("B", &[("D", 2)])]);
        let engine = PathSearchEngine::new();
        let first = engine.find_all_paths(&m, "A").unwrap();
        let second = engine.find_all_paths(&m, "A").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_step_display() {
        let m = model(&[("A", &[("C", 3)]), ("C", &[("F", 4)])]);
        let result = find_all_paths(&m, "A").unwrap();
        assert_eq!(result.steps[0].to_string(), "A");
        assert_eq!(result.steps[2].to_string(), "A -> C -> F = 7");
        assert_eq!(result.best_step().to_string(), "A -> C -> F = 7");
    }
}
