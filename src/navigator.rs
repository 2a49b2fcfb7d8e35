// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Cursor over a recorded search trace

use crate::error::{GraphError, GraphResult};
use crate::layout::Layout;
use crate::search::SearchResult;
use crate::types::{LayoutNode, ShortestPathStep};

/// Steps forward and backward through the last installed search result
///
/// The cursor always stays within `[0, len - 1]`; moving past either end
/// is a no-op.
#[derive(Debug, Clone, Default)]
pub struct StepNavigator {
    result: Option<SearchResult>,
    cursor: usize,
}

impl StepNavigator {
    /// Navigator with nothing installed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a fresh result and rewind to the first step
    pub fn install(&mut self, result: SearchResult) {
        self.result = Some(result);
        self.cursor = 0;
    }

    /// Drop the installed result
    pub fn clear(&mut self) {
        self.result = None;
        self.cursor = 0;
    }

    /// The installed result, if any
    #[must_use]
    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    /// Whether a search result is installed
    #[must_use]
    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// Current cursor index
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded steps
    #[must_use]
    pub fn len(&self) -> usize {
        self.result.as_ref().map_or(0, |r| r.steps.len())
    }

    /// Whether there are no steps to show
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advance one step; returns whether the cursor moved
    pub fn next(&mut self) -> bool {
        if self.cursor + 1 < self.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Go back one step; returns whether the cursor moved
    pub fn prev(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// The step under the cursor
    pub fn current(&self) -> GraphResult<&ShortestPathStep> {
        self.result
            .as_ref()
            .and_then(|r| r.steps.get(self.cursor))
            .ok_or_else(|| GraphError::InvalidState("no search steps to show".into()))
    }

    /// Consecutive node pairs of the current step, for path highlighting
    pub fn highlighted_segments<'a>(
        &self,
        layout: &'a Layout,
    ) -> GraphResult<Vec<(&'a LayoutNode, &'a LayoutNode)>> {
        let step = self.current()?;
        step.path
            .windows(2)
            .map(|pair| -> GraphResult<_> {
                let from = layout.node(&pair[0]).ok_or_else(|| GraphError::missing(&pair[0]))?;
                let to = layout.node(&pair[1]).ok_or_else(|| GraphError::missing(&pair[1]))?;
                Ok((from, to))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::graph::GraphModel;
    use crate::layout::LayoutEngine;
    use crate::search::find_all_paths;
    use crate::types::{Bounds, Graph, GraphNode};

    fn example() -> GraphModel {
        let mut graph = Graph::new();
        graph.insert("A".into(), vec![GraphNode::new("B", 1), GraphNode::new("C", 4)]);
        graph.insert("B".into(), vec![GraphNode::new("D", 2)]);
        graph.insert("C".into(), vec![]);
        graph.insert("D".into(), vec![]);
        GraphModel::from_graph(graph)
    }

    #[test]
    fn test_empty_navigator_is_invalid_state() {
        let mut nav = StepNavigator::new();
        assert!(matches!(nav.current(), Err(GraphError::InvalidState(_))));
        assert!(!nav.next());
        assert!(!nav.prev());
        assert_eq!(nav.cursor(), 0);
    }

    #[test]
    fn test_walks_example_trace() {
        let mut nav = StepNavigator::new();
        nav.install(find_all_paths(&example(), "A").unwrap());

        assert_eq!(nav.current().unwrap().path, vec!["A"]);
        assert!(nav.next());
        assert!(nav.next());
        assert!(nav.next());
        let step = nav.current().unwrap();
        assert_eq!((step.path.clone(), step.weight), (vec!["A".to_string(), "C".to_string()], 4));

        // clamped at the end
        assert!(!nav.next());
        assert_eq!(nav.cursor(), 3);

        assert!(nav.prev());
        assert_eq!(nav.current().unwrap().weight, 3);
    }

    #[test]
    fn test_prev_at_start_is_noop() {
        let mut nav = StepNavigator::new();
        nav.install(find_all_paths(&example(), "A").unwrap());
        assert!(!nav.prev());
        assert_eq!(nav.cursor(), 0);
    }

    #[test]
    fn test_install_rewinds() {
        let mut nav = StepNavigator::new();
        nav.install(find_all_paths(&example(), "A").unwrap());
        nav.next();
        nav.next();
        nav.install(find_all_paths(&example(), "B").unwrap());
        assert_eq!(nav.cursor(), 0);
        assert_eq!(nav.len(), 2);
    }

    #[test]
    fn test_highlighted_segments() {
        let model = example();
        let layout = LayoutEngine::seeded(LayoutConfig::default(), 1)
            .layout(&model, Bounds::new(400.0, 400.0))
            .unwrap();

        let mut nav = StepNavigator::new();
        nav.install(find_all_paths(&model, "A").unwrap());
        assert!(nav.highlighted_segments(&layout).unwrap().is_empty());

        nav.next();
        nav.next();
        let segments = nav.highlighted_segments(&layout).unwrap();
        let ids: Vec<_> = segments
            .iter()
            .map(|(a, b)| (a.id.as_str(), b.id.as_str()))
            .collect();
        assert_eq!(ids, vec![("A", "B"), ("B", "D")]);
    }
}
