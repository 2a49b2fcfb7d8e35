// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Interactive graph session tying model, layout, dragging and search together

use crate::config::Config;
use crate::drag::DragController;
use crate::error::{GraphError, GraphResult};
use crate::graph::GraphModel;
use crate::layout::{EdgeLabel, Layout, LayoutEngine};
use crate::navigator::StepNavigator;
use crate::search::{PathSearchEngine, SearchResult};
use crate::types::{Bounds, Graph, LayoutNode, PointerEvent, ShortestPathStep};
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use tracing::warn;

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// Surface the scene was laid out on
    pub bounds: Bounds,
    /// Placed nodes
    pub nodes: Vec<LayoutNode>,
    /// Edges with their weight labels
    pub edges: Vec<EdgeLabel>,
    /// Node id pairs of the current search step
    pub highlighted: Vec<(String, String)>,
    /// Text form of the current step, e.g. `A -> C -> F = 7`
    pub trace: Option<String>,
    /// Cursor into the search trace
    pub cursor: usize,
    /// Number of recorded steps
    pub step_count: usize,
    /// Y of the divider above the trace strip
    pub divider_y: f32,
}

/// One interactive view over a graph
///
/// Access is single-threaded: callers serialize every call.
pub struct GraphSession<R = StdRng> {
    model: GraphModel,
    engine: LayoutEngine<R>,
    layout: Option<Layout>,
    drag: DragController,
    search: PathSearchEngine,
    navigator: StepNavigator,
}

impl GraphSession<StdRng> {
    /// Session with entropy-seeded placement
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_engine(config, LayoutEngine::new(config.layout))
    }

    /// Session with reproducible placement
    #[must_use]
    pub fn seeded(config: Config, seed: u64) -> Self {
        Self::with_engine(config, LayoutEngine::seeded(config.layout, seed))
    }
}

impl<R: Rng> GraphSession<R> {
    /// Session placing nodes with `engine`
    pub fn with_engine(config: Config, engine: LayoutEngine<R>) -> Self {
        Self {
            model: GraphModel::new(),
            engine,
            layout: None,
            drag: DragController::new(config.drag.policy),
            search: PathSearchEngine::new(),
            navigator: StepNavigator::new(),
        }
    }

    /// Replace the graph, discarding layout and search state
    pub fn set_graph(&mut self, graph: Graph) {
        if self.layout.is_some() || self.navigator.has_result() {
            warn!("Graph replaced; discarding layout and search trace");
        }
        self.model.set(graph);
        self.layout = None;
        self.drag.end_drag();
        self.navigator.clear();
    }

    /// The current graph
    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    /// The current layout, once [`GraphSession::resize`] has run
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Rebuild the layout for a new surface size
    pub fn resize(&mut self, bounds: Bounds) -> GraphResult<&Layout> {
        self.drag.end_drag();
        let layout = self.engine.layout(&self.model, bounds)?;
        Ok(self.layout.insert(layout))
    }

    /// Forward a pointer event; returns whether a redraw is needed
    pub fn pointer(&mut self, event: PointerEvent) -> GraphResult<bool> {
        let layout = self
            .layout
            .as_mut()
            .ok_or_else(|| GraphError::InvalidState("pointer event before layout".into()))?;
        self.drag.handle(layout, event)
    }

    /// Run a full search from `from` and rewind the step cursor
    pub fn find_shortest_path(&mut self, from: &str) -> GraphResult<&SearchResult> {
        self.navigator.clear();
        let result = self.search.find_all_paths(&self.model, from)?;
        self.navigator.install(result);
        self.navigator
            .result()
            .ok_or_else(|| GraphError::InvalidState("search result not installed".into()))
    }

    /// Advance the step cursor
    pub fn next_step(&mut self) -> bool {
        self.navigator.next()
    }

    /// Move the step cursor back
    pub fn prev_step(&mut self) -> bool {
        self.navigator.prev()
    }

    /// The step under the cursor
    pub fn current_step(&self) -> GraphResult<&ShortestPathStep> {
        self.navigator.current()
    }

    /// The step navigator
    pub fn navigator(&self) -> &StepNavigator {
        &self.navigator
    }

    /// Snapshot for rendering
    pub fn scene(&self) -> GraphResult<Scene> {
        let layout = self
            .layout
            .as_ref()
            .ok_or_else(|| GraphError::InvalidState("scene requested before layout".into()))?;

        let (highlighted, trace) = if self.navigator.has_result() {
            let segments = self
                .navigator
                .highlighted_segments(layout)?
                .into_iter()
                .map(|(a, b)| (a.id.clone(), b.id.clone()))
                .collect();
            (segments, Some(self.navigator.current()?.to_string()))
        } else {
            (Vec::new(), None)
        };

        Ok(Scene {
            bounds: layout.bounds(),
            nodes: layout.nodes().values().cloned().collect(),
            edges: layout.edge_labels(&self.model)?,
            highlighted,
            trace,
            cursor: self.navigator.cursor(),
            step_count: self.navigator.len(),
            divider_y: layout.divider_y(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GraphNode;

    fn graph() -> Graph {
        let mut graph = Graph::new();
        graph.insert("A".into(), vec![GraphNode::new("B", 1), GraphNode::new("C", 4)]);
        graph.insert("B".into(), vec![GraphNode::new("D", 2)]);
        graph.insert("C".into(), vec![]);
        graph.insert("D".into(), vec![]);
        graph
    }

    fn session() -> GraphSession {
        let mut session = GraphSession::seeded(Config::default(), 17);
        session.set_graph(graph());
        session.resize(Bounds::new(480.0, 320.0)).unwrap();
        session
    }

    #[test]
    fn test_scene_before_search() {
        let scene = session().scene().unwrap();
        assert_eq!(scene.nodes.len(), 4);
        assert_eq!(scene.edges.len(), 3);
        assert!(scene.highlighted.is_empty());
        assert_eq!(scene.trace, None);
        assert_eq!(scene.divider_y, 290.0);
    }

    #[test]
    fn test_search_and_scrub() {
        let mut session = session();
        let result = session.find_shortest_path("A").unwrap();
        assert_eq!(result.min_weight, 3);

        session.next_step();
        session.next_step();
        let scene = session.scene().unwrap();
        assert_eq!(scene.trace.as_deref(), Some("A -> B -> D = 3"));
        assert_eq!(
            scene.highlighted,
            vec![("A".to_string(), "B".to_string()), ("B".to_string(), "D".to_string())]
        );
        assert_eq!(scene.cursor, 2);
        assert_eq!(scene.step_count, 4);

        session.prev_step();
        assert_eq!(session.current_step().unwrap().to_string(), "A -> B = 1");
    }

    #[test]
    fn test_set_graph_discards_derived_state() {
        let mut session = session();
        session.find_shortest_path("A").unwrap();
        session.set_graph(graph());

        assert!(session.layout().is_none());
        assert!(session.current_step().is_err());
        assert!(matches!(session.scene(), Err(GraphError::InvalidState(_))));
        assert!(session.pointer(PointerEvent::down(1.0, 1.0)).is_err());
    }

    #[test]
    fn test_failed_search_drops_previous_trace() {
        let mut session = session();
        session.find_shortest_path("A").unwrap();
        assert!(session.current_step().is_ok());

        let mut cyclic = graph();
        cyclic.insert("X".into(), vec![GraphNode::new("Y", 1)]);
        cyclic.insert("Y".into(), vec![GraphNode::new("X", 1)]);
        session.set_graph(cyclic);
        session.resize(Bounds::new(480.0, 320.0)).unwrap();
        session.find_shortest_path("A").unwrap();

        let err = session.find_shortest_path("X").unwrap_err();
        assert!(matches!(err, GraphError::CycleDetected { .. }));
        assert!(matches!(session.current_step(), Err(GraphError::InvalidState(_))));
        assert!(!session.navigator().has_result());

        let scene = session.scene().unwrap();
        assert_eq!(scene.trace, None);
        assert_eq!(scene.step_count, 0);
    }

    #[test]
    fn test_pointer_drag_through_session() {
        let mut session = session();
        let (cx, cy) = session.layout().unwrap().node("C").unwrap().center();

        session.pointer(PointerEvent::down(cx, cy)).unwrap();
        session.pointer(PointerEvent::moved(cx, cy)).unwrap();
        assert!(session.pointer(PointerEvent::moved(cx + 5.0, cy)).unwrap());
        session.pointer(PointerEvent::up(cx + 5.0, cy)).unwrap();

        let (nx, ny) = session.layout().unwrap().node("C").unwrap().center();
        assert!((nx - (cx + 5.0)).abs() < 1e-3);
        assert!((ny - cy).abs() < 1e-3);
    }
}
