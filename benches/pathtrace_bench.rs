// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Benchmarks for traced path search and random layout

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pathtrace::config::LayoutConfig;
use pathtrace::graph::GraphModel;
use pathtrace::layout::LayoutEngine;
use pathtrace::search::find_all_paths;
use pathtrace::types::{Bounds, Graph, GraphNode};

/// Layered DAG where every node links to both nodes of the next layer
fn layered(layers: usize) -> GraphModel {
    let mut graph = Graph::new();
    for layer in 0..layers {
        for side in 0..2 {
            let id = format!("{layer}-{side}");
            let next = if layer + 1 < layers {
                vec![
                    GraphNode::new(format!("{}-0", layer + 1), 1 + side as i64),
                    GraphNode::new(format!("{}-1", layer + 1), 2 - side as i64),
                ]
            } else {
                vec![]
            };
            graph.insert(id, next);
        }
    }
    GraphModel::from_graph(graph)
}

fn bench_search(c: &mut Criterion) {
    let model = layered(12);
    c.bench_function("find_all_paths_layered_12", |b| {
        b.iter(|| find_all_paths(black_box(&model), "0-0").unwrap())
    });
}

fn bench_layout(c: &mut Criterion) {
    let model = layered(8);
    c.bench_function("layout_16_nodes", |b| {
        b.iter(|| {
            LayoutEngine::seeded(LayoutConfig::default(), 7)
                .layout(black_box(&model), Bounds::new(1024.0, 768.0))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_search, bench_layout);
criterion_main!(benches);
