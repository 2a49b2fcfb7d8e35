// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use libfuzzer_sys::fuzz_target;
use pathtrace::graph::GraphModel;
use pathtrace::search::find_all_paths;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(model) = GraphModel::from_json(text) else {
        return;
    };

    // Enumeration is exponential in the number of paths; keep inputs small
    if model.edge_count() > 16 {
        return;
    }

    if let Some(start) = model.graph().keys().next() {
        if let Ok(result) = find_all_paths(&model, start) {
            assert!(!result.steps.is_empty());
            assert!(result.complete_paths().any(|s| s.path == result.best_path));
        }
    }
});
