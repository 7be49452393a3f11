// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use graphpath::editor::GraphEditor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let mut editor = GraphEditor::default();
    if editor.build_from_matrix_text(text, None).is_ok() {
        let graph = editor.graph();
        assert_eq!(graph.adjacency_matrix().len(), graph.vertex_count());
        let _ = graph.adjacency_matrix_text();
        let _ = graph.to_dot();
    } else {
        assert!(editor.graph().is_empty());
    }
});
