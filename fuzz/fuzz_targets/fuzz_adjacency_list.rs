// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use graphpath::editor::GraphEditor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let mut editor = GraphEditor::default();
    if editor.build_from_list_text(text, None).is_ok() {
        let count = editor.graph().vertex_count();
        if count > 1 {
            let path = editor.find_shortest_path(0, count - 1);
            assert!(path.len() <= count);
        }
        let _ = editor.graph().adjacency_list_text();
    }
});
