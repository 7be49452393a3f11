// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use arbitrary::Arbitrary;
use graphpath::graph::GraphModel;
use graphpath::path::shortest_path;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    AddVertex,
    AddEdge { from: u8, to: u8, weight: f64, directed: bool },
    Path { start: u8, end: u8 },
    Clear,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut graph = GraphModel::new();

    for op in ops {
        match op {
            Op::AddVertex => {
                graph.add_vertex(String::new());
            }
            Op::AddEdge { from, to, weight, directed } => {
                let before = graph.clone();
                if graph.add_edge(usize::from(from), usize::from(to), weight, directed).is_err() {
                    assert_eq!(graph, before);
                }
            }
            Op::Path { start, end } => {
                let path = shortest_path(&graph, usize::from(start), usize::from(end));
                assert!(path.len() <= graph.vertex_count());
            }
            Op::Clear => graph.clear(),
        }
    }
});
