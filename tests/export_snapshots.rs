// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Snapshot tests for DOT export

use graphpath::graph::GraphModel;
use graphpath::parser::{build_from_adjacency_list, build_from_matrix};
use insta::assert_snapshot;

#[test]
fn test_undirected_dot_snapshot() {
    let mut graph = GraphModel::new();
    build_from_matrix(
        &mut graph,
        &[
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 1.0],
            vec![0.0, 1.0, 0.0],
        ],
        None,
    )
    .unwrap();

    assert_snapshot!(graph.to_dot().trim_end(), @r###"
    graph G {
      node [shape=circle];
      0 [label="V0"];
      1 [label="V1"];
      2 [label="V2"];
      0 -- 1 [label="1"];
      1 -- 2 [label="1"];
    }
    "###);
}

#[test]
fn test_directed_dot_snapshot() {
    let mut graph = GraphModel::new();
    let names = vec!["src".to_string(), "mid".to_string(), "dst".to_string()];
    build_from_adjacency_list(&mut graph, "0: ->1(2,5)\n1: ->2\n", Some(&names)).unwrap();

    assert_snapshot!(graph.to_dot().trim_end(), @r###"
    digraph G {
      node [shape=circle];
      0 [label="src"];
      1 [label="mid"];
      2 [label="dst"];
      0 -> 1 [label="2.5"];
      1 -> 2 [label="1"];
    }
    "###);
}
