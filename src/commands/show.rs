// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Show command - summary, adjacency matrix and adjacency list

use super::{attach_terminal, load_editor, GraphSource};
use crate::config::Config;
use anyhow::Result;

/// Run the show command
pub fn run(source: &GraphSource, config: &Config, draw: bool, json: bool) -> Result<()> {
    let mut editor = load_editor(source, config)?;
    let graph = editor.graph();

    if json {
        let report = serde_json::json!({
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "directed": graph.is_directed(),
            "components": graph.component_count(),
            "names": graph.vertex_names(),
            "adjacency_matrix": graph.adjacency_matrix(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let kind = if graph.is_directed() { "directed" } else { "undirected" };
    println!("Vertices: {}", graph.vertex_count());
    println!("Edge records: {}", graph.edge_count());
    println!("Type: {kind}");
    println!("Components: {}", graph.component_count());
    println!();
    println!("Adjacency matrix:");
    print!("{}", with_newline(graph.adjacency_matrix_text()));
    println!();
    println!("Adjacency list:");
    print!("{}", with_newline(graph.adjacency_list_text()));

    if draw {
        println!();
        attach_terminal(&mut editor, config.color);
        editor.redraw();
    }

    Ok(())
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
