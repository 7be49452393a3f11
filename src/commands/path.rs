// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Path command - shortest path between two vertices

use super::{attach_terminal, load_editor, GraphSource};
use crate::config::Config;
use crate::export::format_weight;
use crate::path::path_weight;
use crate::types::VertexId;
use anyhow::Result;
use tracing::{info, warn};

/// Run the path command
pub fn run(
    source: &GraphSource,
    config: &Config,
    start: VertexId,
    end: VertexId,
    draw: bool,
    json: bool,
) -> Result<()> {
    let mut editor = load_editor(source, config)?;
    let count = editor.graph().vertex_count();
    if start >= count || end >= count {
        warn!(start, end, vertices = count, "vertex ids out of range");
    }

    if draw {
        attach_terminal(&mut editor, config.color);
    }
    let path = editor.find_shortest_path(start, end);
    let total = path_weight(editor.graph(), &path);
    info!(start, end, hops = path.len(), "path query finished");

    if json {
        let report = serde_json::json!({
            "start": start,
            "end": end,
            "path": path,
            "total_weight": total,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match total {
        Some(total) => {
            let hops: Vec<String> = path.iter().map(ToString::to_string).collect();
            println!("Path: {}", hops.join(" → "));
            println!("Total weight: {}", format_weight(total));
        }
        None => println!("No path between {start} and {end}"),
    }

    Ok(())
}
