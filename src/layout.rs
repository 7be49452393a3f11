// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Circular vertex placement

use crate::config::LayoutConfig;
use crate::graph::GraphModel;
use std::f64::consts::TAU;

/// Place vertices evenly on a circle, vertex 0 at angle zero.
///
/// The radius grows with the vertex count up to `max_radius`.
pub fn arrange_on_circle(graph: &mut GraphModel, layout: &LayoutConfig) {
    let n = graph.vertex_count();
    if n == 0 {
        return;
    }

    #[allow(clippy::cast_precision_loss)]
    let count = n as f64;
    let radius = layout.max_radius.min(count * layout.radius_step);

    for id in 0..n {
        #[allow(clippy::cast_precision_loss)]
        let angle = TAU * id as f64 / count;
        let x = layout.center_x + radius * angle.cos();
        let y = layout.center_y + radius * angle.sin();
        // ids come from 0..vertex_count
        let _ = graph.set_position(id, x, y);
    }
}
