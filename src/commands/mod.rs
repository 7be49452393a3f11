// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod config;
pub mod export;
pub mod path;
pub mod show;
pub mod validate;

use crate::config::Config;
use crate::editor::GraphEditor;
use crate::render::TextRenderer;
use crate::types::InputFormat;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

/// Graph text to load, and how to read it
#[derive(Debug, Clone)]
pub struct GraphSource {
    /// Matrix or list
    pub format: InputFormat,
    /// File to read, `-` for standard input
    pub path: PathBuf,
    /// Vertex names overriding the `V<i>` defaults
    pub names: Vec<String>,
}

impl GraphSource {
    /// Pick the source from `--matrix` / `--list`
    pub fn from_args(matrix: Option<PathBuf>, list: Option<PathBuf>, names: Vec<String>) -> Result<Self> {
        let (format, path) = match (matrix, list) {
            (Some(path), None) => (InputFormat::Matrix, path),
            (None, Some(path)) => (InputFormat::List, path),
            _ => anyhow::bail!("Exactly one of --matrix or --list is required"),
        };
        Ok(Self { format, path, names })
    }

    /// Read the raw text
    pub fn read(&self) -> Result<String> {
        if self.path.as_os_str() == "-" {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read graph from stdin")?;
            return Ok(text);
        }
        std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))
    }

    /// Explicit names, if any were given
    #[must_use]
    pub fn names(&self) -> Option<&[String]> {
        if self.names.is_empty() {
            None
        } else {
            Some(&self.names)
        }
    }
}

/// Read, validate and build the source into a fresh editing session
pub fn load_editor(source: &GraphSource, config: &Config) -> Result<GraphEditor> {
    let text = source.read()?;
    let mut editor = GraphEditor::new(config.layout);
    editor
        .build_from_text(source.format, &text, source.names())
        .with_context(|| format!("Failed to build graph from {}", source.path.display()))?;
    Ok(editor)
}

/// Attach a terminal renderer so the next change is drawn
pub fn attach_terminal(editor: &mut GraphEditor, color: bool) {
    editor.set_renderer(Box::new(TextRenderer::stdout(color)));
}
