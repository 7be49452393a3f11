// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, then `GRAPHPATH_*` environment variables (`__` separates nested
//! keys, e.g. `GRAPHPATH_LAYOUT__MAX_RADIUS=200`).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "GRAPHPATH";

/// Circular layout parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Circle centre, x
    pub center_x: f64,
    /// Circle centre, y
    pub center_y: f64,
    /// Largest radius regardless of vertex count
    pub max_radius: f64,
    /// Radius added per vertex until `max_radius` is reached
    pub radius_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center_x: 300.0,
            center_y: 200.0,
            max_radius: 150.0,
            radius_step: 20.0,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Colour terminal output
    pub color: bool,
    /// Vertex placement
    pub layout: LayoutConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            color: true,
            layout: LayoutConfig::default(),
        }
    }
}

/// Default config file location, if the platform has a config directory
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "hyperpolymath", "graphpath")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load configuration from `path` (or the default location) and the environment.
///
/// An explicitly given file must exist; the default one is optional.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let defaults = Config::default();
    let mut builder = ::config::Config::builder()
        .set_default("log_level", defaults.log_level)?
        .set_default("color", defaults.color)?
        .set_default("layout.center_x", defaults.layout.center_x)?
        .set_default("layout.center_y", defaults.layout.center_y)?
        .set_default("layout.max_radius", defaults.layout.max_radius)?
        .set_default("layout.radius_step", defaults.layout.radius_step)?;

    match path {
        Some(path) => {
            builder = builder.add_source(::config::File::from(path).required(true));
        }
        None => {
            if let Some(path) = default_path() {
                builder = builder.add_source(::config::File::from(path).required(false));
            }
        }
    }

    builder
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("Failed to read configuration")?
        .try_deserialize()
        .context("Invalid configuration")
}
