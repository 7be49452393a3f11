// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell

use crate::config::Config;
use anyhow::{Context, Result};

/// Print the effective configuration, or a single key of it
pub fn run(config: &Config, key: Option<&str>) -> Result<()> {
    let value = toml::Value::try_from(config).context("Failed to serialize configuration")?;

    let Some(key) = key else {
        print!("{}", toml::to_string_pretty(&value)?);
        return Ok(());
    };

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}", key))?;
    }

    match current {
        toml::Value::String(s) => println!("{s}"),
        toml::Value::Table(_) => print!("{}", toml::to_string_pretty(current)?),
        other => println!("{other}"),
    }

    Ok(())
}
