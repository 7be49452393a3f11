// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Validate command - check graph text without building it

use super::GraphSource;
use crate::validate::validate;
use anyhow::Result;

/// Run the validate command
pub fn run(source: &GraphSource) -> Result<()> {
    let text = source.read()?;

    match validate(source.format, &text) {
        Ok(()) => {
            println!("{}: valid {}", source.path.display(), source.format);
            Ok(())
        }
        Err(err) => anyhow::bail!("{}: invalid {}: {}", source.path.display(), source.format, err),
    }
}
