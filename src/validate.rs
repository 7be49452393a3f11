// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Input validation run before the text builders
//!
//! The builders are lenient (bad matrix tokens read as 0, unknown list lines
//! are skipped); these checks are what reject malformed input up front.

use crate::error::ValidationError;
use crate::parser::{content_lines, parse_number, row_tokens};
use crate::types::InputFormat;
use regex::Regex;
use std::sync::OnceLock;

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*\d+\s*:(?:\s*(?:→|->)\s*\d+(?:\(\s*[\d.,]+\s*\))?)*\s*$")
            .expect("adjacency line pattern is valid")
    })
}

/// Check that matrix text is square and fully numeric
pub fn validate_matrix(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::Empty { format: InputFormat::Matrix });
    }

    let lines: Vec<&str> = content_lines(text).collect();
    let expected = lines.len();

    for (index, line) in lines.iter().enumerate() {
        let row = index + 1;
        let tokens: Vec<&str> = row_tokens(line).collect();
        if tokens.len() != expected {
            return Err(ValidationError::RowLength {
                row,
                expected,
                found: tokens.len(),
            });
        }
        if let Some(token) = tokens.iter().find(|t| parse_number(t).is_none()) {
            return Err(ValidationError::InvalidNumber {
                row,
                token: (*token).to_string(),
            });
        }
    }

    Ok(())
}

/// Check every non-blank line against the adjacency-list grammar
pub fn validate_adjacency_list(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::Empty { format: InputFormat::List });
    }

    match content_lines(text).find(|line| !line_pattern().is_match(line)) {
        Some(line) => Err(ValidationError::MalformedLine { line: line.to_string() }),
        None => Ok(()),
    }
}

/// Dispatch on format
pub fn validate(format: InputFormat, text: &str) -> Result<(), ValidationError> {
    match format {
        InputFormat::Matrix => validate_matrix(text),
        InputFormat::List => validate_adjacency_list(text),
    }
}
