// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Score loading from files and inline lists.
//!
//! Two file formats are accepted:
//! - **JSON** (`.json`): either a bare array `[10, 9.5, 8]` or an object
//!   `{ "scores": [10, 9.5, 8] }`.
//! - **Text** (anything else): numbers separated by whitespace, commas or
//!   newlines. `#` starts a comment that runs to the end of the line.
//!
//! Every loader validates before returning, so callers always receive a
//! `ScoreSet<Validated>`.

use crate::score::Validated;
use crate::{ModelError, ScoreSet};
use std::path::Path;

/// JSON score file layouts.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum ScoreFile {
    List(Vec<f64>),
    Object { scores: Vec<f64> },
}

impl ScoreFile {
    fn into_values(self) -> Vec<f64> {
        match self {
            ScoreFile::List(values) | ScoreFile::Object { scores: values } => values,
        }
    }
}

/// Loads score sets from disk or from inline strings.
///
/// # Example
/// ```
/// use score_model::ScoreLoader;
///
/// let scores = ScoreLoader::from_inline("10, 9, 8, 7, 1").unwrap();
/// assert_eq!(scores.len(), 5);
/// ```
pub struct ScoreLoader;

impl ScoreLoader {
    /// Loads and validates scores from a file, choosing the format by extension.
    pub fn load(path: &Path) -> Result<ScoreSet<Validated>, ModelError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let values = if is_json {
            Self::parse_json(&content)?
        } else {
            Self::parse_text(&content)?
        };

        tracing::info!("loaded {} scores from '{}'", values.len(), path.display());
        ScoreSet::new(values).validate()
    }

    /// Parses and validates a comma-separated inline list such as `"10,9,8"`.
    pub fn from_inline(list: &str) -> Result<ScoreSet<Validated>, ModelError> {
        ScoreSet::new(Self::parse_text(list)?).validate()
    }

    /// Parses a JSON score document.
    pub fn parse_json(content: &str) -> Result<Vec<f64>, ModelError> {
        let file: ScoreFile = serde_json::from_str(content)?;
        Ok(file.into_values())
    }

    /// Parses a text score list.
    pub fn parse_text(content: &str) -> Result<Vec<f64>, ModelError> {
        let mut values = Vec::new();

        for (line_idx, line) in content.lines().enumerate() {
            let line = line.split('#').next().unwrap_or("");
            for token in line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|t| !t.is_empty())
            {
                let value: f64 = token.parse().map_err(|_| ModelError::ParseError {
                    line: line_idx + 1,
                    detail: format!("'{token}' is not a number"),
                })?;
                values.push(value);
            }
        }

        Ok(values)
    }
}
