// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for score loading and validation.

/// Errors that can occur when building or loading score sets.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A score is negative, NaN or infinite.
    #[error("invalid score at position {position}: {value} (scores must be finite and non-negative)")]
    InvalidScore { position: usize, value: f64 },

    /// The requested number of groups is zero.
    #[error("invalid group count {0}: at least one group is required")]
    InvalidGroupCount(usize),

    /// The number of labels does not match the group count.
    #[error("expected {expected} group labels, got {actual}")]
    LabelMismatch { expected: usize, actual: usize },

    /// The score file could not be read.
    #[error("failed to read scores: {0}")]
    ReadError(#[from] std::io::Error),

    /// A JSON score file is malformed.
    #[error("failed to parse JSON scores: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A token in a text score list is not a number.
    #[error("parse error on line {line}: {detail}")]
    ParseError { line: usize, detail: String },
}
