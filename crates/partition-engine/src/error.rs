// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the partition engine.

use score_model::ModelError;

/// Errors that can occur while partitioning scores.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The scores or the group count failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ModelError),

    /// A strategy name did not match any known strategy.
    #[error("unknown strategy '{0}'; expected 'round-robin', 'contiguous-dp', or 'greedy-lpt'")]
    UnknownStrategy(String),

    /// A strategy produced an assignment that breaks coverage or conservation.
    #[error("strategy '{strategy}' failed: {detail}")]
    StrategyFailed { strategy: String, detail: String },
}
