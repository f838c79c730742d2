// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the distribution pipeline.

/// Errors that can occur while configuring or running a distribution.
#[derive(Debug, thiserror::Error)]
pub enum DistributorError {
    /// The configuration is missing, malformed or inconsistent.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Score loading or validation failed.
    #[error("score error: {0}")]
    ModelError(#[from] score_model::ModelError),

    /// The partition engine rejected the input or failed.
    #[error("partition error: {0}")]
    EngineError(#[from] partition_engine::EngineError),

    /// A report could not be serialised.
    #[error("report serialisation failed: {0}")]
    ReportError(#[from] serde_json::Error),
}
