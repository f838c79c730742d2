// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Distribution configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! strategy = "greedy-lpt"
//! graders = ["Grader A", "Grader B", "Grader C", "Grader D"]
//! precision = 2
//! ```

use crate::DistributorError;
use partition_engine::{PartitionStrategy, StrategyKind};
use score_model::{GroupCount, GroupLabel};
use std::path::Path;

/// Configuration for a distribution run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DistributorConfig {
    /// Strategy name: `"round-robin"`, `"contiguous-dp"` or `"greedy-lpt"`.
    #[serde(default = "default_strategy")]
    pub strategy: String,
    /// Grader names, one per group. The group count is their number.
    #[serde(default = "default_graders")]
    pub graders: Vec<String>,
    /// Decimal places used when printing scores and statistics.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_strategy() -> String {
    StrategyKind::default().to_string()
}

fn default_graders() -> Vec<String> {
    grader_names(GroupCount::GRADERS)
}

fn default_precision() -> usize {
    2
}

/// Default grader names for `count` groups.
fn grader_names(count: GroupCount) -> Vec<String> {
    GroupLabel::default_labels(count)
        .into_iter()
        .map(|l| l.name)
        .collect()
}

impl DistributorConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, DistributorError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DistributorError::ConfigError(format!(
                "cannot read config '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, DistributorError> {
        toml::from_str(toml_str)
            .map_err(|e| DistributorError::ConfigError(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, DistributorError> {
        toml::to_string_pretty(self)
            .map_err(|e| DistributorError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Replaces the grader names with `count` default names.
    pub fn with_grader_count(mut self, count: GroupCount) -> Self {
        self.graders = grader_names(count);
        self
    }

    /// Returns the number of graders.
    pub fn group_count(&self) -> Result<GroupCount, DistributorError> {
        GroupCount::new(self.graders.len()).map_err(|_| {
            DistributorError::ConfigError("at least one grader must be configured".into())
        })
    }

    /// Returns one label per configured grader.
    pub fn labels(&self) -> Vec<GroupLabel> {
        GroupLabel::from_names(self.graders.iter().cloned())
    }

    /// Resolves the configured strategy name.
    pub fn strategy_kind(&self) -> Result<StrategyKind, DistributorError> {
        self.strategy
            .parse()
            .map_err(|e| DistributorError::ConfigError(format!("{e}")))
    }

    /// Creates the partition strategy specified by this config.
    pub fn create_strategy(&self) -> Result<Box<dyn PartitionStrategy>, DistributorError> {
        Ok(self.strategy_kind()?.create())
    }
}

impl Default for DistributorConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            graders: default_graders(),
            precision: default_precision(),
        }
    }
}
