// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`PartitionStrategy`] trait and strategy implementations.

pub mod contiguous;
pub mod greedy;
pub mod round_robin;

use crate::{Assignment, ContiguousVariance, EngineError, GreedyLoadBalance, RoundRobin};
use score_model::score::Validated;
use score_model::{GroupCount, ScoreSet};
use std::fmt;
use std::str::FromStr;

/// Trait for partition strategies.
///
/// Each strategy takes a validated score set and a group count and produces
/// an [`Assignment`] holding exactly that many groups.
///
/// Strategies are purely algorithmic — no I/O and no shared state — so the
/// same inputs always yield the same assignment and independent calls may
/// run concurrently.
pub trait PartitionStrategy: Send + Sync {
    /// Human-readable name of this strategy.
    fn name(&self) -> &str;

    /// Partitions the scores into `groups` groups.
    fn partition(
        &self,
        scores: &ScoreSet<Validated>,
        groups: GroupCount,
    ) -> Result<Assignment, EngineError>;
}

/// Selectable strategy, as named in configuration files and on the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Deal sorted scores out one per group in turn.
    RoundRobin,
    /// Exact contiguous partition minimising summed group variance.
    ContiguousDp,
    /// Longest-processing-time-first load balancing.
    #[default]
    GreedyLpt,
}

impl StrategyKind {
    /// Every strategy, in presentation order.
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::RoundRobin,
        StrategyKind::ContiguousDp,
        StrategyKind::GreedyLpt,
    ];

    /// Returns the canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::RoundRobin => "round-robin",
            StrategyKind::ContiguousDp => "contiguous-dp",
            StrategyKind::GreedyLpt => "greedy-lpt",
        }
    }

    /// Creates the strategy implementation.
    pub fn create(self) -> Box<dyn PartitionStrategy> {
        match self {
            StrategyKind::RoundRobin => Box::new(RoundRobin::new()),
            StrategyKind::ContiguousDp => Box::new(ContiguousVariance::new()),
            StrategyKind::GreedyLpt => Box::new(GreedyLoadBalance::new()),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "round-robin" | "round_robin" | "rr" => Ok(StrategyKind::RoundRobin),
            "contiguous-dp" | "contiguous_dp" | "contiguous" | "dp" => {
                Ok(StrategyKind::ContiguousDp)
            }
            "greedy-lpt" | "greedy_lpt" | "greedy" | "lpt" => Ok(StrategyKind::GreedyLpt),
            other => Err(EngineError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
