// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # partition-engine
//!
//! Distributes a validated `ScoreSet` across a fixed number of groups
//! (graders) using pluggable strategies.
//!
//! # Strategies
//!
//! | Strategy | Objective | Groups hold | Cost |
//! |---|---|---|---|
//! | [`RoundRobin`] | Equal item counts | Every m-th score | `O(n log n)` |
//! | [`ContiguousVariance`] | Minimal summed variance (exact) | Bands of adjacent scores | `O(m·n²)` |
//! | [`GreedyLoadBalance`] | Balanced total load (LPT) | Any subset | `O(n log n + n·m)` |
//!
//! All strategies sort descending first, keep input positions on every item,
//! and always return exactly `m` groups, some possibly empty.
//!
//! # Trait-Based Extensibility
//!
//! All strategies implement [`PartitionStrategy`]:
//!
//! ```ignore
//! struct MyStrategy;
//! impl PartitionStrategy for MyStrategy {
//!     fn name(&self) -> &str { "mine" }
//!     fn partition(&self, scores: &ScoreSet<Validated>, groups: GroupCount)
//!         -> Result<Assignment, EngineError> { /* ... */ }
//! }
//! ```
//!
//! # Example
//! ```
//! use partition_engine::{partition_values, StrategyKind};
//!
//! let a = partition_values(&[10.0, 9.0, 8.0, 7.0, 1.0], 4, StrategyKind::GreedyLpt).unwrap();
//! assert_eq!(a.group_sums(), vec![10.0, 9.0, 8.0, 8.0]);
//! ```

pub(crate) mod assignment;
mod error;
pub mod strategy;

pub use assignment::{population_variance, Assignment, Group};
pub use error::EngineError;
pub use strategy::contiguous::{contiguous_blocks, BlockPartition, ContiguousVariance};
pub use strategy::greedy::GreedyLoadBalance;
pub use strategy::round_robin::RoundRobin;
pub use strategy::{PartitionStrategy, StrategyKind};

use score_model::score::Validated;
use score_model::{GroupCount, ScoreSet};

/// Partitions validated scores with the selected strategy.
///
/// Stateless: identical inputs always produce identical assignments.
pub fn partition(
    scores: &ScoreSet<Validated>,
    groups: GroupCount,
    strategy: StrategyKind,
) -> Result<Assignment, EngineError> {
    let assignment = strategy.create().partition(scores, groups)?;
    tracing::info!(
        "{} scores → {} groups via {strategy}: sums {:?}",
        scores.len(),
        groups,
        assignment.group_sums(),
    );
    Ok(assignment)
}

/// Validates raw values and a raw group count, then partitions.
///
/// Negative or non-finite scores and a group count of zero are rejected
/// with [`EngineError::InvalidInput`] before any work is done.
pub fn partition_values(
    values: &[f64],
    groups: usize,
    strategy: StrategyKind,
) -> Result<Assignment, EngineError> {
    let groups = GroupCount::new(groups)?;
    let scores = ScoreSet::new(values.to_vec()).validate()?;
    partition(&scores, groups, strategy)
}
