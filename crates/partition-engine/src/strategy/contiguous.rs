// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Exact contiguous partitioning strategy.
//!
//! Scores are sorted descending and cut into `m` consecutive blocks so that
//! the sum of the blocks' population variances is minimal. Only scores that
//! are adjacent in sorted order can share a group, so each grader receives a
//! band of similarly-scored questions.
//!
//! # Recurrence
//!
//! ```text
//! cost(k, j)  = population variance of values[k..j]
//! DP[0][0]    = 0
//! DP[0][j]    = +inf                      for j > 0
//! DP[i][j]    = min over k < j of DP[i-1][k] + cost(k, j)
//! ```
//!
//! Blocks are non-empty, so `DP[i][j]` is only defined for `j >= i`. With
//! more groups than scores, `min(m, n)` blocks are solved for and the
//! remaining groups are left empty at the end.
//!
//! Ties keep the leftmost `k`. The DP table and the parent table are flat
//! `Vec`s indexed by `i * (n + 1) + j`; `O(m·n²)` time, `O(m·n)` space.
//! The block variance is accumulated incrementally while `k` walks left,
//! so every `cost(k, j)` is `O(1)`.

use crate::assignment::AssignmentBuilder;
use crate::strategy::PartitionStrategy;
use crate::{Assignment, EngineError};
use score_model::score::Validated;
use score_model::{GroupCount, ScoreSet};
use std::ops::Range;

/// Result of [`contiguous_blocks`]: block boundaries and total cost.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BlockPartition {
    /// One half-open index range per block, in order. Concatenated they
    /// cover `0..n` exactly; trailing ranges are empty when blocks > n.
    pub blocks: Vec<Range<usize>>,
    /// Sum of the blocks' population variances.
    pub cost: f64,
}

impl BlockPartition {
    /// Returns the number of items in each block.
    pub fn sizes(&self) -> Vec<usize> {
        self.blocks.iter().map(|b| b.len()).collect()
    }
}

/// Running population variance (Welford's update).
#[derive(Debug, Clone, Copy, Default)]
struct VarianceAccumulator {
    count: usize,
    mean: f64,
    m2: f64,
}

impl VarianceAccumulator {
    fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    fn variance(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        (self.m2 / self.count as f64).max(0.0)
    }
}

/// Splits `values`, in the order given, into `blocks` contiguous blocks that
/// minimise the summed population variance.
///
/// The caller decides the order; [`ContiguousVariance`] passes the scores
/// sorted descending. `blocks` of zero yields no blocks at all.
pub fn contiguous_blocks(values: &[f64], blocks: usize) -> BlockPartition {
    let n = values.len();
    let m = blocks.min(n);
    let width = n + 1;

    let mut table = vec![f64::INFINITY; (m + 1) * width];
    let mut parent = vec![0usize; (m + 1) * width];
    table[0] = 0.0;

    for i in 1..=m {
        for j in i..=n {
            let mut block = VarianceAccumulator::default();
            let mut best = f64::INFINITY;
            let mut best_k = j - 1;

            // Grow the last block [k, j) leftwards; `<=` keeps the leftmost tie.
            for k in (i - 1..j).rev() {
                block.push(values[k]);
                let prefix = table[(i - 1) * width + k];
                if prefix.is_infinite() {
                    continue;
                }
                let candidate = prefix + block.variance();
                if candidate <= best {
                    best = candidate;
                    best_k = k;
                }
            }

            table[i * width + j] = best;
            parent[i * width + j] = best_k;
        }
    }

    let mut ranges = Vec::with_capacity(blocks);
    let mut end = n;
    for i in (1..=m).rev() {
        let start = parent[i * width + end];
        ranges.push(start..end);
        end = start;
    }
    ranges.reverse();
    ranges.resize(blocks, n..n);

    let cost = if m == 0 { 0.0 } else { table[m * width + n] };

    BlockPartition {
        blocks: ranges,
        cost,
    }
}

/// Sort descending, then cut into minimum-variance contiguous blocks.
#[derive(Debug, Clone, Default)]
pub struct ContiguousVariance;

impl ContiguousVariance {
    pub fn new() -> Self {
        Self
    }
}

impl PartitionStrategy for ContiguousVariance {
    fn name(&self) -> &str {
        "contiguous-dp"
    }

    fn partition(
        &self,
        scores: &ScoreSet<Validated>,
        groups: GroupCount,
    ) -> Result<Assignment, EngineError> {
        let sorted = scores.sorted_descending();
        let values: Vec<f64> = sorted.iter().map(|i| i.value).collect();
        let solution = contiguous_blocks(&values, groups.get());

        tracing::debug!(
            "contiguous partition of {} scores: sizes {:?}, cost {:.6}",
            values.len(),
            solution.sizes(),
            solution.cost,
        );

        let mut builder = AssignmentBuilder::new(self.name(), groups);
        for (group_index, block) in solution.blocks.iter().enumerate() {
            for item in &sorted[block.clone()] {
                builder.assign(group_index, *item);
            }
        }

        let assignment = builder.build();
        assignment.validate_against(scores, groups)?;
        Ok(assignment)
    }
}
