// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Round-robin partitioning strategy.
//!
//! The simplest strategy: sort scores descending and deal them out one per
//! group in turn, so item `i` of the sorted view goes to group `i mod m`.
//! Group sizes differ by at most one, but loads can drift apart because the
//! first group always receives the largest score of every round.
//!
//! # When to use
//! - Every question takes roughly the same effort regardless of score.
//! - Baseline for comparing the other strategies.

use crate::assignment::AssignmentBuilder;
use crate::strategy::PartitionStrategy;
use crate::{Assignment, EngineError};
use score_model::score::Validated;
use score_model::{GroupCount, ScoreSet};

/// Deal sorted scores out to groups in rotation.
#[derive(Debug, Clone, Default)]
pub struct RoundRobin;

impl RoundRobin {
    pub fn new() -> Self {
        Self
    }
}

impl PartitionStrategy for RoundRobin {
    fn name(&self) -> &str {
        "round-robin"
    }

    fn partition(
        &self,
        scores: &ScoreSet<Validated>,
        groups: GroupCount,
    ) -> Result<Assignment, EngineError> {
        let m = groups.get();
        let mut builder = AssignmentBuilder::new(self.name(), groups);

        for (i, item) in scores.sorted_descending().into_iter().enumerate() {
            builder.assign(i % m, item);
        }

        let assignment = builder.build();
        assignment.validate_against(scores, groups)?;
        Ok(assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(values: &[f64], m: usize) -> Assignment {
        let scores = ScoreSet::new(values.to_vec()).validate().unwrap();
        RoundRobin::new()
            .partition(&scores, GroupCount::new(m).unwrap())
            .unwrap()
    }

    #[test]
    fn test_round_robin_deals_in_rotation() {
        let a = run(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 4);
        assert_eq!(a.groups[0].values(), vec![6.0, 2.0]);
        assert_eq!(a.groups[1].values(), vec![5.0, 1.0]);
        assert_eq!(a.groups[2].values(), vec![4.0]);
        assert_eq!(a.groups[3].values(), vec![3.0]);
    }

    #[test]
    fn test_round_robin_sizes_differ_by_at_most_one() {
        let a = run(&[3.0; 11], 4);
        let sizes: Vec<_> = a.groups.iter().map(|g| g.num_items()).collect();
        assert_eq!(sizes, vec![3, 3, 3, 2]);
    }

    #[test]
    fn test_round_robin_more_groups_than_scores() {
        let a = run(&[2.0, 1.0], 4);
        assert_eq!(a.num_groups(), 4);
        assert!(a.groups[2].is_empty());
        assert!(a.groups[3].is_empty());
    }

    #[test]
    fn test_round_robin_empty_input() {
        let a = run(&[], 4);
        assert_eq!(a.num_groups(), 4);
        assert_eq!(a.total_items(), 0);
    }
}
