// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Assignment: the output of the partition engine.
//!
//! An assignment maps each group label to the scores it received. Every
//! input score appears in exactly one group, unaltered; groups may be empty
//! when there are more groups than scores.

use crate::EngineError;
use score_model::score::Validated;
use score_model::{GroupCount, GroupLabel, ScoreSet, ScoredItem};
use std::fmt;

/// Population variance: mean squared deviation from the mean.
///
/// Empty and single-element slices have variance `0.0`.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

/// The scores assigned to one group.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Group {
    /// Which group this is.
    pub label: GroupLabel,
    /// Assigned items, in the order the strategy placed them.
    pub items: Vec<ScoredItem>,
}

impl Group {
    /// Returns the number of items in this group.
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the group received nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the group's running sum (its load).
    pub fn sum(&self) -> f64 {
        self.items.iter().map(|i| i.value).sum()
    }

    /// Returns the assigned values in placement order.
    pub fn values(&self) -> Vec<f64> {
        self.items.iter().map(|i| i.value).collect()
    }

    /// Returns the input positions of the assigned items.
    pub fn positions(&self) -> Vec<usize> {
        self.items.iter().map(|i| i.position).collect()
    }

    /// Returns the population variance of the group's scores.
    pub fn variance(&self) -> f64 {
        population_variance(&self.values())
    }
}

/// The complete assignment produced by a [`crate::PartitionStrategy`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Assignment {
    /// Strategy name that produced this assignment.
    pub strategy_name: String,
    /// One entry per group, ordered by group index.
    pub groups: Vec<Group>,
}

impl Assignment {
    /// Returns the number of groups (including empty ones).
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Returns the total number of assigned items.
    pub fn total_items(&self) -> usize {
        self.groups.iter().map(|g| g.num_items()).sum()
    }

    /// Returns each group's sum, by group index.
    pub fn group_sums(&self) -> Vec<f64> {
        self.groups.iter().map(|g| g.sum()).collect()
    }

    /// Returns the largest group sum (the makespan), or `0.0` with no groups.
    pub fn max_sum(&self) -> f64 {
        self.group_sums().into_iter().fold(0.0, f64::max)
    }

    /// Returns the smallest group sum, or `0.0` with no groups.
    pub fn min_sum(&self) -> f64 {
        self.group_sums()
            .into_iter()
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    /// Returns the difference between the heaviest and lightest group.
    pub fn spread(&self) -> f64 {
        self.max_sum() - self.min_sum()
    }

    /// Returns the sum over groups of each group's population variance.
    ///
    /// This is the objective minimised by [`crate::ContiguousVariance`].
    pub fn variance_cost(&self) -> f64 {
        self.groups.iter().map(|g| g.variance()).sum()
    }

    /// Returns the group an input position was assigned to.
    pub fn group_of(&self, position: usize) -> Option<&GroupLabel> {
        self.groups
            .iter()
            .find(|g| g.items.iter().any(|i| i.position == position))
            .map(|g| &g.label)
    }

    /// Replaces the group labels, keeping the assigned items.
    ///
    /// Fails if the number of labels differs from the number of groups.
    pub fn relabel(mut self, labels: Vec<GroupLabel>) -> Result<Self, EngineError> {
        if labels.len() != self.groups.len() {
            return Err(score_model::ModelError::LabelMismatch {
                expected: self.groups.len(),
                actual: labels.len(),
            }
            .into());
        }
        for (group, label) in self.groups.iter_mut().zip(labels) {
            group.label = label;
        }
        Ok(self)
    }

    /// Checks the assignment against the scores it was built from.
    ///
    /// Checks:
    /// - Exactly `groups` groups, with label indices `0..groups` in order.
    /// - Every input position appears exactly once across all groups.
    /// - Every assigned value is bit-identical to the input value.
    pub fn validate_against(
        &self,
        scores: &ScoreSet<Validated>,
        groups: GroupCount,
    ) -> Result<(), EngineError> {
        let fail = |detail: String| EngineError::StrategyFailed {
            strategy: self.strategy_name.clone(),
            detail,
        };

        if self.groups.len() != groups.get() {
            return Err(fail(format!(
                "expected {} groups, got {}",
                groups.get(),
                self.groups.len(),
            )));
        }

        let mut seen = vec![false; scores.len()];

        for (expected_idx, group) in self.groups.iter().enumerate() {
            if group.label.index != expected_idx {
                return Err(fail(format!(
                    "expected group index {expected_idx}, got {}",
                    group.label.index,
                )));
            }

            for item in &group.items {
                let original = scores.item(item.position).ok_or_else(|| {
                    fail(format!(
                        "group {} holds unknown position {}",
                        group.label, item.position,
                    ))
                })?;
                if original.value.to_bits() != item.value.to_bits() {
                    return Err(fail(format!(
                        "position {} altered: {} became {}",
                        item.position, original.value, item.value,
                    )));
                }
                if std::mem::replace(&mut seen[item.position], true) {
                    return Err(fail(format!("position {} assigned twice", item.position)));
                }
            }
        }

        if let Some(missing) = seen.iter().position(|s| !s) {
            return Err(fail(format!("position {missing} was dropped")));
        }

        Ok(())
    }

    /// Returns a human-readable summary of the assignment.
    pub fn summary(&self) -> String {
        let sizes: Vec<usize> = self.groups.iter().map(|g| g.num_items()).collect();
        format!(
            "Assignment '{}': {} groups, {} items, max sum {:.2}, min sum {:.2}, \
             spread {:.2}, variance cost {:.4}, group sizes: {:?}",
            self.strategy_name,
            self.num_groups(),
            self.total_items(),
            self.max_sum(),
            self.min_sum(),
            self.spread(),
            self.variance_cost(),
            sizes,
        )
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Assignment '{}':", self.strategy_name)?;
        for group in &self.groups {
            writeln!(
                f,
                "  {}: {:?} (sum {})",
                group.label,
                group.values(),
                group.sum(),
            )?;
        }
        Ok(())
    }
}

/// Builder helper for constructing an `Assignment` incrementally.
///
/// Starts with `groups` empty groups carrying default labels.
pub(crate) struct AssignmentBuilder {
    strategy_name: String,
    groups: Vec<Group>,
}

impl AssignmentBuilder {
    /// Creates a builder with `count` empty groups.
    pub fn new(strategy_name: &str, count: GroupCount) -> Self {
        let groups = GroupLabel::default_labels(count)
            .into_iter()
            .map(|label| Group {
                label,
                items: Vec::new(),
            })
            .collect();
        Self {
            strategy_name: strategy_name.to_string(),
            groups,
        }
    }

    /// Appends an item to a group.
    pub fn assign(&mut self, group_index: usize, item: ScoredItem) {
        self.groups[group_index].items.push(item);
    }

    /// Consumes the builder and returns the finished assignment.
    pub fn build(self) -> Assignment {
        Assignment {
            strategy_name: self.strategy_name,
            groups: self.groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: &[f64]) -> ScoreSet<Validated> {
        ScoreSet::new(values.to_vec()).validate().unwrap()
    }

    fn item(position: usize, value: f64) -> ScoredItem {
        ScoredItem { position, value }
    }

    fn sample_assignment() -> Assignment {
        let mut b = AssignmentBuilder::new("test", GroupCount::new(3).unwrap());
        b.assign(0, item(0, 10.0));
        b.assign(1, item(1, 4.0));
        b.assign(1, item(2, 6.0));
        b.assign(2, item(3, 2.0));
        b.build()
    }

    #[test]
    fn test_population_variance() {
        assert_eq!(population_variance(&[]), 0.0);
        assert_eq!(population_variance(&[7.0]), 0.0);
        assert_eq!(population_variance(&[2.0, 4.0]), 1.0);
        assert!((population_variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_sums_and_spread() {
        let a = sample_assignment();
        assert_eq!(a.group_sums(), vec![10.0, 10.0, 2.0]);
        assert_eq!(a.max_sum(), 10.0);
        assert_eq!(a.min_sum(), 2.0);
        assert_eq!(a.spread(), 8.0);
        assert_eq!(a.total_items(), 4);
    }

    #[test]
    fn test_variance_cost() {
        // Only group 1 ([4, 6]) has non-zero variance.
        assert_eq!(sample_assignment().variance_cost(), 1.0);
    }

    #[test]
    fn test_group_of() {
        let a = sample_assignment();
        assert_eq!(a.group_of(2).unwrap().name, "Grader B");
        assert!(a.group_of(9).is_none());
    }

    #[test]
    fn test_validate_ok() {
        sample_assignment()
            .validate_against(&scores(&[10.0, 4.0, 6.0, 2.0]), GroupCount::new(3).unwrap())
            .unwrap();
    }

    #[test]
    fn test_validate_wrong_group_count() {
        let err = sample_assignment()
            .validate_against(&scores(&[10.0, 4.0, 6.0, 2.0]), GroupCount::GRADERS)
            .unwrap_err();
        assert!(matches!(err, EngineError::StrategyFailed { .. }));
    }

    #[test]
    fn test_validate_dropped_score() {
        let err = sample_assignment()
            .validate_against(&scores(&[10.0, 4.0, 6.0, 2.0, 1.0]), GroupCount::new(3).unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("position 4 was dropped"));
    }

    #[test]
    fn test_validate_duplicate_score() {
        let mut a = sample_assignment();
        a.groups[2].items.push(item(0, 10.0));
        let err = a
            .validate_against(&scores(&[10.0, 4.0, 6.0, 2.0]), GroupCount::new(3).unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("assigned twice"));
    }

    #[test]
    fn test_validate_altered_score() {
        let mut a = sample_assignment();
        a.groups[0].items[0].value = 11.0;
        let err = a
            .validate_against(&scores(&[10.0, 4.0, 6.0, 2.0]), GroupCount::new(3).unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("altered"));
    }

    #[test]
    fn test_relabel() {
        let a = sample_assignment()
            .relabel(GroupLabel::from_names(["Ana", "Ben", "Cy"]))
            .unwrap();
        assert_eq!(a.groups[2].label.name, "Cy");
        assert_eq!(a.groups[2].values(), vec![2.0]);

        let err = sample_assignment()
            .relabel(GroupLabel::from_names(["Ana"]))
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_assignment_aggregates() {
        let a = AssignmentBuilder::new("empty", GroupCount::GRADERS).build();
        assert_eq!(a.num_groups(), 4);
        assert_eq!(a.max_sum(), 0.0);
        assert_eq!(a.min_sum(), 0.0);
        assert_eq!(a.variance_cost(), 0.0);
    }

    #[test]
    fn test_summary_and_display() {
        let a = sample_assignment();
        let s = a.summary();
        assert!(s.contains("test"));
        assert!(s.contains("3 groups"));
        assert!(s.contains("4 items"));
        assert!(format!("{a}").contains("Grader A"));
    }
}
