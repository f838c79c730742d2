// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Distribution reports: an assignment plus everything a host displays.

use crate::{DistributorError, GroupStats};
use partition_engine::Assignment;
use score_model::score::Validated;
use score_model::{GroupLabel, ScoreSet, ScoredItem};

/// One grader's share of the questions.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GroupReport {
    /// The grader.
    pub label: GroupLabel,
    /// Assigned items, in question order.
    pub items: Vec<ScoredItem>,
    /// Statistics over the assigned scores.
    pub stats: GroupStats,
}

impl GroupReport {
    /// Returns the assigned question positions (0-based), ascending.
    pub fn positions(&self) -> Vec<usize> {
        self.items.iter().map(|i| i.position).collect()
    }
}

/// The full result of one distribution run.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DistributionReport {
    /// Strategy that produced the assignment.
    pub strategy: String,
    /// One report per grader, in group order.
    pub groups: Vec<GroupReport>,
    /// Statistics over every score.
    pub overall: GroupStats,
    /// Heaviest minus lightest grader load.
    pub spread: f64,
    /// Sum of the graders' score variances.
    pub variance_cost: f64,
}

impl DistributionReport {
    /// Builds a report from an assignment and the scores it partitioned.
    pub fn new(assignment: &Assignment, scores: &ScoreSet<Validated>) -> Self {
        let groups = assignment
            .groups
            .iter()
            .map(|group| {
                let mut items = group.items.clone();
                items.sort_by_key(|i| i.position);
                GroupReport {
                    label: group.label.clone(),
                    stats: GroupStats::from_values(&group.values()),
                    items,
                }
            })
            .collect();

        Self {
            strategy: assignment.strategy_name.clone(),
            groups,
            overall: GroupStats::from_values(&scores.values()),
            spread: assignment.spread(),
            variance_cost: assignment.variance_cost(),
        }
    }

    /// Returns the report for the grader with the given name.
    pub fn group(&self, name: &str) -> Option<&GroupReport> {
        self.groups.iter().find(|g| g.label.name == name)
    }

    /// Returns the heaviest grader load.
    pub fn max_sum(&self) -> f64 {
        self.groups.iter().map(|g| g.stats.sum).fold(0.0, f64::max)
    }

    /// Returns the lightest grader load.
    pub fn min_sum(&self) -> f64 {
        self.groups
            .iter()
            .map(|g| g.stats.sum)
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    /// Serialises the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DistributorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns a multi-line human-readable summary.
    pub fn summary(&self, precision: usize) -> String {
        let mut lines = vec![format!(
            "Distribution '{}': {} questions over {} graders, spread {:.p$}, variance cost {:.p$}",
            self.strategy,
            self.overall.count,
            self.groups.len(),
            self.spread,
            self.variance_cost,
            p = precision,
        )];
        for group in &self.groups {
            lines.push(format!("  {}: {}", group.label, group.stats.summary(precision)));
        }
        lines.join("\n")
    }
}
