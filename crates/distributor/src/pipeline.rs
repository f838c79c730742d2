// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The distribution pipeline.
//!
//! ```text
//! raw scores ─ validate ─▶ ScoreSet<Validated> ─ partition ─▶ Assignment
//!            ─ relabel with grader names ─▶ DistributionReport
//! ```
//!
//! A [`Distributor`] resolves its configuration once, at construction, and
//! holds no mutable state afterwards; one instance can serve any number of
//! independent score sets.

use crate::{DistributionReport, DistributorConfig, DistributorError};
use partition_engine::StrategyKind;
use score_model::score::Validated;
use score_model::{GroupCount, GroupLabel, ScoreSet};

/// Runs score sets through a configured partition strategy.
#[derive(Debug, Clone)]
pub struct Distributor {
    config: DistributorConfig,
    strategy: StrategyKind,
    groups: GroupCount,
    labels: Vec<GroupLabel>,
}

impl Distributor {
    /// Creates a distributor, rejecting unknown strategies and empty grader lists.
    pub fn new(config: DistributorConfig) -> Result<Self, DistributorError> {
        let strategy = config.strategy_kind()?;
        let groups = config.group_count()?;
        let labels = config.labels();

        tracing::info!(
            "distributor ready: strategy {strategy}, {groups} graders ({})",
            config.graders.join(", "),
        );

        Ok(Self {
            config,
            strategy,
            groups,
            labels,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &DistributorConfig {
        &self.config
    }

    /// Returns the resolved strategy.
    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    /// Returns the number of graders.
    pub fn group_count(&self) -> GroupCount {
        self.groups
    }

    /// Distributes validated scores with the configured strategy.
    pub fn distribute(
        &self,
        scores: &ScoreSet<Validated>,
    ) -> Result<DistributionReport, DistributorError> {
        self.distribute_with(scores, self.strategy)
    }

    /// Validates raw scores, then distributes them.
    pub fn distribute_values(
        &self,
        values: Vec<f64>,
    ) -> Result<DistributionReport, DistributorError> {
        let scores = ScoreSet::new(values).validate()?;
        self.distribute(&scores)
    }

    /// Distributes the same scores with every strategy, in presentation order.
    pub fn compare(
        &self,
        scores: &ScoreSet<Validated>,
    ) -> Result<Vec<DistributionReport>, DistributorError> {
        StrategyKind::ALL
            .iter()
            .map(|&kind| self.distribute_with(scores, kind))
            .collect()
    }

    fn distribute_with(
        &self,
        scores: &ScoreSet<Validated>,
        strategy: StrategyKind,
    ) -> Result<DistributionReport, DistributorError> {
        let assignment = partition_engine::partition(scores, self.groups, strategy)?
            .relabel(self.labels.clone())?;

        let report = DistributionReport::new(&assignment, scores);
        tracing::debug!("{}", report.summary(self.config.precision));
        Ok(report)
    }
}
