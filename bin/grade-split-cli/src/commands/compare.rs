// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `grade-split compare` command: run every strategy on the same scores.
//!
//! Prints one row per strategy with the heaviest and lightest grader load,
//! their spread, and the summed per-grader variance.

use super::{DistributionOptions, ScoreInput};
use distributor::Distributor;
use std::path::Path;

pub fn execute(
    config: Option<&Path>,
    input: ScoreInput,
    options: DistributionOptions,
) -> anyhow::Result<()> {
    let config = super::load_config(config, Some(&options))?;
    let scores = super::load_scores(&input)?;
    let precision = config.precision;
    let distributor = Distributor::new(config)?;

    super::banner("Strategy Comparison");

    println!(
        "  {} questions, {} graders, total score {:.p$}",
        scores.len(),
        distributor.group_count(),
        scores.total(),
        p = precision,
    );
    println!();

    let reports = distributor.compare(&scores)?;

    println!(
        "  {:<16} {:>10} {:>10} {:>10} {:>14} {:>16}",
        "Strategy", "Max sum", "Min sum", "Spread", "Var. cost", "Group sizes",
    );
    println!("  {}", "-".repeat(82));

    for report in &reports {
        let sizes: Vec<usize> = report.groups.iter().map(|g| g.stats.count).collect();
        println!(
            "  {:<16} {:>10.p$} {:>10.p$} {:>10.p$} {:>14.p$} {:>16}",
            report.strategy,
            report.max_sum(),
            report.min_sum(),
            report.spread,
            report.variance_cost,
            format!("{sizes:?}"),
            p = precision,
        );
    }
    println!();

    if let Some(best) = reports
        .iter()
        .min_by(|a, b| a.spread.total_cmp(&b.spread))
    {
        println!("  Most balanced load: {}", best.strategy);
    }
    if let Some(best) = reports
        .iter()
        .min_by(|a, b| a.variance_cost.total_cmp(&b.variance_cost))
    {
        println!("  Most uniform groups: {}", best.strategy);
    }
    println!();

    Ok(())
}
