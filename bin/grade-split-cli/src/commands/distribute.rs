// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `grade-split distribute` command: assign questions to graders.
//!
//! Prints one table per grader (question number and score), the grader's
//! statistics, overall totals, and a bar chart of the raw scores in
//! question order.

use super::{DistributionOptions, ScoreInput};
use distributor::{DistributionReport, Distributor, GroupReport};
use std::path::Path;

/// Widest bar in the score chart, in characters.
const CHART_WIDTH: usize = 40;

pub fn execute(
    config: Option<&Path>,
    input: ScoreInput,
    options: DistributionOptions,
    json: bool,
) -> anyhow::Result<()> {
    let config = super::load_config(config, Some(&options))?;
    let scores = super::load_scores(&input)?;
    let precision = config.precision;
    let distributor = Distributor::new(config)?;
    let report = distributor.distribute(&scores)?;

    if json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    super::banner("Question Distribution");

    println!("  Strategy:  {}", report.strategy);
    println!("  Questions: {}", report.overall.count);
    println!("  Graders:   {}", report.groups.len());
    println!();

    // ── Per-Grader Tables ──────────────────────────────────────
    for group in &report.groups {
        print_group(group, precision);
    }

    // ── Overall ────────────────────────────────────────────────
    println!("  Statistics:");
    println!("   Total score:    {:.p$}", report.overall.sum, p = precision);
    println!("   Average score:  {:.p$}", report.overall.mean, p = precision);
    println!("   Load spread:    {:.p$}", report.spread, p = precision);
    println!("   Variance cost:  {:.p$}", report.variance_cost, p = precision);
    println!();

    print_chart(&report, precision);
    Ok(())
}

fn print_group(group: &GroupReport, precision: usize) {
    println!("  {}", group.label);
    println!("  {:<10} {:>10}", "Question", "Score");
    println!("  {}", "-".repeat(21));
    if group.items.is_empty() {
        println!("  {:<10} {:>10}", "(none)", "-");
    }
    for item in &group.items {
        println!(
            "  {:<10} {:>10.p$}",
            item.position + 1,
            item.value,
            p = precision,
        );
    }
    let s = &group.stats;
    println!(
        "  sum {:.p$} · mean {:.p$} · median {:.p$} · range {:.p$}–{:.p$} · std dev {:.p$} · variance {:.p$}",
        s.sum,
        s.mean,
        s.median,
        s.min,
        s.max,
        s.std_dev,
        s.variance,
        p = precision,
    );
    println!();
}

/// Horizontal bar chart of every score, in question order.
fn print_chart(report: &DistributionReport, precision: usize) {
    let mut items: Vec<_> = report.groups.iter().flat_map(|g| g.items.iter()).collect();
    if items.is_empty() {
        return;
    }
    items.sort_by_key(|i| i.position);

    println!("  Score distribution:");
    let max = report.overall.max;
    for item in items {
        let width = if max > 0.0 {
            ((item.value / max) * CHART_WIDTH as f64).round() as usize
        } else {
            0
        };
        println!(
            "  Q{:<4} {:>8.p$} │{}",
            item.position + 1,
            item.value,
            "█".repeat(width),
            p = precision,
        );
    }
    println!();
}
