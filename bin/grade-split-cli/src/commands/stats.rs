// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `grade-split stats` command: overall statistics of a score set.

use super::ScoreInput;
use distributor::GroupStats;
use std::path::Path;

pub fn execute(config: Option<&Path>, input: ScoreInput) -> anyhow::Result<()> {
    let config = super::load_config(config, None)?;
    let scores = super::load_scores(&input)?;
    let s = GroupStats::from_values(&scores.values());
    let p = config.precision;

    super::banner("Score Statistics");

    println!("  Questions:      {}", s.count);
    println!("  Total score:    {:.p$}", s.sum);
    println!("  Average score:  {:.p$}", s.mean);
    println!("  Median:         {:.p$}", s.median);
    println!("  Range:          {:.p$} – {:.p$}", s.min, s.max);
    println!("  Std deviation:  {:.p$}", s.std_dev);
    println!("  Variance:       {:.p$}", s.variance);
    println!();

    Ok(())
}
