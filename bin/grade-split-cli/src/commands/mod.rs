// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and the helpers they share.

pub mod compare;
pub mod distribute;
pub mod stats;

use anyhow::Context;
use distributor::DistributorConfig;
use score_model::score::Validated;
use score_model::{GroupCount, ScoreLoader, ScoreSet};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Where the scores come from.
#[derive(clap::Args, Debug)]
pub struct ScoreInput {
    /// Comma-separated scores, in question order (e.g. "10,9.5,8").
    #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
    pub scores: Option<String>,

    /// File of scores: JSON array / {"scores": [...]} or whitespace/comma-separated text.
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Overrides applied on top of the configuration file.
#[derive(clap::Args, Debug)]
pub struct DistributionOptions {
    /// Partition strategy: round-robin, contiguous-dp, greedy-lpt.
    #[arg(long)]
    pub strategy: Option<String>,

    /// Number of graders (replaces configured grader names with defaults).
    #[arg(short, long)]
    pub graders: Option<usize>,
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the verbosity flag when set.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the configuration file, if any, and applies CLI overrides.
pub fn load_config(
    path: Option<&Path>,
    options: Option<&DistributionOptions>,
) -> anyhow::Result<DistributorConfig> {
    let mut config = match path {
        Some(p) => DistributorConfig::from_file(p)?,
        None => DistributorConfig::default(),
    };

    if let Some(options) = options {
        if let Some(strategy) = &options.strategy {
            config.strategy = strategy.clone();
        }
        if let Some(count) = options.graders {
            let count = GroupCount::new(count).context("--graders must be at least 1")?;
            config = config.with_grader_count(count);
        }
    }

    tracing::debug!("effective config: {config:?}");
    Ok(config)
}

/// Reads and validates the scores named by the input flags.
pub fn load_scores(input: &ScoreInput) -> anyhow::Result<ScoreSet<Validated>> {
    match (&input.scores, &input.file) {
        (Some(list), _) => ScoreLoader::from_inline(list).context("invalid --scores list"),
        (None, Some(path)) => ScoreLoader::load(path)
            .with_context(|| format!("failed to load scores from '{}'", path.display())),
        (None, None) => anyhow::bail!("either --scores or --file is required"),
    }
}

/// Prints the boxed command banner.
pub fn banner(title: &str) {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║ {:^52} ║", format!("grade-split · {title}"));
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
}
