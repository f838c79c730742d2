// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # grade-split
//!
//! Command-line interface for distributing scored questions across graders.
//!
//! ## Usage
//! ```bash
//! # Distribute five questions across four graders
//! grade-split distribute --scores 10,9,8,7,1 --strategy greedy-lpt
//!
//! # Compare every strategy on a score file
//! grade-split compare --file ./exam.txt --graders 3
//!
//! # Overall statistics only
//! grade-split stats --file ./exam.json
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "grade-split",
    about = "Distribute scored questions fairly across graders",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (CLI arguments override it).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign questions to graders and print per-grader tables and statistics.
    Distribute {
        #[command(flatten)]
        input: commands::ScoreInput,

        #[command(flatten)]
        options: commands::DistributionOptions,

        /// Print the report as JSON instead of tables.
        #[arg(long)]
        json: bool,
    },

    /// Run every strategy on the same scores and compare the balance.
    Compare {
        #[command(flatten)]
        input: commands::ScoreInput,

        #[command(flatten)]
        options: commands::DistributionOptions,
    },

    /// Print overall statistics of a score set.
    Stats {
        #[command(flatten)]
        input: commands::ScoreInput,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Distribute {
            input,
            options,
            json,
        } => commands::distribute::execute(cli.config.as_deref(), input, options, json),
        Commands::Compare { input, options } => {
            commands::compare::execute(cli.config.as_deref(), input, options)
        }
        Commands::Stats { input } => commands::stats::execute(cli.config.as_deref(), input),
    }
}
