// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # distributor
//!
//! Turns raw question scores into a per-grader distribution report.
//!
//! The distributor takes:
//! - A [`DistributorConfig`] (strategy, grader names, display precision),
//!   usually loaded from TOML.
//! - A score set, validated by `score-model`.
//!
//! It partitions the scores with `partition-engine`, attaches the configured
//! grader names, and computes the statistics shown beside each grader's
//! table ([`GroupStats`]) into a serialisable [`DistributionReport`].
//!
//! # Example
//! ```
//! use distributor::{Distributor, DistributorConfig};
//!
//! let d = Distributor::new(DistributorConfig::default()).unwrap();
//! let report = d.distribute_values(vec![10.0, 9.0, 8.0, 7.0, 1.0]).unwrap();
//! assert_eq!(report.group("Grader D").unwrap().stats.sum, 8.0);
//! ```

mod config;
mod error;
mod pipeline;
mod report;
mod stats;

pub use config::DistributorConfig;
pub use error::DistributorError;
pub use pipeline::Distributor;
pub use report::{DistributionReport, GroupReport};
pub use stats::GroupStats;
