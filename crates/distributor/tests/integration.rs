// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: end-to-end distribution pipeline.
//!
//! These tests exercise the complete flow from score file and TOML config →
//! validation → partitioning → report, proving that the three crates
//! compose correctly.

use distributor::{Distributor, DistributorConfig, DistributorError, GroupStats};
use partition_engine::StrategyKind;
use proptest::prelude::*;
use score_model::{ScoreLoader, ScoreSet};
use std::io::Write;

// ── Helpers ────────────────────────────────────────────────────

fn distributor(strategy: StrategyKind) -> Distributor {
    Distributor::new(DistributorConfig {
        strategy: strategy.to_string(),
        ..Default::default()
    })
    .unwrap()
}

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// ── Full Pipeline Tests ────────────────────────────────────────

#[test]
fn test_end_to_end_from_files() {
    let config_file = write_temp(
        ".toml",
        r#"
strategy = "greedy-lpt"
graders = ["Ana", "Ben", "Cy", "Dee"]
"#,
    );
    let scores_file = write_temp(".txt", "# exam 1\n10\n9\n8\n7\n1\n");

    let config = DistributorConfig::from_file(config_file.path()).unwrap();
    let scores = ScoreLoader::load(scores_file.path()).unwrap();
    let report = Distributor::new(config).unwrap().distribute(&scores).unwrap();

    let sums: Vec<f64> = report.groups.iter().map(|g| g.stats.sum).collect();
    assert_eq!(sums, vec![10.0, 9.0, 8.0, 8.0]);
    assert_eq!(report.group("Dee").unwrap().positions(), vec![3, 4]);
    assert_eq!(report.overall.sum, 35.0);
    assert_eq!(report.overall.mean, 7.0);
}

#[test]
fn test_end_to_end_json_scores() {
    let scores_file = write_temp(".json", r#"{"scores": [5, 5, 5, 5]}"#);
    let scores = ScoreLoader::load(scores_file.path()).unwrap();

    let report = distributor(StrategyKind::ContiguousDp)
        .distribute(&scores)
        .unwrap();
    assert_eq!(report.variance_cost, 0.0);
    assert!(report.groups.iter().all(|g| g.stats.count == 1));
}

#[test]
fn test_contiguous_two_graders_equal_scores() {
    let d = Distributor::new(
        DistributorConfig {
            strategy: "contiguous-dp".into(),
            ..Default::default()
        }
        .with_grader_count(score_model::GroupCount::new(2).unwrap()),
    )
    .unwrap();

    let report = d.distribute_values(vec![5.0, 5.0, 5.0, 5.0]).unwrap();
    assert_eq!(report.variance_cost, 0.0);
    assert_eq!(report.groups.len(), 2);
    // Leftmost split among equal-cost splits.
    assert_eq!(report.groups[0].stats.count, 1);
    assert_eq!(report.groups[1].stats.count, 3);
}

#[test]
fn test_more_graders_than_questions() {
    for kind in StrategyKind::ALL {
        let report = distributor(kind).distribute_values(vec![3.0, 1.0]).unwrap();
        assert_eq!(report.groups.len(), 4, "{kind}");
        let empty: Vec<_> = report
            .groups
            .iter()
            .filter(|g| g.items.is_empty())
            .collect();
        assert_eq!(empty.len(), 2, "{kind}");
        assert!(empty.iter().all(|g| g.stats == GroupStats::default()));
    }
}

#[test]
fn test_no_questions() {
    for kind in StrategyKind::ALL {
        let report = distributor(kind).distribute_values(vec![]).unwrap();
        assert_eq!(report.groups.len(), 4);
        assert_eq!(report.overall, GroupStats::default());
        assert_eq!(report.spread, 0.0);
    }
}

#[test]
fn test_invalid_scores_rejected_before_partitioning() {
    let bad = write_temp(".txt", "3\n-1\n");
    let err = ScoreLoader::load(bad.path()).unwrap_err();
    assert!(err.to_string().contains("position 1"));

    let err = distributor(StrategyKind::GreedyLpt)
        .distribute_values(vec![f64::NAN])
        .unwrap_err();
    assert!(matches!(err, DistributorError::ModelError(_)));
}

#[test]
fn test_compare_greedy_balances_best() {
    let scores = ScoreSet::new(vec![9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 1.0])
        .validate()
        .unwrap();
    let reports = distributor(StrategyKind::GreedyLpt).compare(&scores).unwrap();

    let spread = |name: &str| {
        reports
            .iter()
            .find(|r| r.strategy == name)
            .map(|r| r.spread)
            .unwrap()
    };
    assert!(spread("greedy-lpt") <= spread("round-robin"));
    assert!(spread("greedy-lpt") <= spread("contiguous-dp"));

    let cost = |name: &str| {
        reports
            .iter()
            .find(|r| r.strategy == name)
            .map(|r| r.variance_cost)
            .unwrap()
    };
    assert!(cost("contiguous-dp") <= cost("round-robin"));
    assert!(cost("contiguous-dp") <= cost("greedy-lpt"));
}

#[test]
fn test_report_json_roundtrips_through_value() {
    let report = distributor(StrategyKind::RoundRobin)
        .distribute_values(vec![4.0, 2.0, 6.0])
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(value["strategy"], "round-robin");
    assert_eq!(value["overall"]["sum"], 12.0);
    assert_eq!(value["groups"][0]["items"][0]["value"], 6.0);
}

#[test]
fn test_config_toml_roundtrip() {
    let config = DistributorConfig::default();
    let toml = config.to_toml().unwrap();
    let back = DistributorConfig::from_toml(&toml).unwrap();
    assert_eq!(back.graders, config.graders);
    assert_eq!(back.strategy, config.strategy);
}

// ── Properties ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn group_loads_add_up_to_total(
        values in prop::collection::vec(0.0f64..100.0, 0..30),
        kind in prop_oneof![
            Just(StrategyKind::RoundRobin),
            Just(StrategyKind::ContiguousDp),
            Just(StrategyKind::GreedyLpt),
        ],
    ) {
        let report = distributor(kind).distribute_values(values.clone()).unwrap();
        let loads: f64 = report.groups.iter().map(|g| g.stats.sum).sum();
        let counts: usize = report.groups.iter().map(|g| g.stats.count).sum();
        prop_assert!((loads - report.overall.sum).abs() < 1e-6);
        prop_assert_eq!(counts, values.len());
    }

    #[test]
    fn stats_are_ordered(values in prop::collection::vec(0.0f64..100.0, 1..30)) {
        let s = GroupStats::from_values(&values);
        prop_assert!(s.min <= s.median && s.median <= s.max);
        prop_assert!(s.min <= s.mean + 1e-9 && s.mean <= s.max + 1e-9);
        prop_assert!(s.variance >= 0.0);
        prop_assert!((s.range - (s.max - s.min)).abs() < 1e-12);
    }
}
