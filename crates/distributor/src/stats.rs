// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-group descriptive statistics.
//!
//! [`GroupStats`] is what the grading form shows under each grader's
//! table: total, mean, median, range, standard deviation and variance.
//! All of it is derived from a plain list of scores, so it can be computed
//! for any group of an assignment or for the whole score set.

use partition_engine::population_variance;

/// Descriptive statistics over a list of scores.
///
/// An empty list yields all zeros rather than NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize)]
pub struct GroupStats {
    /// Number of scores.
    pub count: usize,
    /// Sum of scores (the grader's load).
    pub sum: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median; the mean of the two middle scores for even counts.
    pub median: f64,
    /// Smallest score.
    pub min: f64,
    /// Largest score.
    pub max: f64,
    /// `max - min`.
    pub range: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Population variance.
    pub variance: f64,
}

impl GroupStats {
    /// Computes statistics for a list of scores.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let count = values.len();
        let sum: f64 = values.iter().sum();
        let mean = sum / count as f64;

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        let min = sorted[0];
        let max = sorted[count - 1];
        let variance = population_variance(values);

        Self {
            count,
            sum,
            mean,
            median,
            min,
            max,
            range: max - min,
            std_dev: variance.sqrt(),
            variance,
        }
    }

    /// Returns a one-line summary with `precision` decimals.
    pub fn summary(&self, precision: usize) -> String {
        format!(
            "{} scores, sum {:.p$}, mean {:.p$}, median {:.p$}, range {:.p$}–{:.p$}, \
             std dev {:.p$}, variance {:.p$}",
            self.count,
            self.sum,
            self.mean,
            self.median,
            self.min,
            self.max,
            self.std_dev,
            self.variance,
            p = precision,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_all_zero() {
        let s = GroupStats::from_values(&[]);
        assert_eq!(s, GroupStats::default());
        assert_eq!(s.mean, 0.0);
        assert_eq!(s.std_dev, 0.0);
    }

    #[test]
    fn test_single_value() {
        let s = GroupStats::from_values(&[7.5]);
        assert_eq!(s.count, 1);
        assert_eq!(s.median, 7.5);
        assert_eq!(s.range, 0.0);
        assert_eq!(s.variance, 0.0);
    }

    #[test]
    fn test_odd_count() {
        let s = GroupStats::from_values(&[3.0, 1.0, 2.0]);
        assert_eq!(s.sum, 6.0);
        assert_eq!(s.mean, 2.0);
        assert_eq!(s.median, 2.0);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 3.0);
        assert_eq!(s.range, 2.0);
        assert!((s.variance - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_even_count_median() {
        let s = GroupStats::from_values(&[7.0, 1.0, 4.0, 10.0]);
        assert_eq!(s.median, 5.5);
    }

    #[test]
    fn test_std_dev_is_sqrt_variance() {
        let s = GroupStats::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((s.variance - 4.0).abs() < 1e-12);
        assert!((s.std_dev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_summary_precision() {
        let s = GroupStats::from_values(&[1.0, 2.0]);
        let text = s.summary(1);
        assert!(text.contains("2 scores"));
        assert!(text.contains("sum 3.0"));
        assert!(text.contains("median 1.5"));
    }
}
