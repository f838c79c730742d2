// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Score sets: the engine's input.
//!
//! # Type-State Pattern
//!
//! ```text
//! ScoreSet<Loaded>     — raw values as captured, not yet checked.
//!       │  .validate()
//!       ▼
//! ScoreSet<Validated>  — every score finite and non-negative.
//! ```
//!
//! Partition strategies accept only `ScoreSet<Validated>`, so validation
//! happens exactly once at entry and the algorithms never re-check.

use crate::ModelError;
use std::cmp::Ordering;
use std::fmt;

// ── Type-state markers ─────────────────────────────────────────────

/// Marker: scores captured but not validated.
#[derive(Debug, Clone)]
pub struct Loaded;

/// Marker: scores validated and ready for partitioning.
#[derive(Debug, Clone)]
pub struct Validated;

/// Sealed trait for score set states.
pub trait SetState: fmt::Debug + Clone {}
impl SetState for Loaded {}
impl SetState for Validated {}

// ── ScoredItem ─────────────────────────────────────────────────────

/// A single question's score.
///
/// An item has no identity beyond its 0-based position in the input
/// sequence; hosts map the position back to whatever they display.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScoredItem {
    /// Position in the original input sequence.
    pub position: usize,
    /// The score value.
    pub value: f64,
}

impl ScoredItem {
    /// Orders items by descending value; equal values keep ascending position.
    pub fn descending(a: &ScoredItem, b: &ScoredItem) -> Ordering {
        b.value
            .total_cmp(&a.value)
            .then_with(|| a.position.cmp(&b.position))
    }
}

// ── ScoreSet ───────────────────────────────────────────────────────

/// An ordered sequence of scores, one per question.
///
/// The set is never mutated in place. Sorting produces a new view so the
/// caller's display order is preserved.
#[derive(Debug, Clone)]
pub struct ScoreSet<S: SetState = Loaded> {
    items: Vec<ScoredItem>,
    _state: std::marker::PhantomData<S>,
}

// ── Loaded state ───────────────────────────────────────────────────

impl ScoreSet<Loaded> {
    /// Creates a score set from raw values in input order.
    ///
    /// An empty set is allowed: partitioning zero scores yields empty groups.
    pub fn new(values: Vec<f64>) -> Self {
        let items = values
            .into_iter()
            .enumerate()
            .map(|(position, value)| ScoredItem { position, value })
            .collect();
        Self {
            items,
            _state: std::marker::PhantomData,
        }
    }

    /// Validates every score and transitions to the `Validated` state.
    ///
    /// Fails on the first score that is negative, NaN or infinite.
    pub fn validate(self) -> Result<ScoreSet<Validated>, ModelError> {
        if let Some(bad) = self
            .items
            .iter()
            .find(|item| !item.value.is_finite() || item.value < 0.0)
        {
            return Err(ModelError::InvalidScore {
                position: bad.position,
                value: bad.value,
            });
        }

        tracing::debug!("validated score set of {} items", self.items.len());

        Ok(ScoreSet {
            items: self.items,
            _state: std::marker::PhantomData,
        })
    }
}

// ── Validated state ────────────────────────────────────────────────

impl ScoreSet<Validated> {
    /// Returns the number of scores.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set holds no scores.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the items in input order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredItem> {
        self.items.iter()
    }

    /// Returns the item at a given input position.
    pub fn item(&self, position: usize) -> Option<&ScoredItem> {
        self.items.get(position)
    }

    /// Returns the raw values in input order.
    pub fn values(&self) -> Vec<f64> {
        self.items.iter().map(|i| i.value).collect()
    }

    /// Returns the sum of all scores.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.value).sum()
    }

    /// Returns a new view sorted by descending score.
    ///
    /// The sort is stable on position, so equal scores keep their input
    /// order and every strategy built on this view is deterministic.
    pub fn sorted_descending(&self) -> Vec<ScoredItem> {
        let mut sorted = self.items.clone();
        sorted.sort_by(ScoredItem::descending);
        sorted
    }
}

// ── Shared implementations ─────────────────────────────────────────

impl<S: SetState> fmt::Display for ScoreSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item.value)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let set = ScoreSet::new(vec![1.0, 0.0, 2.5]).validate().unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.total(), 3.5);
    }

    #[test]
    fn test_validate_empty_is_valid() {
        let set = ScoreSet::new(vec![]).validate().unwrap();
        assert!(set.is_empty());
        assert_eq!(set.total(), 0.0);
    }

    #[test]
    fn test_validate_negative() {
        let err = ScoreSet::new(vec![1.0, -0.5]).validate().unwrap_err();
        assert!(matches!(err, ModelError::InvalidScore { position: 1, .. }));
    }

    #[test]
    fn test_validate_nan_and_infinite() {
        assert!(ScoreSet::new(vec![f64::NAN]).validate().is_err());
        assert!(ScoreSet::new(vec![1.0, f64::INFINITY]).validate().is_err());
        assert!(ScoreSet::new(vec![f64::NEG_INFINITY]).validate().is_err());
    }

    #[test]
    fn test_positions_follow_input_order() {
        let set = ScoreSet::new(vec![3.0, 1.0, 2.0]).validate().unwrap();
        let positions: Vec<_> = set.iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(set.item(2).unwrap().value, 2.0);
        assert!(set.item(3).is_none());
    }

    #[test]
    fn test_sorted_descending_is_a_new_view() {
        let set = ScoreSet::new(vec![1.0, 3.0, 2.0]).validate().unwrap();
        let sorted = set.sorted_descending();
        let values: Vec<_> = sorted.iter().map(|i| i.value).collect();
        assert_eq!(values, vec![3.0, 2.0, 1.0]);
        // Input order untouched.
        assert_eq!(set.values(), vec![1.0, 3.0, 2.0]);
    }

    #[test]
    fn test_sorted_descending_ties_keep_position() {
        let set = ScoreSet::new(vec![5.0, 7.0, 5.0, 5.0]).validate().unwrap();
        let positions: Vec<_> = set.sorted_descending().iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_display() {
        let set = ScoreSet::new(vec![1.5, 2.0]);
        assert_eq!(format!("{set}"), "[1.5, 2]");
    }
}
