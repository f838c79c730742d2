// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Group counts and labels.
//!
//! A group is one grader. Groups are identified by index; the label adds a
//! human-readable name that hosts display ("Grader A", "Grader B", ...).

use crate::ModelError;
use std::fmt;

/// The number of groups to partition into. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct GroupCount(usize);

impl GroupCount {
    /// The grading team size used by the distribution form.
    pub const GRADERS: GroupCount = GroupCount(4);

    /// Creates a group count, rejecting zero.
    pub fn new(count: usize) -> Result<Self, ModelError> {
        if count == 0 {
            return Err(ModelError::InvalidGroupCount(count));
        }
        Ok(Self(count))
    }

    /// Returns the number of groups.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for GroupCount {
    fn default() -> Self {
        Self::GRADERS
    }
}

impl TryFrom<usize> for GroupCount {
    type Error = ModelError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GroupCount> for usize {
    fn from(count: GroupCount) -> usize {
        count.0
    }
}

impl fmt::Display for GroupCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stable group label: index plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GroupLabel {
    /// 0-based group index. Strategies fill groups in index order.
    pub index: usize,
    /// Display name.
    pub name: String,
}

impl GroupLabel {
    /// Creates a label with an explicit name.
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }

    /// Creates the default label for a group index: `"Grader A"`, `"Grader B"`, ...
    ///
    /// Past `Z` the suffix continues spreadsheet-style: `AA`, `AB`, ...
    pub fn grader(index: usize) -> Self {
        Self::new(index, format!("Grader {}", letter_suffix(index)))
    }

    /// Builds the default labels for `count` groups.
    pub fn default_labels(count: GroupCount) -> Vec<GroupLabel> {
        (0..count.get()).map(Self::grader).collect()
    }

    /// Builds labels from custom names, one per group.
    pub fn from_names<I, N>(names: I) -> Vec<GroupLabel>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        names
            .into_iter()
            .enumerate()
            .map(|(index, name)| Self::new(index, name))
            .collect()
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Converts a 0-based index into `A`, `B`, ..., `Z`, `AA`, `AB`, ...
fn letter_suffix(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}
