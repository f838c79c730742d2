// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # score-model
//!
//! The data model shared by the partition engine and its hosts:
//!
//! - [`ScoredItem`] — one question's score together with its position in the
//!   caller's input sequence.
//! - [`ScoreSet`] — the ordered input, with a **type-state pattern**
//!   (`Loaded` → `Validated`). Only validated sets reach the engine.
//! - [`GroupCount`] and [`GroupLabel`] — how many graders there are and what
//!   they are called.
//! - [`ScoreLoader`] — reads scores from JSON, plain-text files or inline lists.
//!
//! # Example
//! ```
//! use score_model::{GroupCount, ScoreSet};
//!
//! let scores = ScoreSet::new(vec![10.0, 9.0, 8.0]).validate().unwrap();
//! assert_eq!(scores.len(), 3);
//! assert_eq!(scores.total(), 27.0);
//!
//! let graders = GroupCount::new(4).unwrap();
//! assert_eq!(graders.get(), 4);
//! ```

mod error;
mod group;
mod loader;
pub mod score;

pub use error::ModelError;
pub use group::{GroupCount, GroupLabel};
pub use loader::ScoreLoader;
pub use score::{ScoreSet, ScoredItem};
