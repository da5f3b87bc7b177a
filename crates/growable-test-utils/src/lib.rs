// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for growable.
//!
//! Plain `Vec`-based models of the array operations, used as oracles by the
//! unit and property tests.
//!
//! ## License
//!
//! GPL-3.0-only

mod models;
mod permutations;

pub use models::{capacity_after, capacity_steps, ordered_delete, unordered_delete};
pub use permutations::{apply_permutation, index_permutations};
