// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable array with doubling growth and a sticky out-of-memory flag.
//!
//! `GrowableArray<T>` owns a contiguous buffer whose capacity starts at 8 and
//! doubles when full. Appends never abort and never panic on allocation
//! failure: a failed append leaves the array exactly as it was and sets a
//! flag the caller polls with [`GrowableArray::oom`].
//!
//! # Core Guarantees
//!
//! - **Bounded growth**: capacity follows 0 → 8 → 16 → 32 ... and growth is
//!   refused before `capacity * 2` could exceed the configured maximum length.
//! - **Atomic appends**: a failed append changes neither length, capacity nor contents.
//! - **Checked preconditions**: out-of-range indices and operations on an empty
//!   array return [`ArrayError`] instead of invoking undefined behaviour.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use growable::{ArrayError, IntArray};
//!
//! fn example() -> Result<(), ArrayError> {
//!     let mut array = IntArray::new();
//!
//!     for i in 0..9 {
//!         array.add(i);
//!         assert!(!array.oom());
//!     }
//!     assert_eq!(array.capacity(), 16);
//!
//!     assert_eq!(array.del(0)?, 0);
//!     assert_eq!(array.del_unordered(0)?, 1);
//!     assert_eq!(*array.at(0)?, 8);
//!     assert_eq!(*array.last()?, 7);
//!
//!     assert!(array.at(100).is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Polling the Failure Flag
//!
//! ```rust
//! use growable::{ArrayConfig, GrowableArray};
//!
//! // Room for 8 u64 elements at most.
//! let mut array = GrowableArray::with_config(ArrayConfig::new().with_max_bytes(64));
//!
//! for i in 0..9u64 {
//!     array.add(i);
//! }
//!
//! // The ninth append could not grow the buffer.
//! assert!(array.oom());
//! assert_eq!(array.len(), 8);
//! assert_eq!(array.capacity(), 8);
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! growable = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use `ArrayBehaviour` to exercise the failure paths of your code.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod aliases;
mod array;
mod config;
mod error;
mod growth;

#[cfg(any(test, feature = "test_utils"))]
mod behaviour;

#[cfg(test)]
mod tests;

pub use aliases::{
    DoubleArray, IntArray, LongArray, PtrArray, StrArray, U32Array, U64Array, UintArray, UlongArray,
};
pub use array::GrowableArray;
pub use config::{ArrayConfig, DEFAULT_MAX_BYTES};
pub use error::ArrayError;
pub use growth::{INITIAL_CAPACITY, next_capacity};

#[cfg(any(test, feature = "test_utils"))]
pub use behaviour::ArrayBehaviour;
