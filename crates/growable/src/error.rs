// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for growable.

use thiserror::Error;

/// Error type for `GrowableArray` operations.
///
/// Append failures are also recorded in the array's sticky flag
/// (see [`GrowableArray::oom`](crate::GrowableArray::oom)).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ArrayError {
    /// Doubling the capacity would exceed the maximum element count.
    #[error("capacity overflow: cannot grow capacity {capacity} within max_len {max_len}")]
    CapacityOverflow {
        /// Capacity at the time of the refused growth.
        capacity: usize,
        /// Maximum element count for this array.
        max_len: usize,
    },

    /// The allocator could not provide the requested buffer.
    #[error("allocation failed: could not grow buffer to {new_capacity} elements")]
    AllocFailed {
        /// Capacity that was requested.
        new_capacity: usize,
    },

    /// Index is not below the current length.
    #[error("index out of range: index {index} but len is {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length at the time of the request.
        len: usize,
    },

    /// Operation requires at least one element.
    #[error("array is empty")]
    Empty,
}

impl ArrayError {
    /// Returns `true` for errors raised by a failed append
    /// (`CapacityOverflow` or `AllocFailed`).
    pub fn is_overflow_or_oom(&self) -> bool {
        matches!(
            self,
            Self::CapacityOverflow { .. } | Self::AllocFailed { .. }
        )
    }

    /// Returns `true` for broken caller preconditions
    /// (`IndexOutOfRange` or `Empty`).
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. } | Self::Empty)
    }
}
