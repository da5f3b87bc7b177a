// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capacity growth policy.
//!
//! Capacity starts at [`INITIAL_CAPACITY`] and doubles afterwards, which
//! bounds the total copy work of `n` appends to O(n).

use crate::error::ArrayError;

/// Capacity of the first allocation.
pub const INITIAL_CAPACITY: usize = 8;

/// Decides whether an append needs a larger buffer.
///
/// Returns `Ok(None)` when `len < capacity`, `Ok(Some(new_capacity))` when the
/// buffer must grow, and [`ArrayError::CapacityOverflow`] when doubling would
/// leave `max_len`.
///
/// The `capacity > max_len / 2` check runs before `capacity * 2` is computed,
/// so the multiplication cannot wrap.
///
/// # Example
///
/// ```rust
/// use growable::{next_capacity, ArrayError};
///
/// assert_eq!(next_capacity(0, 0, 100), Ok(Some(8)));
/// assert_eq!(next_capacity(8, 3, 100), Ok(None));
/// assert_eq!(next_capacity(8, 8, 100), Ok(Some(16)));
/// assert_eq!(
///     next_capacity(64, 64, 100),
///     Err(ArrayError::CapacityOverflow { capacity: 64, max_len: 100 })
/// );
/// ```
pub fn next_capacity(
    capacity: usize,
    len: usize,
    max_len: usize,
) -> Result<Option<usize>, ArrayError> {
    debug_assert!(len <= capacity, "len {len} exceeds capacity {capacity}");

    if len < capacity {
        return Ok(None);
    }

    let overflow = ArrayError::CapacityOverflow { capacity, max_len };

    if capacity > max_len / 2 {
        return Err(overflow);
    }

    let new_capacity = if capacity == 0 {
        INITIAL_CAPACITY
    } else {
        capacity * 2
    };

    // Only reachable when max_len < INITIAL_CAPACITY.
    if new_capacity > max_len {
        return Err(overflow);
    }

    Ok(Some(new_capacity))
}
