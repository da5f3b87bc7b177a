// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{ArrayError, INITIAL_CAPACITY, next_capacity};

// =============================================================================
// next_capacity()
// =============================================================================

#[test]
fn test_no_growth_below_capacity() {
    assert_eq!(next_capacity(8, 0, usize::MAX), Ok(None));
    assert_eq!(next_capacity(8, 7, usize::MAX), Ok(None));
    assert_eq!(next_capacity(1024, 513, usize::MAX), Ok(None));
}

#[test]
fn test_first_growth_is_initial_capacity() {
    assert_eq!(INITIAL_CAPACITY, 8);
    assert_eq!(next_capacity(0, 0, usize::MAX), Ok(Some(INITIAL_CAPACITY)));
}

#[test]
fn test_doubles_when_full() {
    assert_eq!(next_capacity(8, 8, usize::MAX), Ok(Some(16)));
    assert_eq!(next_capacity(16, 16, usize::MAX), Ok(Some(32)));
    assert_eq!(next_capacity(4096, 4096, usize::MAX), Ok(Some(8192)));
}

#[test]
fn test_refuses_above_half_of_max_len() {
    assert_eq!(next_capacity(16, 16, 32), Ok(Some(32)));
    assert_eq!(
        next_capacity(32, 32, 63),
        Err(ArrayError::CapacityOverflow {
            capacity: 32,
            max_len: 63
        })
    );
}

#[test]
fn test_doubling_never_wraps() {
    let capacity = usize::MAX / 2 + 1;

    assert_eq!(
        next_capacity(capacity, capacity, usize::MAX),
        Err(ArrayError::CapacityOverflow {
            capacity,
            max_len: usize::MAX
        })
    );

    let capacity = usize::MAX / 2;
    assert_eq!(
        next_capacity(capacity, capacity, usize::MAX),
        Ok(Some(usize::MAX - 1))
    );
}

#[test]
fn test_max_len_below_initial_capacity() {
    assert_eq!(
        next_capacity(0, 0, 7),
        Err(ArrayError::CapacityOverflow {
            capacity: 0,
            max_len: 7
        })
    );
    assert_eq!(
        next_capacity(0, 0, 0),
        Err(ArrayError::CapacityOverflow {
            capacity: 0,
            max_len: 0
        })
    );
    assert_eq!(next_capacity(0, 0, 8), Ok(Some(8)));
}
