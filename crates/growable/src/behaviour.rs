// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Test behaviour for injecting allocation failures into `GrowableArray`.
///
/// This is only available with the `test_utils` feature and allows users
/// to test how their code reacts to a failed append without exhausting memory.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// use growable::{ArrayBehaviour, ArrayError, GrowableArray};
///
/// let mut array = GrowableArray::new();
/// array.change_behaviour(ArrayBehaviour::FailAtGrow);
///
/// // The first append needs an allocation, so it fails.
/// assert_eq!(array.try_add(1u8), Err(ArrayError::AllocFailed { new_capacity: 8 }));
/// assert!(array.oom());
///
/// array.change_behaviour(ArrayBehaviour::None);
/// array.add(1u8);
/// assert!(!array.oom());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every growth request fails with `AllocFailed`.
    FailAtGrow,
    /// Growth requests fail with `AllocFailed` while the tracked capacity
    /// equals the given value.
    FailAtGrowFrom(usize),
}

impl ArrayBehaviour {
    pub(crate) fn fails_growth_from(&self, capacity: usize) -> bool {
        match self {
            Self::None => false,
            Self::FailAtGrow => true,
            Self::FailAtGrowFrom(from) => *from == capacity,
        }
    }
}
