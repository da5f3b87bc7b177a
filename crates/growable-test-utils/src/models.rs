// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Expected contents after removing `index` while keeping order.
///
/// # Panics
///
/// Panics if `index >= items.len()`.
pub fn ordered_delete<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    assert!(index < items.len(), "index {index} out of range");

    items[..index]
        .iter()
        .chain(items[index + 1..].iter())
        .cloned()
        .collect()
}

/// Expected contents after removing `index` by moving the last element into it.
///
/// # Panics
///
/// Panics if `index >= items.len()`.
pub fn unordered_delete<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    assert!(index < items.len(), "index {index} out of range");

    let mut out = items[..items.len() - 1].to_vec();
    if index < out.len() {
        out[index] = items[items.len() - 1].clone();
    }

    out
}

/// Expected tracked capacity after `appends` successful appends on a fresh array.
pub fn capacity_after(appends: usize) -> usize {
    if appends == 0 {
        return 0;
    }

    let mut capacity = 8;
    while capacity < appends {
        capacity *= 2;
    }

    capacity
}

/// Distinct capacities a fresh array passes through while receiving `appends`
/// appends, starting with 0.
///
/// `capacity_steps(9)` is `[0, 8, 16]`.
pub fn capacity_steps(appends: usize) -> Vec<usize> {
    let mut steps = vec![0];

    for n in 1..=appends {
        let capacity = capacity_after(n);
        if steps.last() != Some(&capacity) {
            steps.push(capacity);
        }
    }

    steps
}
