// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Returns every permutation of `0..n` in lexicographic order.
///
/// Intended for small `n`: the result has `n!` entries.
pub fn index_permutations(n: usize) -> Vec<Vec<usize>> {
    let mut current: Vec<usize> = (0..n).collect();
    let mut out = vec![current.clone()];

    // Narayana's next-permutation step.
    loop {
        let Some(i) = (1..n).rev().find(|&i| current[i - 1] < current[i]) else {
            return out;
        };
        let pivot = i - 1;
        let Some(j) = (i..n).rev().find(|&j| current[j] > current[pivot]) else {
            return out;
        };

        current.swap(pivot, j);
        current[i..].reverse();
        out.push(current.clone());
    }
}

/// Reorders `items` so that `items[k]` becomes the element previously at
/// `permutation[k]`.
///
/// # Panics
///
/// Panics if `permutation` is not a permutation of `0..items.len()`.
pub fn apply_permutation<T: Clone>(items: &mut [T], permutation: &[usize]) {
    assert_eq!(items.len(), permutation.len(), "length mismatch");

    let original = items.to_vec();
    for (slot, &from) in items.iter_mut().zip(permutation) {
        *slot = original[from].clone();
    }
}
