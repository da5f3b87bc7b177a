// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! End-to-end scenarios through the public API.

use growable::{ArrayBehaviour, ArrayError, GrowableArray, IntArray};

fn letters() -> GrowableArray<char> {
    "abcde".chars().collect()
}

#[test]
fn nine_appends_grow_zero_eight_sixteen() {
    let mut array = IntArray::new();
    let mut capacities = vec![array.capacity()];

    for i in 0..9 {
        array.add(i);
        assert!(!array.oom(), "append {i} failed");
        if capacities.last() != Some(&array.capacity()) {
            capacities.push(array.capacity());
        }
    }

    assert_eq!(capacities, [0, 8, 16]);
    assert_eq!(array.len(), 9);
}

#[test]
fn unordered_delete_of_single_element_is_pop() {
    let mut array = IntArray::new();
    array.add(42);

    assert_eq!(array.del_unordered(0), Ok(42));
    assert_eq!(array.len(), 0);
}

#[test]
fn ordered_delete_from_five() {
    let mut array = letters();

    array.del(1).expect("Failed to del(1)");

    assert_eq!(array.as_slice(), ['a', 'c', 'd', 'e']);
    assert_eq!(array.len(), 4);
}

#[test]
fn unordered_delete_from_five() {
    let mut array = letters();

    array.del_unordered(1).expect("Failed to del_unordered(1)");

    assert_eq!(array.as_slice(), ['a', 'e', 'c', 'd']);
    assert_eq!(array.len(), 4);
}

#[test]
fn allocation_failure_growing_past_eight() {
    let mut array = IntArray::new();
    for i in 0..8 {
        array.add(i);
    }
    array.change_behaviour(ArrayBehaviour::FailAtGrowFrom(8));

    assert_eq!(
        array.try_add(8),
        Err(ArrayError::AllocFailed { new_capacity: 16 })
    );
    assert!(array.oom());
    assert_eq!(array.len(), 8);
    assert_eq!(array.capacity(), 8);
    assert_eq!(array.as_slice(), [0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn contract_violations_are_reported() {
    let mut array = IntArray::new();

    assert_eq!(array.last(), Err(ArrayError::Empty));
    assert_eq!(array.del_last(), Err(ArrayError::Empty));
    assert_eq!(
        array.at(0),
        Err(ArrayError::IndexOutOfRange { index: 0, len: 0 })
    );

    let err = array.del(3).expect_err("del(3) on an empty array must fail");
    assert!(err.is_contract_violation());
}
