// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Ready-made instantiations for common element types.

use core::ffi::c_void;

use crate::array::GrowableArray;

/// Array of `i32`.
pub type IntArray = GrowableArray<i32>;
/// Array of `u32`.
pub type UintArray = GrowableArray<u32>;
/// Array of `i64`.
pub type LongArray = GrowableArray<i64>;
/// Array of `u64`.
pub type UlongArray = GrowableArray<u64>;
/// Array of `u32`, named by width.
pub type U32Array = GrowableArray<u32>;
/// Array of `u64`, named by width.
pub type U64Array = GrowableArray<u64>;
/// Array of `f64`. Sort with `sort_by(f64::total_cmp)`.
pub type DoubleArray = GrowableArray<f64>;
/// Array of borrowed strings.
pub type StrArray<'a> = GrowableArray<&'a str>;
/// Array of untyped pointers. The array never dereferences them.
pub type PtrArray = GrowableArray<*mut c_void>;
