// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{ArrayConfig, DEFAULT_MAX_BYTES, GrowableArray};

#[test]
fn test_default_is_platform_limit() {
    let config = ArrayConfig::default();

    assert_eq!(config, ArrayConfig::new());
    assert_eq!(config.max_bytes(), DEFAULT_MAX_BYTES);
    assert_eq!(DEFAULT_MAX_BYTES, isize::MAX as usize);
}

#[test]
fn test_max_len_divides_by_element_size() {
    let config = ArrayConfig::new().with_max_bytes(100);

    assert_eq!(config.max_len::<u8>(), 100);
    assert_eq!(config.max_len::<u32>(), 25);
    assert_eq!(config.max_len::<u64>(), 12);
    assert_eq!(config.max_len::<[u8; 200]>(), 0);
}

#[test]
fn test_max_len_zero_sized() {
    let config = ArrayConfig::new().with_max_bytes(0);

    assert_eq!(config.max_len::<()>(), usize::MAX);
}

#[test]
fn test_array_reports_config() {
    let config = ArrayConfig::new().with_max_bytes(64);
    let array: GrowableArray<u16> = GrowableArray::with_config(config);

    assert_eq!(array.config(), &config);
    assert_eq!(array.max_len(), 32);
}
