// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Array limits.

/// Largest allocation size Rust permits, in bytes.
pub const DEFAULT_MAX_BYTES: usize = isize::MAX as usize;

/// Configuration applied to a [`GrowableArray`](crate::GrowableArray) at construction.
///
/// # Example
///
/// ```rust
/// use growable::ArrayConfig;
///
/// let config = ArrayConfig::new().with_max_bytes(64);
/// assert_eq!(config.max_len::<u32>(), 16);
/// assert_eq!(config.max_len::<()>(), usize::MAX);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ArrayConfig {
    max_bytes: usize,
}

impl ArrayConfig {
    /// Creates a configuration bounded only by the platform limit.
    pub const fn new() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }

    /// Sets the upper bound, in bytes, for the element storage.
    pub const fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Returns the configured byte limit.
    pub const fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Maximum number of `T` elements an array under this configuration may hold.
    ///
    /// Zero-sized types never consume storage, so their limit is `usize::MAX`.
    pub const fn max_len<T>(&self) -> usize {
        match core::mem::size_of::<T>() {
            0 => usize::MAX,
            size => self.max_bytes / size,
        }
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new()
    }
}
