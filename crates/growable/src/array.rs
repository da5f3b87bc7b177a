// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::{self, Vec};
use core::cmp::Ordering;
use core::ops::{Deref, DerefMut};
use core::slice;

#[cfg(any(test, feature = "test_utils"))]
use crate::behaviour::ArrayBehaviour;
use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::growth::next_capacity;

/// Growable array with doubling growth and a sticky out-of-memory flag.
///
/// Capacity starts at 0, becomes 8 on the first append and doubles whenever
/// the array is full. A failed append leaves the array untouched and sets a
/// flag that stays set until the next successful append, `clear()` or
/// `term()`.
///
/// # Example
///
/// ```rust
/// use growable::GrowableArray;
///
/// let mut array = GrowableArray::new();
/// for i in 0..9 {
///     array.add(i);
///     assert!(!array.oom());
/// }
///
/// assert_eq!(array.len(), 9);
/// assert_eq!(array.capacity(), 16);
/// ```
pub struct GrowableArray<T> {
    inner: Vec<T>,
    capacity: usize,
    oom: bool,
    config: ArrayConfig,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: ArrayBehaviour,
}

impl<T> GrowableArray<T> {
    /// Creates an empty array with zero capacity. Does not allocate.
    pub const fn new() -> Self {
        Self::with_config(ArrayConfig::new())
    }

    /// Creates an empty array bounded by `config`. Does not allocate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use growable::{ArrayConfig, ArrayError, GrowableArray};
    ///
    /// // 16 u32 elements at most.
    /// let mut array = GrowableArray::with_config(ArrayConfig::new().with_max_bytes(64));
    /// for i in 0..16u32 {
    ///     array.add(i);
    /// }
    ///
    /// assert_eq!(
    ///     array.try_add(16),
    ///     Err(ArrayError::CapacityOverflow { capacity: 16, max_len: 16 })
    /// );
    /// assert!(array.oom());
    /// assert_eq!(array.len(), 16);
    /// ```
    pub const fn with_config(config: ArrayConfig) -> Self {
        Self {
            inner: Vec::new(),
            capacity: 0,
            oom: false,
            config,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: ArrayBehaviour::None,
        }
    }

    /// Returns the configuration this array was created with.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Maximum number of elements this array may ever hold.
    pub fn max_len(&self) -> usize {
        self.config.max_len::<T>()
    }

    /// Returns the number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the array contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the tracked capacity.
    ///
    /// This is the value the growth policy works from. After `clear()` it is 0
    /// even though the buffer is still allocated (see [`allocated`](Self::allocated)).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of slots physically held by the buffer.
    ///
    /// Always at least [`capacity`](Self::capacity).
    #[inline]
    pub fn allocated(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns `true` if the last append failed.
    ///
    /// Only `add`/`try_add`, `clear` and `term` change this flag.
    #[inline]
    pub fn oom(&self) -> bool {
        self.oom
    }

    #[inline(always)]
    fn maybe_grow(&mut self) -> Result<(), ArrayError> {
        if self.len() < self.capacity {
            return Ok(());
        }

        self.grow()
    }

    /// Asks the buffer for the next capacity step.
    ///
    /// `try_reserve_exact` leaves the buffer untouched on failure, so neither
    /// `capacity` nor the contents change when this returns an error. A
    /// buffer retained by `clear()` that is already large enough is reused
    /// without reallocating.
    #[cold]
    #[inline(never)]
    fn grow(&mut self) -> Result<(), ArrayError> {
        let Some(new_capacity) = next_capacity(self.capacity, self.len(), self.max_len())? else {
            return Ok(());
        };

        #[cfg(any(test, feature = "test_utils"))]
        if self.behaviour.fails_growth_from(self.capacity) {
            return Err(ArrayError::AllocFailed { new_capacity });
        }

        self.inner
            .try_reserve_exact(new_capacity - self.len())
            .map_err(|_| ArrayError::AllocFailed { new_capacity })?;
        self.capacity = new_capacity;

        Ok(())
    }

    /// Appends a value, reporting failure through the return value and the
    /// [`oom`](Self::oom) flag.
    ///
    /// On failure the array is left exactly as it was and `value` is dropped.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::CapacityOverflow`] if doubling would exceed [`max_len`](Self::max_len).
    /// - [`ArrayError::AllocFailed`] if the allocator refused the new buffer.
    pub fn try_add(&mut self, value: T) -> Result<(), ArrayError> {
        if let Err(err) = self.maybe_grow() {
            self.oom = true;
            return Err(err);
        }

        self.oom = false;
        self.inner.push(value);

        Ok(())
    }

    /// Appends a value. Check [`oom`](Self::oom) afterwards to detect failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use growable::GrowableArray;
    ///
    /// let mut array = GrowableArray::new();
    /// array.add("a");
    /// array.add("b");
    ///
    /// assert!(!array.oom());
    /// assert_eq!(array.as_slice(), &["a", "b"]);
    /// ```
    #[inline]
    pub fn add(&mut self, value: T) {
        let _ = self.try_add(value);
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index >= self.len() {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        Ok(())
    }

    /// Removes and returns the element at `index`, shifting every later
    /// element one slot to the left. O(len - index).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use growable::{ArrayError, GrowableArray};
    ///
    /// fn example() -> Result<(), ArrayError> {
    ///     let mut array: GrowableArray<char> = "abcde".chars().collect();
    ///     assert_eq!(array.del(1)?, 'b');
    ///     assert_eq!(array.as_slice(), &['a', 'c', 'd', 'e']);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn del(&mut self, index: usize) -> Result<T, ArrayError> {
        self.check_index(index)?;
        Ok(self.inner.remove(index))
    }

    /// Removes and returns the element at `index`, moving the last element
    /// into its slot. O(1), but does not preserve order.
    ///
    /// Deleting the last index is the same as [`del_last`](Self::del_last).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use growable::{ArrayError, GrowableArray};
    ///
    /// fn example() -> Result<(), ArrayError> {
    ///     let mut array: GrowableArray<char> = "abcde".chars().collect();
    ///     assert_eq!(array.del_unordered(1)?, 'b');
    ///     assert_eq!(array.as_slice(), &['a', 'e', 'c', 'd']);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn del_unordered(&mut self, index: usize) -> Result<T, ArrayError> {
        self.check_index(index)?;
        Ok(self.inner.swap_remove(index))
    }

    /// Removes and returns the last element. The buffer is not resized.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Empty`] if the array has no elements.
    pub fn del_last(&mut self) -> Result<T, ArrayError> {
        self.inner.pop().ok_or(ArrayError::Empty)
    }

    /// Drops every element and resets the tracked capacity to 0 without
    /// releasing the buffer.
    ///
    /// The next append walks the growth steps from the start (0 → 8 → 16 ...)
    /// and reuses the retained buffer while it is large enough.
    ///
    /// # Example
    ///
    /// ```rust
    /// use growable::GrowableArray;
    ///
    /// let mut array: GrowableArray<u64> = (0..20).collect();
    /// assert_eq!(array.capacity(), 32);
    ///
    /// array.clear();
    /// assert_eq!(array.capacity(), 0);
    /// assert!(array.allocated() >= 32);
    ///
    /// array.add(1);
    /// assert_eq!(array.capacity(), 8);
    /// ```
    pub fn clear(&mut self) {
        self.inner.clear();
        self.capacity = 0;
        self.oom = false;
    }

    /// Releases the buffer and returns the array to its freshly created state.
    ///
    /// The configuration is kept. Dropping the array releases the buffer too,
    /// so calling this is only needed to reuse the value.
    pub fn term(&mut self) {
        self.inner = Vec::new();
        self.capacity = 0;
        self.oom = false;
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        self.check_index(index)?;
        Ok(&self.inner[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        self.check_index(index)?;
        Ok(&mut self.inner[index])
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Empty`] if the array has no elements.
    pub fn last(&self) -> Result<&T, ArrayError> {
        self.inner.last().ok_or(ArrayError::Empty)
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Empty`] if the array has no elements.
    pub fn last_mut(&mut self) -> Result<&mut T, ArrayError> {
        self.inner.last_mut().ok_or(ArrayError::Empty)
    }

    /// Returns an iterator over the elements in index order.
    ///
    /// The array cannot be mutated while the iterator is alive.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Returns an iterator that allows modifying each element in place.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.inner.iter_mut()
    }

    /// Sorts the elements in place with a three-way comparator.
    ///
    /// The sort is unstable: equal elements may be reordered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use growable::DoubleArray;
    ///
    /// let mut array: DoubleArray = [2.5, -1.0, 0.0].into_iter().collect();
    /// array.sort_by(f64::total_cmp);
    /// assert_eq!(array.as_slice(), &[-1.0, 0.0, 2.5]);
    /// ```
    pub fn sort_by<F>(&mut self, cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.inner.sort_unstable_by(cmp);
    }

    /// Sorts the elements in place in ascending order. Unstable.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.inner.sort_unstable();
    }

    /// Returns an immutable slice view of the array.
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Returns a mutable slice view of the array.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.inner
    }

    /// Changes the test behaviour for this array.
    ///
    /// This is only available with the `test_utils` feature and allows injecting
    /// allocation failures for testing error handling paths.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: ArrayBehaviour) {
        self.behaviour = behaviour;
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        let mut inner = Vec::with_capacity(self.capacity);
        inner.extend_from_slice(&self.inner);

        Self {
            inner,
            capacity: self.capacity,
            oom: self.oom,
            config: self.config,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: self.behaviour,
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GrowableArray")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("oom", &self.oom)
            .field("elements", &self.inner)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        // Bookkeeping (capacity, flag) is not part of the value.
        self.inner == other.inner
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T> Deref for GrowableArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for GrowableArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    /// Appends every item with [`add`](GrowableArray::add); the flag reflects
    /// the last append.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
