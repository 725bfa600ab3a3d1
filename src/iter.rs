// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`FixedVector`](crate::FixedVector).
//!
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Elements it never yields are
//!   dropped with the iterator.
//! - `&FixedVector` and `&mut FixedVector` iterate as slices.
//! - `FromIterator` panics past capacity; see
//!   [`FixedVector::try_from_iter`](crate::FixedVector::try_from_iter).

// Crate imports
use crate::vec::FixedVector;

// Core imports
use core::{fmt, iter::FusedIterator, ptr, slice};

/// Owned iterator returned by `FixedVector::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T, const N: usize> {
    // `v.len` is kept at 0; the iterator owns `buf[front..back]` itself.
    pub(crate) v: FixedVector<T, N>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T, const N: usize> IntoIter<T, N> {
    /// The elements not yet yielded, as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `buf[front..back]` is initialized and owned by the iterator.
        unsafe { slice::from_raw_parts(self.v.as_ptr().add(self.front), self.back - self.front) }
    }

    /// The elements not yet yielded, as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, with unique access through `&mut self`.
        unsafe {
            slice::from_raw_parts_mut(self.v.as_mut_ptr().add(self.front), self.back - self.front)
        }
    }

    /// Drops `buf[from..to]`.
    ///
    /// # Safety
    ///
    /// The slots must be initialized and already excluded from
    /// `front..back`.
    unsafe fn drop_slots(&mut self, from: usize, to: usize) {
        // SAFETY: guaranteed by the caller.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.v.as_mut_ptr().add(from),
                to - from,
            ));
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was inside `front..back`, so the slot is initialized,
            // and it is now excluded, so it is read out exactly once.
            Some(unsafe { self.v.buf[i].assume_init_read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let skip = n.min(self.back - self.front);
        let from = self.front;
        self.front += skip;
        // SAFETY: `[from, from + skip)` was inside `front..back` and has just
        // been excluded from it.
        unsafe { self.drop_slots(from, from + skip) };
        self.next()
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: the old `back - 1` was initialized and is now excluded.
            Some(unsafe { self.v.buf[self.back].assume_init_read() })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let skip = n.min(self.back - self.front);
        let to = self.back;
        self.back -= skip;
        // SAFETY: `[to - skip, to)` was inside `front..back` and has just been
        // excluded from it.
        unsafe { self.drop_slots(to - skip, to) };
        self.next_back()
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let (from, to) = (self.front, self.back);
        self.front = to;
        // SAFETY: the remaining slots are initialized and now excluded.
        unsafe { self.drop_slots(from, to) };
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedVector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut FixedVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for FixedVector<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        // SAFETY: ownership of `buf[..back]` moves to the iterator, which
        // tracks it through `front..back`.
        unsafe { self.set_len(0) };
        IntoIter {
            front: 0,
            back,
            v: self,
        }
    }
}

impl<T, const N: usize> FromIterator<T> for FixedVector<T, N> {
    /// Collects every item of `iter`.
    ///
    /// # Panics
    ///
    /// Panics if `iter` yields more than `N` items.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        for item in iter {
            require!(
                !v.is_full(),
                "from_iter: source yields more than {} values",
                N
            );
            v.push_back(item);
        }
        v
    }
}
