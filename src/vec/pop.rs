// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::FixedVector;

impl<T, const N: usize> FixedVector<T, N> {
    /// Removes the last element and hands it to the caller.
    ///
    /// The element is moved out, not dropped: whatever it owns is released
    /// when the caller lets go of it.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty. See [`pop`](Self::pop) for a
    /// non-panicking variant.
    #[inline]
    pub fn pop_back(&mut self) -> T {
        match self.pop() {
            Some(item) => item,
            None => fault!("pop_back: vector is empty (capacity {})", N),
        }
    }

    /// Removes and returns the last element, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` was initialized, and it is now
        // outside the live range, so reading it out transfers ownership.
        Some(unsafe { self.buf[self.len].assume_init_read() })
    }
}
