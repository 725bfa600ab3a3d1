// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::FixedVector;

impl<T, const N: usize> FixedVector<T, N> {
    /// Retains only the elements specified by the predicate `f`, preserving order.
    ///
    /// The predicate is applied to each element in iteration order. Rejected
    /// elements are dropped.
    #[inline]
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        self.retain_mut(|x| f(x));
    }

    /// Like [`retain`](Self::retain), but the predicate may mutate elements.
    pub fn retain_mut<F: FnMut(&mut T) -> bool>(&mut self, mut f: F) {
        let slots = self.as_mut_slice();
        let mut write = 0;
        for read in 0..slots.len() {
            if f(&mut slots[read]) {
                // Kept elements rotate to the front; rejects collect behind them.
                slots.swap(write, read);
                write += 1;
            }
        }
        self.truncate(write);
    }
}
