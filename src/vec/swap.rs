// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::FixedVector;

// Core import
use core::mem;

impl<T, const N: usize> FixedVector<T, N> {
    /// Exchanges the entire contents (elements and length) with `other`.
    ///
    /// Both buffers are embedded, so this moves all `N` slots of each vector
    /// and is O(N), not O(1). No element is cloned or dropped.
    ///
    /// Named `swap_with` so that the slice method `swap(a, b)` stays reachable
    /// through `Deref`.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::tests::{ids, Tracked};
    use crate::FixedVector;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn test_swap_with_exchanges_lengths_and_elements() {
        let mut a: FixedVector<i32, 4> = FixedVector::from_array([1, 2, 3]);
        let mut b: FixedVector<i32, 4> = FixedVector::from_array([9]);
        a.swap_with(&mut b);
        assert_eq!(a, [9]);
        assert_eq!(b, [1, 2, 3]);
    }

    #[test]
    fn test_slice_swap_is_still_reachable() {
        let mut a: FixedVector<i32, 4> = FixedVector::from_array([1, 2, 3]);
        a.swap(0, 2);
        assert_eq!(a, [3, 2, 1]);
    }

    #[test]
    fn test_swap_with_drops_nothing() {
        let drops = Rc::new(Cell::new(0));
        let mut a: FixedVector<Tracked, 2> = FixedVector::from_array([Tracked::new(1, &drops)]);
        let mut b: FixedVector<Tracked, 2> = FixedVector::new();
        a.swap_with(&mut b);
        assert_eq!(drops.get(), 0);
        assert!(a.is_empty());
        assert_eq!(ids(&b), [1]);
    }
}
