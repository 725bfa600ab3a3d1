// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::FixedVector;

// Core import
use core::ptr;

impl<T, const N: usize> FixedVector<T, N> {
    /// Resizes the live range to `new_len`.
    ///
    /// Growing appends clones of `fill` (the last new slot receives `fill`
    /// itself). Shrinking drops the trailing elements, like
    /// [`truncate`](Self::truncate).
    ///
    /// # Panics
    ///
    /// Panics if `new_len > N`; the vector is left untouched in that case.
    pub fn resize(&mut self, new_len: usize, fill: T)
    where
        T: Clone,
    {
        require!(
            new_len <= N,
            "resize: new length {} exceeds capacity {}",
            new_len,
            N
        );
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        while self.len + 1 < new_len {
            self.push_back(fill.clone());
        }
        self.push_back(fill);
    }

    /// Resizes the live range to `new_len`, producing new elements with `f`.
    ///
    /// # Panics
    ///
    /// Panics if `new_len > N`.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        require!(
            new_len <= N,
            "resize_with: new length {} exceeds capacity {}",
            new_len,
            N
        );
        self.truncate(new_len);
        while self.len < new_len {
            self.push_back(f());
        }
    }

    /// Shortens the vector to `new_len`, dropping the trailing elements.
    ///
    /// Has no effect if `new_len >= len`.
    pub fn truncate(&mut self, new_len: usize) {
        let old_len = self.len;
        if new_len >= old_len {
            return;
        }
        // Shrink first: a panicking destructor must not expose dropped slots.
        self.len = new_len;
        // SAFETY: `buf[new_len..old_len]` was initialized and is no longer
        // part of the live range, so it is dropped exactly once here.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(
                self.as_mut_ptr().add(new_len),
                old_len - new_len,
            );
            ptr::drop_in_place(tail);
        }
    }

    /// Sets the logical length without touching any slot.
    ///
    /// This is the raw resize: no element is constructed or dropped.
    ///
    /// # Safety
    ///
    /// - `new_len` must be `<= N`.
    /// - When growing, `buf[old_len..new_len]` must already hold initialized
    ///   values (for example written through [`as_mut_ptr`](Self::as_mut_ptr)).
    /// - When shrinking, the elements in `buf[new_len..old_len]` are leaked
    ///   unless the caller has taken ownership of them.
    #[inline]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= N, "set_len: {} exceeds capacity {}", new_len, N);
        self.len = new_len;
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::tests::{ids, Tracked};
    use crate::FixedVector;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn test_resize_grows_and_shrinks() {
        let mut v: FixedVector<i32, 5> = FixedVector::from_array([1, 2]);
        v.resize(4, 0);
        assert_eq!(v, [1, 2, 0, 0]);
        v.resize(1, 9);
        assert_eq!(v, [1]);
        v.resize(1, 9);
        assert_eq!(v, [1]);
    }

    #[test]
    fn test_resize_clones_fill_one_less_time() {
        let drops = Rc::new(Cell::new(0));
        let mut v: FixedVector<Tracked, 4> = FixedVector::new();
        v.resize(3, Tracked::new(7, &drops));
        assert_eq!(ids(&v), [7, 7, 7]);
        assert_eq!(drops.get(), 0);

        v.resize(1, Tracked::new(8, &drops));
        // Two trimmed elements plus the unused fill value.
        assert_eq!(drops.get(), 3);
    }

    #[test]
    #[should_panic(expected = "resize: new length 6 exceeds capacity 5")]
    fn test_resize_over_capacity_panics() {
        let mut v: FixedVector<i32, 5> = FixedVector::new();
        v.resize(6, 0);
    }

    #[test]
    fn test_resize_with_counts_up() {
        let mut v: FixedVector<u32, 4> = FixedVector::new();
        let mut next = 0;
        v.resize_with(3, || {
            next += 1;
            next
        });
        assert_eq!(v, [1, 2, 3]);
        v.resize_with(1, || unreachable!());
        assert_eq!(v, [1]);
    }

    #[test]
    fn test_truncate_past_len_is_noop() {
        let mut v: FixedVector<i32, 4> = FixedVector::from_array([1, 2]);
        v.truncate(3);
        assert_eq!(v, [1, 2]);
        v.truncate(0);
        assert!(v.is_empty());
    }

    #[test]
    fn test_set_len_after_raw_writes() {
        let mut v: FixedVector<u16, 4> = FixedVector::new();
        unsafe {
            let p = v.as_mut_ptr();
            p.write(10);
            p.add(1).write(20);
            v.set_len(2);
        }
        assert_eq!(v, [10, 20]);
    }
}
