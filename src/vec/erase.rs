// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{cursor::CursorMut, index::live_range, vec::FixedVector};

// Core imports
use core::{
    ops::{Range, RangeBounds},
    ptr,
};

impl<T, const N: usize> FixedVector<T, N> {
    /// Removes and drops the element at `index`, shifting the tail one slot
    /// towards the front.
    ///
    /// Returns a cursor at the element that followed the erased one (the end
    /// cursor if the last element was erased).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> CursorMut<'_, T> {
        require!(
            index < self.len,
            "erase: index {} out of bounds (len {})",
            index,
            self.len
        );
        drop(self.remove(index));
        CursorMut::new(self.as_mut_slice(), index as isize)
    }

    /// Removes and drops every element in `range`, shifting the tail down to
    /// close the gap.
    ///
    /// Returns a cursor at the element that followed the erased range. An
    /// empty range leaves the vector unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the range is invalid:
    /// - `start > end`
    /// - `end > self.len()`
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::FixedVector;
    /// let mut v: FixedVector<i32, 5> = FixedVector::from_array([1, 2, 3, 4, 5]);
    /// let next = v.erase_range(1..3);
    /// assert_eq!(*next.get(), 4);
    /// assert_eq!(v, [1, 4, 5]);
    /// ```
    pub fn erase_range<R>(&mut self, range: R) -> CursorMut<'_, T>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len;
        let Range { start, end } = live_range(len, &range, "erase_range");

        if start < end {
            // Hide the range and the tail first; a panicking destructor then
            // leaks the tail instead of exposing dropped slots.
            self.len = start;
            // SAFETY: `buf[start..end]` is initialized and now outside the
            // live range, so each element is dropped exactly once. The tail
            // `[end, len)` is then moved down over the dropped slots.
            unsafe {
                let base = self.as_mut_ptr();
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(start), end - start));
                ptr::copy(base.add(end), base.add(start), len - end);
            }
            self.len = len - (end - start);
        }

        CursorMut::new(self.as_mut_slice(), start as isize)
    }

    /// Removes the element at `index` and returns it, shifting the tail one
    /// slot towards the front. Returns `None` if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let len = self.len;
        if index >= len {
            return None;
        }
        // SAFETY: `index < len`, so the slot is initialized. Reading it out
        // takes ownership; the tail `[index + 1, len)` then slides over it and
        // the duplicated last slot falls outside the new live range.
        unsafe {
            let p = self.as_mut_ptr().add(index);
            let item = ptr::read(p);
            ptr::copy(p.add(1), p, len - index - 1);
            self.len = len - 1;
            Some(item)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::tests::{ids, Tracked};
    use crate::FixedVector;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn test_erase_middle_returns_follower() {
        let mut v: FixedVector<i32, 4> = FixedVector::from_array([1, 2, 3, 4]);
        let next = v.erase(1);
        assert_eq!(next.position(), 1);
        assert_eq!(*next.get(), 3);
        assert_eq!(v, [1, 3, 4]);
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn test_erase_last_returns_end() {
        let mut v: FixedVector<i32, 4> = FixedVector::from_array([1, 2]);
        let next = v.erase(1);
        assert_eq!(next.position(), 1);
        assert!(next.try_get().is_none());
        assert_eq!(v, [1]);
    }

    #[test]
    #[should_panic(expected = "erase: index 2 out of bounds (len 2)")]
    fn test_erase_out_of_range_panics() {
        let mut v: FixedVector<i32, 4> = FixedVector::from_array([1, 2]);
        v.erase(2);
    }

    #[test]
    fn test_erase_drops_exactly_the_erased_element() {
        let drops = Rc::new(Cell::new(0));
        let mut v: FixedVector<Tracked, 4> = FixedVector::new();
        for id in 0..4 {
            v.push_back(Tracked::new(id, &drops));
        }
        v.erase(0);
        assert_eq!(drops.get(), 1);
        assert_eq!(ids(&v), [1, 2, 3]);
        drop(v);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn test_erase_range_variants() {
        let mut v: FixedVector<i32, 6> = FixedVector::from_array([0, 1, 2, 3, 4, 5]);
        v.erase_range(1..=2);
        assert_eq!(v, [0, 3, 4, 5]);
        v.erase_range(2..2);
        assert_eq!(v, [0, 3, 4, 5]);
        v.erase_range(..1);
        assert_eq!(v, [3, 4, 5]);
        let end = v.erase_range(1..);
        assert_eq!(end.position(), 1);
        assert_eq!(v, [3]);
        v.erase_range(..);
        assert!(v.is_empty());
    }

    #[test]
    fn test_erase_range_drops_range_once() {
        let drops = Rc::new(Cell::new(0));
        let mut v: FixedVector<Tracked, 5> = FixedVector::new();
        for id in 0..5 {
            v.push_back(Tracked::new(id, &drops));
        }
        v.erase_range(1..4);
        assert_eq!(drops.get(), 3);
        assert_eq!(ids(&v), [0, 4]);
    }

    #[test]
    #[should_panic(expected = "erase_range: end 5 exceeds length 3")]
    fn test_erase_range_past_len_panics() {
        let mut v: FixedVector<i32, 5> = FixedVector::from_array([1, 2, 3]);
        v.erase_range(1..5);
    }

    #[test]
    #[should_panic(expected = "erase_range: start > end: 2 > 1")]
    fn test_erase_range_inverted_panics() {
        let mut v: FixedVector<i32, 5> = FixedVector::from_array([1, 2, 3]);
        #[allow(clippy::reversed_empty_ranges)]
        v.erase_range(2..1);
    }

    #[test]
    fn test_remove_returns_value() {
        let mut v: FixedVector<i32, 4> = FixedVector::from_array([1, 2, 3]);
        assert_eq!(v.remove(1), Some(2));
        assert_eq!(v.remove(5), None);
        assert_eq!(v, [1, 3]);
    }
}
