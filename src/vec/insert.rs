// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{cursor::CursorMut, error::Error, vec::FixedVector};

// Core import
use core::ptr;

impl<T, const N: usize> FixedVector<T, N> {
    /// Inserts `item` at `index`, shifting every element at or after it one
    /// slot towards the back.
    ///
    /// `index == len()` appends. Returns a cursor at the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()` or if the vector is full.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::FixedVector;
    /// let mut v: FixedVector<i32, 4> = FixedVector::from_array([1, 3, 4]);
    /// let at = v.insert(1, 9);
    /// assert_eq!(*at.get(), 9);
    /// assert_eq!(v, [1, 9, 3, 4]);
    /// ```
    pub fn insert(&mut self, index: usize, item: T) -> CursorMut<'_, T> {
        require!(
            index <= self.len,
            "insert: index {} out of bounds (len {})",
            index,
            self.len
        );
        require!(self.len < N, "insert: vector is full (capacity {})", N);
        self.insert_unchecked(index, item)
    }

    /// Fallible [`insert`](Self::insert).
    ///
    /// Returns [`Error::OutOfBounds`] if `index > len()` and [`Error::Full`]
    /// if there is no room. `item` is dropped and the vector is unchanged on
    /// error.
    pub fn try_insert(&mut self, index: usize, item: T) -> Result<CursorMut<'_, T>, Error> {
        if index > self.len {
            reject!(
                Error::OutOfBounds,
                "try_insert: index {} out of bounds (len {})",
                index,
                self.len
            );
        }
        if self.len == N {
            reject!(Error::Full, "try_insert: vector is full (capacity {})", N);
        }
        Ok(self.insert_unchecked(index, item))
    }

    fn insert_unchecked(&mut self, index: usize, item: T) -> CursorMut<'_, T> {
        let len = self.len;
        debug_assert!(index <= len && len < N);
        // SAFETY: `len < N`, so the shifted tail `[index, len)` still fits in
        // `[index + 1, len + 1)`. `ptr::copy` handles the overlap, and the
        // vacated slot at `index` is overwritten without being dropped.
        unsafe {
            let p = self.as_mut_ptr().add(index);
            ptr::copy(p, p.add(1), len - index);
            p.write(item);
        }
        self.len = len + 1;
        CursorMut::new(self.as_mut_slice(), index as isize)
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::tests::{ids, Tracked};
    use crate::{Error, FixedVector};
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn test_insert_in_middle_fills_vector() {
        let mut v: FixedVector<i32, 4> = FixedVector::from_array([1, 3, 4]);
        let at = v.insert(1, 9);
        assert_eq!(at.position(), 1);
        assert_eq!(*at.get(), 9);
        assert_eq!(v, [1, 9, 3, 4]);
        assert!(v.is_full());
    }

    #[test]
    fn test_insert_at_front_and_end() {
        let mut v: FixedVector<i32, 4> = FixedVector::from_array([2]);
        v.insert(0, 1);
        v.insert(2, 3);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn test_insert_cursor_can_write() {
        let mut v: FixedVector<i32, 3> = FixedVector::from_array([1, 2]);
        let mut at = v.insert(1, 0);
        *at.get_mut() = 5;
        assert_eq!(v, [1, 5, 2]);
    }

    #[test]
    #[should_panic(expected = "insert: index 3 out of bounds (len 2)")]
    fn test_insert_past_end_panics() {
        let mut v: FixedVector<i32, 4> = FixedVector::from_array([1, 2]);
        v.insert(3, 0);
    }

    #[test]
    #[should_panic(expected = "insert: vector is full (capacity 2)")]
    fn test_insert_into_full_panics() {
        let mut v: FixedVector<i32, 2> = FixedVector::from_array([1, 2]);
        v.insert(0, 0);
    }

    #[test]
    fn test_try_insert_reports_errors() {
        let mut v: FixedVector<i32, 2> = FixedVector::from_array([1]);
        assert_eq!(v.try_insert(2, 0).err(), Some(Error::OutOfBounds));
        assert!(v.try_insert(0, 0).is_ok());
        assert_eq!(v.try_insert(0, 7).err(), Some(Error::Full));
        assert_eq!(v, [0, 1]);
    }

    #[test]
    fn test_insert_moves_without_drops() {
        let drops = Rc::new(Cell::new(0));
        let mut v: FixedVector<Tracked, 4> =
            FixedVector::from_array([Tracked::new(1, &drops), Tracked::new(3, &drops)]);
        v.insert(1, Tracked::new(2, &drops));
        assert_eq!(ids(&v), [1, 2, 3]);
        assert_eq!(drops.get(), 0);
    }
}
