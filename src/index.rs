// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`FixedVector`](crate::FixedVector).
//!
//! `Index` and `IndexMut` accept a position or any standard range form.
//! Views are restricted to the live range `[0..len)`; out-of-range requests
//! fault with the crate's own panic messages instead of the slice ones.

// Crate imports
use crate::vec::FixedVector;

// Core imports
use core::ops::{
    Bound, Index, IndexMut, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo,
    RangeToInclusive,
};

/// Resolves `range` against a live range of length `len`.
///
/// Faults if `start > end` or `end > len`.
pub(crate) fn live_range<R: RangeBounds<usize>>(len: usize, range: &R, op: &str) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => match i.checked_add(1) {
            Some(s) => s,
            None => fault!("{}: range start overflows", op),
        },
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&i) => match i.checked_add(1) {
            Some(e) => e,
            None => fault!("{}: range end overflows", op),
        },
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };

    if start > end {
        fault!("{}: start > end: {} > {}", op, start, end);
    }
    if end > len {
        fault!("{}: end {} exceeds length {}", op, end, len);
    }
    start..end
}

impl<T, const N: usize> Index<usize> for FixedVector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        require!(
            i < self.len,
            "index {} out of live range (len {})",
            i,
            self.len
        );
        &self.as_slice()[i]
    }
}
impl<T, const N: usize> IndexMut<usize> for FixedVector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        require!(
            i < self.len,
            "index {} out of live range (len {})",
            i,
            self.len
        );
        &mut self.as_mut_slice()[i]
    }
}

macro_rules! range_index {
    ($($range:ty),+ $(,)?) => {$(
        impl<T, const N: usize> Index<$range> for FixedVector<T, N> {
            type Output = [T];
            fn index(&self, r: $range) -> &[T] {
                let r = live_range(self.len, &r, "index");
                &self.as_slice()[r]
            }
        }
        impl<T, const N: usize> IndexMut<$range> for FixedVector<T, N> {
            fn index_mut(&mut self, r: $range) -> &mut [T] {
                let r = live_range(self.len, &r, "index");
                &mut self.as_mut_slice()[r]
            }
        }
    )+};
}

range_index!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeInclusive<usize>,
    RangeToInclusive<usize>,
    RangeFull,
);

#[cfg(test)]
mod tests {
    use crate::FixedVector;

    #[test]
    fn test_index_reads_and_writes_live_slots() {
        let mut v: FixedVector<i32, 4> = FixedVector::from_array([1, 2, 3]);
        assert_eq!(v[0], 1);
        v[2] = 30;
        assert_eq!(v[2], 30);
    }

    #[test]
    #[should_panic(expected = "index 3 out of live range (len 3)")]
    fn test_index_past_len_panics_even_within_capacity() {
        let v: FixedVector<i32, 8> = FixedVector::from_array([1, 2, 3]);
        let _ = v[3];
    }

    #[test]
    #[should_panic(expected = "index 0 out of live range (len 0)")]
    fn test_index_mut_on_empty_panics() {
        let mut v: FixedVector<i32, 2> = FixedVector::new();
        v[0] = 1;
    }

    #[test]
    fn test_range_forms() {
        let mut v: FixedVector<i32, 6> = FixedVector::from_array([0, 1, 2, 3, 4]);
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[3..], &[3, 4]);
        assert_eq!(&v[..2], &[0, 1]);
        assert_eq!(&v[1..=2], &[1, 2]);
        assert_eq!(&v[..=0], &[0]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);
        assert!(v[5..].is_empty());

        v[1..3].copy_from_slice(&[10, 20]);
        v[..=0][0] = -1;
        assert_eq!(v, [-1, 10, 20, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "index: end 6 exceeds length 5")]
    fn test_range_past_len_panics() {
        let v: FixedVector<i32, 8> = FixedVector::from_array([0, 1, 2, 3, 4]);
        let _ = &v[2..6];
    }

    #[test]
    #[should_panic(expected = "index: range end overflows")]
    fn test_inclusive_range_to_max_panics() {
        let v: FixedVector<i32, 2> = FixedVector::from_array([0, 1]);
        let _ = &v[..=usize::MAX];
    }
}
