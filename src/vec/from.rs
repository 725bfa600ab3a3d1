// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::FixedVector;

impl<T, const N: usize> From<[T; N]> for FixedVector<T, N> {
    fn from(src: [T; N]) -> Self {
        Self::from_array(src)
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for FixedVector<T, N> {
    fn from(src: &[T; N]) -> Self {
        Self::from_slice(src)
    }
}

impl<T, const N: usize> FixedVector<T, N> {
    /// Constructs a vector by cloning the live range of a vector of any
    /// capacity `M`.
    ///
    /// # Panics
    ///
    /// Panics if `source.len() > N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::FixedVector;
    /// let big: FixedVector<u8, 16> = FixedVector::from_array([1, 2, 3]);
    /// let small: FixedVector<u8, 4> = FixedVector::from_fixed(&big);
    /// assert_eq!(small, big);
    /// ```
    pub fn from_fixed<const M: usize>(source: &FixedVector<T, M>) -> Self
    where
        T: Clone,
    {
        let mut v = Self::new();
        v.assign_from(source);
        v
    }

    /// Constructs a vector by moving every live element out of `source`,
    /// which is left empty. `source` may have any capacity `M`.
    ///
    /// # Panics
    ///
    /// Panics if `source.len() > N`; `source` is untouched in that case.
    pub fn take_from<const M: usize>(source: &mut FixedVector<T, M>) -> Self {
        let mut v = Self::new();
        v.move_from(source);
        v
    }
}
