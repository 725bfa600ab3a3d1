// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedVector;

// Core imports
use core::{
    mem::{ManuallyDrop, MaybeUninit},
    ptr,
};

impl<T, const N: usize> FixedVector<T, N> {
    /// Constructs an empty vector.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    /// Constructs a vector holding `count` clones of `value`.
    ///
    /// # Panics
    ///
    /// Panics if `count > N`.
    pub fn from_elem(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        require!(
            count <= N,
            "from_elem: count {} exceeds capacity {}",
            count,
            N
        );
        let mut v = Self::new();
        v.resize(count, value);
        v
    }

    /// Constructs a vector from an array literal, keeping its order.
    ///
    /// The array is moved into the buffer in one bulk copy; since the source
    /// is consumed this is sound for every `T`.
    ///
    /// # Panics
    ///
    /// Panics if `M > N`.
    pub fn from_array<const M: usize>(array: [T; M]) -> Self {
        require!(
            M <= N,
            "from_array: {} values exceed capacity {}",
            M,
            N
        );
        let array = ManuallyDrop::new(array);
        let mut v = Self::new();
        // SAFETY: `M <= N`, the regions cannot overlap, and `array` is never
        // dropped, so each value ends up owned exactly once (by `v`).
        unsafe {
            ptr::copy_nonoverlapping(array.as_ptr(), v.as_mut_ptr(), M);
            v.set_len(M);
        }
        v
    }

    /// Constructs a vector by cloning each element of `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src.len() > N`. See `TryFrom<&[T]>` for a fallible variant.
    pub fn from_slice(src: &[T]) -> Self
    where
        T: Clone,
    {
        let mut v = Self::new();
        v.assign_slice(src);
        v
    }

    /// Constructs a vector from `src` with a single bulk memory copy.
    ///
    /// Restricted to `T: Copy`, the only element types that can be duplicated
    /// byte-wise without running any per-element logic.
    ///
    /// # Panics
    ///
    /// Panics if `src.len() > N`.
    pub fn from_copy_slice(src: &[T]) -> Self
    where
        T: Copy,
    {
        let mut v = Self::new();
        v.assign_copy_slice(src);
        v
    }
}

impl<T, const N: usize> Default for FixedVector<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
