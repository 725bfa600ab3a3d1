// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedVector;

impl<T, const N: usize> FixedVector<T, N> {
    /// Returns the live range `[0, len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= N`, so this creates a valid shared slice of initialized `T`.
        unsafe { core::slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Returns the live range `[0, len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= N`. We have exclusive access via `&mut self`, so it is
        // sound to create a mutable slice over `buf[..self.len]`.
        unsafe { core::slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Returns a raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` slots hold initialized `T` values; reading
    /// `ptr.add(i)` for `i >= len` is undefined behavior.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr().cast::<T>()
    }

    /// Returns a mutable raw pointer to the start of the backing storage.
    ///
    /// Writing past `len` is allowed but does not change `len`; see
    /// [`set_len`](Self::set_len) for publishing such writes.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr().cast::<T>()
    }
}

#[cfg(test)]
mod tests {
    use crate::FixedVector;

    #[test]
    fn test_slices_cover_live_range_only() {
        let mut v: FixedVector<u16, 4> = FixedVector::from_array([10, 20]);
        assert_eq!(v.as_slice(), &[10, 20]);
        v.as_mut_slice()[1] = 21;
        assert_eq!(v.as_slice(), &[10, 21]);
        assert_eq!(v.as_ptr(), v.as_slice().as_ptr());
    }

    #[test]
    fn test_as_mut_ptr_matches_slice() {
        let mut v: FixedVector<u16, 4> = FixedVector::from_array([1, 2, 3]);
        let p = v.as_mut_ptr();
        let q = v.as_mut_slice().as_mut_ptr();
        assert_eq!(p, q);
    }
}
