// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVector};

// Core imports
use core::{mem::ManuallyDrop, ptr};

impl<T, const N: usize> FixedVector<T, N> {
    /// Replaces the contents with `count` clones of `value`.
    ///
    /// # Panics
    ///
    /// Panics if `count > N`; the vector is left untouched in that case.
    pub fn assign(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        require!(
            count <= N,
            "assign: count {} exceeds capacity {}",
            count,
            N
        );
        self.clear();
        self.resize(count, value);
    }

    /// Replaces the contents with the values of an array literal.
    ///
    /// # Panics
    ///
    /// Panics if `M > N`; the vector is left untouched in that case.
    pub fn assign_array<const M: usize>(&mut self, array: [T; M]) {
        require!(
            M <= N,
            "assign_array: {} values exceed capacity {}",
            M,
            N
        );
        self.clear();
        let array = ManuallyDrop::new(array);
        // SAFETY: the vector is empty, `M <= N`, and `array` is never dropped,
        // so ownership of each value moves into `buf[..M]` exactly once.
        unsafe {
            ptr::copy_nonoverlapping(array.as_ptr(), self.as_mut_ptr(), M);
            self.set_len(M);
        }
    }

    /// Replaces the contents with clones of `src`, element by element.
    ///
    /// # Panics
    ///
    /// Panics if `src.len() > N`; the vector is left untouched in that case.
    pub fn assign_slice(&mut self, src: &[T])
    where
        T: Clone,
    {
        require!(
            src.len() <= N,
            "assign_slice: {} values exceed capacity {}",
            src.len(),
            N
        );
        self.clear();
        self.extend_from_slice(src);
    }

    /// Replaces the contents with `src` using one bulk memory copy.
    ///
    /// # Panics
    ///
    /// Panics if `src.len() > N`; the vector is left untouched in that case.
    pub fn assign_copy_slice(&mut self, src: &[T])
    where
        T: Copy,
    {
        require!(
            src.len() <= N,
            "assign_copy_slice: {} values exceed capacity {}",
            src.len(),
            N
        );
        self.clear();
        // SAFETY: `T: Copy`, so a byte-wise duplicate is a valid independent
        // value; `src.len() <= N` and `src` cannot overlap our buffer while
        // we hold `&mut self`.
        unsafe {
            ptr::copy_nonoverlapping(src.as_ptr(), self.as_mut_ptr(), src.len());
            self.set_len(src.len());
        }
    }

    /// Replaces the contents with the items of `iter`, in order.
    ///
    /// # Panics
    ///
    /// Panics as soon as `iter` yields more than `N` items. The vector then
    /// holds the first `N` of them. See [`try_assign_iter`](Self::try_assign_iter)
    /// for an all-or-nothing variant.
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.clear();
        for item in iter {
            require!(
                self.len < N,
                "assign_iter: source yields more than {} values",
                N
            );
            self.buf[self.len].write(item);
            self.len += 1;
        }
    }

    /// Replaces the contents with the items of `iter` if they all fit.
    ///
    /// Returns [`Error::Full`] and leaves the vector unchanged otherwise.
    pub fn try_assign_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        *self = Self::try_from_iter(iter)?;
        Ok(())
    }

    /// Copy assignment from a vector of any capacity `M`: clears `self`,
    /// then clones `source`'s live range in order.
    ///
    /// `&mut self` and `&source` can never alias, so assigning a vector to
    /// itself is ruled out at compile time.
    ///
    /// # Panics
    ///
    /// Panics if `source.len() > N`; `self` is left untouched in that case.
    pub fn assign_from<const M: usize>(&mut self, source: &FixedVector<T, M>)
    where
        T: Clone,
    {
        require!(
            source.len <= N,
            "assign_from: source length {} exceeds capacity {}",
            source.len,
            N
        );
        self.clear();
        self.extend_from_slice(source.as_slice());
    }

    /// Move assignment from a vector of any capacity `M`: clears `self`,
    /// moves every live element of `source` over, and leaves `source` empty.
    ///
    /// No element is cloned or dropped by the transfer itself.
    ///
    /// # Panics
    ///
    /// Panics if `source.len() > N`; both vectors are left untouched in that
    /// case.
    pub fn move_from<const M: usize>(&mut self, source: &mut FixedVector<T, M>) {
        let count = source.len;
        require!(
            count <= N,
            "move_from: source length {} exceeds capacity {}",
            count,
            N
        );
        self.clear();
        // SAFETY: `source.buf[..count]` is initialized and `count <= N`. The
        // two buffers are distinct (`&mut` borrows cannot alias). `source`
        // forgets the values before `self` adopts them, so each one keeps a
        // single owner.
        unsafe {
            source.set_len(0);
            ptr::copy_nonoverlapping(source.as_ptr(), self.as_mut_ptr(), count);
            self.set_len(count);
        }
    }
}
