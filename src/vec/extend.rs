// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVector};

impl<T, const N: usize> Extend<T> for FixedVector<T, N> {
    /// Appends every item of `iter`.
    ///
    /// # Panics
    ///
    /// Panics as soon as an item does not fit. Use
    /// [`FixedVector::try_extend_from_iter`] to stop cleanly instead.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            require!(self.len < N, "extend: vector is full (capacity {})", N);
            self.buf[self.len].write(item);
            self.len += 1;
        }
    }
}

impl<'a, T: Copy + 'a, const N: usize> Extend<&'a T> for FixedVector<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> FixedVector<T, N> {
    /// Appends clones of every element of `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src.len()` exceeds the spare capacity; nothing is appended
    /// in that case.
    pub fn extend_from_slice(&mut self, src: &[T])
    where
        T: Clone,
    {
        require!(
            src.len() <= self.spare_capacity(),
            "extend_from_slice: {} values exceed spare capacity {}",
            src.len(),
            self.spare_capacity()
        );
        for item in src {
            self.buf[self.len].write(item.clone());
            self.len += 1;
        }
    }

    /// Appends clones of every element of `src` if they all fit; returns
    /// [`Error::Full`] and appends nothing otherwise.
    pub fn try_extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if src.len() > self.spare_capacity() {
            reject!(
                Error::Full,
                "try_extend_from_slice: {} values exceed spare capacity {}",
                src.len(),
                self.spare_capacity()
            );
        }
        self.extend_from_slice(src);
        Ok(())
    }

    /// Appends every item of `iter` if they all fit.
    ///
    /// All-or-nothing: on overflow the items appended by this call are
    /// dropped again, the vector returns to its previous length, and
    /// [`Error::Full`] is returned.
    pub fn try_extend_from_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let start = self.len;
        for item in iter {
            if self.len == N {
                self.truncate(start);
                reject!(
                    Error::Full,
                    "try_extend_from_iter: source exceeds spare capacity {}",
                    N - start
                );
            }
            self.buf[self.len].write(item);
            self.len += 1;
        }
        Ok(())
    }

    /// Collects `iter` into a new vector, or returns [`Error::Full`] if it
    /// yields more than `N` items.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut v = Self::new();
        v.try_extend_from_iter(iter)?;
        Ok(v)
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for FixedVector<T, N> {
    type Error = Error;

    fn try_from(src: &[T]) -> Result<Self, Self::Error> {
        let mut v = Self::new();
        v.try_extend_from_slice(src)?;
        Ok(v)
    }
}
