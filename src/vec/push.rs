// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVector};

impl<T, const N: usize> FixedVector<T, N> {
    /// Appends `item` after the last live element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is full.
    #[inline]
    pub fn push_back(&mut self, item: T) {
        require!(self.len < N, "push_back: vector is full (capacity {})", N);
        self.buf[self.len].write(item);
        self.len += 1;
    }

    /// Appends `item` if there is room; returns [`Error::Full`] otherwise.
    ///
    /// On error `item` is dropped and the vector is unchanged.
    #[inline]
    pub fn try_push_back(&mut self, item: T) -> Result<(), Error> {
        if self.len == N {
            reject!(Error::Full, "try_push_back: vector is full (capacity {})", N);
        }
        self.buf[self.len].write(item);
        self.len += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, FixedVector};

    #[test]
    fn test_push_back_appends_in_order() {
        let mut v: FixedVector<i32, 3> = FixedVector::new();
        v.push_back(1);
        v.push_back(2);
        assert_eq!(v, [1, 2]);
        assert_eq!(v.back(), 2);
    }

    #[test]
    fn test_try_push_back_reports_full() {
        let mut v: FixedVector<i32, 2> = FixedVector::new();
        assert_eq!(v.try_push_back(1), Ok(()));
        assert_eq!(v.try_push_back(2), Ok(()));
        assert_eq!(v.try_push_back(3), Err(Error::Full));
        assert_eq!(v, [1, 2]);
    }
}
