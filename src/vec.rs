// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FixedVector` type and its inherent API.
//!
//! `FixedVector<T, N>` stores up to `N` elements inline in a
//! `[MaybeUninit<T>; N]` buffer and tracks a logical length. The inherent API
//! is split one operation per file under `vec/`; this file holds the type,
//! the O(1) queries, and the standard trait surface.
//!
//! No heap allocations are performed.

mod assign;
mod erase;
mod extend;
mod from;
mod insert;
mod new;
mod pop;
mod push;
mod resize;
mod retain;
mod slice;
mod swap;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
    ptr,
};

/// A fixed-capacity vector whose `N` slots are stored inline.
///
/// `FixedVector<T, N>` behaves like a `Vec<T>` that can never hold more than
/// `N` elements and never allocates:
///
/// - capacity is the const parameter `N` and never changes;
/// - the buffer is part of the value itself (typically on the stack);
/// - `T` needs no extra bounds; owned resources are released exactly once;
/// - the live range `[0, len)` derefs to `[T]`, so every slice method is
///   available.
///
/// # Layout and invariants
///
/// - `buf: [MaybeUninit<T>; N]` and `len: usize` with `0 <= len <= N`.
/// - `buf[..len]` holds initialized values; `buf[len..]` is never read.
/// - Operations that shrink the vector (`clear`, `erase`, `erase_range`,
///   `truncate`, a shrinking `resize`) drop the vacated elements.
///   [`pop_back`](FixedVector::pop_back) moves the last element out to the
///   caller instead.
///
/// # Preconditions
///
/// Capacity and position preconditions are enforced with panics in every
/// build profile. Fallible `try_*` companions return [`crate::Error`]
/// instead and leave the vector unchanged.
///
/// # Complexity
///
/// - Queries, indexing, `push_back` and `pop_back` are O(1).
/// - `insert`, `erase` and `erase_range` are O(len - position).
/// - Moving the value and [`swap_with`](FixedVector::swap_with) are O(N): the
///   storage is embedded, there is no pointer to exchange.
///
/// # Examples
///
/// ```rust
/// use fixed_vector::FixedVector;
///
/// let mut v: FixedVector<String, 3> = FixedVector::new();
/// v.push_back("a".to_string());
/// v.push_back("b".to_string());
/// assert_eq!(v.len(), 2);
/// assert_eq!(v.capacity(), 3);
/// assert_eq!(v.back(), "b");
///
/// v.clear();
/// assert!(v.is_empty());
/// ```
pub struct FixedVector<T, const N: usize> {
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> FixedVector<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the largest length this vector can ever reach (always `N`).
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`len`](Self::len).
    #[inline]
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that fit.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Returns a copy of the first element.
    ///
    /// The slot itself cannot be modified through this accessor; use
    /// `v[0]` or `first_mut()` for that.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn front(&self) -> T
    where
        T: Clone,
    {
        require!(self.len != 0, "front: vector is empty (capacity {})", N);
        self.as_slice()[0].clone()
    }

    /// Returns a copy of the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn back(&self) -> T
    where
        T: Clone,
    {
        require!(self.len != 0, "back: vector is empty (capacity {})", N);
        self.as_slice()[self.len - 1].clone()
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Drops every live element and sets `len = 0`.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Returns `true` if the vector contains `x` (linear search on the live range).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T, const N: usize> Drop for FixedVector<T, N> {
    fn drop(&mut self) {
        // SAFETY: `buf[..len]` is initialized by invariant and is never
        // touched again after this.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T: Clone, const N: usize> Clone for FixedVector<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        out.extend_from_slice(self.as_slice());
        out
    }

    /// Element-wise copy assignment: live slots are reused through
    /// `T::clone_from`, extra slots are dropped, missing ones are pushed.
    fn clone_from(&mut self, source: &Self) {
        let common = self.len.min(source.len);
        self.as_mut_slice()[..common].clone_from_slice(&source.as_slice()[..common]);
        self.truncate(source.len);
        self.extend_from_slice(&source.as_slice()[common..]);
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedVector")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<FixedVector<U, M>> for FixedVector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &FixedVector<U, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T, U, const N: usize, const M: usize> PartialEq<[U; M]> for FixedVector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; M]) -> bool {
        self.as_slice() == &other[..]
    }
}
impl<T, U, const N: usize> PartialEq<[U]> for FixedVector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T, U, const N: usize> PartialEq<&[U]> for FixedVector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}
impl<T: Eq, const N: usize> Eq for FixedVector<T, N> {}
impl<T: Ord, const N: usize> Ord for FixedVector<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for FixedVector<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for FixedVector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, const N: usize> Deref for FixedVector<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for FixedVector<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedVector<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for FixedVector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for FixedVector<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for FixedVector<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
