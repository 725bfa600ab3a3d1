// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random-access cursors over the live range of a `FixedVector`.
//!
//! A cursor is a signed position paired with a borrow of the vector's live
//! elements. Arithmetic never checks bounds, so a cursor may point anywhere,
//! including one past the end or before the beginning. Only dereferencing
//! checks that the position addresses a live slot, and panics otherwise.
//!
//! Because a cursor borrows the vector, structural mutation (`push_back`,
//! `insert`, `erase`, `clear`, ...) is rejected by the compiler while a cursor
//! is alive. A cursor can therefore never observe stale data:
//!
//! ```compile_fail
//! # use fixed_vector::FixedVector;
//! let mut v: FixedVector<i32, 4> = FixedVector::from_array([1, 2]);
//! let first = v.begin();
//! v.push_back(3);
//! assert_eq!(*first.get(), 1);
//! ```

// Crate import
use crate::vec::FixedVector;

// Core imports
use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign},
    ptr, slice,
};

/// The contract generic sequence algorithms are written against.
///
/// Implemented by [`Cursor`] and [`CursorMut`].
pub trait RandomAccessCursor {
    /// Element type the cursor addresses.
    type Item;

    /// Signed slot position relative to the first live element.
    fn position(&self) -> isize;

    /// Length of the live range the cursor traverses.
    fn live_len(&self) -> usize;

    /// Moves the cursor by `n` slots (negative moves backwards).
    fn offset_by(&mut self, n: isize);

    /// The element at the cursor, or `None` off the live range.
    fn peek(&self) -> Option<&Self::Item>;

    /// The element `n` slots away from the cursor, or `None` off the live range.
    fn peek_at(&self, n: isize) -> Option<&Self::Item>;

    /// Signed distance from `self` to `other`.
    ///
    /// Only meaningful for cursors over the same vector.
    fn distance_to(&self, other: &Self) -> isize
    where
        Self: Sized,
    {
        other.position() - self.position()
    }

    /// Returns `true` if the cursor addresses a live element.
    fn is_dereferenceable(&self) -> bool {
        live_index(self.live_len(), self.position(), 0).is_some()
    }
}

/// Index of the live slot at `pos + n`, if any.
#[inline]
fn live_index(len: usize, pos: isize, n: isize) -> Option<usize> {
    let p = pos.checked_add(n)?;
    usize::try_from(p).ok().filter(|&i| i < len)
}

/// Start index for a traversal beginning at `pos`, which may equal `len`.
#[inline]
fn tail_start(len: usize, pos: isize, op: &str) -> usize {
    match usize::try_from(pos) {
        Ok(i) if i <= len => i,
        _ => fault!("{}: position {} outside [0, {}]", op, pos, len),
    }
}

#[inline]
fn moved(pos: isize, n: isize) -> isize {
    match pos.checked_add(n) {
        Some(p) => p,
        None => fault!("cursor: moving position {} by {} overflows", pos, n),
    }
}

#[inline]
fn moved_back(pos: isize, n: isize) -> isize {
    match pos.checked_sub(n) {
        Some(p) => p,
        None => fault!("cursor: moving position {} back by {} overflows", pos, n),
    }
}

/// A read-only random-access cursor.
///
/// Obtained from [`FixedVector::begin`], [`FixedVector::end`],
/// [`FixedVector::cbegin`], [`FixedVector::cend`] or
/// [`FixedVector::cursor_at`].
///
/// Cursors are `Copy`. Equality and ordering compare the vector they came
/// from first, then the position, so cursors into the same vector order by
/// position.
///
/// # Examples
///
/// ```
/// # use fixed_vector::FixedVector;
/// let v: FixedVector<i32, 8> = FixedVector::from_array([10, 20, 30, 40]);
/// let mut it = v.begin();
/// assert_eq!(*it.get(), 10);
/// it += 2;
/// assert_eq!(it[1], 40);
/// assert_eq!(v.end() - it, 2);
/// assert_eq!(*it.post_advance().get(), 30);
/// assert_eq!(*it.get(), 40);
/// ```
pub struct Cursor<'a, T> {
    slots: &'a [T],
    pos: isize,
}

impl<'a, T> Cursor<'a, T> {
    #[inline]
    pub(crate) fn new(slots: &'a [T], pos: isize) -> Self {
        Self { slots, pos }
    }

    /// Signed slot position relative to the first live element.
    #[inline]
    pub fn position(&self) -> isize {
        self.pos
    }

    /// Returns `true` if the cursor addresses a live element.
    #[inline]
    pub fn is_dereferenceable(&self) -> bool {
        live_index(self.slots.len(), self.pos, 0).is_some()
    }

    /// Dereferences the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor does not address a live element (for example the
    /// end cursor).
    #[inline]
    pub fn get(&self) -> &'a T {
        self.at(0)
    }

    /// Dereferences the cursor, or returns `None` off the live range.
    #[inline]
    pub fn try_get(&self) -> Option<&'a T> {
        self.try_at(0)
    }

    /// The element `n` slots away; `c.at(n)` is `*(c + n)`.
    ///
    /// # Panics
    ///
    /// Panics if `position() + n` is outside the live range.
    #[inline]
    pub fn at(&self, n: isize) -> &'a T {
        match self.try_at(n) {
            Some(item) => item,
            None => fault!(
                "cursor: position {} outside live range (len {})",
                self.pos.saturating_add(n),
                self.slots.len()
            ),
        }
    }

    /// The element `n` slots away, or `None` off the live range.
    #[inline]
    pub fn try_at(&self, n: isize) -> Option<&'a T> {
        let slots = self.slots;
        live_index(slots.len(), self.pos, n).map(|i| &slots[i])
    }

    /// Pre-increment: moves one slot forward and returns the moved cursor.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    /// Pre-decrement: moves one slot back and returns the moved cursor.
    #[inline]
    pub fn retreat(&mut self) -> &mut Self {
        *self -= 1;
        self
    }

    /// Post-increment: moves one slot forward and returns the old cursor.
    #[inline]
    pub fn post_advance(&mut self) -> Self {
        let old = *self;
        *self += 1;
        old
    }

    /// Post-decrement: moves one slot back and returns the old cursor.
    #[inline]
    pub fn post_retreat(&mut self) -> Self {
        let old = *self;
        *self -= 1;
        old
    }

    /// Iterates from the cursor to the end of the live range.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside `[0, len]`.
    pub fn iter(&self) -> slice::Iter<'a, T> {
        let slots = self.slots;
        slots[tail_start(slots.len(), self.pos, "cursor iter")..].iter()
    }

    /// Iterates over the half-open range `[self, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `end` comes from another vector, precedes `self`, or either
    /// position is outside `[0, len]`.
    pub fn to(&self, end: Cursor<'a, T>) -> slice::Iter<'a, T> {
        require!(
            self.same_vector(&end),
            "cursor range: cursors belong to different vectors"
        );
        let slots = self.slots;
        let start = tail_start(slots.len(), self.pos, "cursor range");
        let stop = tail_start(slots.len(), end.pos, "cursor range");
        require!(
            start <= stop,
            "cursor range: start {} > end {}",
            start,
            stop
        );
        slots[start..stop].iter()
    }

    #[inline]
    fn same_vector(&self, other: &Self) -> bool {
        ptr::eq(self.slots.as_ptr(), other.slots.as_ptr())
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Cursor<'_, T> {}

/// An empty cursor: it addresses no vector and is never dereferenceable.
impl<T> Default for Cursor<'_, T> {
    fn default() -> Self {
        Self::new(&[], 0)
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.pos)
            .field("len", &self.slots.len())
            .finish()
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_vector(other) && self.pos == other.pos
    }
}
impl<T> Eq for Cursor<'_, T> {}
impl<T> Ord for Cursor<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.slots.as_ptr() as usize, self.pos).cmp(&(other.slots.as_ptr() as usize, other.pos))
    }
}
impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.pos = moved(self.pos, n);
    }
}
impl<T> SubAssign<isize> for Cursor<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        self.pos = moved_back(self.pos, n);
    }
}
impl<T> Add<isize> for Cursor<'_, T> {
    type Output = Self;
    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}
impl<'a, T> Add<Cursor<'a, T>> for isize {
    type Output = Cursor<'a, T>;
    fn add(self, cursor: Cursor<'a, T>) -> Cursor<'a, T> {
        cursor + self
    }
}
impl<T> Sub<isize> for Cursor<'_, T> {
    type Output = Self;
    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

/// Signed distance between two cursors over the same vector.
impl<'a, T> Sub<Cursor<'a, T>> for Cursor<'a, T> {
    type Output = isize;

    /// # Panics
    ///
    /// Panics if the cursors belong to different vectors.
    fn sub(self, other: Cursor<'a, T>) -> isize {
        require!(
            self.same_vector(&other),
            "cursor difference: cursors belong to different vectors"
        );
        moved_back(self.pos, other.pos)
    }
}

impl<T> Index<isize> for Cursor<'_, T> {
    type Output = T;
    fn index(&self, n: isize) -> &T {
        self.at(n)
    }
}

impl<'a, T> RandomAccessCursor for Cursor<'a, T> {
    type Item = T;

    fn position(&self) -> isize {
        self.pos
    }
    fn live_len(&self) -> usize {
        self.slots.len()
    }
    fn offset_by(&mut self, n: isize) {
        *self += n;
    }
    fn peek(&self) -> Option<&T> {
        self.try_get()
    }
    fn peek_at(&self, n: isize) -> Option<&T> {
        self.try_at(n)
    }
}

/// A read-write random-access cursor.
///
/// Obtained from [`FixedVector::begin_mut`], [`FixedVector::end_mut`],
/// [`FixedVector::cursor_at_mut`], and returned by
/// [`FixedVector::insert`] and [`FixedVector::erase`].
///
/// It holds the unique borrow of the vector, so it is not `Copy`; use
/// [`as_cursor`](Self::as_cursor) to compare it or take differences.
///
/// # Examples
///
/// ```
/// # use fixed_vector::FixedVector;
/// let mut v: FixedVector<i32, 4> = FixedVector::from_array([1, 2, 3]);
/// let mut c = v.begin_mut();
/// c += 1;
/// *c.get_mut() *= 10;
/// c[1] = 0;
/// assert_eq!(v, [1, 20, 0]);
/// ```
pub struct CursorMut<'a, T> {
    slots: &'a mut [T],
    pos: isize,
}

impl<'a, T> CursorMut<'a, T> {
    #[inline]
    pub(crate) fn new(slots: &'a mut [T], pos: isize) -> Self {
        Self { slots, pos }
    }

    /// Signed slot position relative to the first live element.
    #[inline]
    pub fn position(&self) -> isize {
        self.pos
    }

    /// Returns `true` if the cursor addresses a live element.
    #[inline]
    pub fn is_dereferenceable(&self) -> bool {
        live_index(self.slots.len(), self.pos, 0).is_some()
    }

    /// Dereferences the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor does not address a live element.
    #[inline]
    pub fn get(&self) -> &T {
        self.at(0)
    }

    /// Mutably dereferences the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor does not address a live element.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.at_mut(0)
    }

    /// Dereferences the cursor, or returns `None` off the live range.
    #[inline]
    pub fn try_get(&self) -> Option<&T> {
        live_index(self.slots.len(), self.pos, 0).map(|i| &self.slots[i])
    }

    /// Mutably dereferences the cursor, or returns `None` off the live range.
    #[inline]
    pub fn try_get_mut(&mut self) -> Option<&mut T> {
        let i = live_index(self.slots.len(), self.pos, 0)?;
        Some(&mut self.slots[i])
    }

    /// Converts the cursor into a reference to its element with the full
    /// borrow lifetime.
    ///
    /// # Panics
    ///
    /// Panics if the cursor does not address a live element.
    pub fn into_mut(self) -> &'a mut T {
        let slots = self.slots;
        match live_index(slots.len(), self.pos, 0) {
            Some(i) => &mut slots[i],
            None => fault!(
                "cursor: position {} outside live range (len {})",
                self.pos,
                slots.len()
            ),
        }
    }

    /// The element `n` slots away.
    ///
    /// # Panics
    ///
    /// Panics if `position() + n` is outside the live range.
    pub fn at(&self, n: isize) -> &T {
        match live_index(self.slots.len(), self.pos, n) {
            Some(i) => &self.slots[i],
            None => fault!(
                "cursor: position {} outside live range (len {})",
                self.pos.saturating_add(n),
                self.slots.len()
            ),
        }
    }

    /// The element `n` slots away, mutably.
    ///
    /// # Panics
    ///
    /// Panics if `position() + n` is outside the live range.
    pub fn at_mut(&mut self, n: isize) -> &mut T {
        match live_index(self.slots.len(), self.pos, n) {
            Some(i) => &mut self.slots[i],
            None => fault!(
                "cursor: position {} outside live range (len {})",
                self.pos.saturating_add(n),
                self.slots.len()
            ),
        }
    }

    /// Pre-increment.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    /// Pre-decrement.
    #[inline]
    pub fn retreat(&mut self) -> &mut Self {
        *self -= 1;
        self
    }

    /// A read-only cursor at the same position, reborrowing this one.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.slots, self.pos)
    }

    /// Downgrades into a read-only cursor with the full borrow lifetime.
    #[inline]
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.slots, self.pos)
    }

    /// Mutably iterates from the cursor to the end of the live range.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside `[0, len]`.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        let start = tail_start(self.slots.len(), self.pos, "cursor iter_mut");
        self.slots[start..].iter_mut()
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.pos)
            .field("len", &self.slots.len())
            .finish()
    }
}

impl<T> AddAssign<isize> for CursorMut<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.pos = moved(self.pos, n);
    }
}
impl<T> SubAssign<isize> for CursorMut<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        self.pos = moved_back(self.pos, n);
    }
}
impl<T> Add<isize> for CursorMut<'_, T> {
    type Output = Self;
    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}
impl<T> Sub<isize> for CursorMut<'_, T> {
    type Output = Self;
    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<T> Index<isize> for CursorMut<'_, T> {
    type Output = T;
    fn index(&self, n: isize) -> &T {
        self.at(n)
    }
}
impl<T> IndexMut<isize> for CursorMut<'_, T> {
    fn index_mut(&mut self, n: isize) -> &mut T {
        self.at_mut(n)
    }
}

impl<'a, T> RandomAccessCursor for CursorMut<'a, T> {
    type Item = T;

    fn position(&self) -> isize {
        self.pos
    }
    fn live_len(&self) -> usize {
        self.slots.len()
    }
    fn offset_by(&mut self, n: isize) {
        *self += n;
    }
    fn peek(&self) -> Option<&T> {
        self.try_get()
    }
    fn peek_at(&self, n: isize) -> Option<&T> {
        live_index(self.slots.len(), self.pos, n).map(|i| &self.slots[i])
    }
}

impl<T, const N: usize> FixedVector<T, N> {
    /// Cursor at the first live element (equal to [`end`](Self::end) when empty).
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Cursor one past the last live element.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.len as isize)
    }

    /// Read-only alias of [`begin`](Self::begin).
    #[inline]
    pub fn cbegin(&self) -> Cursor<'_, T> {
        self.begin()
    }

    /// Read-only alias of [`end`](Self::end).
    #[inline]
    pub fn cend(&self) -> Cursor<'_, T> {
        self.end()
    }

    /// Mutable cursor at the first live element.
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice(), 0)
    }

    /// Mutable cursor one past the last live element.
    #[inline]
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len as isize;
        CursorMut::new(self.as_mut_slice(), len)
    }

    /// Cursor at `index`; `index == len()` yields the end cursor.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn cursor_at(&self, index: usize) -> Cursor<'_, T> {
        require!(
            index <= self.len,
            "cursor_at: index {} out of bounds (len {})",
            index,
            self.len
        );
        Cursor::new(self.as_slice(), index as isize)
    }

    /// Mutable cursor at `index`; `index == len()` yields the end cursor.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn cursor_at_mut(&mut self, index: usize) -> CursorMut<'_, T> {
        require!(
            index <= self.len,
            "cursor_at_mut: index {} out of bounds (len {})",
            index,
            self.len
        );
        CursorMut::new(self.as_mut_slice(), index as isize)
    }
}
