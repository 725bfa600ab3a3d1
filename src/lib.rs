// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `fixed-vector`
//!
//! A `no_std`, fixed-capacity vector whose elements live **inline**, inside
//! the container's own memory footprint.
//!
//! The core type, [`FixedVector<T, N>`], owns `N` storage slots and tracks a
//! logical length `len ∈ 0..=N`. It behaves like a growable sequence but
//! never allocates and never grows past `N`. Traversal is exposed both as
//! slices (through `Deref<Target = [T]>`) and as random-access cursors
//! ([`Cursor`], [`CursorMut`]) that support positional arithmetic.
//!
//! ## When to use this crate
//!
//! - You know the maximum element count at compile time.
//! - You want `Vec`-like ergonomics without heap allocation: embedded
//!   buffers, hot-path scratch storage, fixed-size protocol fields.
//! - Your element types may own resources: `T` needs no `Copy` or `Default`
//!   bound, and vacated slots are dropped exactly once.
//!
//! It is a poor fit when capacities are large, or when the container is
//! passed around by value a lot: moving a `FixedVector` moves all `N` slots.
//!
//! ## Capacity is law
//!
//! Violating a precondition (pushing onto a full vector, indexing past
//! `len`, popping an empty vector, inserting at a position past the end,
//! constructing from more than `N` values) is a programmer error and
//! **panics**, in debug and release builds alike.
//!
//! Where recovering is reasonable, a `try_*` companion returns
//! [`Error`] instead and leaves the vector unchanged:
//! [`FixedVector::try_push_back`], [`FixedVector::try_insert`],
//! [`FixedVector::try_assign_iter`], [`FixedVector::try_extend_from_iter`],
//! [`FixedVector::try_from_iter`] and `TryFrom<&[T]>`.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` as a plain sequence. Deserializing
//!   more than `N` elements is an error.
//! - `log`: faults are logged at `error` level right before panicking, and
//!   rejected fallible calls at `debug` level, through the `log` facade.
//!
//! ## Example
//!
//! ```rust
//! use fixed_vector::{fixed_vector, FixedVector};
//!
//! let mut v: FixedVector<u32, 4> = fixed_vector![1, 2, 3];
//! assert!(!v.is_full());
//!
//! v.push_back(4);
//! assert!(v.is_full());
//!
//! v.erase(1);
//! assert_eq!(v, [1, 3, 4]);
//!
//! v.insert(1, 9);
//! assert_eq!(v, [1, 9, 3, 4]);
//!
//! let begin = v.begin();
//! let end = v.end();
//! assert_eq!(end - begin, 4);
//! assert_eq!(begin[1], 9);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
extern crate alloc;

// Modules
#[macro_use]
mod fault;
mod cursor;
mod error;
mod index;
mod iter;
mod macros;
#[cfg(feature = "serde")]
mod serde;
mod vec;

#[cfg(test)]
mod properties;

// Public exports (crate API surface)
pub use cursor::{Cursor, CursorMut, RandomAccessCursor};
pub use error::Error;
pub use iter::IntoIter;
pub use vec::FixedVector;
