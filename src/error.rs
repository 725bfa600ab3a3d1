// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `FixedVector`.
//!
//! Only the fallible `try_*` companions return these. The primary API treats
//! the same conditions as precondition violations and panics.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by the fallible operations of
/// [`FixedVector`](crate::FixedVector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The operation would exceed the fixed capacity (`N`).
    Full,
    /// An index or position was outside the live range.
    OutOfBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
            Self::OutOfBounds => f.write_str("position out of bounds"),
        }
    }
}

impl CoreError for Error {}
