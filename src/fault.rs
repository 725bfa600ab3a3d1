// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Precondition faults and rejections.
//!
//! Every precondition violation in the crate goes through `fault!` (or
//! `require!`), so all of them panic the same way and, with the `log`
//! feature, leave one `error` record behind. Fallible `try_*` methods report
//! their rejections through `reject!` at `debug` level.
//!
//! With `log` disabled the logging half compiles to nothing.

/// Logs (with `log`) and panics with the given message.
macro_rules! fault {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        ::log::error!($($arg)+);
        panic!($($arg)+)
    }};
}

/// Faults unless `cond` holds.
macro_rules! require {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            fault!($($arg)+);
        }
    };
}

/// Logs (with `log`) and returns `Err($err)` from the enclosing function.
macro_rules! reject {
    ($err:expr, $($arg:tt)+) => {{
        #[cfg(feature = "log")]
        ::log::debug!($($arg)+);
        return Err($err);
    }};
}
