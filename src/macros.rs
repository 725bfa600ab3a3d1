// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Creates a [`FixedVector`](crate::FixedVector) from a literal list.
///
/// - `fixed_vector![a, b, c]`: capacity inferred from context.
/// - `fixed_vector![CAP => a, b, c]`: explicit capacity.
/// - `fixed_vector![x; n]` and `fixed_vector![CAP => x; n]`: `n` clones of
///   `x` (`n` may be a runtime value).
///
/// # Panics
///
/// Panics if there are more values than the capacity.
///
/// # Examples
///
/// ```
/// use fixed_vector::{fixed_vector, FixedVector};
///
/// let a: FixedVector<i32, 4> = fixed_vector![1, 2];
/// let b = fixed_vector![8 => 1, 2];
/// assert_eq!(a, b);
/// assert_eq!(b.capacity(), 8);
///
/// let zeros = fixed_vector![4 => 0u8; 3];
/// assert_eq!(zeros, [0, 0, 0]);
/// ```
#[macro_export]
macro_rules! fixed_vector {
    [$cap:expr => $($e:expr),* $(,)?] => {
        {
            $crate::FixedVector::<_, { $cap }>::from_array([$($e),*])
        }
    };
    [$($e:expr),* $(,)?] => {
        {
            $crate::FixedVector::from_array([$($e),*])
        }
    };
    [$cap:expr => $e:expr; $n:expr] => {
        {
            $crate::FixedVector::<_, { $cap }>::from_elem($n, $e)
        }
    };
    [$e:expr; $n:expr] => {
        {
            $crate::FixedVector::from_elem($n, $e)
        }
    };
}
