//! `GrowVec`: a growable contiguous container with cursor-based positioning.
//!
//! `GrowVec<T>` stores an ordered, index-addressable sequence of values in a
//! single exclusively owned buffer. Appending is amortized O(1) via a 1.5x
//! capacity growth policy, and positional mutation (insert/erase at
//! arbitrary offsets) is shift-based. Positions can be addressed by index or
//! by a [`Cursor`], a plain position marker obtained from
//! [`begin`](GrowVec::begin)/[`end`](GrowVec::end).
//!
//! ```
//! use growvec::{growvec, GrowVec};
//!
//! let mut values = growvec![1, 2, 3, 4, 5];
//! values.push(6);
//! assert_eq!(values.len(), 6);
//!
//! // positional mutation
//! assert_eq!(values.remove(2), Some(3));
//! values.insert(2, 30).unwrap();
//! assert_eq!(values, [1, 2, 30, 4, 5, 6]);
//!
//! // cursors mark slots without borrowing the container
//! let mid = values.begin() + 2;
//! assert_eq!(values.cursor_get(mid), Some(&30));
//! assert_eq!(values.end() - values.begin(), 6);
//! ```
//!
//! # Capacity and growth
//!
//! [`capacity`](GrowVec::capacity) counts allocated slots,
//! [`len`](GrowVec::len) counts live elements, and `len <= capacity` always
//! holds. [`reserve`](GrowVec::reserve) and
//! [`shrink_to_fit`](GrowVec::shrink_to_fit) reallocate to an exact
//! capacity; mutations that run out of room grow to
//! `max(required, capacity * 3 / 2)`.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut values: GrowVec<u32> = GrowVec::new();
//! assert_eq!(values.capacity(), 0); // no allocation yet
//!
//! for i in 0..5 {
//!     values.push(i);
//! }
//! assert_eq!(values.capacity(), 6); // grew 1, 2, 3, 4, 6
//!
//! values.shrink_to_fit();
//! assert_eq!(values.capacity(), values.len());
//! ```
//!
//! # Element-wise arithmetic
//!
//! Containers of numeric payloads support pure arithmetic: `+` concatenates,
//! `-` subtracts element-wise (padding the shorter operand with the payload
//! default), `*` and `/` operate element-wise over equal lengths with
//! checked [`try_mul`](GrowVec::try_mul)/[`try_div`](GrowVec::try_div)
//! forms, and the `*_scalar` methods broadcast a scalar.
//!
//! ```
//! use growvec::growvec;
//!
//! let a = growvec![1, 2, 3];
//! let b = growvec![4, 5, 6];
//! assert_eq!(&a + &b, [1, 2, 3, 4, 5, 6]);
//! assert_eq!(&a * &b, [4, 10, 18]);
//! assert_eq!(a.mul_scalar(&10), [10, 20, 30]);
//!
//! assert!(a.try_mul(&growvec![1, 2]).is_err()); // size mismatch
//! ```
//!
//! Comparison is length-primary: a shorter container orders before a longer
//! one regardless of element values, and elements break ties only between
//! equal lengths.
//!
//! # Failure policy
//!
//! Checked accessors ([`at`](GrowVec::at), [`front`](GrowVec::front),
//! [`back`](GrowVec::back), [`insert`](GrowVec::insert)) return
//! [`GrowVecError`]; `Option`-returning forms ([`get`](GrowVec::get),
//! [`pop`](GrowVec::pop), [`remove`](GrowVec::remove)) signal "nothing
//! there" without an error; bracket indexing panics with the out-of-bounds
//! message. No failing operation leaves the container partially mutated.

mod core;
mod cursor;
mod error;
mod iter;
mod ops;
mod raw;

pub use crate::core::GrowVec;
pub use crate::cursor::Cursor;
pub use crate::error::GrowVecError;
pub use crate::iter::GrowVecIter;

/// Creates a [`GrowVec`] from a list of elements, mirroring `vec!`.
///
/// ```
/// use growvec::{growvec, GrowVec};
///
/// let values = growvec![1, 2, 3];
/// assert_eq!(values, [1, 2, 3]);
///
/// let fives = growvec![5; 4];
/// assert_eq!(fives, [5, 5, 5, 5]);
///
/// let empty: GrowVec<u8> = growvec![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! growvec {
    () => {
        $crate::GrowVec::new()
    };
    ($value:expr; $count:expr) => {
        $crate::GrowVec::with_value($count, $value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::GrowVec::from([$($value),+])
    };
}
