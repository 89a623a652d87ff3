//! Accumulation of operands under compile-time constraints.
//!
//! [`add`] and [`add!`] fold two or more operands of one type left to right.
//! Which operands are admissible is decided by the type system:
//!
//! * Every operand has the same type `T`, so mixing operand types is a type
//!   error.
//! * There are at least two operands. The macro grammar requires them and
//!   [`add`] rejects an empty tail while it is being monomorphized.
//! * `T` implements [`Combine`], so the combination is expressible.
//! * [`Combine::combine`] never panics and returns `T`, the type of the
//!   first operand.
//!
//! When the operands are only known at run time, [`try_add`] and
//! [`add_values`] perform the same checks and report violations as an
//! [`Error`].
//!
//! # Examples
//!
//! ```
//! use accum::{Rational, add};
//!
//! assert_eq!(add!(2, 3, 4), 9);
//! assert_eq!(add!(2, 5), 7);
//!
//! let r = add!(Rational::new(3, 4), Rational::new(4, 4), Rational::new(5, 4));
//! assert_eq!(r, Rational::new(60, 64));
//! ```
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(all(test, feature = "alloc"))]
mod tests;

mod macros;
#[doc(inline)]
pub use crate::__add as add;

mod combine;
pub use self::combine::{CheckedCombine, Combine};

mod accumulate;
pub use self::accumulate::{add, try_add};

mod rational;
pub use self::rational::Rational;

mod value;
pub use self::value::{Kind, Value, add_values};

mod error;
pub use self::error::Error;
