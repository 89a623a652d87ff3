use crate::error::ErrorKind;
use crate::{CheckedCombine, Combine, Error};

/// Accumulate `first` followed by every element of `rest`, left to right.
///
/// All operands share the type `T`, and the result is a `T` as well. `rest`
/// must hold at least one element; an empty tail is a compile error raised
/// when `add` is instantiated. Prefer the [`add!`][crate::add!] macro, which
/// spells the call as a flat operand list.
///
/// # Examples
///
/// ```
/// use accum::add;
///
/// assert_eq!(add(2, [3, 4]), 9);
/// assert_eq!(add(2, [5]), 7);
/// ```
///
/// An empty tail does not compile:
///
/// ```compile_fail
/// let _ = accum::add(2, []);
/// ```
#[inline]
pub fn add<T, const N: usize>(first: T, rest: [T; N]) -> T
where
    T: Combine,
{
    const { assert!(N > 0, "accumulation requires at least two operands") };
    rest.into_iter().fold(first, T::combine)
}

/// Accumulate a slice of operands whose length is only known at run time.
///
/// Unlike [`add`], the length is checked at run time and overflow is
/// reported instead of wrapping.
///
/// # Errors
///
/// Errors if `operands` holds fewer than two elements, or if combining the
/// operand at some index overflows.
///
/// # Examples
///
/// ```
/// use accum::try_add;
///
/// assert_eq!(try_add(&[2, 3, 4])?, 9);
/// assert!(try_add(&[2]).is_err());
/// assert!(try_add(&[i32::MAX, 1]).is_err());
/// # Ok::<_, accum::Error>(())
/// ```
pub fn try_add<T>(operands: &[T]) -> Result<T, Error>
where
    T: CheckedCombine + Clone,
{
    let [first, rest @ ..] = operands else {
        tracing::trace!(count = 0, "Rejected empty operand list");
        return Err(Error::new(ErrorKind::TooFewOperands { count: 0 }));
    };

    if rest.is_empty() {
        tracing::trace!(count = 1, "Rejected single operand");
        return Err(Error::new(ErrorKind::TooFewOperands { count: 1 }));
    }

    let mut acc = first.clone();

    for (index, operand) in rest.iter().enumerate() {
        let index = index + 1;

        let Some(next) = acc.checked_combine(operand.clone()) else {
            tracing::trace!(index, "Accumulation overflowed");
            return Err(Error::new(ErrorKind::Overflow { index }));
        };

        acc = next;
    }

    Ok(acc)
}
