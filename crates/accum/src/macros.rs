/// Accumulate two or more operands of the same type, left to right.
///
/// Expands to a call to [`add`][crate::add()] with the first operand
/// separated from the rest.
///
/// # Examples
///
/// ```
/// use accum::add;
///
/// assert_eq!(add!(2, 3, 4), 9);
/// assert_eq!(add!(1.5f64, 2.5), 4.0);
/// ```
///
/// A single operand is rejected:
///
/// ```compile_fail
/// let _ = accum::add!(2);
/// ```
///
/// So are operands of different types:
///
/// ```compile_fail
/// let _ = accum::add!(2i32, 5i64);
/// ```
///
/// And types without a [`Combine`][crate::Combine] implementation:
///
/// ```compile_fail
/// let _ = accum::add!("a", "b");
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! __add {
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::add($first, [$($rest),+])
    };
}
