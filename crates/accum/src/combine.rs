#[cfg(feature = "alloc")]
use alloc::string::String;

/// A binary combination which cannot fail.
///
/// Implementations must not panic for any pair of operands. Arithmetic on
/// primitive integers therefore wraps on overflow instead of panicking in
/// debug builds. The result has the same type as the left operand.
///
/// # Examples
///
/// ```
/// use accum::Combine;
///
/// assert_eq!(2u8.combine(3), 5);
/// assert_eq!(250u8.combine(10), 4);
/// ```
pub trait Combine
where
    Self: Sized,
{
    /// Combine `self` with `rhs`, consuming both.
    fn combine(self, rhs: Self) -> Self;
}

/// A [`Combine`] which can detect when the combined value is not
/// representable.
///
/// # Examples
///
/// ```
/// use accum::CheckedCombine;
///
/// assert_eq!(2u8.checked_combine(3), Some(5));
/// assert_eq!(250u8.checked_combine(10), None);
/// ```
pub trait CheckedCombine: Combine {
    /// Combine `self` with `rhs`, returning `None` on overflow.
    fn checked_combine(self, rhs: Self) -> Option<Self>;
}

macro_rules! combine_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Combine for $ty {
                #[inline]
                fn combine(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }
            }

            impl CheckedCombine for $ty {
                #[inline]
                fn checked_combine(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }
            }
        )*
    };
}

combine_int!(u8, u16, u32, u64, u128, usize);
combine_int!(i8, i16, i32, i64, i128, isize);

macro_rules! combine_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Combine for $ty {
                #[inline]
                fn combine(self, rhs: Self) -> Self {
                    self + rhs
                }
            }

            /// Overflow to an infinity or NaN is reported as `None`.
            impl CheckedCombine for $ty {
                #[inline]
                fn checked_combine(self, rhs: Self) -> Option<Self> {
                    let value = self + rhs;
                    value.is_finite().then_some(value)
                }
            }
        )*
    };
}

combine_float!(f32, f64);

/// [`Combine`] implementation for `String`, which appends `rhs`.
///
/// # Examples
///
/// ```
/// use accum::add;
///
/// let s = add!(String::from("com"), String::from("pound"), String::from("!"));
/// assert_eq!(s, "compound!");
/// ```
#[cfg(feature = "alloc")]
impl Combine for String {
    #[inline]
    fn combine(mut self, rhs: Self) -> Self {
        self.push_str(&rhs);
        self
    }
}

#[cfg(feature = "alloc")]
impl CheckedCombine for String {
    #[inline]
    fn checked_combine(self, rhs: Self) -> Option<Self> {
        Some(self.combine(rhs))
    }
}
