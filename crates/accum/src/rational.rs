use core::fmt;

use crate::{CheckedCombine, Combine};

/// A rational number defined by its numerator and denominator.
///
/// No invariant is enforced: the denominator may be zero, and fractions are
/// never reduced. Equality is structural, so `2/4` and `1/2` differ.
///
/// # Examples
///
/// ```
/// use accum::Rational;
///
/// let r = Rational::new(3, 4);
/// assert_eq!(r.numerator(), 3);
/// assert_eq!(r.denominator(), 4);
/// assert_eq!(Rational::default(), Rational::new(0, 1));
/// assert_eq!(Rational::from(5), Rational::new(5, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: i32,
    denominator: i32,
}

impl Rational {
    /// Construct a new rational number.
    #[inline]
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// The numerator.
    #[inline]
    pub const fn numerator(&self) -> i32 {
        self.numerator
    }

    /// The denominator.
    #[inline]
    pub const fn denominator(&self) -> i32 {
        self.denominator
    }
}

impl Default for Rational {
    #[inline]
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl From<i32> for Rational {
    #[inline]
    fn from(numerator: i32) -> Self {
        Self::new(numerator, 1)
    }
}

impl fmt::Display for Rational {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Placeholder combination which multiplies numerators and denominators
/// pairwise. Both products wrap on overflow.
///
/// Neither operand is modified; a new value is returned.
///
/// # Examples
///
/// ```
/// use accum::{Combine, Rational};
///
/// let a = Rational::new(3, 4);
/// let b = Rational::new(4, 4);
/// assert_eq!(a.combine(b), Rational::new(12, 16));
/// assert_eq!(a, Rational::new(3, 4));
/// ```
impl Combine for Rational {
    #[inline]
    fn combine(self, rhs: Self) -> Self {
        Self::new(
            self.numerator.wrapping_mul(rhs.numerator),
            self.denominator.wrapping_mul(rhs.denominator),
        )
    }
}

impl CheckedCombine for Rational {
    #[inline]
    fn checked_combine(self, rhs: Self) -> Option<Self> {
        Some(Self::new(
            self.numerator.checked_mul(rhs.numerator)?,
            self.denominator.checked_mul(rhs.denominator)?,
        ))
    }
}
