use core::fmt;

use crate::error::ErrorKind;
use crate::{CheckedCombine, Error, Rational};

/// The kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Kind {
    /// A 64-bit signed integer.
    Int,
    /// A [`Rational`].
    Rational,
}

impl fmt::Display for Kind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Int => write!(f, "int"),
            Kind::Rational => write!(f, "rational"),
        }
    }
}

/// An operand whose type is only known at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Value {
    Int(i64),
    Rational(Rational),
}

impl Value {
    /// Get the kind of the value.
    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(..) => Kind::Int,
            Value::Rational(..) => Kind::Rational,
        }
    }

    fn checked_combine(self, rhs: Self, index: usize) -> Result<Self, Error> {
        let value = match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => a.checked_combine(b).map(Value::Int),
            (Value::Rational(a), Value::Rational(b)) => {
                a.checked_combine(b).map(Value::Rational)
            }
            (a, b) => {
                return Err(Error::new(ErrorKind::Mismatch {
                    index,
                    expected: a.kind(),
                    actual: b.kind(),
                }));
            }
        };

        value.ok_or_else(|| Error::new(ErrorKind::Overflow { index }))
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<Rational> for Value {
    #[inline]
    fn from(value: Rational) -> Self {
        Value::Rational(value)
    }
}

impl fmt::Display for Value {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => value.fmt(f),
            Value::Rational(value) => value.fmt(f),
        }
    }
}

/// Accumulate operands of run-time type, left to right.
///
/// Every operand must have the kind of the first one. All operands are
/// checked before any of them is combined, and the result has the kind of
/// the first operand.
///
/// # Errors
///
/// Errors if fewer than two operands are given, if an operand has a
/// different kind than the first, or if the accumulation overflows.
///
/// # Examples
///
/// ```
/// use accum::{Rational, Value, add_values};
///
/// let sum = add_values(&[Value::Int(2), Value::Int(3), Value::Int(4)])?;
/// assert_eq!(sum, Value::Int(9));
///
/// let mixed = [Value::Int(2), Value::Rational(Rational::new(1, 2))];
/// assert!(add_values(&mixed).is_err());
/// # Ok::<_, accum::Error>(())
/// ```
pub fn add_values(values: &[Value]) -> Result<Value, Error> {
    let [first, rest @ ..] = values else {
        tracing::trace!(count = 0, "Rejected empty operand list");
        return Err(Error::new(ErrorKind::TooFewOperands { count: 0 }));
    };

    if rest.is_empty() {
        tracing::trace!(count = 1, "Rejected single operand");
        return Err(Error::new(ErrorKind::TooFewOperands { count: 1 }));
    }

    let expected = first.kind();

    if let Some((index, actual)) = rest
        .iter()
        .map(Value::kind)
        .enumerate()
        .find(|&(_, kind)| kind != expected)
    {
        let index = index + 1;
        tracing::trace!(index, %expected, %actual, "Rejected operand of wrong kind");
        return Err(Error::new(ErrorKind::Mismatch {
            index,
            expected,
            actual,
        }));
    }

    let mut acc = *first;

    for (index, value) in rest.iter().enumerate() {
        acc = acc.checked_combine(*value, index + 1)?;
    }

    Ok(acc)
}
