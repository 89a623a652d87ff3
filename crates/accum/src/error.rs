use core::fmt;

use crate::Kind;

#[non_exhaustive]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Create a new `Error` with the specified kind.
    #[inline]
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Get the kind of error.
    #[inline]
    #[cfg(all(test, feature = "alloc"))]
    pub(crate) fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub(crate) enum ErrorKind {
    TooFewOperands {
        count: usize,
    },
    Mismatch {
        index: usize,
        expected: Kind,
        actual: Kind,
    },
    Overflow {
        index: usize,
    },
}

#[cfg(test)]
impl PartialEq<ErrorKind> for &ErrorKind {
    #[inline]
    fn eq(&self, other: &ErrorKind) -> bool {
        **self == *other
    }
}

impl core::error::Error for Error {}

impl fmt::Debug for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::TooFewOperands { count } => {
                write!(f, "Accumulation requires at least two operands, got {count}")
            }
            ErrorKind::Mismatch {
                index,
                expected,
                actual,
            } => write!(
                f,
                "Operand {index} is {actual}, but the first operand is {expected}"
            ),
            ErrorKind::Overflow { index } => {
                write!(f, "Accumulation overflowed at operand {index}")
            }
        }
    }
}
