#![cfg(feature = "alloc")]

use alloc::format;
use alloc::string::{String, ToString};

use super::error::ErrorKind;
use super::{CheckedCombine, Combine, Error, Kind, Rational, Value, add, add_values, try_add};

#[inline]
fn rational(numerator: i32, denominator: i32) -> Value {
    Value::Rational(Rational::new(numerator, denominator))
}

#[test]
fn test_add_integers() {
    assert_eq!(add!(2, 3, 4), 9);
    assert_eq!(add!(2, 5), 7);
    assert_eq!(add(2, [3, 4]), 9);
    assert_eq!(add!(-2i64, 5, -10,), -7);
}

#[test]
fn test_add_is_left_to_right() {
    let s = add!(
        String::from("a"),
        String::from("b"),
        String::from("c"),
        String::from("d")
    );
    assert_eq!(s, "abcd");
}

#[test]
fn test_result_type_is_first_operand_type() {
    let sum: u16 = add!(1u16, 2, 3);
    assert_eq!(sum, 6);

    let r: Rational = add!(Rational::from(2), Rational::new(3, 5));
    assert_eq!(r, Rational::new(6, 5));
}

#[test]
fn test_add_rational() {
    let a = Rational::new(3, 4);
    let b = Rational::new(4, 4);
    let c = Rational::new(5, 4);

    let r = add!(a, b, c);
    assert_eq!(r.numerator(), 60);
    assert_eq!(r.denominator(), 64);
    assert_eq!(r.to_string(), "60/64");

    // Operands are untouched and may be reused.
    assert_eq!(a, Rational::new(3, 4));
    assert_eq!(add!(a, a), Rational::new(9, 16));
}

#[test]
fn test_rational_defaults() {
    let r = Rational::default();
    assert_eq!(r.numerator(), 0);
    assert_eq!(r.denominator(), 1);
    assert_eq!(Rational::from(7), Rational::new(7, 1));
}

#[test]
fn test_rational_zero_denominator() {
    let r = add!(Rational::new(1, 0), Rational::new(2, 3));
    assert_eq!(r, Rational::new(2, 0));
}

#[test]
fn test_combine_does_not_panic() {
    assert_eq!(i32::MAX.combine(1), i32::MIN);
    assert_eq!(add!(u8::MAX, 1, 1), 1);

    let r = Rational::new(i32::MAX, 2).combine(Rational::new(2, 2));
    assert_eq!(r, Rational::new(-2, 4));

    assert_eq!(f64::MAX.combine(f64::MAX), f64::INFINITY);
}

#[test]
fn test_checked_combine() {
    assert_eq!(1i32.checked_combine(2), Some(3));
    assert_eq!(i32::MAX.checked_combine(1), None);
    assert_eq!(f32::MAX.checked_combine(f32::MAX), None);
    assert_eq!(
        Rational::new(2, 3).checked_combine(Rational::new(5, 7)),
        Some(Rational::new(10, 21))
    );
    assert_eq!(
        Rational::new(1, i32::MAX).checked_combine(Rational::new(1, 2)),
        None
    );
}

#[test]
fn test_try_add() -> Result<(), Error> {
    assert_eq!(try_add(&[2, 3, 4])?, 9);
    assert_eq!(try_add(&[2, 5])?, 7);

    let r = try_add(&[
        Rational::new(3, 4),
        Rational::new(4, 4),
        Rational::new(5, 4),
    ])?;
    assert_eq!(r, Rational::new(60, 64));
    Ok(())
}

#[test]
fn test_try_add_too_few() {
    assert_eq!(
        try_add::<i32>(&[]).unwrap_err().kind(),
        ErrorKind::TooFewOperands { count: 0 }
    );
    assert_eq!(
        try_add(&[1]).unwrap_err().kind(),
        ErrorKind::TooFewOperands { count: 1 }
    );
}

#[test]
fn test_try_add_overflow() {
    assert_eq!(
        try_add(&[1u8, 2, 255, 4]).unwrap_err().kind(),
        ErrorKind::Overflow { index: 2 }
    );
}

#[test]
fn test_add_values() -> Result<(), Error> {
    let sum = add_values(&[Value::Int(2), Value::Int(3), Value::Int(4)])?;
    assert_eq!(sum, Value::Int(9));
    assert_eq!(sum.kind(), Kind::Int);

    let r = add_values(&[rational(3, 4), rational(4, 4), rational(5, 4)])?;
    assert_eq!(r, rational(60, 64));
    assert_eq!(r.kind(), Kind::Rational);
    assert_eq!(r.to_string(), "60/64");
    Ok(())
}

#[test]
fn test_add_values_too_few() {
    assert_eq!(
        add_values(&[]).unwrap_err().kind(),
        ErrorKind::TooFewOperands { count: 0 }
    );
    assert_eq!(
        add_values(&[Value::Int(1)]).unwrap_err().kind(),
        ErrorKind::TooFewOperands { count: 1 }
    );
}

#[test]
fn test_add_values_mismatch() {
    let values = [Value::Int(1), Value::Int(2), rational(1, 2), Value::Int(3)];

    assert_eq!(
        add_values(&values).unwrap_err().kind(),
        ErrorKind::Mismatch {
            index: 2,
            expected: Kind::Int,
            actual: Kind::Rational,
        }
    );
}

#[test]
fn test_add_values_checks_kinds_before_overflow() {
    let values = [Value::Int(i64::MAX), Value::Int(1), rational(1, 1)];

    assert_eq!(
        add_values(&values).unwrap_err().kind(),
        ErrorKind::Mismatch {
            index: 2,
            expected: Kind::Int,
            actual: Kind::Rational,
        }
    );
}

#[test]
fn test_add_values_overflow() {
    let values = [Value::Int(1), Value::Int(i64::MAX)];

    assert_eq!(
        add_values(&values).unwrap_err().kind(),
        ErrorKind::Overflow { index: 1 }
    );
}

#[test]
fn test_error_display() {
    let e = add_values(&[Value::Int(1), rational(1, 2)]).unwrap_err();
    assert_eq!(
        format!("{e}"),
        "Operand 1 is rational, but the first operand is int"
    );

    let e = try_add(&[1]).unwrap_err();
    assert_eq!(
        format!("{e}"),
        "Accumulation requires at least two operands, got 1"
    );
}
