pub mod distance;
pub mod intensity;

pub use distance::*;
pub use intensity::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Input is empty")]
    Empty,
    #[error("Input {0:?} does not start with a number")]
    NotANumber(String),
    #[error("Value {value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

/// Reads the integer at the start of `input` the way a form field is read:
/// leading whitespace and an optional sign are accepted, a `0x` prefix
/// switches to hex, then every leading digit is consumed and whatever
/// follows is ignored.
/// `"12.7"` reads as 12, `" 4 rows"` as 4, `"0x1E"` as 30.
pub fn parse_leading_int(input: &str) -> Result<i64, self::Error> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Err(self::Error::Empty);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return Err(self::Error::NotANumber(input.to_string()));
    }

    // Anything too large for i64 can never be in range for our callers,
    // so it saturates instead of failing.
    let value = digits[..end].chars().fold(0i64, |acc, c| {
        let digit = c.to_digit(radix).map_or(0, i64::from);
        acc.saturating_mul(i64::from(radix)).saturating_add(digit)
    });
    Ok(if negative { -value } else { value })
}

#[test]
fn leading_int_plain() {
    assert_eq!(parse_leading_int("42"), Ok(42));
}

#[test]
fn leading_int_zero() {
    assert_eq!(parse_leading_int("0"), Ok(0));
}

#[test]
fn leading_int_signs() {
    assert_eq!(parse_leading_int("-1"), Ok(-1));
    assert_eq!(parse_leading_int("+7"), Ok(7));
}

#[test]
fn leading_int_trailing_garbage() {
    assert_eq!(parse_leading_int("3abc"), Ok(3));
    assert_eq!(parse_leading_int("12.7"), Ok(12));
    assert_eq!(parse_leading_int("  4 rows"), Ok(4));
}

#[test]
fn leading_int_empty() {
    assert_eq!(parse_leading_int(""), Err(Error::Empty));
    assert_eq!(parse_leading_int("   "), Err(Error::Empty));
}

#[test]
fn leading_int_not_a_number() {
    assert!(matches!(parse_leading_int("abc"), Err(Error::NotANumber(_))));
    assert!(matches!(parse_leading_int("-"), Err(Error::NotANumber(_))));
    assert!(matches!(parse_leading_int(".5"), Err(Error::NotANumber(_))));
}

#[test]
fn leading_int_hex_prefix() {
    assert_eq!(parse_leading_int("0x1E"), Ok(30));
    assert_eq!(parse_leading_int("0X2"), Ok(2));
    assert_eq!(parse_leading_int("-0x10"), Ok(-16));
    assert_eq!(parse_leading_int("0x1Fzz"), Ok(31));
    assert!(matches!(parse_leading_int("0x"), Err(Error::NotANumber(_))));
    assert!(matches!(parse_leading_int("0xg"), Err(Error::NotANumber(_))));
}

#[test]
fn leading_int_saturates() {
    assert_eq!(parse_leading_int("99999999999999999999999"), Ok(i64::MAX));
}
