//! Positional decoding of alphanumeric digit strings.
//!
//! Digits `0-9` carry their decimal value and letters carry `10..=35`
//! case-insensitively (`A` and `a` are both ten), which bounds the usable
//! bases to `2..=36`. Every character is validated against the base before it
//! is accumulated.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::DecodeError;

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;
/// Largest base expressible with the `0-9A-Z` alphabet.
pub const MAX_BASE: u32 = 36;

/// Numeric value of a single digit character, independent of any base.
#[inline]
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

fn check_base(base: u32) -> Result<(), DecodeError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(DecodeError::UnsupportedBase(base))
    }
}

/// Yield the validated digits of `value`, most significant first.
fn digits(
    value: &str,
    base: u32,
) -> impl Iterator<Item = Result<u32, DecodeError>> + '_ {
    value.chars().enumerate().map(move |(position, digit)| {
        digit_value(digit).filter(|&d| d < base).ok_or(
            DecodeError::InvalidDigit {
                digit,
                position,
                base,
            },
        )
    })
}

/// Decode `value` written in `base` into a signed 64-bit integer.
///
/// Uses Horner accumulation (`acc = acc * base + digit`) from the most
/// significant digit. Overflow is reported rather than wrapped.
///
/// ```
/// use math::radix::decode;
///
/// assert_eq!(decode("2A", 16), Ok(42));
/// assert_eq!(decode("111", 2), Ok(7));
/// ```
pub fn decode(value: &str, base: u32) -> Result<i64, DecodeError> {
    check_base(base)?;
    if value.is_empty() {
        return Err(DecodeError::Empty);
    }

    digits(value, base).try_fold(0i64, |acc, digit| {
        let digit = i64::from(digit?);
        acc.checked_mul(i64::from(base))
            .and_then(|acc| acc.checked_add(digit))
            .ok_or(DecodeError::Overflow)
    })
}

/// Decode `value` written in `base` without any width limit.
pub fn decode_big(value: &str, base: u32) -> Result<BigInt, DecodeError> {
    check_base(base)?;
    if value.is_empty() {
        return Err(DecodeError::Empty);
    }

    let radix = BigInt::from(base);
    digits(value, base).try_fold(BigInt::zero(), |acc, digit| {
        Ok(acc * &radix + BigInt::from(digit?))
    })
}
