//! Reading a digit string into a signed decimal pivot.
//!
//! Unary input is a tally: its value is the number of characters. Radix 10
//! is parsed directly. Every other radix folds its digits most significant
//! first with checked arithmetic, so results that leave the `i64` range
//! surface as [`ConvertError::Overflow`] rather than wrapping.

use std::num::IntErrorKind;

use crate::alphabet::digit_value;
use crate::encode::Sign;
use crate::error::ConvertError;
use crate::radix::Radix;

/// How positional input symbols map to digit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DigitParsing {
    /// Look each symbol up in the source radix's alphabet.
    #[default]
    Alphabet,
    /// Accept only ASCII `0-9` and use their face value, even when it is
    /// not smaller than the radix. Letters are rejected in every radix.
    DecimalOnly,
}

impl DigitParsing {
    fn value_of(self, symbol: char, radix: Radix) -> Option<u32> {
        match self {
            DigitParsing::Alphabet => digit_value(symbol, radix.get()),
            DigitParsing::DecimalOnly => symbol.to_digit(10),
        }
    }
}

/// Read `digits` in `radix` into a signed 64-bit value.
pub fn to_decimal(
    digits: &str,
    radix: Radix,
    parsing: DigitParsing,
) -> Result<i64, ConvertError> {
    if digits.is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    if radix.is_unary() {
        return decode_unary(digits);
    }
    if radix == Radix::DECIMAL {
        return decode_decimal(digits);
    }
    decode_positional(digits, radix, parsing)
}

/// Count tally marks. Every character counts, including a leading `-`.
fn decode_unary(digits: &str) -> Result<i64, ConvertError> {
    i64::try_from(digits.chars().count()).map_err(|_| ConvertError::Overflow { radix: 1 })
}

/// Signed decimal. Only `-` is a sign, so a leading `+` is a bad digit.
fn decode_decimal(digits: &str) -> Result<i64, ConvertError> {
    if digits.starts_with('+') {
        return Err(ConvertError::MalformedDigit {
            symbol: '+',
            radix: 10,
        });
    }
    digits.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ConvertError::Overflow { radix: 10 }
        }
        IntErrorKind::Empty => ConvertError::EmptyInput,
        _ => ConvertError::MalformedDigit {
            symbol: first_non_decimal(digits),
            radix: 10,
        },
    })
}

/// First character `str::parse` would reject, or the sign itself when
/// nothing follows it.
fn first_non_decimal(digits: &str) -> char {
    digits
        .chars()
        .enumerate()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && c == '-')))
        .map(|(_, c)| c)
        .or_else(|| digits.chars().next())
        .unwrap_or('-')
}

fn decode_positional(
    digits: &str,
    radix: Radix,
    parsing: DigitParsing,
) -> Result<i64, ConvertError> {
    let (sign, body) = Sign::split(digits);
    if body.is_empty() {
        return Err(ConvertError::MalformedDigit {
            symbol: '-',
            radix: radix.get(),
        });
    }

    let base = radix.get() as u64;
    let overflow = ConvertError::Overflow { radix: radix.get() };
    let mut magnitude: u64 = 0;

    for symbol in body.chars() {
        let value = parsing
            .value_of(symbol, radix)
            .ok_or(ConvertError::MalformedDigit {
                symbol,
                radix: radix.get(),
            })?;
        magnitude = magnitude
            .checked_mul(base)
            .and_then(|m| m.checked_add(value as u64))
            .ok_or_else(|| overflow.clone())?;
    }

    match sign {
        Sign::Positive => i64::try_from(magnitude).map_err(|_| overflow),
        Sign::Negative => 0i64.checked_sub_unsigned(magnitude).ok_or(overflow),
    }
}

// ============================================================================
// TESTS
// ============================================================================
