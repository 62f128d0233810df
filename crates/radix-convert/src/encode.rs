//! Rendering a decimal pivot in a target radix.
//!
//! Positional radices repeatedly divide the magnitude and map remainders
//! through the radix's alphabet. Radix 1 has no positional form and is
//! written as a run of tally marks instead.

use crate::alphabet::MAX_TALLY_LEN;
use crate::error::ConvertError;
use crate::radix::Radix;

/// Sign of a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Sign written at the front of a digit string.
    pub fn of_literal(number: &str) -> Self {
        if number.starts_with('-') {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// Sign of a pivot value. Zero counts as positive.
    pub fn of_value(value: i64) -> Self {
        if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// Split a leading `-` off a digit string.
    pub fn split(number: &str) -> (Self, &str) {
        match number.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, number),
        }
    }
}

/// Write `value` as `value` repetitions of `tally`.
///
/// Unary has no mark for zero and no sign, so both are rejected. Runs longer
/// than [`MAX_TALLY_LEN`] marks, or that the allocator refuses, are
/// reported as [`ConvertError::TallyTooLong`].
pub fn encode_unary(value: i64, tally: char) -> Result<String, ConvertError> {
    if value == 0 {
        return Err(ConvertError::UnrepresentableZero);
    }
    if value < 0 {
        return Err(ConvertError::UnrepresentableNegativeUnary(value));
    }
    let too_long = ConvertError::TallyTooLong {
        marks: value,
        max: MAX_TALLY_LEN,
    };
    let count = usize::try_from(value)
        .ok()
        .filter(|&n| n <= MAX_TALLY_LEN)
        .ok_or_else(|| too_long.clone())?;
    let bytes = count
        .checked_mul(tally.len_utf8())
        .ok_or_else(|| too_long.clone())?;

    let mut out = String::new();
    out.try_reserve_exact(bytes).map_err(|_| too_long)?;
    out.extend(std::iter::repeat(tally).take(count));
    Ok(out)
}

/// Write `magnitude` in a positional `radix`, prefixed with `-` when
/// `sign` is negative and the magnitude is non-zero.
///
/// Zero is written with the radix's own zero symbol (`1` in Base58, `A` in
/// Base64).
pub(crate) fn encode_positional(sign: Sign, magnitude: u64, radix: Radix) -> String {
    debug_assert!(!radix.is_unary(), "unary has no positional digits");

    let symbols = radix.alphabet();
    if magnitude == 0 {
        return symbols[0].to_string();
    }

    let base = radix.get() as u64;
    let mut remaining = magnitude;
    let mut digits = Vec::new();

    // Least significant digit first
    while remaining > 0 {
        digits.push(symbols[(remaining % base) as usize]);
        remaining /= base;
    }

    let mut out = String::with_capacity(digits.len() + 1);
    if sign == Sign::Negative {
        out.push('-');
    }
    out.extend(digits.iter().rev());
    out
}

/// Render a signed pivot in `radix`, using `tally` when the radix is unary.
pub fn from_decimal(value: i64, radix: Radix, tally: char) -> Result<String, ConvertError> {
    if radix.is_unary() {
        return encode_unary(value, tally);
    }
    Ok(encode_positional(
        Sign::of_value(value),
        value.unsigned_abs(),
        radix,
    ))
}

// ============================================================================
// TESTS
// ============================================================================
