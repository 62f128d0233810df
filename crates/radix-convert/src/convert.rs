//! Radix-to-radix conversion through a decimal pivot.
//!
//! ```text
//! validate ─▶ "0" fast path ─▶ to_decimal (unless radix 10) ─▶ render
//!                                                              ├─ unary: tally marks
//!                                                              └─ positional: alphabet digits
//! ```

use tracing::{debug, trace};

use crate::alphabet::TALLY;
use crate::decode::{to_decimal, DigitParsing};
use crate::encode::{encode_positional, encode_unary, from_decimal, Sign};
use crate::error::ConvertError;
use crate::radix::Radix;

// ============================================================================
// OPTIONS
// ============================================================================

/// Tunables for a [`Converter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ConvertOptions {
    /// Mark repeated for unary output.
    pub tally: char,
    /// How non-decimal input digits are read.
    pub digits: DigitParsing,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            tally: TALLY,
            digits: DigitParsing::Alphabet,
        }
    }
}

impl ConvertOptions {
    pub fn with_tally(mut self, tally: char) -> Self {
        self.tally = tally;
        self
    }

    pub fn with_digit_parsing(mut self, digits: DigitParsing) -> Self {
        self.digits = digits;
        self
    }
}

// ============================================================================
// CONVERTER
// ============================================================================

/// Converts digit strings between radices 1..=160.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert `number` from `from_base` to `to_base`.
    ///
    /// Fails if the input is empty, either radix is outside 1..=160, the
    /// input has a digit the source radix does not know, the value leaves
    /// the 64-bit range, or the target is unary and the value is not
    /// positive.
    pub fn convert(
        &self,
        number: &str,
        from_base: u32,
        to_base: u32,
    ) -> Result<String, ConvertError> {
        let result = self
            .validate(number, from_base, to_base)
            .and_then(|(from, to)| self.convert_radix(number, from, to));

        if let Err(err) = &result {
            debug!(number, from_base, to_base, %err, "conversion failed");
        }
        result
    }

    /// Decimal to binary.
    pub fn convert_default(&self, number: &str) -> Result<String, ConvertError> {
        self.convert(number, 10, 2)
    }

    /// Convert between already validated radices.
    pub fn convert_radix(
        &self,
        number: &str,
        from: Radix,
        to: Radix,
    ) -> Result<String, ConvertError> {
        if number.is_empty() {
            return Err(ConvertError::EmptyInput);
        }

        // "0" is the zero digit everywhere except Base58 and Base64
        if number == "0" && !from.is_bespoke() && !to.is_bespoke() {
            trace!(%from, %to, "zero fast path");
            return if to.is_unary() {
                Err(ConvertError::UnrepresentableZero)
            } else {
                Ok("0".to_string())
            };
        }

        let pivot = to_decimal(number, from, self.options.digits)?;
        trace!(%from, pivot, "decimal pivot");

        if to.is_unary() {
            trace!(pivot, "rendering tally");
            return encode_unary(pivot, self.options.tally);
        }

        // The sign comes from the text as written, the magnitude from the pivot
        let sign = Sign::of_literal(number);
        trace!(%to, ?sign, "rendering positional digits");
        Ok(encode_positional(sign, pivot.unsigned_abs(), to))
    }

    /// Read `digits` in `radix` into the decimal pivot.
    pub fn to_decimal(&self, digits: &str, radix: Radix) -> Result<i64, ConvertError> {
        to_decimal(digits, radix, self.options.digits)
    }

    /// Render a decimal pivot in `radix`.
    pub fn from_decimal(&self, value: i64, radix: Radix) -> Result<String, ConvertError> {
        from_decimal(value, radix, self.options.tally)
    }

    fn validate(
        &self,
        number: &str,
        from_base: u32,
        to_base: u32,
    ) -> Result<(Radix, Radix), ConvertError> {
        if number.is_empty() {
            return Err(ConvertError::EmptyInput);
        }
        Ok((Radix::new(from_base)?, Radix::new(to_base)?))
    }
}

/// Convert `number` from `from_base` to `to_base` with default options.
pub fn convert(number: &str, from_base: u32, to_base: u32) -> Result<String, ConvertError> {
    Converter::default().convert(number, from_base, to_base)
}

// ============================================================================
// TESTS
// ============================================================================
