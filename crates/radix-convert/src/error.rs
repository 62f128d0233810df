//! Conversion errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("radix {0} is outside the supported range 1..=160")]
    InvalidRadix(u32),

    #[error("input number is empty")]
    EmptyInput,

    #[error("zero has no unary representation")]
    UnrepresentableZero,

    #[error("negative value {0} has no unary representation")]
    UnrepresentableNegativeUnary(i64),

    #[error("symbol {symbol:?} is not a digit in radix {radix}")]
    MalformedDigit { symbol: char, radix: u32 },

    #[error("{marks} tally marks exceed the unary limit of {max}")]
    TallyTooLong { marks: i64, max: usize },

    #[error("value read in radix {radix} does not fit in 64 bits")]
    Overflow { radix: u32 },
}
