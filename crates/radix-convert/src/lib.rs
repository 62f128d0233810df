//! # radix-convert
//!
//! Convert signed integers written in any radix from 1 to 160 into any other.
//!
//! ## Numerals
//!
//! | Radix | Digits |
//! |-------|--------|
//! | 1 | tally marks, three marks for 3 |
//! | 2-85 | prefix of `0-9 A-Z a-z`, then 23 punctuation marks |
//! | 58 | `1-9 a-k m-z A-H J-N P-Z` (no `0 I O l`) |
//! | 64 | `A-Z a-z 0-9 + /` |
//! | 86-160 | prefix of `0-9 a-z A-Z`, 23 punctuation marks, Greek, Katakana |
//!
//! Every conversion passes through a signed 64-bit decimal pivot, so values
//! outside `i64` are rejected with [`ConvertError::Overflow`].
//!
//! ## Example
//!
//! ```rust
//! use radix_convert::{convert, ConvertError};
//!
//! assert_eq!(convert("11", 10, 2).unwrap(), "1011");
//! assert_eq!(convert("-13", 10, 2).unwrap(), "-1101");
//! assert_eq!(convert("159", 10, 160).unwrap(), "ラ");
//! assert_eq!(convert("||||", 1, 10).unwrap(), "4");
//!
//! // zero has no tally
//! assert_eq!(convert("0", 10, 1), Err(ConvertError::UnrepresentableZero));
//! ```

pub mod alphabet;
pub mod convert;
pub mod decode;
pub mod encode;
pub mod error;
pub mod radix;

pub use alphabet::{
    alphabet, digit_symbol, digit_value, Family, MAX_RADIX, MAX_TALLY_LEN, TALLY,
};
pub use convert::{convert, ConvertOptions, Converter};
pub use decode::{to_decimal, DigitParsing};
pub use encode::{encode_unary, from_decimal, Sign};
pub use error::ConvertError;
pub use radix::Radix;
