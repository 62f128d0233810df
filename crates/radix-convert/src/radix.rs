//! Validated radix in the range 1..=160.

use std::fmt;

use crate::alphabet::{self, Family, MAX_RADIX};
use crate::error::ConvertError;

/// A radix known to be within 1..=160.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Radix(u8);

impl Radix {
    /// Tally notation.
    pub const UNARY: Radix = Radix(1);
    pub const BINARY: Radix = Radix(2);
    pub const DECIMAL: Radix = Radix(10);
    pub const BASE58: Radix = Radix(58);
    pub const BASE64: Radix = Radix(64);
    pub const MAX: Radix = Radix(MAX_RADIX as u8);

    /// Validate `value` as a radix.
    pub fn new(value: u32) -> Result<Self, ConvertError> {
        match Family::of(value) {
            Some(_) => Ok(Radix(value as u8)),
            None => Err(ConvertError::InvalidRadix(value)),
        }
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0 as u32
    }

    #[inline]
    pub fn is_unary(self) -> bool {
        self.0 == 1
    }

    /// True for 58 and 64, whose digit zero is not written `0`.
    #[inline]
    pub fn is_bespoke(self) -> bool {
        Family::of(self.get()).is_some_and(Family::is_bespoke)
    }

    /// Digit symbols for this radix.
    pub fn alphabet(self) -> &'static [char] {
        alphabet::alphabet(self.get())
    }
}

impl TryFrom<u32> for Radix {
    type Error = ConvertError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Radix::new(value)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> u32 {
        radix.get()
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(Radix::new(0), Err(ConvertError::InvalidRadix(0)));
        assert_eq!(Radix::new(161), Err(ConvertError::InvalidRadix(161)));
        assert_eq!(Radix::new(1), Ok(Radix::UNARY));
        assert_eq!(Radix::new(160), Ok(Radix::MAX));
        assert_eq!(Radix::try_from(300), Err(ConvertError::InvalidRadix(300)));
    }

    #[test]
    fn test_predicates() {
        assert!(Radix::UNARY.is_unary());
        assert!(!Radix::BINARY.is_unary());
        assert!(Radix::BASE58.is_bespoke());
        assert!(Radix::BASE64.is_bespoke());
        assert!(!Radix::new(57).unwrap().is_bespoke());
        assert_eq!(Radix::DECIMAL.alphabet().len(), 10);
        assert_eq!(Radix::MAX.to_string(), "160");
        assert_eq!(u32::from(Radix::BASE58), 58);
    }
}
