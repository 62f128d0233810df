//! Numeral alphabets for radices 1 through 160.
//!
//! # Layout
//!
//! Most radices share one of two master sequences and simply take a prefix:
//!
//! | Radices | Table | Order |
//! |---------|-------|-------|
//! | 1-57, 59-63, 65-85 | low master (85) | `0-9 A-Z a-z` + punctuation |
//! | 58 | Base58 (Flickr) | `1-9 a-k m-z A-H J-N P-Z` |
//! | 64 | Base64 (RFC 4648) | `A-Z a-z 0-9 + /` |
//! | 86-160 | high master (161) | `0-9 a-z A-Z` + punctuation + Greek + Katakana |
//!
//! Base58 and Base64 are not prefixes of anything: their digit zero is `1`
//! and `A` respectively, which is why the literal `"0"` is ambiguous there.

/// Largest supported radix.
pub const MAX_RADIX: u32 = 160;

/// Mark used for unary (radix 1) output unless configured otherwise.
pub const TALLY: char = '|';

/// Longest unary output, in marks.
pub const MAX_TALLY_LEN: usize = 1 << 24;

// ============================================================================
// TABLES
// ============================================================================

/// `0-9`, `A-Z`, `a-z`, then 23 punctuation marks.
#[rustfmt::skip]
static LOW_MASTER: [char; 85] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J',
    'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T',
    'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd',
    'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n',
    'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x',
    'y', 'z', '!', '#', '$', '%', '&', '(', ')', '*',
    '+', '-', ';', '<', '=', '>', '?', '@', '^', '_',
    '\'', '{', '|', '}', '~',
];

/// Digits and letters minus the look-alikes `0`, `I`, `O` and `l`.
#[rustfmt::skip]
static BASE58: [char; 58] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a',
    'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k',
    'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v',
    'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F',
    'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Standard Base64 digit order.
#[rustfmt::skip]
static BASE64: [char; 64] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J',
    'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T',
    'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd',
    'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n',
    'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x',
    'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', '+', '/',
];

/// `0-9`, `a-z`, `A-Z`, 23 punctuation marks, 25 Greek letters from U+03B1,
/// then 51 Katakana. Only the first 160 entries are reachable.
#[rustfmt::skip]
static HIGH_MASTER: [char; 161] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j',
    'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't',
    'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D',
    'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N',
    'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X',
    'Y', 'Z', '.', '-', ':', '+', '=', '^', '!', '/',
    '*', '?', '&', '<', '>', '(', ')', '[', ']', '{',
    '}', '@', '%', '$', '#', 'α', 'β', 'γ', 'δ', 'ε',
    'ζ', 'η', 'θ', 'ι', 'κ', 'λ', 'μ', 'ν', 'ξ', 'ο',
    'π', 'ρ', 'ς', 'σ', 'τ', 'υ', 'φ', 'χ', 'ψ', 'ω',
    'グ', 'ダ', 'バ', 'ム', 'ヰ', 'ァ', 'ケ', 'チ', 'メ', 'ヱ',
    'ヂ', 'ヒ', 'モ', 'ヲ', 'ィ', 'コ', 'ッ', 'ビ', 'ャ', 'ン',
    'イ', 'ゴ', 'ツ', 'ヤ', 'ヴ', 'ゥ', 'サ', 'ヅ', 'フ', 'ュ',
    'ヵ', 'ウ', 'ザ', 'テ', 'ブ', 'ユ', 'ヶ', 'ェ', 'シ', 'デ',
    'ョ', 'エ', 'ト', 'ヘ', 'ヨ', 'ォ', 'ス', 'ド', 'ベ', 'ラ',
    'オ',
];

// ============================================================================
// DISPATCH
// ============================================================================

/// Which table a radix draws its symbols from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Prefix of the low master sequence.
    LowMaster,
    /// The fixed Base58 table.
    Base58,
    /// The fixed Base64 table.
    Base64,
    /// Prefix of the high master sequence.
    HighMaster,
}

impl Family {
    /// Table family for `radix`, or `None` outside 1..=160.
    pub fn of(radix: u32) -> Option<Self> {
        match radix {
            1..=57 | 59..=63 | 65..=85 => Some(Family::LowMaster),
            58 => Some(Family::Base58),
            64 => Some(Family::Base64),
            86..=MAX_RADIX => Some(Family::HighMaster),
            _ => None,
        }
    }

    /// Whether the family has its own ordering instead of a shared prefix.
    pub fn is_bespoke(self) -> bool {
        matches!(self, Family::Base58 | Family::Base64)
    }
}

/// Ordered symbols for digit values `0..radix`.
///
/// Radix 1 yields `['0']` (the low master prefix) even though unary output
/// uses tally marks instead. Radices outside 1..=160 yield an empty slice.
pub fn alphabet(radix: u32) -> &'static [char] {
    match Family::of(radix) {
        Some(Family::LowMaster) => &LOW_MASTER[..radix as usize],
        Some(Family::Base58) => &BASE58,
        Some(Family::Base64) => &BASE64,
        Some(Family::HighMaster) => &HIGH_MASTER[..radix as usize],
        None => &[],
    }
}

/// Symbol for digit `value` in `radix`, or `None` if `value >= radix`.
#[inline]
pub fn digit_symbol(value: u32, radix: u32) -> Option<char> {
    alphabet(radix).get(value as usize).copied()
}

/// Digit value of `symbol` in `radix`, or `None` if it is not in the alphabet.
pub fn digit_value(symbol: char, radix: u32) -> Option<u32> {
    alphabet(radix)
        .iter()
        .position(|&c| c == symbol)
        .map(|i| i as u32)
}

// ============================================================================
// TESTS
// ============================================================================
