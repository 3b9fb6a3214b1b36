//! Fixed-width base-62 codec for short codes.
//!
//! Codes are the base-62 rendering of a counter value over the alphabet
//! `0-9`, `a-z`, `A-Z` (symbol values 0-61 in that order), left-padded with
//! `'0'` to a fixed width of 7 characters. Because the padding symbol is the
//! alphabet's zero, the mapping is bijective over the fixed width: every
//! counter value below [`CAPACITY`] has exactly one 7-character rendering and
//! vice versa.

use thiserror::Error;

/// Fixed width of every issued short code.
pub const CODE_LEN: usize = 7;

/// Number of addressable codes: `62^7`.
pub const CAPACITY: u64 = 3_521_614_606_208;

/// Errors that can occur when decoding a short code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid base-62 symbol {symbol:?} at position {index}")]
    InvalidSymbol { symbol: char, index: usize },

    #[error("short code is empty")]
    Empty,

    #[error("decoded value does not fit in 64 bits")]
    Overflow,
}

/// Encodes a counter value as a fixed-width base-62 string.
///
/// Zero encodes to `"0000000"`. Values at or above [`CAPACITY`] need more
/// than 7 symbols and produce a longer string; callers allocating codes must
/// guard against that before encoding.
///
/// # Examples
///
/// ```
/// use tiny_url::utils::base62::encode;
///
/// assert_eq!(encode(0), "0000000");
/// assert_eq!(encode(100_000_000_000), "1L9zO9O");
/// ```
pub fn encode(n: u64) -> String {
    // The crate's "alternative" alphabet is 0-9a-zA-Z, matching ours.
    format!("{:0>width$}", base62::encode_alternative(n), width = CODE_LEN)
}

/// Decodes a base-62 string back into its counter value.
///
/// Accepts any non-empty string over the alphabet, padded or not; for every
/// well-formed 7-character input `s`, `encode(decode(s)?) == s`.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidSymbol`] for any character outside the
/// alphabet, [`DecodeError::Empty`] for the empty string, and
/// [`DecodeError::Overflow`] when the value exceeds `u64::MAX`.
pub fn decode(s: &str) -> Result<u64, DecodeError> {
    match base62::decode_alternative(s) {
        Ok(value) => u64::try_from(value).map_err(|_| DecodeError::Overflow),
        Err(base62::DecodeError::EmptyInput) => Err(DecodeError::Empty),
        Err(base62::DecodeError::InvalidBase62Byte(byte, index)) => Err(DecodeError::InvalidSymbol {
            symbol: byte as char,
            index,
        }),
        Err(base62::DecodeError::ArithmeticOverflow) => Err(DecodeError::Overflow),
    }
}
