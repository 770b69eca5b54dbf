//! Base58 decoding module.
//! Bitcoin alphabet; every character is validated before any arithmetic, so a decode
//! either yields the full result or an error, never partial output.
//! Optimizations: precomputed ASCII table for char->val, batched Horner fold in `convert`.

use crate::{convert, ALPHABET};
use thiserror::Error;

/// Failure kinds for `decode` and `check_decode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Character outside the Base58 alphabet at byte offset `index`.
    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },
    /// Decoded data shorter than a checksum (needs >=4 bytes); carries the decoded length.
    #[error("decoded {0} bytes, too short to carry a 4-byte checksum")]
    TooShort(usize),
    /// Trailing 4 bytes differ from the double-hash of the payload.
    #[error("checksum mismatch: expected {expected:02x?}, found {actual:02x?}")]
    ChecksumMismatch { expected: [u8; 4], actual: [u8; 4] },
}

/// Decodes a Base58 string (Bitcoin alphabet) to bytes.
///
/// Each leading '1' becomes one leading zero byte; the empty string decodes to an
/// empty vector.
///
/// # Errors
/// - `InvalidCharacter`: first non-alphabet character and its byte offset.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let digits = digit_values(input)?;
    // Leading zero digits fold to nothing numerically (MSB-first Horner), so the full
    // digit sequence goes to the converter and the zeros are reinstated as bytes.
    let zeros = digits.iter().take_while(|&&d| d == 0).count();
    let raw = convert::from_digits(&digits);
    let mut output = Vec::with_capacity(zeros + raw.len());
    output.resize(zeros, 0u8);
    output.extend_from_slice(&raw);
    Ok(output)
}

/// Returns true if every character of `input` is in the Base58 alphabet.
#[must_use]
pub fn is_valid(input: &str) -> bool {
    input.bytes().all(|b| digit_value(b).is_some())
}

/// Maps every character to its digit value, failing on the first one outside the alphabet.
fn digit_values(input: &str) -> Result<Vec<u8>, DecodeError> {
    let mut digits = Vec::with_capacity(input.len());
    for (index, character) in input.char_indices() {
        let value = u8::try_from(character)
            .ok()
            .and_then(digit_value)
            .ok_or(DecodeError::InvalidCharacter { character, index })?;
        digits.push(value);
    }
    Ok(digits)
}

#[inline]
fn digit_value(ch: u8) -> Option<u8> {
    match DIGIT_TO_VAL.get(usize::from(ch)) {
        Some(&INVALID) | None => None,
        Some(&val) => Some(val),
    }
}

const INVALID: u8 = 255;

const DIGIT_TO_VAL: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut idx = 0u8;
    let mut i = 0usize;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = idx;
        idx += 1;
        i += 1;
    }
    table
};
