//! Base58 encoding module.
//! Bitcoin alphabet, leading zero bytes map 1:1 to leading '1's.
//! Arithmetic lives in `convert`; this layer only strips/reinstates zeros and maps digits.
use crate::{convert, ALPHABET};

/// Encodes `input` as Base58. Never fails; the empty slice encodes to `""`.
#[must_use]
#[inline]
pub fn encode(input: &[u8]) -> String {
    let mut output = String::new();
    encode_into(input, &mut output);
    output
}

/// Appends the Base58 encoding of `input` to `output`.
pub fn encode_into(input: &[u8], output: &mut String) {
    let zeros = input.iter().take_while(|&&b| b == 0).count();
    let digits = convert::to_digits(&input[zeros..]);
    output.reserve(zeros + digits.len());
    output.extend(std::iter::repeat_n(char::from(ALPHABET[0]), zeros));
    output.extend(digits.iter().map(|&d| char::from(ALPHABET[usize::from(d)])));
}
