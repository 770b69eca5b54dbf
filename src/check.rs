//! Base58Check: Base58 with a 4-byte double-hash checksum appended to the payload.
//! The hash is injected through `Hash256`; `Sha256Hash` (SHA-256 via `sha2`) is the only
//! production backend and the one the plain `check_*` functions use.
//!
//! The checksum detects transcription errors. It is not an authenticator.

use crate::{decode, encode, DecodeError};
use sha2::{Digest, Sha256};

/// Checksum length in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// A 256-bit hash used to derive the checksum.
pub trait Hash256 {
    /// 32-byte digest of `data`.
    fn hash256(data: &[u8]) -> [u8; 32];
}

/// SHA-256 backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hash;

impl Hash256 for Sha256Hash {
    #[inline]
    fn hash256(data: &[u8]) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&Sha256::digest(data));
        out
    }
}

/// First four bytes of `H(H(payload))`.
#[must_use]
pub fn checksum_with<H: Hash256>(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = H::hash256(&H::hash256(payload));
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&hash[..CHECKSUM_LEN]);
    checksum
}

/// Double-SHA256 checksum of `payload`.
#[must_use]
#[inline]
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    checksum_with::<Sha256Hash>(payload)
}

/// Encodes `payload || checksum` as Base58. Never fails.
#[must_use]
#[inline]
pub fn check_encode(payload: &[u8]) -> String {
    check_encode_with::<Sha256Hash>(payload)
}

/// `check_encode` with an injected hash.
#[must_use]
pub fn check_encode_with<H: Hash256>(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum_with::<H>(payload));
    encode(&data)
}

/// Decodes a Base58Check string and returns the payload with the checksum stripped.
///
/// # Errors
/// - `InvalidCharacter`: propagated from `decode`.
/// - `TooShort`: decoded data is under 4 bytes.
/// - `ChecksumMismatch`: trailing 4 bytes != checksum of the rest.
#[inline]
pub fn check_decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    check_decode_with::<Sha256Hash>(input)
}

/// `check_decode` with an injected hash.
///
/// # Errors
/// Same as `check_decode`.
pub fn check_decode_with<H: Hash256>(input: &str) -> Result<Vec<u8>, DecodeError> {
    let mut data = decode(input)?;
    if data.len() < CHECKSUM_LEN {
        return Err(DecodeError::TooShort(data.len()));
    }
    let split = data.len() - CHECKSUM_LEN;
    let mut actual = [0u8; CHECKSUM_LEN];
    actual.copy_from_slice(&data[split..]);
    let expected = checksum_with::<H>(&data[..split]);
    if actual != expected {
        return Err(DecodeError::ChecksumMismatch { expected, actual });
    }
    data.truncate(split);
    Ok(data)
}
