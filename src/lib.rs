//! Base58 and Base58Check codec (Bitcoin alphabet).
//!
//! All operations are pure functions: no shared state, safe to call from any thread.
//!
//! ```
//! let s = base58check::check_encode(&[255, 254, 253, 252]);
//! assert_eq!(s, "jpUz5f99p1R");
//! assert_eq!(base58check::check_decode(&s).unwrap(), vec![255, 254, 253, 252]);
//! ```

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

mod check;
mod convert;
mod decode;
mod encode;
mod natural;

pub use check::{
    check_decode, check_decode_with, check_encode, check_encode_with, checksum, checksum_with,
    Hash256, Sha256Hash, CHECKSUM_LEN,
};
pub use decode::{decode, is_valid, DecodeError};
pub use encode::{encode, encode_into};
