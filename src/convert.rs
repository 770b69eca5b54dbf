//! Radix conversion between big-endian bytes and base-58 digit values (0..58).
//! No alphabet concerns here: callers map digits to symbols and handle leading zeros.
//! Optimizations: works in batches of 58^10 (largest power of 58 in a u64 limb), so one
//! big-integer divmod yields ten digits and one multiply-add folds ten digits.
//! Perf: O(n^2 / 80) limb ops for n input bytes.

use crate::natural::Natural;

pub(crate) const BASE: u64 = 58;

/// Base-58 digits carried per u64 limb operation.
pub(crate) const DIGITS_PER_LIMB: usize = 10;

/// 58^10 = 430_804_206_899_405_824.
pub(crate) const LIMB_RADIX: u64 = {
    let mut radix = 1u64;
    let mut i = 0;
    while i < DIGITS_PER_LIMB {
        radix *= BASE;
        i += 1;
    }
    radix
};

/// Upper bound on the digit count for `len` bytes: log58(256) ~= 1.3657 < 1.5.
/// Saturates instead of overflowing on 32-bit targets.
#[inline]
fn digit_capacity(len: usize) -> usize {
    len.saturating_add(len / 2).saturating_add(1)
}

/// Converts `bytes` (big-endian unsigned) to base-58 digits, most significant first.
/// Value zero, including the empty slice, yields no digits.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn to_digits(bytes: &[u8]) -> Vec<u8> {
    let mut num = Natural::from_bytes_be(bytes);
    let mut digits = Vec::with_capacity(digit_capacity(bytes.len()));
    while !num.is_zero() {
        let mut chunk = num.div_rem_small(LIMB_RADIX);
        if num.is_zero() {
            // Top chunk: only its significant digits
            while chunk != 0 {
                digits.push((chunk % BASE) as u8);
                chunk /= BASE;
            }
        } else {
            for _ in 0..DIGITS_PER_LIMB {
                digits.push((chunk % BASE) as u8);
                chunk /= BASE;
            }
        }
    }
    digits.reverse();
    digits
}

/// Folds base-58 digits (most significant first) back into a minimal big-endian
/// byte string. Leading zero digits carry no weight and produce no bytes; all
/// zeros, or no digits, yields an empty vector.
///
/// Every digit must already be in `0..58`; alphabet validation is the caller's job.
#[must_use]
pub(crate) fn from_digits(digits: &[u8]) -> Vec<u8> {
    let mut num = Natural::zero();
    for chunk in digits.chunks(DIGITS_PER_LIMB) {
        let (mul, add) = chunk.iter().fold((1u64, 0u64), |(mul, add), &d| {
            debug_assert!(u64::from(d) < BASE);
            (mul * BASE, add * BASE + u64::from(d))
        });
        num.mul_add_small(mul, add);
    }
    num.to_bytes_be()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn limb_radix_fits() {
        assert_eq!(LIMB_RADIX, 430_804_206_899_405_824);
        assert!(LIMB_RADIX.checked_mul(BASE).is_none());
    }

    #[test]
    fn capacity_never_overflows() {
        assert_eq!(digit_capacity(0), 1);
        assert_eq!(digit_capacity(32), 49);
        let big = usize::MAX / 1000;
        assert_eq!(digit_capacity(big), big + big / 2 + 1);
        assert_eq!(digit_capacity(usize::MAX), usize::MAX);
        // 3_200_000 * 1366 would wrap a 32-bit usize
        assert_eq!(digit_capacity(3_200_000), 4_800_001);
    }

    #[test]
    fn capacity_covers_digit_count() {
        for len in [1usize, 2, 8, 32, 33, 100, 257] {
            assert!(to_digits(&vec![0xff; len]).len() <= digit_capacity(len), "len {len}");
        }
    }

    #[test]
    fn zero_has_no_digits() {
        assert!(to_digits(&[]).is_empty());
        assert!(to_digits(&[0, 0, 0]).is_empty());
        assert!(from_digits(&[]).is_empty());
        assert!(from_digits(&[0, 0, 0, 0]).is_empty());
    }

    #[test]
    fn small_values() {
        assert_eq!(to_digits(&[1]), vec![1]);
        assert_eq!(to_digits(&[57]), vec![57]);
        assert_eq!(to_digits(&[58]), vec![1, 0]);
        assert_eq!(to_digits(&hex!("0d24")), vec![1, 0, 0]);
        assert_eq!(from_digits(&[1, 0, 0]), hex!("0d24").to_vec());
        assert_eq!(from_digits(&[0, 0, 1, 0]), vec![58]);
    }

    #[test]
    fn leading_zero_bytes_are_not_digits() {
        assert_eq!(to_digits(&[0, 0, 58]), to_digits(&[58]));
    }

    #[test]
    fn full_limb_chunks_keep_inner_zeros() {
        // 58^10 exactly: a one followed by ten zero digits spans two chunks
        let bytes = LIMB_RADIX.to_be_bytes();
        let mut expected = vec![1u8];
        expected.extend_from_slice(&[0; DIGITS_PER_LIMB]);
        assert_eq!(to_digits(&bytes), expected);
        assert_eq!(from_digits(&expected), Natural::from_bytes_be(&bytes).to_bytes_be());
    }

    #[test]
    fn max_digits_round_trip() {
        for len in [1usize, 9, 10, 11, 20, 21, 45] {
            let digits = vec![57u8; len];
            assert_eq!(to_digits(&from_digits(&digits)), digits, "len {len}");
        }
    }

    #[test]
    fn bytes_round_trip() {
        let data: Vec<u8> = (0u16..300).map(|i| (i * 7 + 3) as u8).collect();
        for len in [1usize, 2, 8, 31, 32, 33, 64, 300] {
            let bytes = &data[..len];
            let digits = to_digits(bytes);
            assert!(digits.iter().all(|&d| u64::from(d) < BASE));
            assert_eq!(from_digits(&digits), Natural::from_bytes_be(bytes).to_bytes_be());
        }
    }
}
