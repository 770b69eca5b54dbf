//! Arbitrary-precision natural numbers for the radix conversion.
//! u64 limbs, little-endian (low limb first), always normalized: no high zero limbs,
//! zero is the empty limb vector. Only the operations the codec needs: small-divisor
//! divmod and small multiply-add, both with a u128 temp.

#[derive(Debug)]
pub(crate) struct Natural {
    limbs: Vec<u64>,
}

impl Natural {
    pub(crate) const fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    /// Interprets `bytes` as a big-endian unsigned integer.
    pub(crate) fn from_bytes_be(bytes: &[u8]) -> Self {
        let limbs = bytes
            .rchunks(8)
            .map(|chunk| chunk.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
            .collect();
        let mut num = Self { limbs };
        num.normalize();
        num
    }

    /// Minimal big-endian serialization; zero serializes to an empty vector.
    pub(crate) fn to_bytes_be(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.limbs.len() * 8);
        for limb in self.limbs.iter().rev() {
            out.extend_from_slice(&limb.to_be_bytes());
        }
        let zeros = out.iter().take_while(|&&b| b == 0).count();
        out.drain(..zeros);
        out
    }

    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// `self /= divisor`, returning the remainder. High limb first.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn div_rem_small(&mut self, divisor: u64) -> u64 {
        debug_assert!(divisor != 0);
        let divisor = u128::from(divisor);
        let mut remainder = 0u128;
        for limb in self.limbs.iter_mut().rev() {
            let temp = (remainder << 64) | u128::from(*limb);
            *limb = (temp / divisor) as u64;
            remainder = temp % divisor;
        }
        self.normalize();
        remainder as u64
    }

    /// `self = self * mul + add`. Low limb first, carry into a fresh high limb.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn mul_add_small(&mut self, mul: u64, add: u64) {
        let mul = u128::from(mul);
        let mut carry = u128::from(add);
        for limb in &mut self.limbs {
            let temp = u128::from(*limb) * mul + carry;
            *limb = temp as u64;
            carry = temp >> 64;
        }
        if carry != 0 {
            self.limbs.push(carry as u64);
        }
        self.normalize();
    }

    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }
}
