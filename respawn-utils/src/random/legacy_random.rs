//! The 48-bit linear congruential generator vanilla servers use for gameplay
//! randomness.

use crate::random::Random;

const MULTIPLIER: i64 = 0x5_DEEC_E66D;
const INCREMENT: i64 = 0xB;
const MASK: i64 = (1 << 48) - 1;

/// A linear congruential generator producing the same sequence as vanilla's
/// `LegacyRandomSource` for a given seed.
#[derive(Debug, Clone)]
pub struct LegacyRandom {
    seed: i64,
}

impl LegacyRandom {
    /// Creates a generator from a seed. The seed is scrambled the same way
    /// vanilla does it.
    #[must_use]
    pub const fn from_seed(seed: i64) -> Self {
        Self {
            seed: (seed ^ MULTIPLIER) & MASK,
        }
    }

    /// Creates a generator seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Advances the state and returns the top `bits` bits.
    const fn next(&mut self, bits: u32) -> i32 {
        self.seed = self
            .seed
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MASK;
        (self.seed >> (48 - bits)) as i32
    }
}

impl Random for LegacyRandom {
    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive, got {bound}");

        if bound & bound.wrapping_neg() == bound {
            // Power of two: take the high bits directly.
            return ((i64::from(bound) * i64::from(self.next(31))) >> 31) as i32;
        }

        loop {
            let bits = self.next(31);
            let value = bits % bound;
            // Reject the partial bucket at the top of the range.
            if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                return value;
            }
        }
    }
}
