//! Random number sources.
//!
//! - [`LegacyRandom`](legacy_random::LegacyRandom) - the 48-bit LCG used by vanilla servers

pub mod legacy_random;

/// A source of pseudo random numbers.
pub trait Random {
    /// Returns a uniformly distributed value in `[0, bound)`.
    ///
    /// `bound` must be positive.
    fn next_i32_bounded(&mut self, bound: i32) -> i32;
}
