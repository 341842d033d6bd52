//! Seeded pseudo-random source for sequence generation.
//!
//! ## Purpose
//!
//! Provides a minimal, `no_std` PRNG so generated sequences are reproducible
//! from a seed without pulling a random-number crate into the library.
//!
//! ## Invariants
//!
//! * The same seed always produces the same stream.
//!
//! ## Non-goals
//!
//! * Not suitable for anything security related.

/// Minimal PRNG for no-std sequence generation.
///
/// Uses an LCG (Linear Congruential Generator) with constants from PCG/MQL.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next 32 pseudo-random bits.
    pub fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    /// Uniform draw from `[low, high)`; `high` must exceed `low`.
    pub fn next_in_range(&mut self, low: i64, high: i64) -> i64 {
        let span = high.abs_diff(low);
        let bits = ((self.next_u32() as u64) << 32) | self.next_u32() as u64;
        low.wrapping_add((bits % span) as i64)
    }
}
