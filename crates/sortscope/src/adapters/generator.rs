//! Seeded generation of input sequences.
//!
//! ## Purpose
//!
//! This module produces the random sequences users sort. Each call to
//! [`SequenceGenerator::next_sequence`] draws a fresh sequence of the
//! configured length, like pressing "Generate New Array".
//!
//! ## Design notes
//!
//! * **Reproducible**: A fixed seed always yields the same series of sequences.
//! * **Unseeded**: With `std`, an unseeded generator is seeded from the clock;
//!   without `std` it falls back to a fixed seed.
//! * **Generic**: Values are drawn as `i64` and cast into the element type.
//!
//! ## Key concepts
//!
//! * **Length**: Between 5 and 50 elements, default 20.
//! * **Value range**: Half-open `[low, high)`, default `[1, 100)`.
//!
//! ## Invariants
//!
//! * Every value lies in `[low, high)`.
//! * Every sequence has exactly the configured length.
//!
//! ## Non-goals
//!
//! * This module does not produce non-uniform distributions.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::debug;
use num_traits::NumCast;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::SortError;
use crate::primitives::rng::SimpleRng;
use crate::primitives::sequence::Scalar;

// ============================================================================
// Defaults
// ============================================================================

/// Default number of elements per sequence.
pub const DEFAULT_LENGTH: usize = 20;

/// Default inclusive lower bound of generated values.
pub const DEFAULT_LOW: i64 = 1;

/// Default exclusive upper bound of generated values.
pub const DEFAULT_HIGH: i64 = 100;

/// Seed used when no seed is given and no clock is available.
const FALLBACK_SEED: u64 = 0x5eed_5011_7a11_0c8d;

// ============================================================================
// Builder
// ============================================================================

/// Builder for a [`SequenceGenerator`].
#[derive(Debug, Clone, Default)]
pub struct SequenceBuilder {
    /// Number of elements per sequence.
    pub length: Option<usize>,

    /// Half-open value range `[low, high)`.
    pub value_range: Option<(i64, i64)>,

    /// Seed for reproducible sequences.
    pub seed: Option<u64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl SequenceBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of elements per sequence (5 to 50).
    pub fn length(mut self, length: usize) -> Self {
        if self.length.is_some() {
            self.duplicate_param = Some("length");
        }
        self.length = Some(length);
        self
    }

    /// Set the half-open value range `[low, high)`.
    pub fn value_range(mut self, low: i64, high: i64) -> Self {
        if self.value_range.is_some() {
            self.duplicate_param = Some("value_range");
        }
        self.value_range = Some((low, high));
        self
    }

    /// Set the seed for reproducible sequences.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and build the generator.
    pub fn build(self) -> Result<SequenceGenerator, SortError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let length = self.length.unwrap_or(DEFAULT_LENGTH);
        Validator::validate_length(length)?;

        let (low, high) = self.value_range.unwrap_or((DEFAULT_LOW, DEFAULT_HIGH));
        Validator::validate_value_range(low, high)?;

        let seed = self.seed.unwrap_or_else(entropy_seed);
        debug!("sequence generator: length {length}, values [{low}, {high}), seed {seed}");

        Ok(SequenceGenerator {
            length,
            low,
            high,
            rng: SimpleRng::new(seed),
        })
    }
}

#[cfg(feature = "std")]
fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(FALLBACK_SEED)
}

#[cfg(not(feature = "std"))]
fn entropy_seed() -> u64 {
    FALLBACK_SEED
}

// ============================================================================
// Generator
// ============================================================================

/// Produces random sequences of a fixed length and value range.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    length: usize,
    low: i64,
    high: i64,
    rng: SimpleRng,
}

impl SequenceGenerator {
    /// Number of elements per sequence.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Half-open value range `[low, high)`.
    pub fn value_range(&self) -> (i64, i64) {
        (self.low, self.high)
    }

    /// Draw the next sequence.
    ///
    /// Fails only when a drawn value does not fit the element type.
    pub fn next_sequence<T: Scalar>(&mut self) -> Result<Vec<T>, SortError> {
        (0..self.length)
            .map(|_| {
                let raw = self.rng.next_in_range(self.low, self.high);
                <T as NumCast>::from(raw).ok_or(SortError::UnrepresentableValue(raw))
            })
            .collect()
    }
}
