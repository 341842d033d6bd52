//! Element bound and helpers for sequences being sorted.
//!
//! ## Purpose
//!
//! This module defines the [`Scalar`] bound shared by every layer and a few
//! read-only helpers over sequences.
//!
//! ## Design notes
//!
//! * **Scalars only**: Elements are `Copy` values ordered with `PartialOrd`.
//! * **Numeric casts**: `NumCast` lets the generator build values from integers
//!   and the chart scale values to bar lengths.
//!
//! ## Invariants
//!
//! * Sequences are expected to be totally ordered; NaN-like values are not supported.
//!
//! ## Non-goals
//!
//! * This module does not support arbitrary comparable types (strings, structs).

// External dependencies
use core::fmt::Debug;
use num_traits::NumCast;

// ============================================================================
// Scalar Bound
// ============================================================================

/// Totally-ordered scalar value that can be sorted and charted.
pub trait Scalar: Copy + PartialOrd + NumCast + Debug {}

impl<T> Scalar for T where T: Copy + PartialOrd + NumCast + Debug {}

// ============================================================================
// Helpers
// ============================================================================

/// Check whether a sequence is non-decreasing.
#[inline]
pub fn is_non_decreasing<T: Scalar>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Largest value of a sequence, or `None` when empty.
pub fn max_value<T: Scalar>(values: &[T]) -> Option<T> {
    values
        .iter()
        .copied()
        .fold(None, |acc, v| match acc {
            Some(m) if m >= v => Some(m),
            _ => Some(v),
        })
}
