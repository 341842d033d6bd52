//! Comparison counting for instrumented sorts.
//!
//! ## Purpose
//!
//! This module provides [`ComparisonCounter`], the accumulator every algorithm
//! routes its element-to-element ordering tests through.
//!
//! ## Design notes
//!
//! * **Explicit accumulator**: Passed by `&mut` into every algorithm and every
//!   recursive merge call; there is no shared or global state.
//! * **Tests are the only events**: Each predicate method increments the count
//!   exactly once and then answers the question.
//!
//! ## Invariants
//!
//! * The count is monotonically non-decreasing.
//! * Assignments, shifts and merge drains never touch the counter.
//!
//! ## Non-goals
//!
//! * This module does not count swaps, writes or snapshots.

// Internal dependencies
use crate::primitives::sequence::Scalar;

// ============================================================================
// Comparison Counter
// ============================================================================

/// Monotonic counter of element-to-element ordering tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComparisonCounter {
    count: usize,
}

impl ComparisonCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// Test `a > b`, counting one comparison.
    #[inline]
    pub fn greater<T: Scalar>(&mut self, a: T, b: T) -> bool {
        self.count += 1;
        a > b
    }

    /// Test `a <= b`, counting one comparison.
    #[inline]
    pub fn less_or_equal<T: Scalar>(&mut self, a: T, b: T) -> bool {
        self.count += 1;
        a <= b
    }

    /// Number of comparisons counted so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
}
