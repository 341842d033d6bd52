//! Output types and result structures for sorting runs.
//!
//! ## Purpose
//!
//! This module defines the `SortResult` struct which bundles everything a
//! single run produces: the sorted sequence, the comparison count and the
//! trace used for playback.
//!
//! ## Design notes
//!
//! * **Owned**: The caller owns the whole result; the engine keeps nothing.
//! * **Ergonomics**: Implements `Display` with the run's headline metrics.
//!
//! ## Key concepts
//!
//! * **Total Comparisons**: Ordering tests performed.
//! * **Array Size**: Length of the sorted sequence.
//! * **Total Steps**: Length of the trace, including the initial snapshot.
//!
//! ## Invariants
//!
//! * `trace` has at least one snapshot.
//! * `trace[0]` is the input and `trace[last]` equals `sorted`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::algorithms::selector::Algorithm;
use crate::primitives::sequence::Scalar;
use crate::primitives::trace::Trace;

// ============================================================================
// Result Structure
// ============================================================================

/// Everything one sorting run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SortResult<T> {
    /// Algorithm that produced this result.
    pub algorithm: Algorithm,

    /// Sorted values (non-decreasing permutation of the input).
    pub sorted: Vec<T>,

    /// Number of element-to-element comparisons performed.
    pub comparisons: usize,

    /// Snapshots recorded during the run; index 0 is the input.
    pub trace: Trace<T>,
}

impl<T: Scalar> SortResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of sorted elements.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Check if the input was empty.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Number of playback steps (trace length).
    pub fn steps(&self) -> usize {
        self.trace.len()
    }

    /// The untouched input, as recorded in the first snapshot.
    pub fn input(&self) -> &[T] {
        self.trace.first().map(|s| s.as_slice()).unwrap_or(&[])
    }

    /// Split into `(sorted, comparisons, trace)`.
    pub fn into_parts(self) -> (Vec<T>, usize, Trace<T>) {
        (self.sorted, self.comparisons, self.trace)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Scalar + Display> Display for SortResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Algorithm:         {}", self.algorithm)?;
        writeln!(f, "  Total Comparisons: {}", self.comparisons)?;
        writeln!(f, "  Array Size:        {}", self.sorted.len())?;
        writeln!(f, "  Total Steps:       {}", self.trace.len())?;
        writeln!(f)?;

        writeln!(f, "Sorted values:")?;
        write!(f, "  [")?;
        for (i, value) in self.sorted.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        writeln!(f, "]")
    }
}
