//! Top-down merge sort with write-level snapshots.
//!
//! ## Purpose
//!
//! Sorts by recursive halving and merging, recording a snapshot after every
//! write into the working sequence.
//!
//! ## Design notes
//!
//! * **Split**: `mid = (lo + hi) / 2` over the inclusive range `[lo, hi]`; the
//!   left half is `[lo, mid]`, the right half `[mid + 1, hi]`.
//! * **Stable merge**: Ties take the left element (`left <= right`).
//! * **Drains**: Leftovers are copied without comparisons, left buffer first.
//! * **Reused scratch**: Both halves are copied into two scratch vectors that
//!   live for the whole sort instead of being allocated per merge.
//!
//! ## Invariants
//!
//! * One comparison per merge iteration while both halves are non-empty.
//! * One snapshot per write, including writes that leave the sequence unchanged.
//! * Recursion depth is `ceil(log2(n))`.
//!
//! ## Non-goals
//!
//! * This module does not switch to insertion sort for small ranges.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::counter::ComparisonCounter;
use crate::primitives::sequence::Scalar;
use crate::primitives::trace::TraceRecorder;

// ============================================================================
// Merge Context
// ============================================================================

/// Working state threaded through the recursion.
struct MergeContext<'a, T> {
    counter: &'a mut ComparisonCounter,
    recorder: &'a mut TraceRecorder<T>,
    left: Vec<T>,
    right: Vec<T>,
}

impl<T: Scalar> MergeContext<'_, T> {
    /// Sort the inclusive range `[lo, hi]`.
    fn sort(&mut self, values: &mut [T], lo: usize, hi: usize) {
        if lo >= hi {
            return;
        }
        let mid = (lo + hi) / 2;
        self.sort(values, lo, mid);
        self.sort(values, mid + 1, hi);
        self.merge(values, lo, mid, hi);
    }

    /// Merge the sorted ranges `[lo, mid]` and `[mid + 1, hi]`.
    fn merge(&mut self, values: &mut [T], lo: usize, mid: usize, hi: usize) {
        self.left.clear();
        self.left.extend_from_slice(&values[lo..=mid]);
        self.right.clear();
        self.right.extend_from_slice(&values[mid + 1..=hi]);

        let (mut i, mut j, mut k) = (0, 0, lo);

        while i < self.left.len() && j < self.right.len() {
            if self.counter.less_or_equal(self.left[i], self.right[j]) {
                values[k] = self.left[i];
                i += 1;
            } else {
                values[k] = self.right[j];
                j += 1;
            }
            k += 1;
            self.recorder.record(values);
        }

        // Drains: no comparisons happen here
        while i < self.left.len() {
            values[k] = self.left[i];
            i += 1;
            k += 1;
            self.recorder.record(values);
        }
        while j < self.right.len() {
            values[k] = self.right[j];
            j += 1;
            k += 1;
            self.recorder.record(values);
        }
    }
}

// ============================================================================
// Entry Point
// ============================================================================

/// Sort `values` in place by top-down merging.
pub fn merge_sort<T: Scalar>(
    values: &mut [T],
    counter: &mut ComparisonCounter,
    recorder: &mut TraceRecorder<T>,
) {
    let n = values.len();
    if n < 2 {
        return;
    }

    let half = n.div_ceil(2);
    let mut ctx = MergeContext {
        counter,
        recorder,
        left: Vec::with_capacity(half),
        right: Vec::with_capacity(half),
    };
    ctx.sort(values, 0, n - 1);
}
