//! Exchange (bubble) sort with full comparison accounting.
//!
//! ## Purpose
//!
//! Sorts by repeatedly exchanging adjacent out-of-order pairs, recording a
//! snapshot after every exchange.
//!
//! ## Design notes
//!
//! * **No early exit**: All `n` passes run even after the sequence is sorted,
//!   so the comparison count is a function of `n` alone.
//! * **Stable**: Only strictly greater left elements are exchanged.
//!
//! ## Invariants
//!
//! * Pass `i` performs `n-1-i` comparisons; the total is `n(n-1)/2`.
//! * Exactly one snapshot is recorded per exchange.
//!
//! ## Non-goals
//!
//! * This module does not record the initial snapshot (the recorder owns it).

// Internal dependencies
use crate::primitives::counter::ComparisonCounter;
use crate::primitives::sequence::Scalar;
use crate::primitives::trace::TraceRecorder;

/// Sort `values` in place by adjacent exchanges.
pub fn exchange_sort<T: Scalar>(
    values: &mut [T],
    counter: &mut ComparisonCounter,
    recorder: &mut TraceRecorder<T>,
) {
    let n = values.len();

    for pass in 0..n {
        for j in 0..n - 1 - pass {
            if counter.greater(values[j], values[j + 1]) {
                values.swap(j, j + 1);
                recorder.record(values);
            }
        }
    }
}
