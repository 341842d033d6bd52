//! Insertion sort with per-shift and per-placement snapshots.
//!
//! ## Purpose
//!
//! Sorts by taking each element in turn as a key and walking it backward past
//! every strictly greater element.
//!
//! ## Design notes
//!
//! * **Shift snapshots**: Each successful test shifts one element right and
//!   records a snapshot.
//! * **Failed test**: Counted, but stops the walk without a snapshot.
//! * **Placement snapshot**: Recorded for every key, even when the placement
//!   leaves the sequence unchanged.
//!
//! ## Invariants
//!
//! * Sorted input costs `n-1` comparisons and `n-1` placement snapshots.
//! * Strictly decreasing input costs `n(n-1)/2` comparisons.
//!
//! ## Non-goals
//!
//! * This module does not use binary search for the insertion point.

// Internal dependencies
use crate::primitives::counter::ComparisonCounter;
use crate::primitives::sequence::Scalar;
use crate::primitives::trace::TraceRecorder;

/// Sort `values` in place by backward insertion.
pub fn insertion_sort<T: Scalar>(
    values: &mut [T],
    counter: &mut ComparisonCounter,
    recorder: &mut TraceRecorder<T>,
) {
    for i in 1..values.len() {
        let key = values[i];

        // `hole` is the cursor's successor: the slot the key would land in.
        let mut hole = i;
        while hole > 0 {
            if !counter.greater(values[hole - 1], key) {
                break;
            }
            values[hole] = values[hole - 1];
            hole -= 1;
            recorder.record(values);
        }

        values[hole] = key;
        recorder.record(values);
    }
}
