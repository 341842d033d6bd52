#![cfg(feature = "dev")]
//! Tests for the insertion sort.
//!
//! These tests verify:
//! - Shift snapshots and unconditional placement snapshots
//! - A failed test is counted but records nothing
//! - Best case (`n-1`) and worst case (`n(n-1)/2`) comparison counts
//!
//! ## Test Organization
//!
//! 1. **Reference Scenarios** - Small inputs with known traces
//! 2. **Best and Worst Cases** - Sorted and reversed inputs
//! 3. **Edge Cases** - Empty, single, duplicates

use sortscope::internals::algorithms::insertion::insertion_sort;
use sortscope::internals::primitives::counter::ComparisonCounter;
use sortscope::internals::primitives::trace::{Trace, TraceRecorder};

/// Run the insertion sort on a copy of `input`.
fn sort(input: &[i32]) -> (Vec<i32>, usize, Trace<i32>) {
    let mut values = input.to_vec();
    let mut counter = ComparisonCounter::new();
    let mut recorder = TraceRecorder::new(input);
    insertion_sort(&mut values, &mut counter, &mut recorder);
    (values, counter.count(), recorder.finish())
}

// ============================================================================
// Reference Scenario Tests
// ============================================================================

/// Test the three-element reference scenario, snapshot by snapshot.
#[test]
fn test_insertion_reference_scenario() {
    let (sorted, comparisons, trace) = sort(&[3, 1, 2]);

    assert_eq!(sorted, vec![1, 2, 3]);
    assert_eq!(comparisons, 3);
    assert_eq!(trace.len(), 5);

    let expected = [
        vec![3, 1, 2], // initial
        vec![3, 3, 2], // shift 3 right
        vec![1, 3, 2], // place 1
        vec![1, 3, 3], // shift 3 right
        vec![1, 2, 3], // place 2 (1 > 2 failed, no snapshot)
    ];
    for (i, snapshot) in trace.iter().enumerate() {
        assert_eq!(snapshot, &expected[i], "snapshot {i}");
    }
}

/// Test a mixed input.
#[test]
fn test_insertion_mixed() {
    let (sorted, comparisons, trace) = sort(&[5, 1, 4, 2, 3]);

    assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    assert_eq!(comparisons, 9);
    assert_eq!(trace.len(), 11, "Six shifts plus four placements");
}

// ============================================================================
// Best and Worst Case Tests
// ============================================================================

/// Test that sorted input costs `n-1` comparisons and only placement snapshots.
#[test]
fn test_insertion_sorted_input() {
    for n in 1..20_i32 {
        let input: Vec<i32> = (0..n).collect();
        let (sorted, comparisons, trace) = sort(&input);
        let n = n as usize;

        assert_eq!(sorted, input);
        assert_eq!(comparisons, n - 1, "n = {n}");
        assert_eq!(trace.len(), n, "Initial plus one placement per key");
        assert!(trace.iter().all(|s| s == &input), "No shift snapshots");
    }
}

/// Test that strictly decreasing input costs `n(n-1)/2` comparisons.
#[test]
fn test_insertion_reversed_input() {
    for n in 2..20_i32 {
        let input: Vec<i32> = (0..n).rev().collect();
        let (_, comparisons, trace) = sort(&input);
        let n = n as usize;

        assert_eq!(comparisons, n * (n - 1) / 2, "n = {n}");
        assert_eq!(trace.len(), 1 + n * (n - 1) / 2 + (n - 1));
    }
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test empty and singleton inputs.
#[test]
fn test_insertion_trivial_inputs() {
    let (sorted, comparisons, trace) = sort(&[]);
    assert!(sorted.is_empty());
    assert_eq!(comparisons, 0);
    assert_eq!(trace.len(), 1);

    let (sorted, comparisons, trace) = sort(&[7]);
    assert_eq!(sorted, vec![7]);
    assert_eq!(comparisons, 0);
    assert_eq!(trace.len(), 1);
}

/// Test that equal keys stop the walk immediately.
#[test]
fn test_insertion_equal_elements() {
    let (sorted, comparisons, trace) = sort(&[3, 3, 3]);
    assert_eq!(sorted, vec![3, 3, 3]);
    assert_eq!(comparisons, 2);
    assert_eq!(trace.len(), 3);

    let (sorted, comparisons, trace) = sort(&[2, 2, 1]);
    assert_eq!(sorted, vec![1, 2, 2]);
    assert_eq!(comparisons, 3);
    assert_eq!(trace.len(), 5);
}
