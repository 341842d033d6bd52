#![cfg(feature = "dev")]
//! Tests for sorting run output.
//!
//! These tests verify the SortResult structure and its methods:
//! - Query methods (len, is_empty, steps, input)
//! - Decomposition into parts
//! - Display formatting
//!
//! ## Test Organization
//!
//! 1. **Query Methods** - Sizes and the recorded input
//! 2. **Decomposition** - into_parts
//! 3. **Display** - Formatting output

use sortscope::internals::algorithms::selector::Algorithm;
use sortscope::internals::engine::executor::run;

// ============================================================================
// Query Method Tests
// ============================================================================

/// Test length, emptiness and step count.
#[test]
fn test_query_methods() {
    let result = run(&[3, 1, 2], Algorithm::InsertionSort);

    assert_eq!(result.len(), 3);
    assert!(!result.is_empty());
    assert_eq!(result.steps(), 5);
    assert_eq!(result.input(), &[3, 1, 2]);
}

/// Test query methods on an empty run.
#[test]
fn test_query_methods_empty() {
    let empty: [u8; 0] = [];
    let result = run(&empty, Algorithm::MergeSort);

    assert_eq!(result.len(), 0);
    assert!(result.is_empty());
    assert_eq!(result.steps(), 1);
    assert!(result.input().is_empty());
}

// ============================================================================
// Decomposition Tests
// ============================================================================

/// Test splitting a result into its parts.
#[test]
fn test_into_parts() {
    let (sorted, comparisons, trace) = run(&[2, 1], Algorithm::ExchangeSort).into_parts();

    assert_eq!(sorted, vec![1, 2]);
    assert_eq!(comparisons, 1);
    assert_eq!(trace.len(), 2);
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the summary block.
#[test]
fn test_display_summary() {
    let result = run(&[3, 1, 2], Algorithm::MergeSort);
    let text = format!("{}", result);

    assert!(text.contains("Summary:"));
    assert!(text.contains("Algorithm:         Merge Sort"));
    assert!(text.contains("Total Comparisons: 3"));
    assert!(text.contains("Array Size:        3"));
    assert!(text.contains("Total Steps:       6"));
    assert!(text.contains("[1, 2, 3]"));
}

/// Test display of an empty run.
#[test]
fn test_display_empty() {
    let empty: [i32; 0] = [];
    let text = run(&empty, Algorithm::ExchangeSort).to_string();

    assert!(text.contains("Total Comparisons: 0"));
    assert!(text.contains("Total Steps:       1"));
    assert!(text.contains("[]"));
}

/// Test display with floating-point values.
#[test]
fn test_display_floats() {
    let text = run(&[2.5, -1.0], Algorithm::InsertionSort).to_string();
    assert!(text.contains("[-1, 2.5]"), "{text}");
}
