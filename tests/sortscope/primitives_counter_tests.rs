#![cfg(feature = "dev")]
//! Tests for comparison counting.
//!
//! These tests verify the ComparisonCounter used by every algorithm:
//! - Each predicate counts exactly one comparison
//! - Predicates answer correctly regardless of counting
//! - The count never decreases
//!
//! ## Test Organization
//!
//! 1. **Construction** - Fresh counters start at zero
//! 2. **Predicates** - greater / less_or_equal results and counting
//! 3. **Monotonicity** - Counts across mixed calls

use sortscope::internals::primitives::counter::ComparisonCounter;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test that a new counter starts at zero.
#[test]
fn test_counter_starts_at_zero() {
    let counter = ComparisonCounter::new();
    assert_eq!(counter.count(), 0);
    assert_eq!(ComparisonCounter::default(), counter);
}

// ============================================================================
// Predicate Tests
// ============================================================================

/// Test `greater` answers and counts once per call.
#[test]
fn test_greater_counts_every_outcome() {
    let mut counter = ComparisonCounter::new();

    assert!(counter.greater(3, 1), "3 > 1");
    assert!(!counter.greater(1, 3), "1 > 3 is false");
    assert!(!counter.greater(2, 2), "Equal values are not greater");

    assert_eq!(counter.count(), 3, "True and false outcomes both count");
}

/// Test `less_or_equal` treats ties as true.
#[test]
fn test_less_or_equal_ties() {
    let mut counter = ComparisonCounter::new();

    assert!(counter.less_or_equal(2, 2), "Ties favor the left operand");
    assert!(counter.less_or_equal(1, 2));
    assert!(!counter.less_or_equal(3, 2));

    assert_eq!(counter.count(), 3);
}

/// Test predicates on floating-point scalars.
#[test]
fn test_predicates_on_floats() {
    let mut counter = ComparisonCounter::new();

    assert!(counter.greater(1.5_f64, 1.25));
    assert!(counter.less_or_equal(-0.5_f32, 0.0));

    assert_eq!(counter.count(), 2);
}

// ============================================================================
// Monotonicity Tests
// ============================================================================

/// Test the count increases by exactly one per call.
#[test]
fn test_count_is_monotonic() {
    let mut counter = ComparisonCounter::new();
    let mut previous = counter.count();

    for i in 0..100 {
        if i % 2 == 0 {
            counter.greater(i, 50);
        } else {
            counter.less_or_equal(i, 50);
        }
        assert_eq!(counter.count(), previous + 1);
        previous = counter.count();
    }
}
