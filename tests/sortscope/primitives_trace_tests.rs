#![cfg(feature = "dev")]
//! Tests for snapshots, traces and the trace recorder.
//!
//! These tests verify:
//! - The initial snapshot is recorded on construction
//! - Snapshots are deep copies, unaffected by later mutation
//! - Full and deduplicating policies
//! - Trace accessors and iteration
//!
//! ## Test Organization
//!
//! 1. **Snapshots** - Capture and comparison
//! 2. **Recorder (Full)** - Every record call is kept
//! 3. **Recorder (Deduplicate)** - Adjacent duplicates are dropped
//! 4. **Trace Accessors** - first, last, get, index, iteration

use sortscope::internals::primitives::trace::{Snapshot, TracePolicy, TraceRecorder};

// ============================================================================
// Snapshot Tests
// ============================================================================

/// Test that a snapshot is independent of the buffer it was taken from.
#[test]
fn test_snapshot_is_deep_copy() {
    let mut values = vec![3, 1, 2];
    let snapshot = Snapshot::capture(&values);

    values[0] = 99;

    assert_eq!(snapshot.as_slice(), &[3, 1, 2]);
    assert_eq!(snapshot, vec![3, 1, 2]);
    assert_eq!(snapshot.into_vec(), vec![3, 1, 2]);
}

/// Test that snapshots deref to slices.
#[test]
fn test_snapshot_deref() {
    let snapshot = Snapshot::capture(&[4, 5, 6]);
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot[1], 5);
    assert_eq!(snapshot.iter().sum::<i32>(), 15);
}

// ============================================================================
// Full Recorder Tests
// ============================================================================

/// Test that the initial snapshot is recorded on construction.
#[test]
fn test_recorder_records_initial() {
    let trace = TraceRecorder::new(&[3, 1, 2]).finish();

    assert_eq!(trace.len(), 1);
    assert!(!trace.is_empty());
    assert_eq!(trace[0], vec![3, 1, 2]);
}

/// Test that an empty input still yields a one-snapshot trace.
#[test]
fn test_recorder_empty_input() {
    let empty: [i32; 0] = [];
    let trace = TraceRecorder::new(&empty).finish();

    assert_eq!(trace.len(), 1);
    assert!(trace[0].is_empty());
}

/// Test that recorded snapshots survive later mutation of the source.
#[test]
fn test_recorder_snapshots_not_aliased() {
    let mut working = vec![2, 1];
    let mut recorder = TraceRecorder::new(&working);

    working.swap(0, 1);
    recorder.record(&working);
    working[0] = 7;
    recorder.record(&working);

    let trace = recorder.finish();
    assert_eq!(trace[0], vec![2, 1]);
    assert_eq!(trace[1], vec![1, 2]);
    assert_eq!(trace[2], vec![7, 2]);
}

/// Test that the full policy keeps duplicate snapshots.
#[test]
fn test_full_policy_keeps_duplicates() {
    let values = [1, 2, 3];
    let mut recorder = TraceRecorder::new(&values);

    recorder.record(&values);
    recorder.record(&values);

    assert_eq!(recorder.dropped(), 0);
    assert_eq!(recorder.finish().len(), 3);
}

// ============================================================================
// Deduplicating Recorder Tests
// ============================================================================

/// Test that deduplication drops adjacent equal snapshots only.
#[test]
fn test_deduplicate_drops_adjacent_equal() {
    let mut recorder = TraceRecorder::with_policy(&[1, 2], TracePolicy::Deduplicate);

    recorder.record(&[1, 2]); // dropped
    recorder.record(&[2, 1]);
    recorder.record(&[2, 1]); // dropped
    recorder.record(&[1, 2]); // kept: differs from the previous one

    assert_eq!(recorder.dropped(), 2);
    let trace = recorder.finish();
    assert_eq!(trace.len(), 3);
    assert_eq!(trace[2], vec![1, 2]);
}

/// Test the default policy.
#[test]
fn test_default_policy_is_full() {
    assert_eq!(TracePolicy::default(), TracePolicy::Full);
}

// ============================================================================
// Trace Accessor Tests
// ============================================================================

/// Test first, last, get and iteration order.
#[test]
fn test_trace_accessors() {
    let mut recorder = TraceRecorder::new(&[3, 2, 1]);
    recorder.record(&[2, 3, 1]);
    recorder.record(&[1, 2, 3]);
    let trace = recorder.finish();

    assert_eq!(trace.first().map(|s| s.as_slice()), Some(&[3, 2, 1][..]));
    assert_eq!(trace.last().map(|s| s.as_slice()), Some(&[1, 2, 3][..]));
    assert_eq!(trace.get(1).map(|s| s.as_slice()), Some(&[2, 3, 1][..]));
    assert!(trace.get(3).is_none());

    let firsts: Vec<i32> = trace.iter().map(|s| s[0]).collect();
    assert_eq!(firsts, vec![3, 2, 1]);

    let mut count = 0;
    for snapshot in &trace {
        assert_eq!(snapshot.len(), 3);
        count += 1;
    }
    assert_eq!(count, trace.as_slice().len());

    let snapshots = trace.into_snapshots();
    assert_eq!(snapshots.len(), 3);
}
