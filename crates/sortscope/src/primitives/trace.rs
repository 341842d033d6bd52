//! Snapshots and traces recorded during a sort.
//!
//! ## Purpose
//!
//! This module provides the history side of an instrumented sort: immutable
//! [`Snapshot`]s of the working sequence, the append-only [`Trace`] that holds
//! them, and the [`TraceRecorder`] algorithms append to.
//!
//! ## Design notes
//!
//! * **Deep copies**: A snapshot owns its own buffer, so later mutation of the
//!   working sequence never changes what was recorded.
//! * **Initial snapshot by construction**: A recorder is created from the
//!   untouched input, so a finished trace is never empty.
//! * **Policy**: [`TracePolicy::Deduplicate`] is an opt-in extension for larger
//!   inputs; [`TracePolicy::Full`] records every instant.
//!
//! ## Key concepts
//!
//! * **Snapshot**: Copy of the sequence at one instant.
//! * **Trace**: Ordered snapshots; index 0 is the input.
//!
//! ## Invariants
//!
//! * `trace[0]` equals the input sequence.
//! * Snapshots are appended, never removed or reordered.
//! * Under `Deduplicate`, no two adjacent snapshots are equal.
//!
//! ## Non-goals
//!
//! * This module does not decide when to record; each algorithm does.
//! * This module does not stream or lazily produce snapshots.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, Index};
use core::slice::Iter;

// ============================================================================
// Snapshot
// ============================================================================

/// Immutable copy of a sequence's contents at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot<T>(Vec<T>);

impl<T: Copy> Snapshot<T> {
    /// Capture a deep copy of `values`.
    #[inline]
    pub fn capture(values: &[T]) -> Self {
        Self(values.to_vec())
    }
}

impl<T> Snapshot<T> {
    /// Borrow the recorded values.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Consume the snapshot, returning its values.
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for Snapshot<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T: PartialEq> PartialEq<[T]> for Snapshot<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.0.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Snapshot<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.0 == other
    }
}

// ============================================================================
// Trace
// ============================================================================

/// Ordered, append-only list of snapshots recorded during one sort.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<T> {
    snapshots: Vec<Snapshot<T>>,
}

impl<T> Trace<T> {
    /// Number of recorded snapshots (always at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false` for a trace produced by a [`TraceRecorder`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot of the untouched input.
    pub fn first(&self) -> Option<&Snapshot<T>> {
        self.snapshots.first()
    }

    /// Most recent snapshot; equals the sorted output of a finished run.
    pub fn last(&self) -> Option<&Snapshot<T>> {
        self.snapshots.last()
    }

    /// Snapshot at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Snapshot<T>> {
        self.snapshots.get(index)
    }

    /// Iterate snapshots in recording order.
    pub fn iter(&self) -> Iter<'_, Snapshot<T>> {
        self.snapshots.iter()
    }

    /// Borrow all snapshots.
    pub fn as_slice(&self) -> &[Snapshot<T>] {
        &self.snapshots
    }

    /// Consume the trace, returning its snapshots.
    pub fn into_snapshots(self) -> Vec<Snapshot<T>> {
        self.snapshots
    }
}

impl<T> Index<usize> for Trace<T> {
    type Output = Snapshot<T>;

    fn index(&self, index: usize) -> &Snapshot<T> {
        &self.snapshots[index]
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a Snapshot<T>;
    type IntoIter = Iter<'a, Snapshot<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

// ============================================================================
// Trace Policy
// ============================================================================

/// Which instants a [`TraceRecorder`] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracePolicy {
    /// Keep every snapshot an algorithm records.
    #[default]
    Full,

    /// Drop a snapshot equal to the one recorded just before it.
    ///
    /// Comparison counts and sorted output are unaffected.
    Deduplicate,
}

// ============================================================================
// Trace Recorder
// ============================================================================

/// Accumulates snapshots of a working sequence at algorithm-defined instants.
#[derive(Debug, Clone)]
pub struct TraceRecorder<T> {
    snapshots: Vec<Snapshot<T>>,
    policy: TracePolicy,
    dropped: usize,
}

impl<T: Copy + PartialEq> TraceRecorder<T> {
    /// Start a full trace whose first snapshot is `initial`.
    #[cfg(any(test, feature = "dev"))]
    pub fn new(initial: &[T]) -> Self {
        Self::with_policy(initial, TracePolicy::Full)
    }

    /// Start a trace with the given policy whose first snapshot is `initial`.
    pub fn with_policy(initial: &[T], policy: TracePolicy) -> Self {
        Self {
            snapshots: vec![Snapshot::capture(initial)],
            policy,
            dropped: 0,
        }
    }

    /// Append a snapshot of the current working sequence.
    #[inline]
    pub fn record(&mut self, values: &[T]) {
        if self.policy == TracePolicy::Deduplicate
            && self.snapshots.last().is_some_and(|s| s.as_slice() == values)
        {
            self.dropped += 1;
            return;
        }
        self.snapshots.push(Snapshot::capture(values));
    }

    /// Number of snapshots dropped by deduplication.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Finish recording and hand over the trace.
    pub fn finish(self) -> Trace<T> {
        Trace {
            snapshots: self.snapshots,
        }
    }
}
