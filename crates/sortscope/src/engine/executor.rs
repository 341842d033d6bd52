//! Execution engine for instrumented sorts.
//!
//! ## Purpose
//!
//! This module provides the single operation the rest of the crate is built
//! around: run one algorithm over a private copy of a sequence and return the
//! sorted values, the comparison count and the trace.
//!
//! ## Design notes
//!
//! * **Private copy**: The caller's slice is never mutated.
//! * **Stateless**: Each call builds its own counter and recorder, so repeated
//!   calls have no residual effects.
//! * **Closed dispatch**: A `match` over [`Algorithm`]; there is no fallback arm.
//!
//! ## Invariants
//!
//! * `trace[0]` equals the input and `trace[last]` equals the sorted output.
//! * The sorted output is a non-decreasing permutation of the input.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs; every finite sequence is accepted.
//! * This module does not pace or render playback.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, trace};

// Internal dependencies
use crate::algorithms::exchange::exchange_sort;
use crate::algorithms::insertion::insertion_sort;
use crate::algorithms::merge::merge_sort;
use crate::algorithms::selector::Algorithm;
use crate::engine::output::SortResult;
use crate::primitives::counter::ComparisonCounter;
use crate::primitives::sequence::{Scalar, is_non_decreasing};
use crate::primitives::trace::{TracePolicy, TraceRecorder};

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one sorting run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    /// Algorithm to run.
    pub algorithm: Algorithm,

    /// Which snapshots the trace keeps.
    pub trace_policy: TracePolicy,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs configured sorts; holds no state between runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortExecutor {
    config: SortConfig,
}

impl SortExecutor {
    /// Create an executor for the given configuration.
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// Configuration this executor runs with.
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Sort a private copy of `input`.
    pub fn run<T: Scalar>(&self, input: &[T]) -> SortResult<T> {
        let SortConfig {
            algorithm,
            trace_policy,
        } = self.config;

        debug!(
            "sorting {} elements with {} ({:?} trace)",
            input.len(),
            algorithm,
            trace_policy
        );

        let mut working: Vec<T> = input.to_vec();
        let mut counter = ComparisonCounter::new();
        let mut recorder = TraceRecorder::with_policy(input, trace_policy);

        match algorithm {
            Algorithm::ExchangeSort => exchange_sort(&mut working, &mut counter, &mut recorder),
            Algorithm::MergeSort => merge_sort(&mut working, &mut counter, &mut recorder),
            Algorithm::InsertionSort => insertion_sort(&mut working, &mut counter, &mut recorder),
        }

        debug_assert!(is_non_decreasing(&working));

        if recorder.dropped() > 0 {
            trace!("dropped {} duplicate snapshots", recorder.dropped());
        }

        let result = SortResult {
            algorithm,
            sorted: working,
            comparisons: counter.count(),
            trace: recorder.finish(),
        };

        debug!(
            "{} finished: {} comparisons, {} steps",
            algorithm,
            result.comparisons,
            result.trace.len()
        );

        result
    }
}

// ============================================================================
// Free Function
// ============================================================================

/// Sort a private copy of `input` with `algorithm`, keeping the full trace.
pub fn run<T: Scalar>(input: &[T], algorithm: Algorithm) -> SortResult<T> {
    SortExecutor::new(SortConfig {
        algorithm,
        trace_policy: TracePolicy::Full,
    })
    .run(input)
}
