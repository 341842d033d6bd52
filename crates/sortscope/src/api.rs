//! High-level API for instrumented sorting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for choosing an algorithm and a trace policy, and the
//! [`SortRunner`] that executes runs with that configuration.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Duplicate parameters are reported when `.build()` is called.
//! * **Stateless runs**: A runner can be reused for any number of inputs.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SortScopeBuilder`] via `SortScope::new()`.
//! 2. Chain configuration methods (`.algorithm()`, `.trace_policy()`).
//! 3. Call `.build()` to get a [`SortRunner`], then `.run(&values)`.

// Internal dependencies
use crate::engine::executor::{SortConfig, SortExecutor};
use crate::engine::validator::Validator;
use crate::primitives::sequence::Scalar;

// Publicly re-exported types
pub use crate::adapters::chart::BarChart;
pub use crate::adapters::generator::{SequenceBuilder, SequenceGenerator};
pub use crate::adapters::playback::{Frame, Frames, Playback, PlaybackBuilder};
pub use crate::algorithms::selector::Algorithm;
pub use crate::engine::executor::run;
pub use crate::engine::output::SortResult;
pub use crate::primitives::counter::ComparisonCounter;
pub use crate::primitives::errors::SortError;
pub use crate::primitives::trace::{Snapshot, Trace, TracePolicy};

/// Fluent builder for configuring sorting runs.
#[derive(Debug, Clone, Default)]
pub struct SortScopeBuilder {
    /// Algorithm to run (default: exchange sort).
    pub algorithm: Option<Algorithm>,

    /// Which snapshots the trace keeps (default: all).
    pub trace_policy: Option<TracePolicy>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl SortScopeBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sorting algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param = Some("algorithm");
        }
        self.algorithm = Some(algorithm);
        self
    }

    /// Set the trace policy.
    pub fn trace_policy(mut self, policy: TracePolicy) -> Self {
        if self.trace_policy.is_some() {
            self.duplicate_param = Some("trace_policy");
        }
        self.trace_policy = Some(policy);
        self
    }

    /// Shorthand for `.trace_policy(TracePolicy::Deduplicate)`.
    pub fn deduplicate_trace(self) -> Self {
        self.trace_policy(TracePolicy::Deduplicate)
    }

    /// Validate the configuration and build a runner.
    pub fn build(self) -> Result<SortRunner, SortError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = SortConfig {
            algorithm: self.algorithm.unwrap_or_default(),
            trace_policy: self.trace_policy.unwrap_or_default(),
        };
        Ok(SortRunner {
            executor: SortExecutor::new(config),
        })
    }
}

/// Configured, reusable entry point for sorting runs.
#[derive(Debug, Clone, Copy)]
pub struct SortRunner {
    executor: SortExecutor,
}

impl SortRunner {
    /// Algorithm this runner uses.
    pub fn algorithm(&self) -> Algorithm {
        self.executor.config().algorithm
    }

    /// Trace policy this runner uses.
    pub fn trace_policy(&self) -> TracePolicy {
        self.executor.config().trace_policy
    }

    /// Sort a private copy of `values`.
    pub fn run<T: Scalar>(&self, values: &[T]) -> SortResult<T> {
        self.executor.run(values)
    }
}
