//! # sortscope — Instrumented Sorting for Step-by-Step Visualization
//!
//! Runs classic sorting algorithms while counting every element-to-element
//! comparison and recording a snapshot of the sequence at well-defined
//! instants, so the whole run can be replayed as an animation.
//!
//! ## What is recorded?
//!
//! Every run returns a [`SortResult`](prelude::SortResult):
//!
//! - **`sorted`**: the sorted values (the caller's input is never touched).
//! - **`comparisons`**: the exact number of ordering tests performed.
//! - **`trace`**: snapshots of the working sequence; `trace[0]` is the input
//!   and the last snapshot equals `sorted`.
//!
//! | Algorithm      | Comparisons                        | Snapshot taken after           |
//! |----------------|------------------------------------|--------------------------------|
//! | Bubble Sort    | always `n(n-1)/2` (no early exit)  | every exchange                 |
//! | Insertion Sort | `n-1` (sorted) to `n(n-1)/2`       | every shift and every placement|
//! | Merge Sort     | at most `n * ceil(log2 n)`         | every merge write and drain    |
//!
//! ## Quick Start
//!
//! ```rust
//! use sortscope::prelude::*;
//!
//! let values = vec![3, 1, 2];
//!
//! let runner = SortScope::new().algorithm(MergeSort).build()?;
//! let result = runner.run(&values);
//!
//! assert_eq!(result.sorted, vec![1, 2, 3]);
//! assert_eq!(result.comparisons, 3);
//! assert_eq!(result.trace.len(), 6);
//! println!("{}", result);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Algorithm:         Merge Sort
//!   Total Comparisons: 3
//!   Array Size:        3
//!   Total Steps:       6
//!
//! Sorted values:
//!   [1, 2, 3]
//! ```
//!
//! The one-call form skips the builder:
//!
//! ```rust
//! use sortscope::prelude::*;
//!
//! let result = run(&[3, 1, 2], InsertionSort);
//! assert_eq!((result.comparisons, result.steps()), (3, 5));
//! ```
//!
//! ### Generating input and playing it back
//!
//! ```rust
//! use sortscope::prelude::*;
//!
//! let mut generator = SequenceBuilder::new().length(20).seed(42).build()?;
//! let values: Vec<i32> = generator.next_sequence()?;
//!
//! let result = run(&values, ExchangeSort);
//! let playback = PlaybackBuilder::new().speed(10).build()?;
//!
//! for frame in playback.frames(&result) {
//!     // Render `frame.chart()`, then wait `playback.frame_interval()`.
//!     let _ = frame.title();
//! }
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Logging
//!
//! Runs emit `debug!` records through the [`log`](https://docs.rs/log) facade.
//! Install any logger (e.g. `env_logger`) to see them.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to drop the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! sortscope = { version = "0.3", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - counter, trace and shared types.
mod primitives;

// Layer 2: Algorithms - the instrumented sorts.
mod algorithms;

// Layer 3: Engine - dispatch and result bundling.
mod engine;

// Layer 4: Adapters - generation, playback and charts.
mod adapters;

// High-level fluent API.
mod api;

// Standard sortscope prelude.
pub mod prelude {
    pub use crate::api::{
        Algorithm::{self, ExchangeSort, InsertionSort, MergeSort},
        BarChart, ComparisonCounter, Frame, Frames, Playback, PlaybackBuilder, SequenceBuilder,
        SequenceGenerator, Snapshot, SortError, SortResult, SortRunner,
        SortScopeBuilder as SortScope, Trace, TracePolicy, run,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
