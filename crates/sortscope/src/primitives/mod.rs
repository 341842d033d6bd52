//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions, data structures, and
//! utility functions used throughout the crate. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Scalar bound and sequence helpers.
pub mod sequence;

/// Comparison counting.
pub mod counter;

/// Snapshots, traces and the trace recorder.
pub mod trace;

/// Shared error types.
pub mod errors;

/// Seeded pseudo-random source.
pub mod rng;
