//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a sorting run: it copies the caller's input,
//! dispatches to the selected algorithm with a fresh counter and recorder,
//! and bundles the outcome into a [`output::SortResult`].
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Dispatch and execution of a single sort.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for sorting runs.
pub mod output;
