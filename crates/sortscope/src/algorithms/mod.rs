//! Layer 2: Algorithms
//!
//! This layer implements the three instrumented sorts. Each one mutates a
//! working buffer in place while driving a comparison counter and a trace
//! recorder according to its own timing rules. The engine layer decides which
//! one runs.

// Closed set of algorithm selectors.
pub mod selector;

// Bubble-style exchange sort without early exit.
pub mod exchange;

// Backward-walking insertion sort.
pub mod insertion;

// Top-down recursive merge sort.
pub mod merge;
