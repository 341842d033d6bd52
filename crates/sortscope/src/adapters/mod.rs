//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer adapts the engine to the interactive surface around it:
//!
//! - **Generator**: Seeded random input sequences
//! - **Playback**: Step-by-step frames over a finished trace
//! - **Chart**: Text bar rendering of one snapshot
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Random input sequences.
pub mod generator;

/// Frame-by-frame playback of a trace.
pub mod playback;

/// Text bar charts.
pub mod chart;
