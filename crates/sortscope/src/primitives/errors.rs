//! Error types for sortscope operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur at the boundary of
//! the sorting engine: parsing an algorithm name, configuring the sequence
//! generator, and configuring playback.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending value and the accepted bounds.
//! * **Deferred**: Builders record duplicate parameters and report them from `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Selector parsing**: Textual algorithm names that match no known variant.
//! 2. **Generator configuration**: Sequence length and value range.
//! 3. **Playback configuration**: Animation speed and chart width.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Sorting itself never fails; no variant describes a sorting failure.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sortscope operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The algorithm name does not match any known sorting algorithm.
    UnknownAlgorithm(String),

    /// Requested sequence length is outside the accepted range.
    InvalidLength {
        /// Length provided.
        got: usize,
        /// Minimum accepted length.
        min: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// Value range for generated sequences is empty.
    InvalidValueRange {
        /// Inclusive lower bound.
        low: i64,
        /// Exclusive upper bound.
        high: i64,
    },

    /// A generated value cannot be represented in the target scalar type.
    UnrepresentableValue(i64),

    /// Playback speed (steps per second) is outside the accepted range.
    InvalidSpeed {
        /// Speed provided.
        got: u32,
        /// Minimum accepted speed.
        min: u32,
        /// Maximum accepted speed.
        max: u32,
    },

    /// Chart width must be at least one column.
    InvalidChartWidth(usize),

    /// Parameter was set multiple times in a builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::UnknownAlgorithm(name) => write!(f, "Unknown sorting algorithm: '{name}'"),
            Self::InvalidLength { got, min, max } => {
                write!(f, "Invalid length: {got} (must be between {min} and {max})")
            }
            Self::InvalidValueRange { low, high } => {
                write!(f, "Invalid value range: [{low}, {high}) is empty")
            }
            Self::UnrepresentableValue(value) => {
                write!(f, "Value {value} cannot be represented in the element type")
            }
            Self::InvalidSpeed { got, min, max } => {
                write!(
                    f,
                    "Invalid speed: {got} steps/sec (must be between {min} and {max})"
                )
            }
            Self::InvalidChartWidth(width) => {
                write!(f, "Invalid chart width: {width} (must be at least 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
