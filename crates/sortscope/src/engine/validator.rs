//! Validation for sequence generation and playback configuration.
//!
//! ## Purpose
//!
//! This module checks the parameters of the collaborators around the engine:
//! the length and value range of generated sequences, the playback speed and
//! the chart width. Sorting itself accepts any sequence and needs no checks.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Stateless**: All methods are associated functions.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clamp or correct invalid parameters.

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// Bounds
// ============================================================================

/// Smallest length the sequence generator accepts.
pub const MIN_LENGTH: usize = 5;

/// Largest length the sequence generator accepts.
pub const MAX_LENGTH: usize = 50;

/// Slowest playback speed in steps per second.
pub const MIN_SPEED: u32 = 1;

/// Fastest playback speed in steps per second.
pub const MAX_SPEED: u32 = 20;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for collaborator configuration.
pub struct Validator;

impl Validator {
    /// Validate the length of a generated sequence.
    pub fn validate_length(length: usize) -> Result<(), SortError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(SortError::InvalidLength {
                got: length,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            });
        }
        Ok(())
    }

    /// Validate the half-open value range `[low, high)`.
    pub fn validate_value_range(low: i64, high: i64) -> Result<(), SortError> {
        if low >= high {
            return Err(SortError::InvalidValueRange { low, high });
        }
        Ok(())
    }

    /// Validate the playback speed in steps per second.
    pub fn validate_speed(speed: u32) -> Result<(), SortError> {
        if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
            return Err(SortError::InvalidSpeed {
                got: speed,
                min: MIN_SPEED,
                max: MAX_SPEED,
            });
        }
        Ok(())
    }

    /// Validate the chart width in columns.
    pub fn validate_chart_width(width: usize) -> Result<(), SortError> {
        if width == 0 {
            return Err(SortError::InvalidChartWidth(width));
        }
        Ok(())
    }

    /// Fail if a builder recorded a parameter set twice.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), SortError> {
        if let Some(parameter) = duplicate {
            return Err(SortError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
