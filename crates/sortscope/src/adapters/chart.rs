//! Text bar chart of a single snapshot.
//!
//! ## Purpose
//!
//! Renders a sequence as one horizontal bar per element, scaled against a
//! fixed ceiling so that consecutive frames of a playback line up.
//!
//! ## Design notes
//!
//! * **Borrowing**: The chart borrows the values it draws.
//! * **Scaling**: `bar = round(value / ceiling * width)` (half up), clamped to `[0, width]`.
//!
//! ## Invariants
//!
//! * One line per element, in sequence order.
//! * No bar is longer than the chart width.
//!
//! ## Non-goals
//!
//! * This module does not draw axes, colours or vertical bars.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::sequence::Scalar;

/// Default chart width in columns.
pub const DEFAULT_CHART_WIDTH: usize = 40;

/// Character used to draw bars.
const BAR: char = '#';

/// Horizontal text bar chart over borrowed values.
#[derive(Debug, Clone, Copy)]
pub struct BarChart<'a, T> {
    values: &'a [T],
    ceiling: f64,
    width: usize,
}

impl<'a, T: Scalar> BarChart<'a, T> {
    /// Chart `values` against `ceiling`, `width` columns wide.
    pub fn new(values: &'a [T], ceiling: f64, width: usize) -> Self {
        Self {
            values,
            ceiling,
            width,
        }
    }

    /// Bar length in columns for one value.
    pub fn bar_len(&self, value: T) -> usize {
        let v = value.to_f64().unwrap_or(0.0);
        if self.ceiling.is_nan() || v.is_nan() || self.ceiling <= 0.0 || v <= 0.0 {
            return 0;
        }
        // Round half up; `f64::round` is unavailable without `std`.
        let scaled = v / self.ceiling * self.width as f64 + 0.5;
        (scaled as usize).min(self.width)
    }
}

impl<T: Scalar + Display> Display for BarChart<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, &value) in self.values.iter().enumerate() {
            write!(f, "{:>4} {:>6} |", i, value)?;
            for _ in 0..self.bar_len(value) {
                write!(f, "{}", BAR)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
