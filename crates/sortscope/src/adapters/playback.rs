//! Frame-by-frame playback of a finished trace.
//!
//! ## Purpose
//!
//! This module turns a [`SortResult`] into a sequence of [`Frame`]s a caller
//! can render at its own pace, together with the pacing it should use.
//!
//! ## Design notes
//!
//! * **Caller-paced**: Playback never sleeps; [`Playback::frame_interval`] tells
//!   the caller how long to wait between frames.
//! * **Stable scale**: Every frame of a run shares one chart ceiling,
//!   `max(input) + 10`, so bars do not jump between frames.
//! * **Borrowing**: Frames borrow snapshots from the result; nothing is copied.
//!
//! ## Key concepts
//!
//! * **Step**: 1-based position of a frame in the trace.
//! * **Progress**: `step / total`, reaching exactly 1.0 on the last frame.
//! * **Speed**: Steps per second, between 1 and 20, default 5.
//!
//! ## Invariants
//!
//! * Frames are yielded in trace order, one per snapshot.
//! * Progress is strictly increasing.
//!
//! ## Non-goals
//!
//! * This module does not render anything beyond the text chart.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

// External dependencies
use core::iter::FusedIterator;
use core::time::Duration;

// Internal dependencies
use crate::adapters::chart::{BarChart, DEFAULT_CHART_WIDTH};
use crate::algorithms::selector::Algorithm;
use crate::engine::output::SortResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::SortError;
use crate::primitives::sequence::{Scalar, max_value};
use crate::primitives::trace::Snapshot;

// ============================================================================
// Defaults
// ============================================================================

/// Default playback speed in steps per second.
pub const DEFAULT_SPEED: u32 = 5;

/// Headroom added above the largest input value.
pub const CEILING_HEADROOM: f64 = 10.0;

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`Playback`] settings.
#[derive(Debug, Clone, Default)]
pub struct PlaybackBuilder {
    /// Steps per second.
    pub speed: Option<u32>,

    /// Chart width in columns.
    pub chart_width: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl PlaybackBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the playback speed in steps per second (1 to 20).
    pub fn speed(mut self, steps_per_sec: u32) -> Self {
        if self.speed.is_some() {
            self.duplicate_param = Some("speed");
        }
        self.speed = Some(steps_per_sec);
        self
    }

    /// Set the chart width in columns.
    pub fn chart_width(mut self, width: usize) -> Self {
        if self.chart_width.is_some() {
            self.duplicate_param = Some("chart_width");
        }
        self.chart_width = Some(width);
        self
    }

    /// Validate the configuration and build the playback settings.
    pub fn build(self) -> Result<Playback, SortError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let speed = self.speed.unwrap_or(DEFAULT_SPEED);
        Validator::validate_speed(speed)?;

        let chart_width = self.chart_width.unwrap_or(DEFAULT_CHART_WIDTH);
        Validator::validate_chart_width(chart_width)?;

        Ok(Playback { speed, chart_width })
    }
}

// ============================================================================
// Playback
// ============================================================================

/// Validated playback settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    speed: u32,
    chart_width: usize,
}

impl Playback {
    /// Steps per second.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Chart width in columns.
    pub fn chart_width(&self) -> usize {
        self.chart_width
    }

    /// Time between two frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.speed
    }

    /// Time to play a whole trace of `steps` frames.
    ///
    /// Saturates instead of overflowing for very long traces.
    pub fn duration(&self, steps: usize) -> Duration {
        let steps = u32::try_from(steps).unwrap_or(u32::MAX);
        self.frame_interval().saturating_mul(steps)
    }

    /// Frames of `result`, in trace order.
    pub fn frames<'a, T: Scalar>(&self, result: &'a SortResult<T>) -> Frames<'a, T> {
        let ceiling = max_value(result.input())
            .and_then(|m| m.to_f64())
            .map_or(CEILING_HEADROOM, |m| m + CEILING_HEADROOM);

        Frames {
            snapshots: result.trace.as_slice(),
            algorithm: result.algorithm,
            ceiling,
            chart_width: self.chart_width,
            next: 0,
        }
    }
}

// ============================================================================
// Frames
// ============================================================================

/// One playback frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a, T> {
    /// 0-based index into the trace.
    pub index: usize,

    /// Number of frames in the playback.
    pub total: usize,

    /// Snapshot shown in this frame.
    pub snapshot: &'a Snapshot<T>,

    /// Algorithm being played back.
    pub algorithm: Algorithm,

    /// Chart ceiling shared by every frame of the run.
    pub ceiling: f64,

    chart_width: usize,
}

impl<'a, T: Scalar> Frame<'a, T> {
    /// 1-based step number.
    pub fn step(&self) -> usize {
        self.index + 1
    }

    /// Fraction of the playback completed once this frame is shown.
    pub fn progress(&self) -> f64 {
        self.step() as f64 / self.total as f64
    }

    /// Check if this is the final frame.
    pub fn is_last(&self) -> bool {
        self.step() == self.total
    }

    /// Caption such as `"Merge Sort - Step 3/6"`.
    pub fn title(&self) -> String {
        format!("{} - Step {}/{}", self.algorithm, self.step(), self.total)
    }

    /// Text chart of this frame's snapshot.
    pub fn chart(&self) -> BarChart<'a, T> {
        BarChart::new(self.snapshot.as_slice(), self.ceiling, self.chart_width)
    }
}

/// Iterator over the frames of one run.
#[derive(Debug, Clone)]
pub struct Frames<'a, T> {
    snapshots: &'a [Snapshot<T>],
    algorithm: Algorithm,
    ceiling: f64,
    chart_width: usize,
    next: usize,
}

impl<'a, T> Iterator for Frames<'a, T> {
    type Item = Frame<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let snapshot = self.snapshots.get(self.next)?;
        let frame = Frame {
            index: self.next,
            total: self.snapshots.len(),
            snapshot,
            algorithm: self.algorithm,
            ceiling: self.ceiling,
            chart_width: self.chart_width,
        };
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.snapshots.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Frames<'_, T> {}

impl<T> FusedIterator for Frames<'_, T> {}
