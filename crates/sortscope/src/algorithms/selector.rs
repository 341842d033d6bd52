//! Algorithm selector for the sorting engine.
//!
//! ## Purpose
//!
//! This module defines [`Algorithm`], the closed enumeration of sorts the
//! engine can run, along with the labels shown to users and a parser for
//! textual selectors.
//!
//! ## Design notes
//!
//! * **Closed set**: An unknown selector cannot be constructed; textual input is
//!   rejected by [`FromStr`] with [`SortError::UnknownAlgorithm`].
//! * **Lenient parsing**: Labels, variant names and short aliases are accepted,
//!   ignoring case, spaces, dashes and underscores.
//!
//! ## Invariants
//!
//! * `Algorithm::ALL` lists every variant exactly once, in picker order.
//! * `label()` round-trips through `from_str()`.
//!
//! ## Non-goals
//!
//! * This module does not run the sorts (handled by the engine).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// Algorithm Enum
// ============================================================================

/// Sorting algorithm run by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Bubble-style adjacent exchange sort without early exit.
    ///
    /// Always performs exactly `n(n-1)/2` comparisons.
    #[default]
    ExchangeSort,

    /// Top-down merge sort; ties favor the left half.
    MergeSort,

    /// Insertion sort walking each key backward into place.
    ///
    /// Costs `n-1` comparisons on sorted input and `n(n-1)/2` on reversed input.
    InsertionSort,
}

impl Algorithm {
    /// Every algorithm, in picker order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::ExchangeSort,
        Algorithm::MergeSort,
        Algorithm::InsertionSort,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ExchangeSort => "Bubble Sort",
            Self::MergeSort => "Merge Sort",
            Self::InsertionSort => "Insertion Sort",
        }
    }

    /// Asymptotic comparison cost.
    pub fn complexity(&self) -> &'static str {
        match self {
            Self::ExchangeSort | Self::InsertionSort => "O(n^2)",
            Self::MergeSort => "O(n log n)",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ExchangeSort => "Simple comparison-based algorithm",
            Self::MergeSort => "Divide and conquer algorithm",
            Self::InsertionSort => "Builds sorted array one item at a time",
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "bubble" | "bubblesort" | "exchange" | "exchangesort" => Ok(Self::ExchangeSort),
            "merge" | "mergesort" => Ok(Self::MergeSort),
            "insertion" | "insertionsort" => Ok(Self::InsertionSort),
            _ => Err(SortError::UnknownAlgorithm(s.to_string())),
        }
    }
}
