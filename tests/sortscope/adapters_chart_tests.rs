#![cfg(feature = "dev")]
//! Tests for the text bar chart.
//!
//! ## Test Organization
//!
//! 1. **Scaling** - Bar lengths against the ceiling
//! 2. **Rendering** - Line layout

use sortscope::internals::adapters::chart::BarChart;

// ============================================================================
// Scaling Tests
// ============================================================================

/// Test bar lengths scale linearly and clamp to the width.
#[test]
fn test_bar_len_scaling() {
    let values = [0, 25, 50, 100, 200];
    let chart = BarChart::new(&values, 100.0, 40);

    assert_eq!(chart.bar_len(0), 0);
    assert_eq!(chart.bar_len(25), 10);
    assert_eq!(chart.bar_len(50), 20);
    assert_eq!(chart.bar_len(100), 40);
    assert_eq!(chart.bar_len(200), 40, "Clamped to width");
}

/// Test rounding and non-positive values.
#[test]
fn test_bar_len_rounding_and_negatives() {
    let values = [-5.0, 1.0];
    let chart = BarChart::new(&values, 10.0, 4);

    assert_eq!(chart.bar_len(-5.0), 0);
    assert_eq!(chart.bar_len(1.0), 0, "0.4 rounds down");
    assert_eq!(chart.bar_len(1.25), 1, "0.5 rounds up");
}

/// Test that a non-positive ceiling draws nothing.
#[test]
fn test_bar_len_zero_ceiling() {
    let values = [5];
    let chart = BarChart::new(&values, 0.0, 10);
    assert_eq!(chart.bar_len(5), 0);
}

// ============================================================================
// Rendering Tests
// ============================================================================

/// Test one line per value with index, value and bar.
#[test]
fn test_render_lines() {
    let values = [10, 5];
    let text = BarChart::new(&values, 10.0, 4).to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "   0     10 |####");
    assert_eq!(lines[1], "   1      5 |##");
}

/// Test rendering an empty sequence.
#[test]
fn test_render_empty() {
    let values: [i32; 0] = [];
    assert_eq!(BarChart::new(&values, 10.0, 4).to_string(), "");
}
