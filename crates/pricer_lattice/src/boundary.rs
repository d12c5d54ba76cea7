//! Early-exercise boundary extraction.
//!
//! Condenses the per-node exercise decisions recorded during backward
//! induction into a compact report: for each time level, the stock-price
//! range(s) where immediate exercise beat continuation.
//!
//! The scan works purely from the recorded flags. It does not assume the
//! exercise region is one tail of the price axis: volatility/dividend
//! interaction can in principle split it, and a split region is reported as
//! multiple segments rather than silently merged into one min/max range.

use crate::lattice::Lattice;

/// One contiguous exercise range at one time level.
///
/// Levels with a split exercise region produce several segments sharing the
/// same `step`; levels with no exercise produce none.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoundarySegment {
    /// Time level index `i` (0..=N).
    pub step: usize,
    /// Time from inception in years, `i · Δt`.
    pub time_years: f64,
    /// Lowest stock price in the range.
    pub price_low: f64,
    /// Highest stock price in the range.
    pub price_high: f64,
    /// Number of lattice nodes in the range.
    pub node_count: usize,
}

/// Extracts the exercise boundary from the recorded flags.
///
/// Scans each level (every `stride`-th level when `stride > 1`, to bound
/// report size on fine lattices; level 0 is always included) in ascending
/// node order, which is ascending stock price, and emits one
/// [`BoundarySegment`] per maximal run of set flags.
///
/// Segments come out ordered by `step`, so `time_years` is non-decreasing
/// across the report.
///
/// A `stride` of 0 is treated as 1.
pub fn extract_boundary(
    stock: &Lattice<f64>,
    flags: &Lattice<bool>,
    dt: f64,
    stride: usize,
) -> Vec<BoundarySegment> {
    let stride = stride.max(1);
    let mut segments = Vec::new();

    for i in (0..=flags.steps()).step_by(stride) {
        let flag_level = flags.level(i);
        let stock_level = stock.level(i);
        let time_years = i as f64 * dt;

        let mut j = 0;
        while j < flag_level.len() {
            if !flag_level[j] {
                j += 1;
                continue;
            }
            let run_start = j;
            while j < flag_level.len() && flag_level[j] {
                j += 1;
            }
            segments.push(BoundarySegment {
                step: i,
                time_years,
                price_low: stock_level[run_start],
                price_high: stock_level[j - 1],
                node_count: j - run_start,
            });
        }
    }

    segments
}
