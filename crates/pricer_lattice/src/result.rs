//! Pricing result and engine configuration.

use pricer_core::PricingParams;

use crate::boundary::BoundarySegment;
use crate::crr::ModelConstants;
use crate::lattice::Lattice;

/// Per-call engine switches.
///
/// # Examples
/// ```
/// use pricer_lattice::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.boundary_stride, 1);
/// assert!(!config.retain_lattice);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Report the exercise boundary at every `boundary_stride`-th level
    /// (1 = every level). 0 is treated as 1.
    pub boundary_stride: usize,
    /// Keep the stock/value lattices on the result instead of dropping them.
    /// The snapshot is for inspection and reporting; it is never part of the
    /// serialized response.
    pub retain_lattice: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            boundary_stride: 1,
            retain_lattice: false,
        }
    }
}

/// The fully populated per-run lattices, retained on request.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeSnapshot {
    /// Stock price at every node.
    pub stock: Lattice<f64>,
    /// Option value at every node.
    pub values: Lattice<f64>,
}

impl LatticeSnapshot {
    pub(crate) fn new(stock: Lattice<f64>, values: Lattice<f64>) -> Self {
        Self { stock, values }
    }
}

/// Output aggregate of one pricing call.
///
/// Immutable; nothing in it refers back to engine state, so it is safe to
/// hold across calls. Serialisation (with the `serde` feature) produces the
/// response contract consumed by formatters and exporters:
///
/// ```json
/// {
///   "fair_value": 11.10,
///   "parameters": { "interest_rate": 0.05, ... },
///   "model_parameters": { "up_factor": 1.0159, ... },
///   "early_exercise_boundary": [
///     { "step": 60, "time_years": 0.238, "price_low": 259.9,
///       "price_high": 412.8, "node_count": 7 }
///   ]
/// }
/// ```
///
/// `early_exercise_boundary` is present (possibly empty) for American
/// contracts and absent for European ones. A retained lattice snapshot is
/// deliberately excluded from serialisation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingResult {
    /// Fair value of the contract, `V(0, 0)`.
    pub fair_value: f64,
    /// The request that produced this result, echoed for reporting.
    pub parameters: PricingParams,
    /// Derived CRR model constants.
    #[cfg_attr(feature = "serde", serde(rename = "model_parameters"))]
    pub model: ModelConstants,
    /// Exercise boundary report (American only).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub early_exercise_boundary: Option<Vec<BoundarySegment>>,
    /// Retained lattices, if the engine was configured to keep them.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub lattice: Option<LatticeSnapshot>,
}
