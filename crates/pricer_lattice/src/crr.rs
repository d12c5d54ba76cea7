//! Cox-Ross-Rubinstein model constants and forward lattice construction.
//!
//! The CRR parametrization of the binomial lattice:
//!
//! - `u = exp(σ√Δt)`  (up factor)
//! - `d = 1/u`  (down factor, so up-then-down recombines exactly)
//! - `p = (exp((r − q)·Δt) − d) / (u − d)`  (risk-neutral up-probability)
//! - `discount = exp(−r·Δt)`  (per-step discount)

use pricer_core::PricingParams;

use crate::error::LatticeError;
use crate::lattice::Lattice;

/// Tolerance for the risk-neutral probability at the `[0, 1]` boundary.
///
/// Floating rounding can push a legitimately degenerate `p` a few ulps past
/// an endpoint; within this band the value is accepted as-is rather than
/// rejected or clamped.
const PROBABILITY_EPSILON: f64 = 1e-12;

/// Derived CRR model constants for one pricing run.
///
/// Pure function of the parameter set: safe to cache against
/// `(S0, σ, q, r, T, N)` and free of side effects.
///
/// # Examples
/// ```
/// use pricer_core::{OptionStyle, OptionType, PricingParams};
/// use pricer_lattice::ModelConstants;
///
/// let params = PricingParams::new(
///     0.05, 0.2, 0.0, 100.0, 100.0, 1.0, Some(4),
///     OptionType::Call, OptionStyle::European,
/// )
/// .unwrap();
/// let constants = ModelConstants::derive(&params).unwrap();
///
/// // CRR symmetry: d = 1/u
/// assert!((constants.up_factor() * constants.down_factor() - 1.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModelConstants {
    #[cfg_attr(feature = "serde", serde(rename = "up_factor"))]
    up: f64,
    #[cfg_attr(feature = "serde", serde(rename = "down_factor"))]
    down: f64,
    #[cfg_attr(feature = "serde", serde(rename = "risk_neutral_probability"))]
    prob_up: f64,
    #[cfg_attr(feature = "serde", serde(rename = "discount_factor"))]
    discount: f64,
    #[cfg_attr(feature = "serde", serde(rename = "time_step"))]
    dt: f64,
    #[cfg_attr(feature = "serde", serde(rename = "number_of_periods"))]
    steps: usize,
}

impl ModelConstants {
    /// Derives the CRR constants from a validated parameter set.
    ///
    /// # Errors
    /// [`LatticeError::Arbitrage`] when the risk-neutral probability lies
    /// outside `[0, 1]` beyond a 1e-12 tolerance, i.e. when
    /// the no-arbitrage condition `d < exp((r − q)·Δt) < u` fails. The
    /// violation is surfaced, never clamped.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::{OptionStyle, OptionType, PricingParams};
    /// use pricer_lattice::{LatticeError, ModelConstants};
    ///
    /// // 100% rate against 1% vol on a single yearly step: drift escapes (d, u).
    /// let params = PricingParams::new(
    ///     1.0, 0.01, 0.0, 100.0, 100.0, 1.0, Some(1),
    ///     OptionType::Call, OptionStyle::European,
    /// )
    /// .unwrap();
    /// assert!(matches!(
    ///     ModelConstants::derive(&params),
    ///     Err(LatticeError::Arbitrage { .. })
    /// ));
    /// ```
    pub fn derive(params: &PricingParams) -> Result<Self, LatticeError> {
        let dt = params.dt();
        let up = (params.volatility() * dt.sqrt()).exp();
        let down = 1.0 / up;

        let drift = ((params.rate() - params.dividend_yield()) * dt).exp();
        let prob_up = (drift - down) / (up - down);

        if !(-PROBABILITY_EPSILON..=1.0 + PROBABILITY_EPSILON).contains(&prob_up) {
            return Err(LatticeError::Arbitrage {
                probability: prob_up,
            });
        }

        Ok(Self {
            up,
            down,
            prob_up,
            discount: (-params.rate() * dt).exp(),
            dt,
            steps: params.steps(),
        })
    }

    /// Up factor `u`.
    #[inline]
    pub fn up_factor(&self) -> f64 {
        self.up
    }

    /// Down factor `d = 1/u`.
    #[inline]
    pub fn down_factor(&self) -> f64 {
        self.down
    }

    /// Risk-neutral up-probability `p`.
    #[inline]
    pub fn risk_neutral_probability(&self) -> f64 {
        self.prob_up
    }

    /// Per-step discount factor `exp(−r·Δt)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        self.discount
    }

    /// Time step `Δt = T/N` in years.
    #[inline]
    pub fn time_step(&self) -> f64 {
        self.dt
    }

    /// Number of lattice steps `N`.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

/// Builds the forward stock-price lattice, `S(i, j) = S0 · u^j · d^(i−j)`.
///
/// Each level is filled from the previous one with a single multiplication
/// per node: the first node drops by `d`, every further node is its left
/// neighbour times `u²` (recombination collapses the up-then-down and
/// down-then-up paths). No node is computed twice.
pub fn build_stock_lattice(params: &PricingParams, constants: &ModelConstants) -> Lattice<f64> {
    let steps = constants.steps();
    let mut stock = Lattice::new(steps);
    *stock.node_mut(0, 0) = params.spot();

    let up_squared = constants.up_factor() * constants.up_factor();
    for i in 1..=steps {
        let lowest = stock.node(i - 1, 0) * constants.down_factor();
        let level = stock.level_mut(i);
        level[0] = lowest;
        for j in 1..=i {
            level[j] = level[j - 1] * up_squared;
        }
    }
    stock
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::{OptionStyle, OptionType};

    fn params(rate: f64, sigma: f64, steps: usize) -> PricingParams {
        PricingParams::new(
            rate,
            sigma,
            0.02,
            100.0,
            100.0,
            1.0,
            Some(steps),
            OptionType::Call,
            OptionStyle::European,
        )
        .unwrap()
    }

    #[test]
    fn test_constants_match_closed_forms() {
        let p = params(0.05, 0.25, 252);
        let c = ModelConstants::derive(&p).unwrap();

        let dt = 1.0 / 252.0;
        assert_relative_eq!(c.time_step(), dt, epsilon = 1e-15);
        assert_relative_eq!(c.up_factor(), (0.25 * dt.sqrt()).exp(), epsilon = 1e-15);
        assert_relative_eq!(c.down_factor(), 1.0 / c.up_factor(), epsilon = 1e-15);
        assert_relative_eq!(c.discount_factor(), (-0.05 * dt).exp(), epsilon = 1e-15);

        let drift = ((0.05_f64 - 0.02) * dt).exp();
        let expected_p = (drift - c.down_factor()) / (c.up_factor() - c.down_factor());
        assert_relative_eq!(c.risk_neutral_probability(), expected_p, epsilon = 1e-15);
        assert!(c.risk_neutral_probability() > 0.0 && c.risk_neutral_probability() < 1.0);
    }

    #[test]
    fn test_arbitrage_rejected_when_drift_exceeds_up() {
        // exp((r - q) * dt) = e^{0.98} >> u = e^{0.01}
        let p = params(1.0, 0.01, 1);
        match ModelConstants::derive(&p) {
            Err(LatticeError::Arbitrage { probability }) => assert!(probability > 1.0),
            other => panic!("expected Arbitrage, got {:?}", other),
        }
    }

    #[test]
    fn test_arbitrage_rejected_when_drift_below_down() {
        // Strongly negative carry: exp((r - q) * dt) < d, p < 0.
        let p = PricingParams::new(
            -0.5,
            0.01,
            0.5,
            100.0,
            100.0,
            1.0,
            Some(1),
            OptionType::Put,
            OptionStyle::European,
        )
        .unwrap();
        match ModelConstants::derive(&p) {
            Err(LatticeError::Arbitrage { probability }) => assert!(probability < 0.0),
            other => panic!("expected Arbitrage, got {:?}", other),
        }
    }

    #[test]
    fn test_stock_lattice_recombines() {
        let p = params(0.05, 0.25, 6);
        let c = ModelConstants::derive(&p).unwrap();
        let stock = build_stock_lattice(&p, &c);

        // Closed form at every node.
        for i in 0..=6 {
            for j in 0..=i {
                let expected =
                    100.0 * c.up_factor().powi(j as i32) * c.down_factor().powi((i - j) as i32);
                assert_relative_eq!(stock.node(i, j), expected, max_relative = 1e-12);
            }
        }

        // Recombination: the centre of an even level is the spot again.
        assert_relative_eq!(stock.node(4, 2), 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_stock_levels_ascend_in_j() {
        let p = params(0.05, 0.25, 32);
        let c = ModelConstants::derive(&p).unwrap();
        let stock = build_stock_lattice(&p, &c);
        for i in 1..=32 {
            let level = stock.level(i);
            assert!(level.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialized_field_names() {
        let c = ModelConstants::derive(&params(0.05, 0.25, 252)).unwrap();
        let json = serde_json::to_value(&c).unwrap();
        for key in [
            "up_factor",
            "down_factor",
            "risk_neutral_probability",
            "discount_factor",
            "time_step",
            "number_of_periods",
        ] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
    }
}
