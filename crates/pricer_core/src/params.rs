//! The validated pricing parameter set.
//!
//! This module provides `PricingParams`, the immutable description of one
//! pricing request, together with the documented default rule for the
//! lattice step count.

use crate::types::{OptionStyle, OptionType, ValidationError};

/// Trading days per year, used when deriving a default step count.
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Default lattice step count for a maturity of `maturity` years.
///
/// Computes `ceil(maturity × 252)`, one step per trading day, rounded *up*
/// so a fractional trading day still contributes a step and a short-dated
/// contract never collapses to a zero-step lattice.
///
/// This rule is deliberately a named function rather than inline arithmetic:
/// it changes convergence behaviour, so callers omitting the step count must
/// be able to see (and test) exactly what they get.
///
/// # Arguments
/// * `maturity` - Time to maturity in years (must be positive; enforced by
///   [`PricingParams::new`], not here)
///
/// # Examples
/// ```
/// use pricer_core::params::steps_for_maturity;
///
/// assert_eq!(steps_for_maturity(1.0), 252);
/// assert_eq!(steps_for_maturity(0.5), 126);
/// assert_eq!(steps_for_maturity(0.7), 177);  // ceil(176.4)
/// assert_eq!(steps_for_maturity(0.001), 1);  // ceil(0.252)
/// ```
#[inline]
pub fn steps_for_maturity(maturity: f64) -> usize {
    (maturity * f64::from(TRADING_DAYS_PER_YEAR)).ceil() as usize
}

/// Immutable, validated description of one pricing request.
///
/// Combines market parameters (rate, volatility, dividend yield, spot),
/// contract parameters (strike, maturity, type, style) and the model
/// parameter (lattice step count). Constructed once per request via
/// [`PricingParams::new`] and never mutated afterwards; the lattice kernel
/// assumes every field is already validated and numeric.
///
/// # Examples
/// ```
/// use pricer_core::params::PricingParams;
/// use pricer_core::types::{OptionStyle, OptionType};
///
/// let params = PricingParams::new(
///     0.05, 0.25, 0.02, 100.0, 100.0, 1.0,
///     None, // steps default to ceil(T * 252) = 252
///     OptionType::Put,
///     OptionStyle::European,
/// )
/// .unwrap();
/// assert_eq!(params.steps(), 252);
/// ```
// Serialize only: a parameter set must enter the system through `new` so the
// validation invariants hold for every live instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingParams {
    /// Annual risk-free rate (continuously compounded).
    #[cfg_attr(feature = "serde", serde(rename = "interest_rate"))]
    rate: f64,
    /// Annualised volatility.
    volatility: f64,
    /// Continuous dividend yield.
    dividend_yield: f64,
    /// Spot price of the underlying at inception.
    #[cfg_attr(feature = "serde", serde(rename = "initial_stock_price"))]
    spot: f64,
    /// Strike price.
    #[cfg_attr(feature = "serde", serde(rename = "strike_price"))]
    strike: f64,
    /// Time to maturity in years.
    #[cfg_attr(feature = "serde", serde(rename = "time_to_maturity"))]
    maturity: f64,
    /// Number of lattice steps.
    #[cfg_attr(feature = "serde", serde(rename = "number_of_periods"))]
    steps: usize,
    /// Call or put.
    option_type: OptionType,
    /// European or American.
    option_style: OptionStyle,
}

impl PricingParams {
    /// Creates a validated parameter set.
    ///
    /// # Arguments
    /// * `rate` - Annual risk-free rate (must be finite)
    /// * `volatility` - Annualised volatility (must be finite and positive)
    /// * `dividend_yield` - Continuous dividend yield (finite, non-negative)
    /// * `spot` - Spot price (finite, positive)
    /// * `strike` - Strike price (finite, positive)
    /// * `maturity` - Time to maturity in years (finite, positive)
    /// * `steps` - Lattice step count; `None` defaults to
    ///   [`steps_for_maturity`]`(maturity)`
    /// * `option_type` - Call or put
    /// * `option_style` - European or American
    ///
    /// # Errors
    /// A [`ValidationError`] naming the first offending field. No field is
    /// ever silently clamped or defaulted except the documented `steps`
    /// default.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::params::PricingParams;
    /// use pricer_core::types::{OptionStyle, OptionType, ValidationError};
    ///
    /// let err = PricingParams::new(
    ///     0.05, -0.25, 0.0, 100.0, 100.0, 1.0, Some(100),
    ///     OptionType::Call, OptionStyle::European,
    /// )
    /// .unwrap_err();
    /// assert!(matches!(err, ValidationError::NotPositive { field: "volatility", .. }));
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rate: f64,
        volatility: f64,
        dividend_yield: f64,
        spot: f64,
        strike: f64,
        maturity: f64,
        steps: Option<usize>,
        option_type: OptionType,
        option_style: OptionStyle,
    ) -> Result<Self, ValidationError> {
        check_finite(rate, "interest_rate")?;
        check_positive(volatility, "volatility")?;
        check_finite(dividend_yield, "dividend_yield")?;
        check_non_negative(dividend_yield, "dividend_yield")?;
        check_positive(spot, "initial_stock_price")?;
        check_positive(strike, "strike_price")?;
        check_positive(maturity, "time_to_maturity")?;

        let steps = match steps {
            Some(0) => return Err(ValidationError::InvalidSteps { steps: 0 }),
            Some(n) => n,
            None => steps_for_maturity(maturity),
        };

        Ok(Self {
            rate,
            volatility,
            dividend_yield,
            spot,
            strike,
            maturity,
            steps,
            option_type,
            option_style,
        })
    }

    /// Annual risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Annualised volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Continuous dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Spot price at inception.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Number of lattice steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// European or American.
    #[inline]
    pub fn option_style(&self) -> OptionStyle {
        self.option_style
    }

    /// Length of one lattice time step in years, `T / N`.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.maturity / self.steps as f64
    }

    /// Intrinsic payoff of the contract at the given spot price.
    #[inline]
    pub fn payoff(&self, spot: f64) -> f64 {
        self.option_type.payoff(spot, self.strike)
    }
}

fn check_finite(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { field, value })
    }
}

fn check_positive(value: f64, field: &'static str) -> Result<(), ValidationError> {
    check_finite(value, field)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive { field, value })
    }
}

fn check_non_negative(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::Negative { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn valid() -> Result<PricingParams, ValidationError> {
        PricingParams::new(
            0.05,
            0.25,
            0.02,
            100.0,
            100.0,
            1.0,
            Some(252),
            OptionType::Call,
            OptionStyle::American,
        )
    }

    #[test]
    fn test_valid_construction() {
        let params = valid().unwrap();
        assert_eq!(params.rate(), 0.05);
        assert_eq!(params.steps(), 252);
        assert_eq!(params.option_type(), OptionType::Call);
        assert_eq!(params.option_style(), OptionStyle::American);
        assert_relative_eq!(params.dt(), 1.0 / 252.0, epsilon = 1e-15);
    }

    #[test]
    fn test_steps_for_maturity_exact_products() {
        assert_eq!(steps_for_maturity(1.0), 252);
        assert_eq!(steps_for_maturity(0.5), 126);
        assert_eq!(steps_for_maturity(2.0), 504);
    }

    #[test]
    fn test_steps_for_maturity_rounds_up() {
        assert_eq!(steps_for_maturity(0.7), 177); // 176.4 -> 177
        assert_eq!(steps_for_maturity(0.01), 3); // 2.52 -> 3
        assert_eq!(steps_for_maturity(1e-4), 1); // 0.0252 -> 1, never 0
    }

    #[test]
    fn test_default_steps_applied_when_omitted() {
        let params = PricingParams::new(
            0.05,
            0.25,
            0.0,
            100.0,
            100.0,
            0.7,
            None,
            OptionType::Put,
            OptionStyle::European,
        )
        .unwrap();
        assert_eq!(params.steps(), 177);
    }

    #[test]
    fn test_zero_steps_rejected() {
        let err = PricingParams::new(
            0.05,
            0.25,
            0.0,
            100.0,
            100.0,
            1.0,
            Some(0),
            OptionType::Call,
            OptionStyle::European,
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidSteps { steps: 0 });
    }

    #[test]
    fn test_non_positive_volatility_rejected() {
        for sigma in [0.0, -0.25] {
            let err = PricingParams::new(
                0.05,
                sigma,
                0.0,
                100.0,
                100.0,
                1.0,
                Some(10),
                OptionType::Call,
                OptionStyle::European,
            )
            .unwrap_err();
            assert!(matches!(
                err,
                ValidationError::NotPositive {
                    field: "volatility",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_negative_dividend_yield_rejected() {
        let err = PricingParams::new(
            0.05,
            0.25,
            -0.01,
            100.0,
            100.0,
            1.0,
            Some(10),
            OptionType::Call,
            OptionStyle::European,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Negative {
                field: "dividend_yield",
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_rate_rejected() {
        for rate in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = PricingParams::new(
                rate,
                0.25,
                0.0,
                100.0,
                100.0,
                1.0,
                Some(10),
                OptionType::Call,
                OptionStyle::European,
            )
            .unwrap_err();
            assert!(matches!(
                err,
                ValidationError::NotFinite {
                    field: "interest_rate",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_negative_rate_accepted() {
        // Negative rates are economically meaningful and must pass.
        let params = PricingParams::new(
            -0.01,
            0.25,
            0.0,
            100.0,
            100.0,
            1.0,
            Some(10),
            OptionType::Put,
            OptionStyle::European,
        );
        assert!(params.is_ok());
    }

    #[test]
    fn test_non_positive_market_fields_rejected() {
        let cases: [(f64, f64, f64, &str); 3] = [
            (0.0, 100.0, 1.0, "initial_stock_price"),
            (100.0, -5.0, 1.0, "strike_price"),
            (100.0, 100.0, 0.0, "time_to_maturity"),
        ];
        for (spot, strike, maturity, field) in cases {
            let err = PricingParams::new(
                0.05,
                0.25,
                0.0,
                spot,
                strike,
                maturity,
                Some(10),
                OptionType::Call,
                OptionStyle::European,
            )
            .unwrap_err();
            match err {
                ValidationError::NotPositive { field: f, .. } => assert_eq!(f, field),
                other => panic!("expected NotPositive for {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_payoff_delegates_to_type() {
        let params = valid().unwrap();
        assert_eq!(params.payoff(112.5), 12.5);
        assert_eq!(params.payoff(80.0), 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_wire_names() {
        let params = valid().unwrap();
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["interest_rate"], 0.05);
        assert_eq!(json["initial_stock_price"], 100.0);
        assert_eq!(json["number_of_periods"], 252);
        assert_eq!(json["option_type"], "call");
        assert_eq!(json["option_style"], "american");
    }
}
