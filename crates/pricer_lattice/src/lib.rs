//! # pricer_lattice: CRR Binomial Lattice Pricing Kernel
//!
//! Prices vanilla European and American options on a Cox-Ross-Rubinstein
//! recombining binomial lattice with a continuous dividend yield.
//!
//! ## Pipeline
//!
//! One pricing call is a straight-line pipeline with no retries and no
//! shared state across invocations:
//!
//! 1. [`ModelConstants::derive`]: time step, up/down factors, risk-neutral
//!    probability, per-step discount (fails on arbitrage-inconsistent input)
//! 2. [`crr::build_stock_lattice`]: forward stock-price grid
//! 3. [`induction::induct`]: backward induction from maturity to inception,
//!    with per-node early-exercise decisions for American contracts
//! 4. [`boundary::extract_boundary`]: condenses the exercise flags into a
//!    boundary report (American only)
//!
//! The result is an immutable [`PricingResult`]; the lattices themselves are
//! dropped unless the caller asks for a snapshot via [`EngineConfig`].
//!
//! ## Quick Start
//!
//! ```
//! use pricer_core::{OptionStyle, OptionType, PricingParams};
//! use pricer_lattice::{price, EngineConfig};
//!
//! let params = PricingParams::new(
//!     0.05, 0.25, 0.02, 100.0, 100.0, 1.0, Some(252),
//!     OptionType::Call, OptionStyle::American,
//! )
//! .unwrap();
//!
//! let result = price(&params, &EngineConfig::default()).unwrap();
//! assert!(result.fair_value > 0.0);
//! assert!(result.early_exercise_boundary.is_some());
//! ```
//!
//! ## Determinism
//!
//! All arithmetic is `f64`; every node value is computed from exactly two
//! child nodes in a fixed term order, so repeated runs (and the optional
//! `parallel` feature) reproduce results bit-for-bit.

pub mod boundary;
pub mod crr;
pub mod error;
pub mod induction;
pub mod lattice;
pub mod result;

pub use boundary::BoundarySegment;
pub use crr::ModelConstants;
pub use error::LatticeError;
pub use lattice::Lattice;
pub use result::{EngineConfig, LatticeSnapshot, PricingResult};

use pricer_core::PricingParams;

/// Prices one option on a CRR binomial lattice.
///
/// Runs the full pipeline described in the crate docs. The parameter set is
/// assumed validated (it can only be built through
/// [`PricingParams::new`](pricer_core::PricingParams::new)); the only
/// failure mode left is an arbitrage-inconsistent parameter combination,
/// surfaced as [`LatticeError::Arbitrage`].
///
/// # Arguments
/// * `params` - Validated pricing request
/// * `config` - Boundary subsampling stride and lattice-retention switch
///
/// # Errors
/// [`LatticeError::Arbitrage`] when the risk-neutral probability falls
/// outside `[0, 1]`, i.e. `exp((r − q)·dt)` escapes the `(d, u)` band.
///
/// # Examples
/// ```
/// use pricer_core::{OptionStyle, OptionType, PricingParams};
/// use pricer_lattice::{price, EngineConfig};
///
/// let params = PricingParams::new(
///     0.05, 0.2, 0.0, 100.0, 100.0, 1.0, Some(500),
///     OptionType::Put, OptionStyle::European,
/// )
/// .unwrap();
/// let result = price(&params, &EngineConfig::default()).unwrap();
///
/// // European results carry no boundary report.
/// assert!(result.early_exercise_boundary.is_none());
/// ```
pub fn price(params: &PricingParams, config: &EngineConfig) -> Result<PricingResult, LatticeError> {
    let constants = ModelConstants::derive(params)?;
    let stock = crr::build_stock_lattice(params, &constants);
    let (values, flags) = induction::induct(params, &constants, &stock);

    let fair_value = values.node(0, 0);

    let early_exercise_boundary = flags
        .as_ref()
        .map(|flags| boundary::extract_boundary(&stock, flags, constants.time_step(), config.boundary_stride));

    let lattice = config
        .retain_lattice
        .then(|| LatticeSnapshot::new(stock, values));

    Ok(PricingResult {
        fair_value,
        parameters: params.clone(),
        model: constants,
        early_exercise_boundary,
        lattice,
    })
}
