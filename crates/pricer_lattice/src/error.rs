//! Error types for the lattice kernel.

use thiserror::Error;

/// Lattice pricing errors.
///
/// The kernel assumes a validated [`pricer_core::PricingParams`], so the
/// only remaining failure mode is a parameter combination that is
/// internally inconsistent under the CRR parametrization. Backward
/// induction itself is total and raises nothing.
///
/// # Variants
/// - `Arbitrage`: derived risk-neutral probability escapes `[0, 1]`
///
/// # Examples
/// ```
/// use pricer_lattice::LatticeError;
///
/// let err = LatticeError::Arbitrage { probability: 1.73 };
/// assert!(format!("{}", err).contains("1.73"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LatticeError {
    /// Risk-neutral probability outside `[0, 1]`: the drift `exp((r − q)·dt)`
    /// lies outside the `(d, u)` band and the lattice admits arbitrage.
    /// Deterministic for given inputs; retrying cannot help.
    #[error(
        "risk-neutral probability {probability} outside [0, 1]; \
         r - q is too large relative to sigma and dt (no-arbitrage violation)"
    )]
    Arbitrage {
        /// The out-of-range probability
        probability: f64,
    },
}
