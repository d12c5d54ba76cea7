//! Error types for parameter validation.
//!
//! This module provides:
//! - `ValidationError`: Errors raised while constructing a parameter set

use thiserror::Error;

/// Parameter validation errors.
///
/// Every variant names the offending field and, where applicable, carries
/// the rejected value so callers can report the failure verbatim. Validation
/// never silently defaults a bad value; the only documented default is the
/// step count derived by [`crate::params::steps_for_maturity`] when the
/// caller omits it entirely.
///
/// # Variants
/// - `NotFinite`: a field is NaN or infinite
/// - `NotPositive`: a field that must be strictly positive is not
/// - `Negative`: a field that must be non-negative is negative
/// - `InvalidSteps`: the lattice step count is below 1
/// - `UnknownOptionType`: option type tag is not `call`/`put`
/// - `UnknownOptionStyle`: option style tag is not `european`/`american`
///
/// # Examples
/// ```
/// use pricer_core::types::ValidationError;
///
/// let err = ValidationError::NotPositive { field: "volatility", value: -0.2 };
/// assert_eq!(format!("{}", err), "volatility must be positive, got -0.2");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// Field is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NotFinite {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Field must be strictly positive.
    #[error("{field} must be positive, got {value}")]
    NotPositive {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Field must be non-negative.
    #[error("{field} must be non-negative, got {value}")]
    Negative {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Lattice step count below the minimum of 1.
    #[error("number_of_periods must be at least 1, got {steps}")]
    InvalidSteps {
        /// The rejected step count
        steps: usize,
    },

    /// Unrecognised option type tag.
    #[error("unknown option type: {tag:?} (expected \"call\" or \"put\")")]
    UnknownOptionType {
        /// The rejected tag
        tag: String,
    },

    /// Unrecognised option style tag.
    #[error("unknown option style: {tag:?} (expected \"european\" or \"american\")")]
    UnknownOptionStyle {
        /// The rejected tag
        tag: String,
    },
}
