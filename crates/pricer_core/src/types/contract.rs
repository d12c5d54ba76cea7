//! Option contract enumerations.
//!
//! This module provides the two tags that select a pricing policy:
//! `OptionType` (payoff direction) and `OptionStyle` (exercise rights).

use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;

/// Option payoff direction.
///
/// # Variants
/// - `Call`: right to buy at the strike, payoff `max(S − K, 0)`
/// - `Put`: right to sell at the strike, payoff `max(K − S, 0)`
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// let call: OptionType = "call".parse().unwrap();
/// assert_eq!(call.payoff(110.0, 100.0), 10.0);
/// assert_eq!(call.payoff(90.0, 100.0), 0.0);
///
/// // Unknown tags are rejected, never defaulted
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionType {
    /// Intrinsic payoff of the contract at the given spot price.
    ///
    /// `max(S − K, 0)` for a call, `max(K − S, 0)` for a put.
    #[inline]
    pub fn payoff(self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns the lowercase wire tag (`"call"` / `"put"`).
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl FromStr for OptionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(ValidationError::UnknownOptionType { tag: s.to_string() }),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Option exercise style.
///
/// Selects one of the two backward-induction policies: continuation-only
/// (European) or max-with-exercise (American). The lattice kernel branches
/// on this once per pricing run, never per node.
///
/// # Variants
/// - `European`: exercise only at expiry
/// - `American`: exercise at any step up to expiry
///
/// # Examples
/// ```
/// use pricer_core::types::OptionStyle;
///
/// let style: OptionStyle = "American".parse().unwrap();
/// assert!(style.allows_early_exercise());
/// assert!("bermudan".parse::<OptionStyle>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionStyle {
    /// Exercise only at expiry.
    European,
    /// Exercise at any step up to expiry.
    American,
}

impl OptionStyle {
    /// Returns whether this style grants early-exercise rights.
    #[inline]
    pub fn allows_early_exercise(self) -> bool {
        matches!(self, OptionStyle::American)
    }

    /// Returns the lowercase wire tag (`"european"` / `"american"`).
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            OptionStyle::European => "european",
            OptionStyle::American => "american",
        }
    }
}

impl FromStr for OptionStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "european" => Ok(OptionStyle::European),
            "american" => Ok(OptionStyle::American),
            _ => Err(ValidationError::UnknownOptionStyle { tag: s.to_string() }),
        }
    }
}

impl fmt::Display for OptionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
