//! # pricer_core: Foundation Types for the CRR Lattice Pricer
//!
//! ## Layer Role
//!
//! pricer_core is the bottom layer of the pricing workspace, providing:
//! - Contract enumerations (`types::OptionType`, `types::OptionStyle`)
//! - The validated, immutable parameter set (`params::PricingParams`)
//! - Structured validation errors (`types::ValidationError`)
//! - The documented default-steps rule (`params::steps_for_maturity`)
//!
//! This crate performs no pricing. It exists so that the lattice kernel
//! (`pricer_lattice`) can assume every parameter set it receives is already
//! validated and numeric, and so that I/O collaborators (`service_cli`) have
//! one place to construct requests from.
//!
//! ## Quick Start
//!
//! ```
//! use pricer_core::params::PricingParams;
//! use pricer_core::types::{OptionStyle, OptionType};
//!
//! let params = PricingParams::new(
//!     0.05,              // risk-free rate
//!     0.25,              // volatility
//!     0.02,              // dividend yield
//!     100.0,             // spot
//!     100.0,             // strike
//!     1.0,               // maturity (years)
//!     Some(252),         // lattice steps
//!     OptionType::Call,
//!     OptionStyle::American,
//! )
//! .unwrap();
//!
//! assert_eq!(params.steps(), 252);
//! assert!((params.dt() - 1.0 / 252.0).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): enable serialisation of parameter sets and contract
//!   enums with the wire field names used by the CLI and JSON export

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod params;
pub mod types;

pub use params::{steps_for_maturity, PricingParams, TRADING_DAYS_PER_YEAR};
pub use types::{OptionStyle, OptionType, ValidationError};
