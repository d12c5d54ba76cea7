//! CLI error type and conversions.
//!
//! Every failure below maps to the same nonzero exit status, but the error
//! kinds stay distinguishable through the source chain so reports name the
//! actual cause (validation vs. arbitrage vs. configuration).

use pricer_core::ValidationError;
use pricer_lattice::LatticeError;
use thiserror::Error;

use crate::config::ConfigError;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// A request field failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The pricing kernel rejected the parameter combination.
    #[error(transparent)]
    Lattice(#[from] LatticeError),

    /// The configuration file could not be loaded or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A required request field was supplied neither on the command line
    /// nor in the configuration file.
    #[error("missing required parameter: {field} (set --{flag} or provide it in the config file)")]
    MissingParameter {
        /// Wire name of the missing field
        field: &'static str,
        /// CLI flag for the same field
        flag: &'static str,
    },

    /// Writing the export file failed.
    #[error("failed to write export file {path}: {source}")]
    ExportIo {
        /// Target path
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}
