//! JSON request configuration: loading and CLI merge.
//!
//! A request can arrive entirely from CLI flags, entirely from a JSON
//! config file, or mixed; CLI values override config values field by
//! field. The file accepts either a top-level request object or the same
//! object nested under `"option_parameters"`.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use pricer_core::{OptionStyle, OptionType, PricingParams};

use crate::error::CliError;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file does not exist or could not be read.
    #[error("cannot read configuration file {path}: {source}")]
    Read {
        /// Path of the file
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The config file is not valid JSON or has wrongly typed fields.
    #[error("invalid configuration file {path}: {source}")]
    Parse {
        /// Path of the file
        path: String,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

/// A partially specified pricing request.
///
/// Every field is optional until [`RequestConfig::into_params`] resolves
/// the merged request into a validated [`PricingParams`]. Field names match
/// the wire contract.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RequestConfig {
    /// Annual risk-free rate.
    pub interest_rate: Option<f64>,
    /// Annualised volatility.
    pub volatility: Option<f64>,
    /// Continuous dividend yield.
    pub dividend_yield: Option<f64>,
    /// Spot price.
    pub initial_stock_price: Option<f64>,
    /// Strike price.
    pub strike_price: Option<f64>,
    /// Time to maturity in years.
    pub time_to_maturity: Option<f64>,
    /// Lattice step count; omitted means one step per trading day.
    pub number_of_periods: Option<usize>,
    /// `"call"` or `"put"` (validated on resolution, not on parse).
    pub option_type: Option<String>,
    /// `"european"` or `"american"`.
    pub option_style: Option<String>,
}

impl RequestConfig {
    /// Loads a request from a JSON file.
    ///
    /// Accepts the request object at the top level or nested under
    /// `"option_parameters"`, matching the documented config format.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let parse_err = |source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        };

        let value: serde_json::Value = serde_json::from_str(&text).map_err(parse_err)?;
        let request = value
            .get("option_parameters")
            .cloned()
            .unwrap_or(value);

        let config: Self = serde_json::from_value(request).map_err(parse_err)?;
        debug!(?config, "loaded request configuration");
        Ok(config)
    }

    /// Merges `overrides` on top of `self`, field by field.
    ///
    /// Used with the config file as the base and the CLI flags as the
    /// overrides, so any flag the user passes wins over the file.
    pub fn merged_with(self, overrides: RequestConfig) -> RequestConfig {
        RequestConfig {
            interest_rate: overrides.interest_rate.or(self.interest_rate),
            volatility: overrides.volatility.or(self.volatility),
            dividend_yield: overrides.dividend_yield.or(self.dividend_yield),
            initial_stock_price: overrides.initial_stock_price.or(self.initial_stock_price),
            strike_price: overrides.strike_price.or(self.strike_price),
            time_to_maturity: overrides.time_to_maturity.or(self.time_to_maturity),
            number_of_periods: overrides.number_of_periods.or(self.number_of_periods),
            option_type: overrides.option_type.or(self.option_type),
            option_style: overrides.option_style.or(self.option_style),
        }
    }

    /// Resolves the merged request into a validated parameter set.
    ///
    /// # Errors
    /// - [`CliError::MissingParameter`] for any field absent from both
    ///   sources (`number_of_periods` excepted: it has a documented default)
    /// - [`CliError::Validation`] for out-of-domain values or unknown
    ///   option type/style tags
    pub fn into_params(self) -> Result<PricingParams, CliError> {
        let option_type = OptionType::from_str(&require(
            self.option_type,
            "option_type",
            "option-type",
        )?)?;
        let option_style = OptionStyle::from_str(&require(
            self.option_style,
            "option_style",
            "option-style",
        )?)?;

        Ok(PricingParams::new(
            require(self.interest_rate, "interest_rate", "rate")?,
            require(self.volatility, "volatility", "volatility")?,
            require(self.dividend_yield, "dividend_yield", "dividend-yield")?,
            require(self.initial_stock_price, "initial_stock_price", "spot")?,
            require(self.strike_price, "strike_price", "strike")?,
            require(self.time_to_maturity, "time_to_maturity", "maturity")?,
            self.number_of_periods,
            option_type,
            option_style,
        )?)
    }
}

fn require<T>(value: Option<T>, field: &'static str, flag: &'static str) -> Result<T, CliError> {
    value.ok_or(CliError::MissingParameter { field, flag })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn full() -> RequestConfig {
        RequestConfig {
            interest_rate: Some(0.05),
            volatility: Some(0.25),
            dividend_yield: Some(0.02),
            initial_stock_price: Some(100.0),
            strike_price: Some(100.0),
            time_to_maturity: Some(1.0),
            number_of_periods: Some(252),
            option_type: Some("call".to_string()),
            option_style: Some("american".to_string()),
        }
    }

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_top_level_object() {
        let path = write_temp(
            "crrpricer_flat.json",
            r#"{
                "interest_rate": 0.03,
                "volatility": 0.2,
                "dividend_yield": 0.0,
                "initial_stock_price": 50.0,
                "strike_price": 55.0,
                "time_to_maturity": 0.5,
                "option_type": "put",
                "option_style": "european"
            }"#,
        );
        let config = RequestConfig::load(&path).unwrap();
        assert_eq!(config.interest_rate, Some(0.03));
        assert_eq!(config.number_of_periods, None);
        assert_eq!(config.option_style.as_deref(), Some("european"));
    }

    #[test]
    fn test_load_nested_option_parameters() {
        let path = write_temp(
            "crrpricer_nested.json",
            r#"{ "option_parameters": { "interest_rate": 0.07, "volatility": 0.3 } }"#,
        );
        let config = RequestConfig::load(&path).unwrap();
        assert_eq!(config.interest_rate, Some(0.07));
        assert_eq!(config.volatility, Some(0.3));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RequestConfig::load(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let path = write_temp("crrpricer_bad.json", "{ not json");
        let err = RequestConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_wrong_field_type() {
        let path = write_temp(
            "crrpricer_badtype.json",
            r#"{ "interest_rate": "five percent" }"#,
        );
        let err = RequestConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_cli_overrides_config_field_by_field() {
        let cli = RequestConfig {
            strike_price: Some(110.0),
            option_style: Some("european".to_string()),
            ..RequestConfig::default()
        };
        let merged = full().merged_with(cli);

        // Overridden fields take the CLI value...
        assert_eq!(merged.strike_price, Some(110.0));
        assert_eq!(merged.option_style.as_deref(), Some("european"));
        // ...untouched fields keep the config value.
        assert_eq!(merged.interest_rate, Some(0.05));
        assert_eq!(merged.number_of_periods, Some(252));
    }

    #[test]
    fn test_into_params_resolves_complete_request() {
        let params = full().into_params().unwrap();
        assert_eq!(params.strike(), 100.0);
        assert_eq!(params.steps(), 252);
    }

    #[test]
    fn test_into_params_defaults_periods() {
        let mut config = full();
        config.number_of_periods = None;
        let params = config.into_params().unwrap();
        assert_eq!(params.steps(), 252); // ceil(1.0 * 252)
    }

    #[test]
    fn test_into_params_reports_missing_field() {
        let mut config = full();
        config.volatility = None;
        let err = config.into_params().unwrap_err();
        match err {
            CliError::MissingParameter { field, .. } => assert_eq!(field, "volatility"),
            other => panic!("expected MissingParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_into_params_rejects_unknown_style() {
        let mut config = full();
        config.option_style = Some("bermudan".to_string());
        let err = config.into_params().unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
    }
}
