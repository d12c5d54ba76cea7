//! crrpricer - CRR binomial lattice option pricing from the command line.
//!
//! Prices one vanilla European or American option per invocation. The
//! request is assembled from a JSON config file, CLI flags, or both (CLI
//! wins field by field), validated, priced on the lattice kernel, and
//! reported as text and/or exported as JSON.
//!
//! # Usage
//!
//! ```text
//! crrpricer --config request.json
//! crrpricer --rate 0.05 --volatility 0.25 --dividend-yield 0.02 \
//!           --spot 100 --strike 100 --maturity 1.0 \
//!           --option-type call --option-style american --verbose
//! crrpricer --config request.json --strike 105 --export result.json
//! ```
//!
//! Exit status: 0 on success; 1 with the error message on stderr for any
//! validation, arbitrage, or configuration failure.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod output;

use config::RequestConfig;
use error::Result;
use pricer_lattice::EngineConfig;

/// Price a vanilla option on a Cox-Ross-Rubinstein binomial lattice.
#[derive(Parser)]
#[command(name = "crrpricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file with request parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Annual risk-free interest rate (e.g. 0.05)
    #[arg(long)]
    rate: Option<f64>,

    /// Annualised volatility (e.g. 0.25)
    #[arg(long)]
    volatility: Option<f64>,

    /// Continuous dividend yield (e.g. 0.02)
    #[arg(long)]
    dividend_yield: Option<f64>,

    /// Initial stock price
    #[arg(long)]
    spot: Option<f64>,

    /// Strike price
    #[arg(long)]
    strike: Option<f64>,

    /// Time to maturity in years
    #[arg(long)]
    maturity: Option<f64>,

    /// Number of lattice steps (default: one per trading day, ceil(T * 252))
    #[arg(long)]
    steps: Option<usize>,

    /// Option type: call or put
    #[arg(long)]
    option_type: Option<String>,

    /// Option style: european or american
    #[arg(long)]
    option_style: Option<String>,

    /// Report the exercise boundary at every K-th lattice level only
    #[arg(long, value_name = "K", default_value_t = 1)]
    boundary_stride: usize,

    /// Print the detailed report (parameters, model constants, boundary)
    #[arg(short, long)]
    verbose: bool,

    /// Export the result as JSON to this file
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,
}

impl Cli {
    /// The request fields given as flags, as a partial request.
    fn request_overrides(&self) -> RequestConfig {
        RequestConfig {
            interest_rate: self.rate,
            volatility: self.volatility,
            dividend_yield: self.dividend_yield,
            initial_stock_price: self.spot,
            strike_price: self.strike,
            time_to_maturity: self.maturity,
            number_of_periods: self.steps,
            option_type: self.option_type.clone(),
            option_style: self.option_style.clone(),
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let base = match &cli.config {
        Some(path) => RequestConfig::load(path)?,
        None => RequestConfig::default(),
    };
    let params = base.merged_with(cli.request_overrides()).into_params()?;

    info!(
        option_type = %params.option_type(),
        option_style = %params.option_style(),
        steps = params.steps(),
        "pricing request assembled"
    );

    let engine = EngineConfig {
        boundary_stride: cli.boundary_stride,
        retain_lattice: cli.verbose,
    };
    let result = pricer_lattice::price(&params, &engine)?;
    info!(fair_value = result.fair_value, "pricing complete");

    if cli.verbose {
        print!("{}", output::format_detailed(&result));
    } else {
        print!("{}", output::format_basic(&result));
    }

    if let Some(path) = &cli.export {
        output::export_json(&result, path)?;
        println!("Result exported to: {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
