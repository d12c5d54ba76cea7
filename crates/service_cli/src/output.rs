//! Report formatting and JSON export.
//!
//! The basic report is one line; the detailed report adds the option
//! specification, market and model parameters, and the early-exercise
//! boundary table. Export serialises the response contract verbatim.

use std::fmt::Write as _;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use pricer_lattice::PricingResult;

use crate::error::CliError;

/// One-line report: the fair value only.
pub fn format_basic(result: &PricingResult) -> String {
    format!("\nOption Fair Value: ${:.4}\n", result.fair_value)
}

/// Full report: specification, parameters, fair value, boundary table.
pub fn format_detailed(result: &PricingResult) -> String {
    let params = &result.parameters;
    let model = &result.model;
    let rule = "=".repeat(60);

    let mut out = String::new();
    let _ = writeln!(out, "\n{rule}\nOPTIONS PRICING RESULT\n{rule}\n");
    let _ = writeln!(out, "Model: CRR Binomial Lattice\n");

    let _ = writeln!(out, "Option Specification:");
    let _ = writeln!(
        out,
        "  Type: {} {}",
        capitalise(params.option_style().as_str()),
        capitalise(params.option_type().as_str()),
    );
    let _ = writeln!(out, "  Strike Price (K): ${:.2}", params.strike());
    let _ = writeln!(out, "  Time to Maturity (T): {:.4} years\n", params.maturity());

    let _ = writeln!(out, "Market Parameters:");
    let _ = writeln!(out, "  Initial Stock Price (S0): ${:.2}", params.spot());
    let _ = writeln!(out, "  Interest Rate (r): {:.2}%", params.rate() * 100.0);
    let _ = writeln!(out, "  Volatility (sigma): {:.2}%", params.volatility() * 100.0);
    let _ = writeln!(out, "  Dividend Yield (q): {:.2}%\n", params.dividend_yield() * 100.0);

    let _ = writeln!(out, "Model Parameters:");
    let _ = writeln!(out, "  Number of Periods (N): {}", model.steps());
    let _ = writeln!(out, "  Time Step (dt): {:.6} years", model.time_step());
    let _ = writeln!(out, "  Up Factor (u): {:.6}", model.up_factor());
    let _ = writeln!(out, "  Down Factor (d): {:.6}", model.down_factor());
    let _ = writeln!(out, "  Risk-Neutral Probability (p): {:.6}", model.risk_neutral_probability());
    let _ = writeln!(out, "  Discount per Step: {:.6}\n", model.discount_factor());

    let _ = writeln!(out, "{rule}\nFAIR VALUE: ${:.4}\n{rule}", result.fair_value);

    if let Some(boundary) = &result.early_exercise_boundary {
        if boundary.is_empty() {
            let _ = writeln!(out, "\nEarly exercise is never optimal for these parameters.");
        } else {
            let dashes = "-".repeat(60);
            let _ = writeln!(out, "\nEarly Exercise Boundary:\n{dashes}");
            let _ = writeln!(
                out,
                "{:<8} {:<14} {:<26} {:<6}",
                "Step", "Time (Years)", "Stock Price Range", "Nodes"
            );
            let _ = writeln!(out, "{dashes}");
            for segment in boundary {
                let range = format!("${:.2} - ${:.2}", segment.price_low, segment.price_high);
                let _ = writeln!(
                    out,
                    "{:<8} {:<14.4} {:<26} {:<6}",
                    segment.step, segment.time_years, range, segment.node_count
                );
            }
        }
    }

    if let Some(snapshot) = &result.lattice {
        let steps = snapshot.stock.steps();
        let terminal = snapshot.stock.level(steps);
        let _ = writeln!(
            out,
            "\nLattice: {} nodes over {} levels; terminal prices ${:.2} to ${:.2}",
            snapshot.stock.len(),
            steps + 1,
            terminal.first().copied().unwrap_or_default(),
            terminal.last().copied().unwrap_or_default(),
        );
    }

    out
}

/// Serialises the response contract to `path` as pretty-printed JSON.
///
/// The retained lattice snapshot, if any, is excluded by the result's own
/// serialisation rules; the export carries fair value, request parameters,
/// model parameters and the boundary report.
pub fn export_json(result: &PricingResult, path: &Path) -> Result<(), CliError> {
    let io_err = |source| CliError::ExportIo {
        path: path.display().to_string(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    serde_json::to_writer_pretty(BufWriter::new(file), result)
        .map_err(|e| io_err(std::io::Error::other(e)))?;
    Ok(())
}

fn capitalise(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
