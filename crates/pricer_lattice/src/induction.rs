//! Backward induction over the lattice.
//!
//! Walks the value lattice from maturity to inception. Each node takes the
//! discounted risk-neutral expectation of its two children; American nodes
//! additionally compare against immediate exercise and record the decision.
//!
//! The continuation expression is written in one fixed term order:
//!
//! ```text
//! continuation = discount * (p * V(i+1, j+1) + (1 - p) * V(i+1, j))
//! ```
//!
//! Reordering those terms moves the result at the last bit, so the order is
//! part of the contract: repeated runs reproduce values bit-for-bit.
//!
//! The exercise style selects one of two loop bodies before the walk starts;
//! there is no per-node dispatch.

use pricer_core::{OptionType, PricingParams};

use crate::crr::ModelConstants;
use crate::lattice::Lattice;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Node count at which the `parallel` feature starts fanning a level out.
/// Short levels are cheaper to compute than to schedule.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_NODES: usize = 4096;

/// Runs backward induction and returns the value lattice, plus the per-node
/// exercise flags for American contracts (`None` for European).
///
/// Level `N` holds the terminal payoffs; level 0 holds the fair value at
/// node `(0, 0)`. Total for every well-formed lattice: no failure modes
/// beyond those already raised when deriving [`ModelConstants`].
pub fn induct(
    params: &PricingParams,
    constants: &ModelConstants,
    stock: &Lattice<f64>,
) -> (Lattice<f64>, Option<Lattice<bool>>) {
    let steps = constants.steps();
    let mut values: Lattice<f64> = Lattice::new(steps);

    terminal_payoffs(params.option_type(), params.strike(), stock, &mut values);

    if params.option_style().allows_early_exercise() {
        let mut flags: Lattice<bool> = Lattice::new(steps);
        induct_american(params, constants, stock, &mut values, &mut flags);
        (values, Some(flags))
    } else {
        induct_european(constants, &mut values);
        (values, None)
    }
}

/// Fills level `N` with the intrinsic payoff of each terminal stock price.
fn terminal_payoffs(
    option_type: OptionType,
    strike: f64,
    stock: &Lattice<f64>,
    values: &mut Lattice<f64>,
) {
    let steps = stock.steps();
    let terminal_stock = stock.level(steps);
    for (value, &spot) in values.level_mut(steps).iter_mut().zip(terminal_stock) {
        *value = option_type.payoff(spot, strike);
    }
}

/// Discounted two-child expectation, in the fixed term order.
#[inline(always)]
fn continuation(constants: &ModelConstants, up_child: f64, down_child: f64) -> f64 {
    let p = constants.risk_neutral_probability();
    constants.discount_factor() * (p * up_child + (1.0 - p) * down_child)
}

/// European walk: every interior node is its continuation value.
fn induct_european(constants: &ModelConstants, values: &mut Lattice<f64>) {
    for i in (0..constants.steps()).rev() {
        let (current, next) = values.level_pair_mut(i);
        fill_level(current, |j| continuation(constants, next[j + 1], next[j]));
    }
}

/// American walk: max of continuation and immediate exercise, with the
/// strict `exercise > continuation` decision recorded per node.
fn induct_american(
    params: &PricingParams,
    constants: &ModelConstants,
    stock: &Lattice<f64>,
    values: &mut Lattice<f64>,
    flags: &mut Lattice<bool>,
) {
    let option_type = params.option_type();
    let strike = params.strike();

    for i in (0..constants.steps()).rev() {
        let stock_level = stock.level(i);
        let flag_level = flags.level_mut(i);
        let (current, next) = values.level_pair_mut(i);

        fill_level_flagged(current, flag_level, |j| {
            let held = continuation(constants, next[j + 1], next[j]);
            let exercised = option_type.payoff(stock_level[j], strike);
            if exercised > held {
                (exercised, true)
            } else {
                (held, false)
            }
        });
    }
}

#[cfg(not(feature = "parallel"))]
fn fill_level(current: &mut [f64], node_value: impl Fn(usize) -> f64 + Sync) {
    for (j, value) in current.iter_mut().enumerate() {
        *value = node_value(j);
    }
}

#[cfg(not(feature = "parallel"))]
fn fill_level_flagged(
    current: &mut [f64],
    flags: &mut [bool],
    node_value: impl Fn(usize) -> (f64, bool) + Sync,
) {
    for (j, (value, flag)) in current.iter_mut().zip(flags.iter_mut()).enumerate() {
        (*value, *flag) = node_value(j);
    }
}

// Parallel variants: nodes within a level are mutually independent, so the
// level fans out across the rayon pool; the next level is only read. Levels
// themselves stay strictly sequential (level i depends on level i+1), which
// the call structure already enforces: `fill_level` returns before the walk
// moves to level i-1.
#[cfg(feature = "parallel")]
fn fill_level(current: &mut [f64], node_value: impl Fn(usize) -> f64 + Sync) {
    if current.len() < PARALLEL_MIN_NODES {
        for (j, value) in current.iter_mut().enumerate() {
            *value = node_value(j);
        }
    } else {
        current
            .par_iter_mut()
            .enumerate()
            .for_each(|(j, value)| *value = node_value(j));
    }
}

#[cfg(feature = "parallel")]
fn fill_level_flagged(
    current: &mut [f64],
    flags: &mut [bool],
    node_value: impl Fn(usize) -> (f64, bool) + Sync,
) {
    if current.len() < PARALLEL_MIN_NODES {
        for (j, (value, flag)) in current.iter_mut().zip(flags.iter_mut()).enumerate() {
            (*value, *flag) = node_value(j);
        }
    } else {
        current
            .par_iter_mut()
            .zip(flags.par_iter_mut())
            .enumerate()
            .for_each(|(j, (value, flag))| (*value, *flag) = node_value(j));
    }
}
