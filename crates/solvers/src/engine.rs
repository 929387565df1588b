//! Turns one request into one solution.
//!
//! # Algorithm
//!
//! 1. Validate the request and derive `h = time_range / segment_count`.
//! 2. Evaluate the closed-form solution at every sample time `t_i = i h`.
//!    This reference is computed once and shared by every method.
//! 3. For each requested method, march its update rule from the initial
//!    temperature, recording the absolute error against the reference after
//!    every step.
//!
//! The result is a pure function of the request: no state is kept between
//! calls, so solving the same request twice yields identical solutions.

mod error;
mod march;
mod reference;


pub use error::Error;

use std::collections::BTreeMap;

use cooling_core::{ApproximationSeries, Parameters, Solution};
use log::{debug, trace, warn};

use crate::methods::update_rule;

/// Computes every requested method for `params`.
///
/// Methods not present in `params.methods` are absent from the solution.
///
/// Overflow is not recovered: a physically implausible request (for example a
/// large negative cooling coefficient) yields non-finite values in the
/// solution rather than an error.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the segment count is zero or the
/// time range is not finite.
pub fn solve(params: &Parameters) -> Result<Solution, Error> {
    params.validate()?;

    let law = params.law();
    let h = params.step();
    let segments = params.segment_count;

    debug!(
        "solving {segments} segments of {h} for {} method(s)",
        params.methods.len()
    );

    let argument_values = reference::sample_times(h, segments);
    let analytical = reference::exact_values(&law, h, segments);

    let mut approximation_data = BTreeMap::new();
    for &method in &params.methods {
        let series = match update_rule(method) {
            None => ApproximationSeries::exact(analytical.clone()),
            Some(rule) => march::march(&analytical, h, |temperature, h| {
                rule(&law, temperature, h)
            }),
        };

        if series.values().iter().any(|v| !v.is_finite()) {
            warn!("{method} produced non-finite values");
        }
        trace!(
            "{method}: standard deviation {}",
            series.standard_deviation()
        );

        approximation_data.insert(method, series);
    }

    debug!("solved {} method(s)", approximation_data.len());
    Ok(Solution::new(argument_values, approximation_data))
}
