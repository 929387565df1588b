//! Observed order of accuracy under step refinement.
//!
//! The standard deviation reported for a method is a mean squared error, so a
//! method of global order `p` shrinks it by roughly `2^(2p)` when the step is
//! halved. Comparing a request against the same request with twice the
//! segments recovers `p`.

use cooling_core::{MethodKind, Parameters};
use log::debug;

use crate::{Error, solve};

/// Estimates the order of accuracy of `method` by halving the step of `params`.
///
/// Returns `None` for the analytical method, or when either deviation is zero
/// or non-finite and no ratio can be formed.
///
/// # Errors
///
/// Returns an error if `params` is invalid, or if doubling its segment count
/// overflows.
pub fn observed_order(params: &Parameters, method: MethodKind) -> Result<Option<f64>, Error> {
    params.validate()?;
    if !method.is_numerical() {
        return Ok(None);
    }

    let coarse = params.clone().with_methods([method]);
    let fine_segments = coarse
        .segment_count
        .checked_mul(2)
        .ok_or(Error::RefinementOverflow {
            segment_count: coarse.segment_count,
        })?;
    let fine = coarse.clone().with_segments(fine_segments);

    let deviation = |params: &Parameters| -> Result<f64, Error> {
        let solution = solve(params)?;
        Ok(solution
            .series(method)
            .map_or(f64::NAN, |series| series.standard_deviation()))
    };

    let coarse_deviation = deviation(&coarse)?;
    let fine_deviation = deviation(&fine)?;
    debug!("{method}: deviation {coarse_deviation} -> {fine_deviation} after halving the step");

    let ratio = coarse_deviation / fine_deviation;
    if !ratio.is_finite() || ratio <= 0.0 {
        return Ok(None);
    }

    Ok(Some(ratio.log2() / 2.0))
}
