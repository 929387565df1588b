use cooling_core::ApproximationSeries;

/// Marches `update` across the sample times of `reference`.
///
/// The series starts at `reference[0]` and takes one step of size `h` per
/// remaining reference entry. The absolute error against the reference is
/// recorded alongside each value, and the squared errors after the initial
/// sample are averaged into the standard deviation.
pub(super) fn march<F>(reference: &[f64], h: f64, update: F) -> ApproximationSeries
where
    F: Fn(f64, f64) -> f64,
{
    let Some((&initial, rest)) = reference.split_first() else {
        return ApproximationSeries::approximate(Vec::new(), Vec::new(), 0.0);
    };

    let mut values = Vec::with_capacity(reference.len());
    let mut error = Vec::with_capacity(reference.len());
    values.push(initial);
    error.push(0.0);

    let mut current = initial;
    let mut squared_sum = 0.0;
    for &exact in rest {
        current = update(current, h);

        let abs_error = (current - exact).abs();
        squared_sum += abs_error * abs_error;

        values.push(current);
        error.push(abs_error);
    }

    let standard_deviation = if rest.is_empty() {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let steps = rest.len() as f64;
        squared_sum / steps
    };

    ApproximationSeries::approximate(values, error, standard_deviation)
}
