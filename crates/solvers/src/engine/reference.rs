use cooling_core::CoolingLaw;

/// Returns the sample times `i * h` for `i = 0..=segments`.
pub(super) fn sample_times(h: f64, segments: usize) -> Vec<f64> {
    (0..=segments).map(|i| index_to_f64(i) * h).collect()
}

/// Returns the closed-form temperature at every sample time.
///
/// The first entry is the initial temperature itself rather than `T(0)`, which
/// can differ from it by rounding in `T_env + (T_0 - T_env)`.
pub(super) fn exact_values(law: &CoolingLaw, h: f64, segments: usize) -> Vec<f64> {
    std::iter::once(law.initial_temperature())
        .chain((1..=segments).map(|i| law.exact(index_to_f64(i) * h)))
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn index_to_f64(i: usize) -> f64 {
    i as f64
}
