//! Modified Euler (Heun's predictor-corrector).
//!
//! ```text
//! ŷ       = y_n + h f(y_n)
//! y_{n+1} = y_n + h (f(y_n) + f(ŷ)) / 2
//! ```

use cooling_core::{CoolingLaw, StepIntegrable};

/// Advances `temperature` by one Heun step.
#[must_use]
pub fn step(law: &CoolingLaw, temperature: f64, h: f64) -> f64 {
    let slope = law.derivative(temperature);
    let predicted = temperature.step(slope, h);
    let corrected = law.derivative(predicted);

    temperature.step(0.5 * (slope + corrected), h)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn first_step_matches_hand_calculation() {
        let law = CoolingLaw::new(90.0, 0.05, 20.0);

        // f(90) = -3.5, ŷ = 86.5, f(ŷ) = -3.325
        // y1 = 90 + (-3.5 - 3.325) / 2 = 86.5875
        assert_relative_eq!(step(&law, 90.0, 1.0), 86.5875, epsilon = 1e-12);
    }

    #[test]
    fn matches_second_order_taylor_expansion() {
        // For a linear equation Heun reproduces e^(-kh) to second order:
        // 1 - kh + (kh)^2 / 2.
        let law = CoolingLaw::new(1.0, 0.4, 0.0);
        let h = 0.25;
        let kh = 0.4 * h;

        assert_relative_eq!(step(&law, 1.0, h), 1.0 - kh + kh * kh / 2.0, epsilon = 1e-14);
    }
}
