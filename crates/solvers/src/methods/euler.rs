//! Explicit (forward) Euler.
//!
//! ```text
//! y_{n+1} = y_n + h f(y_n)
//! ```

use cooling_core::{CoolingLaw, StepIntegrable};

/// Advances `temperature` by one forward Euler step.
#[must_use]
pub fn step(law: &CoolingLaw, temperature: f64, h: f64) -> f64 {
    temperature.step(law.derivative(temperature), h)
}
