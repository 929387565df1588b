//! Classical fourth-order Runge-Kutta.
//!
//! ```text
//! k1 = f(y_n)
//! k2 = f(y_n + h k1 / 2)
//! k3 = f(y_n + h k2 / 2)
//! k4 = f(y_n + h k3)
//!
//! y_{n+1} = y_n + h (k1 + 2 k2 + 2 k3 + k4) / 6
//! ```
//!
//! The cooling equation is autonomous, so the stage times drop out.

use cooling_core::{CoolingLaw, StepIntegrable};

/// Advances `temperature` by one RK4 step.
#[must_use]
pub fn step(law: &CoolingLaw, temperature: f64, h: f64) -> f64 {
    let half = 0.5 * h;

    let k1 = law.derivative(temperature);
    let k2 = law.derivative(temperature.step(k1, half));
    let k3 = law.derivative(temperature.step(k2, half));
    let k4 = law.derivative(temperature.step(k3, h));

    temperature.step((k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0, h)
}
