//! Single-step update rules for the cooling equation.
//!
//! Each rule advances a temperature by one step of size `h`:
//!
//! | Method                         | Order | Derivative evaluations |
//! |--------------------------------|-------|------------------------|
//! | [`euler`]                      | 1     | 1                      |
//! | [`modified_euler`] (Heun)      | 2     | 2                      |
//! | [`rk4`]                        | 4     | 4                      |
//!
//! Rules are plain functions with the [`UpdateRule`] signature. The engine
//! drives every one of them through the same step loop, so adding a method
//! means adding a function, not a type.

pub mod euler;
pub mod modified_euler;
pub mod rk4;

use cooling_core::{CoolingLaw, MethodKind};

/// Advances `temperature` by one step of size `h` under `law`.
pub type UpdateRule = fn(law: &CoolingLaw, temperature: f64, h: f64) -> f64;

/// Returns the update rule for `method`, or `None` for the analytical solution.
#[must_use]
pub fn update_rule(method: MethodKind) -> Option<UpdateRule> {
    match method {
        MethodKind::Analytical => None,
        MethodKind::Euler => Some(euler::step),
        MethodKind::ModifiedEuler => Some(modified_euler::step),
        MethodKind::Rk4 => Some(rk4::step),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_numerical_method_has_a_rule() {
        for method in MethodKind::ALL {
            assert_eq!(update_rule(method).is_some(), method.is_numerical());
        }
    }
}
