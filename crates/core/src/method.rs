use std::{fmt, str::FromStr};

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::ParameterError;

/// The approximation methods that can be requested.
///
/// The set is closed: the analytical reference plus three explicit
/// single-step integrators of increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub enum MethodKind {
    /// The closed-form exponential solution, used as ground truth.
    Analytical,

    /// Explicit (forward) Euler.
    Euler,

    /// Heun's predictor-corrector, also known as modified Euler.
    ModifiedEuler,

    /// Classical fourth-order Runge-Kutta.
    #[cfg_attr(feature = "serde-derive", serde(rename = "RK4"))]
    Rk4,
}

impl MethodKind {
    /// Every method, in declaration order.
    pub const ALL: [MethodKind; 4] = [
        MethodKind::Analytical,
        MethodKind::Euler,
        MethodKind::ModifiedEuler,
        MethodKind::Rk4,
    ];

    /// Returns the canonical name of the method.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MethodKind::Analytical => "Analytical",
            MethodKind::Euler => "Euler",
            MethodKind::ModifiedEuler => "ModifiedEuler",
            MethodKind::Rk4 => "RK4",
        }
    }

    /// Returns the global order of accuracy, or `None` for the exact solution.
    #[must_use]
    pub fn order(self) -> Option<u32> {
        match self {
            MethodKind::Analytical => None,
            MethodKind::Euler => Some(1),
            MethodKind::ModifiedEuler => Some(2),
            MethodKind::Rk4 => Some(4),
        }
    }

    /// Returns `true` if the method produces an error series.
    #[must_use]
    pub fn is_numerical(self) -> bool {
        self.order().is_some()
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MethodKind {
    type Err = ParameterError;

    /// Parses a method name, ignoring case, `-` and `_`.
    ///
    /// Besides the canonical names, `meuler`, `heun` and `runge-kutta` are
    /// accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "analytical" | "exact" => Ok(MethodKind::Analytical),
            "euler" => Ok(MethodKind::Euler),
            "modifiedeuler" | "meuler" | "heun" => Ok(MethodKind::ModifiedEuler),
            "rk4" | "rungekutta" => Ok(MethodKind::Rk4),
            _ => Err(ParameterError::UnsupportedMethod { name: s.to_owned() }),
        }
    }
}
