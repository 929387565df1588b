/// Newton's law of cooling for a body relaxing toward a constant ambient.
///
/// ```text
/// dT/dt = -k (T - T_env)
/// T(t)  = T_env + (T_0 - T_env) e^(-k t)
/// ```
///
/// The coefficient is not validated. A negative `k` describes divergence away
/// from the ambient, which the law evaluates like any other value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingLaw {
    initial_temperature: f64,
    cooling_coefficient: f64,
    environment_temperature: f64,
}

impl CoolingLaw {
    /// Creates a cooling law from the initial temperature, the cooling
    /// coefficient and the ambient temperature.
    #[must_use]
    pub fn new(
        initial_temperature: f64,
        cooling_coefficient: f64,
        environment_temperature: f64,
    ) -> Self {
        Self {
            initial_temperature,
            cooling_coefficient,
            environment_temperature,
        }
    }

    /// Returns the rate of change of temperature at `temperature`.
    #[must_use]
    pub fn derivative(&self, temperature: f64) -> f64 {
        -self.cooling_coefficient * (temperature - self.environment_temperature)
    }

    /// Returns the closed-form temperature at `time`.
    #[must_use]
    pub fn exact(&self, time: f64) -> f64 {
        let excess = self.initial_temperature - self.environment_temperature;
        self.environment_temperature + excess * (-self.cooling_coefficient * time).exp()
    }

    #[must_use]
    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    #[must_use]
    pub fn cooling_coefficient(&self) -> f64 {
        self.cooling_coefficient
    }

    #[must_use]
    pub fn environment_temperature(&self) -> f64 {
        self.environment_temperature
    }
}
