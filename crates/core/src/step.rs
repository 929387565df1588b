/// A trait for types that can be stepped using their derivative.
///
/// Every update rule in the engine is expressed as `state.step(slope, delta)`,
/// where the slope is some combination of derivative evaluations and `delta`
/// is the step in the independent variable (elapsed time for cooling).
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// A bare temperature is stepped by a rate of change in degrees per time unit.
impl StepIntegrable<f64> for f64 {
    type Derivative = f64;

    fn step(&self, derivative: f64, delta: f64) -> Self {
        self + derivative * delta
    }
}
