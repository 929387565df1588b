use std::collections::BTreeSet;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{CoolingLaw, MethodKind, ParameterError};

/// One computation request.
///
/// Missing fields fall back to [`Parameters::default`] when deserializing, so a
/// request file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(default))]
pub struct Parameters {
    /// Temperature at `t = 0`.
    pub initial_temperature: f64,

    /// Cooling coefficient `k` in `dT/dt = -k (T - T_env)`.
    pub cooling_coefficient: f64,

    /// Ambient temperature the body relaxes toward.
    pub environment_temperature: f64,

    /// Number of sub-intervals the time range is split into.
    pub segment_count: usize,

    /// Total elapsed time covered by the simulation.
    pub time_range: f64,

    /// Methods to compute.
    pub methods: BTreeSet<MethodKind>,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            initial_temperature: 90.0,
            cooling_coefficient: 0.05,
            environment_temperature: 20.0,
            segment_count: 10,
            time_range: 10.0,
            methods: MethodKind::ALL.into_iter().collect(),
        }
    }
}

impl Parameters {
    /// Creates a request for every method.
    #[must_use]
    pub fn new(
        initial_temperature: f64,
        cooling_coefficient: f64,
        environment_temperature: f64,
        segment_count: usize,
        time_range: f64,
    ) -> Self {
        Self {
            initial_temperature,
            cooling_coefficient,
            environment_temperature,
            segment_count,
            time_range,
            methods: MethodKind::ALL.into_iter().collect(),
        }
    }

    /// Replaces the requested methods.
    #[must_use]
    pub fn with_methods(mut self, methods: impl IntoIterator<Item = MethodKind>) -> Self {
        self.methods = methods.into_iter().collect();
        self
    }

    /// Replaces the segment count.
    #[must_use]
    pub fn with_segments(mut self, segment_count: usize) -> Self {
        self.segment_count = segment_count;
        self
    }

    /// Replaces the time range.
    #[must_use]
    pub fn with_time_range(mut self, time_range: f64) -> Self {
        self.time_range = time_range;
        self
    }

    /// Checks that a step size can be derived from the request.
    ///
    /// Physical plausibility is not checked: any coefficient or temperature is
    /// accepted and evaluated as written.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::ZeroSegments`] if `segment_count` is zero, or
    /// [`ParameterError::NonFiniteTimeRange`] if `time_range` is NaN or infinite.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.segment_count == 0 {
            return Err(ParameterError::ZeroSegments);
        }
        if !self.time_range.is_finite() {
            return Err(ParameterError::NonFiniteTimeRange {
                value: self.time_range,
            });
        }
        Ok(())
    }

    /// Returns the step size `time_range / segment_count`.
    ///
    /// Only meaningful after [`validate`](Self::validate) succeeds.
    #[must_use]
    pub fn step(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let segments = self.segment_count as f64;
        self.time_range / segments
    }

    /// Returns the cooling law described by this request.
    #[must_use]
    pub fn law(&self) -> CoolingLaw {
        CoolingLaw::new(
            self.initial_temperature,
            self.cooling_coefficient,
            self.environment_temperature,
        )
    }
}
