use std::collections::BTreeMap;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{AlignmentError, MethodKind};

/// The values one method produced, with their error against the exact solution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(try_from = "SeriesRecord")
)]
pub struct ApproximationSeries {
    values: Vec<f64>,
    error: Option<Vec<f64>>,
    standard_deviation: f64,
}

impl ApproximationSeries {
    /// Creates the series for the analytical reference.
    ///
    /// The reference carries no error and a standard deviation of zero.
    #[must_use]
    pub fn exact(values: Vec<f64>) -> Self {
        Self {
            values,
            error: None,
            standard_deviation: 0.0,
        }
    }

    /// Creates the series for a numerical method.
    ///
    /// # Panics
    ///
    /// Panics if `error` and `values` differ in length. Use
    /// [`ApproximationSeries::try_approximate`] for unchecked input.
    #[must_use]
    pub fn approximate(values: Vec<f64>, error: Vec<f64>, standard_deviation: f64) -> Self {
        assert_eq!(
            values.len(),
            error.len(),
            "error sequence must be index-aligned with values"
        );
        Self {
            values,
            error: Some(error),
            standard_deviation,
        }
    }

    /// Creates the series for a numerical method, checking that `error` is
    /// index-aligned with `values`.
    ///
    /// # Errors
    ///
    /// Returns [`AlignmentError::ErrorLength`] if the lengths differ.
    pub fn try_approximate(
        values: Vec<f64>,
        error: Vec<f64>,
        standard_deviation: f64,
    ) -> Result<Self, AlignmentError> {
        if error.len() != values.len() {
            return Err(AlignmentError::ErrorLength {
                expected: values.len(),
                found: error.len(),
            });
        }
        Ok(Self {
            values,
            error: Some(error),
            standard_deviation,
        })
    }

    /// Approximate temperature at each sample time.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Absolute error at each sample time, or `None` for the analytical series.
    #[must_use]
    pub fn error(&self) -> Option<&[f64]> {
        self.error.as_deref()
    }

    /// Mean squared error over every sample after the initial one.
    ///
    /// Named after the statistic it stands in for; no mean is subtracted.
    #[must_use]
    pub fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }

    /// Largest absolute error in the series, or `None` for the analytical series.
    #[must_use]
    pub fn max_error(&self) -> Option<f64> {
        self.error
            .as_ref()
            .map(|error| error.iter().copied().fold(0.0, f64::max))
    }

    /// Number of samples in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The result of one computation: shared sample times and one series per
/// requested method.
///
/// Every sequence has the same length, and index `i` refers to the same sample
/// time throughout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(try_from = "SolutionRecord")
)]
pub struct Solution {
    argument_values: Vec<f64>,
    approximation_data: BTreeMap<MethodKind, ApproximationSeries>,
}

impl Solution {
    /// Assembles a solution from sample times and per-method series.
    ///
    /// # Panics
    ///
    /// Panics if any series differs in length from `argument_values`. Use
    /// [`Solution::try_new`] for unchecked input.
    #[must_use]
    pub fn new(
        argument_values: Vec<f64>,
        approximation_data: BTreeMap<MethodKind, ApproximationSeries>,
    ) -> Self {
        match Self::try_new(argument_values, approximation_data) {
            Ok(solution) => solution,
            Err(err) => panic!("{err}"),
        }
    }

    /// Assembles a solution, checking that every series is index-aligned with
    /// the sample times.
    ///
    /// # Errors
    ///
    /// Returns [`AlignmentError::SeriesLength`] for the first series whose
    /// length differs from `argument_values`.
    pub fn try_new(
        argument_values: Vec<f64>,
        approximation_data: BTreeMap<MethodKind, ApproximationSeries>,
    ) -> Result<Self, AlignmentError> {
        let expected = argument_values.len();
        if let Some((&method, series)) = approximation_data
            .iter()
            .find(|(_, series)| series.len() != expected)
        {
            return Err(AlignmentError::SeriesLength {
                method,
                expected,
                found: series.len(),
            });
        }
        Ok(Self {
            argument_values,
            approximation_data,
        })
    }

    /// Sample times `t_i = i * step`.
    #[must_use]
    pub fn argument_values(&self) -> &[f64] {
        &self.argument_values
    }

    /// Series keyed by method, in [`MethodKind`] order.
    #[must_use]
    pub fn approximation_data(&self) -> &BTreeMap<MethodKind, ApproximationSeries> {
        &self.approximation_data
    }

    /// Returns the series for `method`, if it was requested.
    #[must_use]
    pub fn series(&self, method: MethodKind) -> Option<&ApproximationSeries> {
        self.approximation_data.get(&method)
    }

    /// Iterates over the methods present in this solution.
    pub fn methods(&self) -> impl Iterator<Item = MethodKind> + '_ {
        self.approximation_data.keys().copied()
    }

    /// Number of sample times (`segment_count + 1`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.argument_values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.argument_values.is_empty()
    }

    /// Distance between consecutive sample times.
    #[must_use]
    pub fn step(&self) -> Option<f64> {
        match self.argument_values.as_slice() {
            [first, second, ..] => Some(second - first),
            _ => None,
        }
    }

    /// Returns a view of every method at sample `index`.
    #[must_use]
    pub fn sample(&self, index: usize) -> Option<Sample<'_>> {
        let time = *self.argument_values.get(index)?;
        Some(Sample {
            index,
            time,
            solution: self,
        })
    }

    /// Iterates over every sample in time order.
    pub fn samples(&self) -> impl Iterator<Item = Sample<'_>> + '_ {
        self.argument_values
            .iter()
            .enumerate()
            .map(|(index, &time)| Sample {
                index,
                time,
                solution: self,
            })
    }

    /// Returns the numerical method with the smallest standard deviation.
    ///
    /// Returns `None` if no numerical method was requested.
    #[must_use]
    pub fn most_accurate(&self) -> Option<MethodKind> {
        self.approximation_data
            .iter()
            .filter(|(method, _)| method.is_numerical())
            .min_by(|(_, a), (_, b)| a.standard_deviation.total_cmp(&b.standard_deviation))
            .map(|(method, _)| *method)
    }
}

/// Every method's value at one sample time.
#[derive(Debug, Clone, Copy)]
pub struct Sample<'a> {
    /// Index into every sequence of the solution.
    pub index: usize,

    /// Sample time.
    pub time: f64,

    solution: &'a Solution,
}

impl Sample<'_> {
    /// Returns the value of `method` at this sample, if it was requested.
    #[must_use]
    pub fn value(&self, method: MethodKind) -> Option<f64> {
        self.solution
            .series(method)
            .and_then(|series| series.values.get(self.index).copied())
    }

    /// Returns the error of `method` at this sample, if it has one.
    #[must_use]
    pub fn error(&self, method: MethodKind) -> Option<f64> {
        self.solution
            .series(method)
            .and_then(ApproximationSeries::error)
            .and_then(|error| error.get(self.index).copied())
    }
}

/// Unchecked wire form of [`ApproximationSeries`].
#[cfg(feature = "serde-derive")]
#[derive(Deserialize)]
struct SeriesRecord {
    values: Vec<f64>,
    error: Option<Vec<f64>>,
    standard_deviation: f64,
}

#[cfg(feature = "serde-derive")]
impl TryFrom<SeriesRecord> for ApproximationSeries {
    type Error = AlignmentError;

    fn try_from(record: SeriesRecord) -> Result<Self, Self::Error> {
        match record.error {
            Some(error) => Self::try_approximate(record.values, error, record.standard_deviation),
            None => Ok(Self {
                values: record.values,
                error: None,
                standard_deviation: record.standard_deviation,
            }),
        }
    }
}

/// Unchecked wire form of [`Solution`].
#[cfg(feature = "serde-derive")]
#[derive(Deserialize)]
struct SolutionRecord {
    argument_values: Vec<f64>,
    approximation_data: BTreeMap<MethodKind, ApproximationSeries>,
}

#[cfg(feature = "serde-derive")]
impl TryFrom<SolutionRecord> for Solution {
    type Error = AlignmentError;

    fn try_from(record: SolutionRecord) -> Result<Self, Self::Error> {
        Self::try_new(record.argument_values, record.approximation_data)
    }
}
