use thiserror::Error;

use crate::MethodKind;

/// Errors that can occur when validating a computation request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// The time range must be split into at least one segment.
    #[error("segment count must be at least 1")]
    ZeroSegments,

    /// The time range must be a finite number.
    #[error("time range must be finite, got {value}")]
    NonFiniteTimeRange { value: f64 },

    /// The method identifier does not name one of the supported methods.
    #[error("unsupported method `{name}`")]
    UnsupportedMethod { name: String },
}

/// Errors that can occur when assembling a [`Solution`](crate::Solution) whose
/// sequences are not index-aligned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentError {
    /// A series has a different length than the sample times.
    #[error("{method} series has {found} values, expected {expected}")]
    SeriesLength {
        method: MethodKind,
        expected: usize,
        found: usize,
    },

    /// An error sequence has a different length than its values.
    #[error("error sequence has {found} entries, expected {expected}")]
    ErrorLength { expected: usize, found: usize },
}
