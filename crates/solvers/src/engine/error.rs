use cooling_core::ParameterError;

/// Errors that can occur when solving a request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),

    #[error("cannot refine {segment_count} segments without overflowing")]
    RefinementOverflow { segment_count: usize },
}
