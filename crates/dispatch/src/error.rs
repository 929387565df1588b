use cooling_core::ParameterError;

/// Errors reported synchronously by [`Dispatcher::submit`](crate::Dispatcher::submit).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),
}

/// Errors delivered through a [`Submission`](crate::Submission) handle.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("solver error: {0}")]
    Solve(#[from] cooling_solvers::Error),

    #[error("worker panicked: {0}")]
    WorkerPanicked(String),

    /// The dispatcher shut down before the completion was delivered.
    #[error("submission was abandoned before completing")]
    Abandoned,
}

/// Errors that can occur when starting a dispatcher's worker runtime.
#[derive(Debug, thiserror::Error)]
pub enum StartError {
    #[error("failed to start worker runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
