use std::{fmt, sync::Arc};

use cooling_core::Solution;
use tokio::sync::oneshot;

use crate::DispatchError;

/// Identifies one submission.
///
/// Ids increase monotonically per dispatcher, so a larger id always belongs to
/// a later submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionId(pub(crate) u64);

impl SubmissionId {
    /// Returns the raw sequence number.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A finished computation.
///
/// The solution is shared read-only between the submission handle and every
/// listener; nothing in the dispatcher keeps it after delivery.
#[derive(Debug, Clone)]
pub struct Completion {
    /// The submission that produced this solution.
    pub id: SubmissionId,

    /// The solution itself.
    pub solution: Arc<Solution>,
}

/// Handle to one in-flight computation.
///
/// Dropping the handle does not cancel the computation; listeners are still
/// notified.
#[derive(Debug)]
pub struct Submission {
    pub(crate) id: SubmissionId,
    pub(crate) receiver: oneshot::Receiver<Result<Completion, DispatchError>>,
}

impl Submission {
    /// Returns the id assigned to this submission.
    #[must_use]
    pub fn id(&self) -> SubmissionId {
        self.id
    }

    /// Waits for the computation to finish.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::WorkerPanicked`] if the engine panicked, or
    /// [`DispatchError::Abandoned`] if the dispatcher shut down first.
    pub async fn wait(self) -> Result<Completion, DispatchError> {
        match self.receiver.await {
            Ok(outcome) => outcome,
            Err(_) => Err(DispatchError::Abandoned),
        }
    }

    /// Blocks the current thread until the computation finishes.
    ///
    /// # Errors
    ///
    /// See [`wait`](Self::wait).
    ///
    /// # Panics
    ///
    /// Panics if called from within an asynchronous execution context.
    pub fn wait_blocking(self) -> Result<Completion, DispatchError> {
        match self.receiver.blocking_recv() {
            Ok(outcome) => outcome,
            Err(_) => Err(DispatchError::Abandoned),
        }
    }
}
