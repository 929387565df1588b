#[cfg(test)]
mod tests;

use std::sync::{
    Arc,
    atomic::{AtomicU64, AtomicUsize, Ordering},
};

use cooling_core::{Parameters, Solution};
use log::{debug, error, warn};
use tokio::{
    runtime::{Builder, Handle, Runtime},
    sync::{Semaphore, oneshot},
    task,
};

use crate::{
    Completion, Config, DispatchError, StartError, Submission, SubmissionId, SubmitError,
    Subscription, listeners::Listeners,
};

/// Runs the integration engine off the caller's thread.
///
/// At most [`Config::max_workers`] computations run at once. Each submission
/// owns its parameters and allocates its own solution, so submissions share
/// nothing but the pool.
///
/// # Shutdown
///
/// A dispatcher built with [`Dispatcher::new`] owns its runtime. Dropping it
/// waits for running computations but abandons completions that have not been
/// delivered yet; their handles resolve to [`DispatchError::Abandoned`]. It
/// must not be dropped from inside an asynchronous context.
pub struct Dispatcher {
    runtime: Option<Runtime>,
    handle: Handle,
    workers: Arc<Semaphore>,
    listeners: Arc<Listeners>,
    next_id: AtomicU64,
    latest: AtomicU64,
    in_flight: Arc<AtomicUsize>,
    running: Arc<AtomicUsize>,
}

impl Dispatcher {
    /// Starts a dispatcher with its own multi-threaded runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime cannot be started.
    pub fn new(config: &Config) -> Result<Self, StartError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(config.driver_threads())
            .max_blocking_threads(config.max_workers())
            .thread_name(config.thread_name())
            .build()?;
        let handle = runtime.handle().clone();

        debug!(
            "started dispatcher with {} worker(s) and {} driver thread(s)",
            config.max_workers(),
            config.driver_threads()
        );
        Ok(Self::build(Some(runtime), handle, config))
    }

    /// Creates a dispatcher that runs on an existing runtime.
    ///
    /// Only [`Config::max_workers`] applies; the runtime's own settings decide
    /// its threads.
    #[must_use]
    pub fn with_handle(handle: Handle, config: &Config) -> Self {
        Self::build(None, handle, config)
    }

    fn build(runtime: Option<Runtime>, handle: Handle, config: &Config) -> Self {
        Self {
            runtime,
            handle,
            workers: Arc::new(Semaphore::new(config.max_workers())),
            listeners: Arc::new(Listeners::default()),
            next_id: AtomicU64::new(1),
            latest: AtomicU64::new(0),
            in_flight: Arc::new(AtomicUsize::new(0)),
            running: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Starts computing `params` and returns without waiting for the result.
    ///
    /// The parameters are validated before any work starts, so a request that
    /// can never succeed is rejected here rather than through the handle.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InvalidParameter`] if the segment count is zero
    /// or the time range is not finite.
    pub fn submit(&self, params: Parameters) -> Result<Submission, SubmitError> {
        if let Err(err) = params.validate() {
            warn!("rejected submission: {err}");
            return Err(err.into());
        }

        let id = SubmissionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.latest.fetch_max(id.0, Ordering::AcqRel);
        self.in_flight.fetch_add(1, Ordering::AcqRel);

        let (sender, receiver) = oneshot::channel();
        let workers = Arc::clone(&self.workers);
        let listeners = Arc::clone(&self.listeners);
        let in_flight = Arc::clone(&self.in_flight);
        let running = Arc::clone(&self.running);

        debug!(
            "submission {id}: {} segments, {} method(s)",
            params.segment_count,
            params.methods.len()
        );

        self.handle.spawn(async move {
            let outcome = compute(workers, running, params).await;
            in_flight.fetch_sub(1, Ordering::AcqRel);

            let delivery = match outcome {
                Ok(solution) => {
                    let completion = Completion {
                        id,
                        solution: Arc::new(solution),
                    };
                    listeners.notify(&completion);
                    debug!("submission {id} completed");
                    Ok(completion)
                }
                Err(err) => {
                    error!("submission {id} failed: {err}");
                    Err(err)
                }
            };

            if sender.send(delivery).is_err() {
                debug!("submission {id}: handle dropped before completion");
            }
        });

        Ok(Submission { id, receiver })
    }

    /// Registers `listener` to be called with every completion.
    ///
    /// Listeners run on a driver thread and should return quickly.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Completion) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Removes a listener.
    ///
    /// Returns `false` if the subscription was already removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.listeners.unsubscribe(subscription)
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Returns the id of the most recent submission, if any.
    #[must_use]
    pub fn latest(&self) -> Option<SubmissionId> {
        match self.latest.load(Ordering::Acquire) {
            0 => None,
            id => Some(SubmissionId(id)),
        }
    }

    /// Returns `true` if `id` belongs to the most recent submission.
    #[must_use]
    pub fn is_latest(&self, id: SubmissionId) -> bool {
        self.latest() == Some(id)
    }

    /// Returns the number of submissions that have not finished computing.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Returns the number of computations currently holding a worker.
    ///
    /// Never exceeds [`Config::max_workers`].
    #[must_use]
    pub fn running(&self) -> usize {
        self.running.load(Ordering::Acquire)
    }

    /// Returns `true` if this dispatcher owns its runtime.
    #[must_use]
    pub fn owns_runtime(&self) -> bool {
        self.runtime.is_some()
    }
}

/// Runs the engine on a blocking worker once one is free.
async fn compute(
    workers: Arc<Semaphore>,
    running: Arc<AtomicUsize>,
    params: Parameters,
) -> Result<Solution, DispatchError> {
    let _permit = workers
        .acquire_owned()
        .await
        .map_err(|_| DispatchError::Abandoned)?;

    running.fetch_add(1, Ordering::AcqRel);
    let joined = task::spawn_blocking(move || cooling_solvers::solve(&params)).await;
    running.fetch_sub(1, Ordering::AcqRel);

    let solution = joined.map_err(|err| DispatchError::WorkerPanicked(err.to_string()))??;
    Ok(solution)
}
