//! Asynchronous dispatch of cooling computations.
//!
//! A [`Dispatcher`] accepts [`Parameters`] through [`Dispatcher::submit`],
//! which validates them, returns immediately, and runs the integration engine
//! on a bounded pool of worker threads. Each finished computation is published
//! twice:
//!
//! - to the [`Submission`] handle returned by `submit`, which the caller can
//!   await ([`Submission::wait`]) or block on ([`Submission::wait_blocking`])
//! - to every listener registered with [`Dispatcher::subscribe`]
//!
//! Submissions are independent. They are neither queued behind one another
//! nor ordered, and superseded work is not cancelled: a caller that only wants
//! the newest solution compares [`Completion::id`] with
//! [`Dispatcher::latest`].
//!
//! [`Parameters`]: cooling_core::Parameters

mod config;
mod dispatcher;
mod error;
mod listeners;
mod submission;

pub use config::{Config, ConfigError};
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, StartError, SubmitError};
pub use listeners::Subscription;
pub use submission::{Completion, Submission, SubmissionId};
