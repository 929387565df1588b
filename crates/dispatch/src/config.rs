use std::{num::NonZeroUsize, thread};

use thiserror::Error;

/// Configuration for a [`Dispatcher`](crate::Dispatcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    max_workers: usize,
    driver_threads: usize,
    thread_name: String,
}

/// Errors that can occur when validating a dispatcher config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_workers must be at least 1")]
    MaxWorkers,

    #[error("driver_threads must be at least 1")]
    DriverThreads,

    #[error("thread_name must not be empty")]
    ThreadName,
}

impl Default for Config {
    /// One worker per available core, one driver thread.
    fn default() -> Self {
        Self {
            max_workers: thread::available_parallelism().map_or(4, NonZeroUsize::get),
            driver_threads: 1,
            thread_name: "cooling-worker".to_owned(),
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `max_workers` bounds how many computations run at once; further
    /// submissions wait for a free worker. `driver_threads` sizes the async
    /// runtime that hands solutions to listeners and handles.
    ///
    /// # Errors
    ///
    /// Returns an error if either count is zero or the thread name is empty.
    pub fn new(
        max_workers: usize,
        driver_threads: usize,
        thread_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let thread_name = thread_name.into();
        if max_workers == 0 {
            return Err(ConfigError::MaxWorkers);
        }
        if driver_threads == 0 {
            return Err(ConfigError::DriverThreads);
        }
        if thread_name.trim().is_empty() {
            return Err(ConfigError::ThreadName);
        }

        Ok(Self {
            max_workers,
            driver_threads,
            thread_name,
        })
    }

    /// Returns the maximum number of computations that run at once.
    #[must_use]
    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// Returns the number of async driver threads.
    #[must_use]
    pub fn driver_threads(&self) -> usize {
        self.driver_threads
    }

    /// Returns the name given to worker and driver threads.
    #[must_use]
    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();

        assert!(config.max_workers() >= 1);
        assert_eq!(config.driver_threads(), 1);
        assert_eq!(
            Config::new(
                config.max_workers(),
                config.driver_threads(),
                config.thread_name()
            ),
            Ok(config.clone())
        );
    }

    #[test]
    fn rejects_zero_counts() {
        assert_eq!(Config::new(0, 1, "w"), Err(ConfigError::MaxWorkers));
        assert_eq!(Config::new(2, 0, "w"), Err(ConfigError::DriverThreads));
    }

    #[test]
    fn rejects_blank_thread_name() {
        assert_eq!(Config::new(2, 1, "  "), Err(ConfigError::ThreadName));
    }
}
