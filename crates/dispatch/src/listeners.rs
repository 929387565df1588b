use std::{
    collections::BTreeMap,
    panic::{self, AssertUnwindSafe},
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicU64, Ordering},
    },
};

use log::error;

use crate::Completion;

type Listener = dyn Fn(&Completion) + Send + Sync;

/// Handle returned by [`Dispatcher::subscribe`](crate::Dispatcher::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// The set of listeners notified of every completion.
#[derive(Default)]
pub(crate) struct Listeners {
    next: AtomicU64,
    entries: Mutex<BTreeMap<u64, Arc<Listener>>>,
}

impl Listeners {
    pub(crate) fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Completion) + Send + Sync + 'static,
    {
        let key = self.next.fetch_add(1, Ordering::Relaxed);
        self.lock().insert(key, Arc::new(listener));
        Subscription(key)
    }

    pub(crate) fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.lock().remove(&subscription.0).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    /// Calls every listener registered at the time of the call.
    ///
    /// Listeners run outside the lock, so one may subscribe or unsubscribe
    /// from inside its own callback. A panicking listener is logged and the
    /// remaining listeners still run.
    pub(crate) fn notify(&self, completion: &Completion) {
        let snapshot: Vec<Arc<Listener>> = self.lock().values().cloned().collect();

        for listener in snapshot {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| listener(completion)));
            if outcome.is_err() {
                error!("listener panicked while handling submission {}", completion.id);
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<u64, Arc<Listener>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
