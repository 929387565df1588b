use std::{
    sync::{Arc, Mutex, mpsc},
    thread,
    time::{Duration, Instant},
};

use approx::assert_relative_eq;
use cooling_core::{MethodKind, ParameterError, Parameters};
use tokio::runtime::{Builder, Handle};

use super::Dispatcher;
use crate::{Completion, Config, SubmissionId, SubmitError};

fn coffee(segment_count: usize) -> Parameters {
    Parameters::new(90.0, 0.05, 20.0, segment_count, 10.0)
}

fn dispatcher() -> Dispatcher {
    let config = Config::new(2, 1, "test-worker").expect("valid config");
    Dispatcher::new(&config).expect("runtime should start")
}

/// Records the id of every completion a listener sees.
fn recorder(dispatcher: &Dispatcher) -> Arc<Mutex<Vec<SubmissionId>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    dispatcher.subscribe(move |completion: &Completion| {
        sink.lock().unwrap().push(completion.id);
    });
    seen
}

#[test]
fn delivers_the_engine_solution() {
    let dispatcher = dispatcher();
    let params = coffee(40);

    let submission = dispatcher.submit(params.clone()).expect("should accept");
    let completion = submission.wait_blocking().expect("should complete");

    let direct = cooling_solvers::solve(&params).expect("should solve");
    assert_eq!(*completion.solution, direct);
    assert_eq!(completion.solution.len(), 41);
}

#[test]
fn invalid_parameters_are_rejected_synchronously() {
    let dispatcher = dispatcher();
    let seen = recorder(&dispatcher);

    let err = dispatcher.submit(coffee(0)).unwrap_err();

    assert_eq!(err, SubmitError::InvalidParameter(ParameterError::ZeroSegments));
    assert_eq!(dispatcher.latest(), None);
    assert_eq!(dispatcher.in_flight(), 0);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn non_finite_time_range_is_rejected_synchronously() {
    let dispatcher = dispatcher();

    let err = dispatcher
        .submit(coffee(10).with_time_range(f64::NAN))
        .unwrap_err();

    assert!(matches!(
        err,
        SubmitError::InvalidParameter(ParameterError::NonFiniteTimeRange { .. })
    ));
}

#[test]
fn listeners_see_every_completion() {
    let dispatcher = dispatcher();
    let seen = recorder(&dispatcher);

    let first = dispatcher.submit(coffee(10)).expect("should accept");
    let second = dispatcher.submit(coffee(20)).expect("should accept");
    let ids = [first.id(), second.id()];

    first.wait_blocking().expect("should complete");
    second.wait_blocking().expect("should complete");

    // Listeners run before the handle is resolved.
    let mut seen = seen.lock().unwrap().clone();
    seen.sort();
    assert_eq!(seen, ids);
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let dispatcher = dispatcher();
    let calls = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&calls);
    let subscription = dispatcher.subscribe(move |_: &Completion| {
        *counter.lock().unwrap() += 1;
    });

    assert_eq!(dispatcher.listener_count(), 1);
    assert!(dispatcher.unsubscribe(subscription));
    assert!(!dispatcher.unsubscribe(subscription));
    assert_eq!(dispatcher.listener_count(), 0);

    dispatcher
        .submit(coffee(10))
        .expect("should accept")
        .wait_blocking()
        .expect("should complete");

    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn each_submission_gets_its_own_solution() {
    let dispatcher = dispatcher();

    let submissions: Vec<_> = (1..=8)
        .map(|n| (n, dispatcher.submit(coffee(n)).expect("should accept")))
        .collect();

    for (n, submission) in submissions {
        let id = submission.id();
        let completion = submission.wait_blocking().expect("should complete");

        assert_eq!(completion.id, id);
        assert_eq!(completion.solution.len(), n + 1);
    }
    assert_eq!(dispatcher.in_flight(), 0);
}

#[test]
fn latest_tracks_the_newest_submission() {
    let dispatcher = dispatcher();

    let first = dispatcher.submit(coffee(10)).expect("should accept");
    let second = dispatcher.submit(coffee(10)).expect("should accept");

    assert!(second.id() > first.id());
    assert_eq!(dispatcher.latest(), Some(second.id()));
    assert!(!dispatcher.is_latest(first.id()));

    // A caller keeping only the newest result discards the first completion.
    let completion = first.wait_blocking().expect("should complete");
    assert!(!dispatcher.is_latest(completion.id));
    let completion = second.wait_blocking().expect("should complete");
    assert!(dispatcher.is_latest(completion.id));
}

#[test]
fn dropped_handle_still_notifies_listeners() {
    let dispatcher = dispatcher();
    let (sender, receiver) = mpsc::channel();
    dispatcher.subscribe(move |completion: &Completion| {
        let _ = sender.send(completion.id);
    });

    let dropped = dispatcher.submit(coffee(10)).expect("should accept");
    let dropped_id = dropped.id();
    drop(dropped);

    let notified = receiver
        .recv_timeout(Duration::from_secs(10))
        .expect("listener should fire");
    assert_eq!(notified, dropped_id);
}

#[test]
fn submit_returns_before_the_computation_runs() {
    // A current-thread runtime makes no progress until something blocks on it.
    let runtime = Builder::new_current_thread()
        .build()
        .expect("runtime should start");
    let dispatcher = Dispatcher::with_handle(runtime.handle().clone(), &Config::default());
    let seen = recorder(&dispatcher);

    let submission = dispatcher.submit(coffee(1_000)).expect("should accept");

    assert_eq!(dispatcher.in_flight(), 1);
    assert_eq!(dispatcher.running(), 0);
    assert!(seen.lock().unwrap().is_empty());

    let completion = runtime
        .block_on(submission.wait())
        .expect("should complete");

    assert_eq!(completion.solution.len(), 1_001);
    assert_eq!(dispatcher.in_flight(), 0);
    assert_eq!(*seen.lock().unwrap(), vec![completion.id]);
}

#[test]
fn busy_pool_holds_new_submissions() {
    let config = Config::new(1, 1, "single").expect("valid config");
    let dispatcher = Dispatcher::new(&config).expect("runtime should start");
    let held = Arc::clone(&dispatcher.workers)
        .try_acquire_owned()
        .expect("pool should be idle");

    let submission = dispatcher.submit(coffee(10)).expect("should accept");
    thread::sleep(Duration::from_millis(50));

    assert_eq!(dispatcher.running(), 0);
    assert_eq!(dispatcher.in_flight(), 1);

    drop(held);
    submission.wait_blocking().expect("should complete");
    assert_eq!(dispatcher.in_flight(), 0);
}

#[test]
fn running_never_exceeds_max_workers() {
    let config = Config::new(2, 2, "pair").expect("valid config");
    let dispatcher = Dispatcher::new(&config).expect("runtime should start");
    let params = coffee(200_000).with_methods([MethodKind::Rk4]);

    let submissions: Vec<_> = (0..6)
        .map(|_| dispatcher.submit(params.clone()).expect("should accept"))
        .collect();

    let deadline = Instant::now() + Duration::from_secs(30);
    let mut peak = 0;
    while dispatcher.in_flight() > 0 {
        assert!(Instant::now() < deadline, "submissions did not finish");
        peak = peak.max(dispatcher.running());
        thread::yield_now();
    }

    assert!(peak <= 2, "{peak} computations ran at once");
    for submission in submissions {
        submission.wait_blocking().expect("should complete");
    }
}

#[test]
fn panicking_listener_does_not_block_delivery() {
    let dispatcher = dispatcher();
    dispatcher.subscribe(|_: &Completion| panic!("listener failure"));
    let seen = recorder(&dispatcher);

    let submission = dispatcher.submit(coffee(10)).expect("should accept");
    let id = submission.id();
    submission.wait_blocking().expect("should complete");

    assert_eq!(*seen.lock().unwrap(), vec![id]);
}

#[test]
fn single_worker_still_completes_everything() {
    let config = Config::new(1, 1, "single").expect("valid config");
    let dispatcher = Dispatcher::new(&config).expect("runtime should start");

    let submissions: Vec<_> = (0..4)
        .map(|_| dispatcher.submit(coffee(100)).expect("should accept"))
        .collect();

    for submission in submissions {
        let completion = submission.wait_blocking().expect("should complete");
        assert_eq!(completion.solution.len(), 101);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn awaits_on_an_existing_runtime() {
    let dispatcher = Dispatcher::with_handle(Handle::current(), &Config::default());
    let params = coffee(4).with_methods([MethodKind::Analytical, MethodKind::Euler]);

    let completion = dispatcher
        .submit(params)
        .expect("should accept")
        .wait()
        .await
        .expect("should complete");

    assert!(!dispatcher.owns_runtime());
    let euler = completion.solution.series(MethodKind::Euler).unwrap();
    assert_relative_eq!(euler.values()[1], 90.0 - 2.5 * 3.5);
}
