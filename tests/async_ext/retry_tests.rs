//! Tests for the bounded retry driver, using a mock sleep so no test
//! actually waits.

use core::time::Duration;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use outcome_rail::async_ext::{clamp_attempts, clamp_delay, MAX_ATTEMPTS, MAX_DELAY};
use outcome_rail::prelude_async::*;

// Mock sleep that doesn't actually sleep (for fast tests)
async fn mock_sleep(_: Duration) {}

#[test]
fn clamps_bound_the_configuration() {
    assert_eq!(clamp_attempts(0), 1);
    assert_eq!(clamp_attempts(1), 1);
    assert_eq!(clamp_attempts(100), MAX_ATTEMPTS);
    assert_eq!(clamp_attempts(10_000), MAX_ATTEMPTS);

    assert_eq!(clamp_delay(Duration::from_millis(5)), Duration::from_millis(5));
    assert_eq!(clamp_delay(Duration::from_secs(7200)), MAX_DELAY);
}

#[tokio::test]
async fn success_on_first_attempt_stops_the_loop() {
    let counter = Arc::new(AtomicU32::new(0));
    let c = counter.clone();

    let outcome = retry_sync(move || {
        c.fetch_add(1, Ordering::SeqCst);
        Ok::<_, &str>(42)
    })
    .max_attempts(5)
    .run(mock_sleep)
    .await;

    assert_eq!(outcome, Success(42));
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn mixed_sequence_resolves_on_first_success() {
    let counter = Arc::new(AtomicU32::new(0));
    let c = counter.clone();

    let outcome = retry_sync(move || {
        let n = c.fetch_add(1, Ordering::SeqCst);
        if n < 2 {
            Err("temporary")
        } else {
            Ok(42)
        }
    })
    .max_attempts(10)
    .run(mock_sleep)
    .await;

    assert_eq!(outcome, Success(42));
    assert_eq!(counter.load(Ordering::SeqCst), 3); // 2 failures + 1 success
}

#[tokio::test]
async fn exhaustion_settles_on_the_last_failure() {
    let counter = Arc::new(AtomicU32::new(0));
    let c = counter.clone();

    let outcome = retry_sync(move || {
        let n = c.fetch_add(1, Ordering::SeqCst);
        Err::<i32, _>(n)
    })
    .max_attempts(3)
    .run(mock_sleep)
    .await;

    // The settled payload is from the third (last) attempt.
    assert_eq!(outcome, Failure(2));
    assert_eq!(counter.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn unconfigured_driver_makes_exactly_one_attempt() {
    let counter = Arc::new(AtomicU32::new(0));
    let c = counter.clone();

    let outcome = retry_sync(move || {
        c.fetch_add(1, Ordering::SeqCst);
        Err::<i32, _>("always")
    })
    .run(mock_sleep)
    .await;

    assert_eq!(outcome, Failure("always"));
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn zero_attempts_clamps_to_one() {
    let counter = Arc::new(AtomicU32::new(0));
    let c = counter.clone();

    let _ = retry_sync(move || {
        c.fetch_add(1, Ordering::SeqCst);
        Err::<i32, _>("always")
    })
    .max_attempts(0)
    .run(mock_sleep)
    .await;

    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn observer_runs_on_every_failure_including_the_last() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();

    let outcome = retry_sync(|| Err::<i32, _>("flaky"))
        .max_attempts(3)
        .on_failure(move |error: &&str, attempt, _abort| {
            sink.lock().unwrap().push((attempt, *error));
        })
        .run(mock_sleep)
        .await;

    assert_eq!(outcome, Failure("flaky"));
    assert_eq!(*seen.lock().unwrap(), vec![(1, "flaky"), (2, "flaky"), (3, "flaky")]);
}

#[tokio::test]
async fn abort_settles_on_the_current_failure() {
    let counter = Arc::new(AtomicU32::new(0));
    let c = counter.clone();

    let outcome = retry_sync(move || {
        let n = c.fetch_add(1, Ordering::SeqCst);
        Err::<i32, _>(n)
    })
    .max_attempts(10)
    .on_failure(|_, attempt, abort| {
        if attempt == 2 {
            abort.abort();
        }
    })
    .run(mock_sleep)
    .await;

    assert_eq!(outcome, Failure(1)); // second attempt's payload
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn delay_function_sees_upcoming_attempt_numbers() {
    let delays = Arc::new(Mutex::new(Vec::new()));
    let sink = delays.clone();

    let _ = retry_sync(|| Err::<i32, _>("flaky"))
        .max_attempts(4)
        .delay_with(move |upcoming| {
            sink.lock().unwrap().push(upcoming);
            Duration::from_millis(u64::from(upcoming))
        })
        .run(mock_sleep)
        .await;

    // Called once per wait; never after the exhausting failure.
    assert_eq!(*delays.lock().unwrap(), vec![2, 3, 4]);
}

#[tokio::test]
async fn computed_delays_are_clamped() {
    let slept = Arc::new(Mutex::new(Vec::new()));
    let sink = slept.clone();
    let recording_sleep = move |d: Duration| {
        sink.lock().unwrap().push(d);
        async {}
    };

    let _ = retry_sync(|| Err::<i32, _>("flaky"))
        .max_attempts(2)
        .delay_with(|_| Duration::from_secs(24 * 3600))
        .run(recording_sleep)
        .await;

    assert_eq!(*slept.lock().unwrap(), vec![MAX_DELAY]);
}

#[tokio::test]
async fn constant_delay_is_used_between_attempts() {
    let slept = Arc::new(Mutex::new(Vec::new()));
    let sink = slept.clone();
    let recording_sleep = move |d: Duration| {
        sink.lock().unwrap().push(d);
        async {}
    };

    let _ = retry_sync(|| Err::<i32, _>("flaky"))
        .max_attempts(3)
        .delay(Duration::from_millis(50))
        .run(recording_sleep)
        .await;

    assert_eq!(
        *slept.lock().unwrap(),
        vec![Duration::from_millis(50), Duration::from_millis(50)]
    );
}

#[tokio::test]
async fn retry_wraps_async_producers() {
    let counter = Arc::new(AtomicU32::new(0));
    let c = counter.clone();

    let outcome = retry(move || {
        let c = c.clone();
        async move {
            let n = c.fetch_add(1, Ordering::SeqCst);
            if n == 0 {
                Outcome::<i32, &str>::Failure("first")
            } else {
                Outcome::Success(5)
            }
        }
    })
    .max_attempts(3)
    .run(mock_sleep)
    .await;

    assert_eq!(outcome, Success(5));
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn safe_retry_classifies_resolved_errs_as_retryable() {
    let counter = Arc::new(AtomicU32::new(0));
    let c = counter.clone();

    let outcome = safe_retry(move || {
        let c = c.clone();
        async move {
            let n = c.fetch_add(1, Ordering::SeqCst);
            if n < 1 {
                Err("transient")
            } else {
                Ok(7)
            }
        }
    })
    .max_attempts(5)
    .run(mock_sleep)
    .await;

    assert_eq!(outcome, Success(7));
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}
