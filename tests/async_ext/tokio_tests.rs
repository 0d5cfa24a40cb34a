//! Tests for the Tokio conveniences, under a paused clock so delays are
//! virtual.

use core::time::Duration;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use outcome_rail::async_ext::retry_n;
use outcome_rail::prelude_async::*;

#[tokio::test(start_paused = true)]
async fn start_chains_into_the_combinator_surface() {
    let outcome = retry_sync(|| Ok::<_, &str>(7))
        .max_attempts(3)
        .start()
        .map(|v| v * 6)
        .await;
    assert_eq!(outcome, Success(42));
}

#[tokio::test(start_paused = true)]
async fn awaiting_the_driver_runs_it() {
    let counter = Arc::new(AtomicU32::new(0));
    let c = counter.clone();

    let outcome = retry_sync(move || {
        let n = c.fetch_add(1, Ordering::SeqCst);
        if n < 1 {
            Err("flaky")
        } else {
            Ok(1)
        }
    })
    .max_attempts(3)
    .delay(Duration::from_secs(5))
    .await;

    assert_eq!(outcome, Success(1));
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn delays_elapse_on_the_tokio_clock() {
    let before = tokio::time::Instant::now();

    let _ = retry_sync(|| Err::<i32, _>("flaky"))
        .max_attempts(3)
        .delay(Duration::from_secs(10))
        .await;

    // Two waits of ten virtual seconds each.
    let elapsed = before.elapsed();
    assert!(elapsed >= Duration::from_secs(20), "only {elapsed:?} elapsed");
    assert!(elapsed < Duration::from_secs(21));
}

#[tokio::test(start_paused = true)]
async fn retry_n_retries_up_to_the_count() {
    let counter = Arc::new(AtomicU32::new(0));
    let c = counter.clone();

    let outcome = retry_n(
        move || {
            let c = c.clone();
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Outcome::<i32, &str>::Failure("always")
            }
        },
        3,
    )
    .await;

    assert_eq!(outcome, Failure("always"));
    assert_eq!(counter.load(Ordering::SeqCst), 3);
}
