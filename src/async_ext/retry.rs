//! Bounded retry-with-backoff driver.
//!
//! The driver is **runtime-neutral**: [`Retry::run`] accepts a sleep function
//! as a parameter and works with any async runtime. Tokio conveniences
//! (`start`, `IntoFuture`, [`retry_n`](super::retry_n)) live behind the
//! `async-tokio` feature.

use core::future::Future;
use core::marker::PhantomData;
use core::sync::atomic::{AtomicBool, Ordering};
use core::time::Duration;

use alloc::boxed::Box;

use crate::outcome::Outcome;
use crate::traits::IntoOutcome;

use super::outcome_future::{FutureOutcomeExt, OutcomeFuture};

/// Hard ceiling on configured attempts.
pub const MAX_ATTEMPTS: u32 = 100;

/// Hard ceiling on any single inter-attempt delay (one hour).
pub const MAX_DELAY: Duration = Duration::from_millis(3_600_000);

/// Clamps an attempt count into `1..=MAX_ATTEMPTS`.
///
/// Zero is promoted to one: a driver always makes at least one attempt.
#[inline]
#[must_use]
pub const fn clamp_attempts(n: u32) -> u32 {
    if n == 0 {
        1
    } else if n > MAX_ATTEMPTS {
        MAX_ATTEMPTS
    } else {
        n
    }
}

/// Caps a delay at [`MAX_DELAY`].
#[inline]
#[must_use]
pub fn clamp_delay(delay: Duration) -> Duration {
    delay.min(MAX_DELAY)
}

/// Cooperative stop signal handed to the failure observer.
///
/// Calling [`abort`](Abort::abort) makes the driver settle on the current
/// failure at the next loop check instead of scheduling another attempt.
#[derive(Debug, Default)]
pub struct Abort {
    flag: AtomicBool,
}

impl Abort {
    /// Requests that the driver stop retrying.
    #[inline]
    pub fn abort(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether an abort has been requested.
    #[inline]
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

enum DelayPolicy {
    Constant(Duration),
    Computed(Box<dyn FnMut(u32) -> Duration + Send>),
}

impl DelayPolicy {
    /// `upcoming` is the 1-based number of the attempt the wait precedes.
    fn next(&mut self, upcoming: u32) -> Duration {
        match self {
            Self::Constant(delay) => *delay,
            Self::Computed(f) => clamp_delay(f(upcoming)),
        }
    }
}

impl core::fmt::Debug for DelayPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Constant(delay) => f.debug_tuple("Constant").field(delay).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A pending, still-configurable retry driver.
///
/// Nothing runs until the driver is executed with [`run`](Retry::run) (or
/// started/awaited under `async-tokio`), so every builder call observably
/// configures the loop; there is no window where an attempt races the
/// configuration. An unconfigured driver performs exactly one attempt with
/// no delay.
///
/// The loop produces a fresh computation per attempt, awaits it, and stops
/// on the first `Success`, on abort, or when attempts are exhausted,
/// settling on the most recent outcome. A panicking producer propagates its
/// panic; only `Failure`s retry.
///
/// # Examples
///
/// ```
/// use core::time::Duration;
/// use outcome_rail::prelude_async::*;
///
/// async fn example() {
///     let outcome = retry_sync(|| Err::<i32, _>("flaky"))
///         .max_attempts(3)
///         .delay(Duration::from_millis(50))
///         .on_failure(|error, attempt, _abort| {
///             eprintln!("attempt {attempt} failed: {error}");
///         })
///         .run(tokio::time::sleep)
///         .await;
///     assert_eq!(outcome, Failure("flaky"));
/// }
/// ```
#[must_use = "a retry driver does nothing until run or awaited"]
pub struct Retry<P, Fut, T, E> {
    producer: P,
    max_attempts: u32,
    delay: DelayPolicy,
    observer: Option<Box<dyn FnMut(&E, u32, &Abort) + Send>>,
    _marker: PhantomData<fn() -> (Fut, T)>,
}

impl<P, Fut, T, E> core::fmt::Debug for Retry<P, Fut, T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Retry")
            .field("max_attempts", &self.max_attempts)
            .field("delay", &self.delay)
            .field("observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}

impl<P, Fut, T, E> Retry<P, Fut, T, E>
where
    P: FnMut() -> Fut,
    Fut: Future<Output = Outcome<T, E>>,
{
    /// Creates a driver around a producer of pending outcomes.
    ///
    /// Defaults: one attempt, zero delay, no observer.
    pub fn new(producer: P) -> Self {
        Self {
            producer,
            max_attempts: 1,
            delay: DelayPolicy::Constant(Duration::ZERO),
            observer: None,
            _marker: PhantomData,
        }
    }

    /// Sets the total attempt budget, clamped into `1..=MAX_ATTEMPTS`.
    pub fn max_attempts(mut self, n: u32) -> Self {
        self.max_attempts = clamp_attempts(n);
        self
    }

    /// Sets a constant inter-attempt delay, capped at [`MAX_DELAY`].
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = DelayPolicy::Constant(clamp_delay(delay));
        self
    }

    /// Sets a per-attempt delay function.
    ///
    /// `f` receives the 1-based number of the *upcoming* attempt (so the
    /// first value it sees is `2`), is evaluated fresh before each wait, and
    /// each returned delay is capped at [`MAX_DELAY`]. It is never consulted
    /// after the final failure.
    pub fn delay_with<F>(mut self, f: F) -> Self
    where
        F: FnMut(u32) -> Duration + Send + 'static,
    {
        self.delay = DelayPolicy::Computed(Box::new(f));
        self
    }

    /// Installs a failure observer.
    ///
    /// The observer runs after every failed attempt, the exhausting one
    /// included, with the failure payload, the 1-based attempt number, and
    /// an [`Abort`] handle for stopping early.
    pub fn on_failure<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&E, u32, &Abort) + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Executes the retry loop, sleeping through `sleep_fn`.
    ///
    /// This is the runtime-neutral entry point:
    ///
    /// ```rust,ignore
    /// // With Tokio
    /// retry(|| fetch()).max_attempts(5).run(tokio::time::sleep).await;
    ///
    /// // With async-std
    /// retry(|| fetch()).max_attempts(5).run(async_std::task::sleep).await;
    /// ```
    pub async fn run<S, SFut>(mut self, sleep_fn: S) -> Outcome<T, E>
    where
        S: Fn(Duration) -> SFut,
        SFut: Future<Output = ()>,
    {
        let abort = Abort::default();
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            match (self.producer)().await {
                Outcome::Success(value) => return Outcome::Success(value),
                Outcome::Failure(error) => {
                    if let Some(observer) = self.observer.as_mut() {
                        observer(&error, attempt, &abort);
                    }
                    if abort.is_aborted() || attempt >= self.max_attempts {
                        return Outcome::Failure(error);
                    }
                    sleep_fn(self.delay.next(attempt + 1)).await;
                }
            }
        }
    }
}

/// Creates a retry driver around a producer of pending outcomes.
///
/// Free-function alias for [`Retry::new`].
#[inline]
pub fn retry<P, Fut, T, E>(producer: P) -> Retry<P, Fut, T, E>
where
    P: FnMut() -> Fut,
    Fut: Future<Output = Outcome<T, E>>,
{
    Retry::new(producer)
}

/// Creates a retry driver around a synchronous producer.
///
/// The producer may return an `Outcome` or a `Result`; each attempt wraps
/// its value in an already-settled future.
pub fn retry_sync<F, O, T, E>(
    mut f: F,
) -> Retry<impl FnMut() -> core::future::Ready<Outcome<T, E>>, core::future::Ready<Outcome<T, E>>, T, E>
where
    F: FnMut() -> O,
    O: IntoOutcome<T, E>,
{
    Retry::new(move || core::future::ready(f().into_outcome()))
}

/// Creates a retry driver around a fallible async callable.
///
/// Each attempt's resolved `Err` is classified into a retryable `Failure`.
pub fn safe_retry<F, Fut, T, E>(
    mut f: F,
) -> Retry<impl FnMut() -> OutcomeFuture<Fut, fn(E) -> E>, OutcomeFuture<Fut, fn(E) -> E>, T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    Retry::new(move || f().into_outcome())
}
