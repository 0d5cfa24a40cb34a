//! Future adapter from `Result` output to `Outcome` output.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::outcome::Outcome;

pin_project! {
    /// A future wrapper that classifies a `Result` output into an `Outcome`,
    /// mapping the error through a closure on the way.
    ///
    /// The mapping closure is only invoked when the inner future resolves to
    /// `Err`, keeping the success path free of extra work.
    ///
    /// # Cancel Safety
    ///
    /// `OutcomeFuture` is cancel-safe if the inner future is cancel-safe; the
    /// mapping closure runs only when `poll` returns `Poll::Ready(Err(_))`.
    #[must_use = "futures do nothing unless polled"]
    pub struct OutcomeFuture<Fut, M> {
        #[pin]
        future: Fut,
        map_err: Option<M>,
    }
}

impl<Fut, M> OutcomeFuture<Fut, M> {
    /// Creates a new `OutcomeFuture` with the given future and error mapping.
    #[inline]
    pub fn new(future: Fut, map_err: M) -> Self {
        Self { future, map_err: Some(map_err) }
    }
}

impl<Fut, M, T, X, E> Future for OutcomeFuture<Fut, M>
where
    Fut: Future<Output = Result<T, X>>,
    M: FnOnce(X) -> E,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|result| match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => {
                let map_err = this
                    .map_err
                    .take()
                    .expect("OutcomeFuture polled after completion; this is a bug");
                Outcome::Failure(map_err(error))
            }
        })
    }
}

impl<Fut, M, T, X, E> FusedFuture for OutcomeFuture<Fut, M>
where
    Fut: FusedFuture<Output = Result<T, X>>,
    M: FnOnce(X) -> E,
{
    fn is_terminated(&self) -> bool {
        // map_err is taken when the future completes with an error
        self.map_err.is_none() || self.future.is_terminated()
    }
}

/// Extension trait for futures of `Result`, classifying their output into an
/// `Outcome`.
///
/// This is the bridge for wrapping an existing promise-like computation:
/// a resolved `Ok` becomes `Success`, a resolved `Err` becomes `Failure`
/// (optionally mapped). A panicking future still panics; the panic channel
/// stays distinct from the `Failure` variant.
///
/// # Examples
///
/// ```
/// use outcome_rail::prelude_async::*;
///
/// async fn example() {
///     let outcome = async { Err::<i32, _>("boom") }
///         .outcome_map_err(|e: &str| e.len())
///         .await;
///     assert_eq!(outcome, Failure(4));
/// }
/// ```
pub trait FutureOutcomeExt<T, X>: Future<Output = Result<T, X>> + Sized {
    /// Classifies the future's `Result` output into an `Outcome` unchanged.
    #[inline]
    fn into_outcome(self) -> OutcomeFuture<Self, fn(X) -> X> {
        OutcomeFuture::new(self, core::convert::identity)
    }

    /// Classifies the future's `Result` output into an `Outcome`, mapping a
    /// resolved error through `map_err`.
    fn outcome_map_err<M, E>(self, map_err: M) -> OutcomeFuture<Self, M>
    where
        M: FnOnce(X) -> E;
}

impl<Fut, T, X> FutureOutcomeExt<T, X> for Fut
where
    Fut: Future<Output = Result<T, X>>,
{
    #[inline]
    fn outcome_map_err<M, E>(self, map_err: M) -> OutcomeFuture<Self, M>
    where
        M: FnOnce(X) -> E,
    {
        OutcomeFuture::new(self, map_err)
    }
}
