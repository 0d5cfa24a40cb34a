//! Tracing integration for pending outcomes.
//!
//! Emits a `tracing` event when a pending outcome settles, inside the span
//! that was current when the wrapper was attached.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing", "async"] }
//! ```

use core::fmt::Display;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::outcome::Outcome;

/// Extension trait for futures of `Outcome` that logs how they settle.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::async_ext::FutureTraceExt;
///
/// let outcome = fetch_user(id)
///     .trace_outcome("fetch_user")
///     .await;
/// ```
pub trait FutureTraceExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// Emits a settle event labelled `operation`, in the current span.
    ///
    /// A `Success` logs at debug level, a `Failure` at warn level with the
    /// failure payload.
    fn trace_outcome(self, operation: &'static str) -> TracedOutcome<Self> {
        TracedOutcome { inner: self, operation, span: Span::current() }
    }
}

impl<F, T, E> FutureTraceExt<T, E> for F where F: Future<Output = Outcome<T, E>> {}

pin_project! {
    /// Future wrapper that logs the settled variant.
    ///
    /// Created by [`FutureTraceExt::trace_outcome`].
    #[must_use = "futures do nothing unless polled"]
    pub struct TracedOutcome<F> {
        #[pin]
        inner: F,
        operation: &'static str,
        span: Span,
    }
}

impl<F, T, E> Future for TracedOutcome<F>
where
    F: Future<Output = Outcome<T, E>>,
    E: Display,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let _entered = this.span.enter();

        match this.inner.poll(cx) {
            Poll::Ready(outcome) => {
                match &outcome {
                    Outcome::Success(_) => {
                        tracing::debug!(operation = *this.operation, "outcome settled on success");
                    }
                    Outcome::Failure(error) => {
                        tracing::warn!(
                            operation = *this.operation,
                            error = %error,
                            "outcome settled on failure",
                        );
                    }
                }
                Poll::Ready(outcome)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
