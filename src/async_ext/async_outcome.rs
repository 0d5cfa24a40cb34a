//! The pending-outcome wrapper.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use alloc::boxed::Box;

use crate::outcome::Outcome;
use crate::traits::{IntoOutcome, Truthy};

/// A boxed future resolving to an `Outcome`.
type BoxOutcome<T, E> = Pin<Box<dyn Future<Output = Outcome<T, E>> + Send>>;

/// A computation that will eventually produce an [`Outcome`].
///
/// `AsyncOutcome` owns exactly one pending computation and exposes the same
/// combinator surface as `Outcome`, each operation returning a new
/// `AsyncOutcome` chained onto the prior one. It is itself a future:
/// awaiting it yields the plain `Outcome<T, E>`.
///
/// Every combinator first awaits the wrapped computation, then applies the
/// exact synchronous semantics for that operation. Operations that are
/// no-ops on one variant still await the underlying computation but never
/// invoke (or await) the transformation argument.
///
/// Rust has no separate rejection channel for futures: a panic in the
/// wrapped computation propagates out of `poll`, which is the unrecovered
/// failure mode, distinct from a `Failure`-variant outcome.
///
/// Combinators whose argument is itself awaited carry an `_async` suffix
/// (`map_async`, `and_then_async`, ...); the unsuffixed forms take plain
/// values and closures.
///
/// # Examples
///
/// ```
/// use outcome_rail::prelude_async::*;
///
/// async fn example() {
///     let outcome = AsyncOutcome::<i32, &str>::success(20)
///         .map(|v| v + 1)
///         .and_then_async(|v| async move { Ok::<_, &str>(v * 2) })
///         .await;
///     assert_eq!(outcome, Success(42));
/// }
/// ```
#[must_use = "async outcomes do nothing unless polled"]
pub struct AsyncOutcome<T, E> {
    inner: BoxOutcome<T, E>,
}

impl<T, E> core::fmt::Debug for AsyncOutcome<T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AsyncOutcome").finish_non_exhaustive()
    }
}

impl<T, E> Future for AsyncOutcome<T, E> {
    type Output = Outcome<T, E>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.get_mut().inner.as_mut().poll(cx)
    }
}

impl<T, E> AsyncOutcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Wraps a pending computation whose output converts into an `Outcome`.
    ///
    /// This accepts futures of `Outcome` and futures of `Result` alike.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::prelude_async::*;
    ///
    /// async fn example() {
    ///     let pending = AsyncOutcome::<i32, &str>::new(async { Ok(7) });
    ///     assert_eq!(pending.await, Success(7));
    /// }
    /// ```
    pub fn new<Fut, O>(future: Fut) -> Self
    where
        Fut: Future<Output = O> + Send + 'static,
        O: IntoOutcome<T, E>,
    {
        Self { inner: Box::pin(async move { future.await.into_outcome() }) }
    }

    /// Wraps an already-settled outcome.
    pub fn from_outcome(outcome: Outcome<T, E>) -> Self {
        Self { inner: Box::pin(core::future::ready(outcome)) }
    }

    /// An already-settled success.
    pub fn success(value: T) -> Self {
        Self::from_outcome(Outcome::Success(value))
    }

    /// An already-settled failure.
    pub fn failure(error: E) -> Self {
        Self::from_outcome(Outcome::Failure(error))
    }

    /// Invokes an async callable and wraps its pending result.
    pub fn from_call<F, Fut, O>(f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = O> + Send + 'static,
        O: IntoOutcome<T, E>,
    {
        Self::new(f())
    }

    /// Maps the success payload once the computation settles.
    pub fn map<U, F>(self, f: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        AsyncOutcome { inner: Box::pin(async move { self.inner.await.map(f) }) }
    }

    /// Maps the success payload through an async transformation.
    ///
    /// The transformation is never invoked when the computation settles on a
    /// `Failure`.
    pub fn map_async<U, F, Fut>(self, f: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send,
    {
        AsyncOutcome {
            inner: Box::pin(async move {
                match self.inner.await {
                    Outcome::Success(value) => Outcome::Success(f(value).await),
                    Outcome::Failure(error) => Outcome::Failure(error),
                }
            }),
        }
    }

    /// Maps the failure payload once the computation settles.
    pub fn map_err<F2, F>(self, f: F) -> AsyncOutcome<T, F2>
    where
        F2: Send + 'static,
        F: FnOnce(E) -> F2 + Send + 'static,
    {
        AsyncOutcome { inner: Box::pin(async move { self.inner.await.map_err(f) }) }
    }

    /// Maps the failure payload through an async transformation.
    pub fn map_err_async<F2, F, Fut>(self, f: F) -> AsyncOutcome<T, F2>
    where
        F2: Send + 'static,
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = F2> + Send,
    {
        AsyncOutcome {
            inner: Box::pin(async move {
                match self.inner.await {
                    Outcome::Success(value) => Outcome::Success(value),
                    Outcome::Failure(error) => Outcome::Failure(f(error).await),
                }
            }),
        }
    }

    /// Maps the success payload, or replaces a failure with `default`; both
    /// branches settle on `Success`.
    pub fn map_or<U, F>(self, default: U, f: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        AsyncOutcome { inner: Box::pin(async move { self.inner.await.map_or(default, f) }) }
    }

    /// Maps the success payload, or computes a replacement from the failure
    /// payload; both branches settle on `Success`.
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        D: FnOnce(E) -> U + Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        AsyncOutcome { inner: Box::pin(async move { self.inner.await.map_or_else(default, f) }) }
    }

    /// Replaces a settled `Success` with `other`, keeping a `Failure`.
    pub fn and<U, O>(self, other: O) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        O: IntoOutcome<U, E> + Send + 'static,
    {
        AsyncOutcome { inner: Box::pin(async move { self.inner.await.and(other) }) }
    }

    /// Replaces a settled `Success` with the settled value of `other`.
    ///
    /// `other` is not awaited when the computation settles on a `Failure`.
    pub fn and_async<U, Fut, O>(self, other: Fut) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        Fut: Future<Output = O> + Send + 'static,
        O: IntoOutcome<U, E>,
    {
        AsyncOutcome {
            inner: Box::pin(async move {
                match self.inner.await {
                    Outcome::Success(_) => other.await.into_outcome(),
                    Outcome::Failure(error) => Outcome::Failure(error),
                }
            }),
        }
    }

    /// Chains a continuation over the settled success payload.
    pub fn and_then<U, O, F>(self, f: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        O: IntoOutcome<U, E>,
        F: FnOnce(T) -> O + Send + 'static,
    {
        AsyncOutcome { inner: Box::pin(async move { self.inner.await.and_then(f) }) }
    }

    /// Chains an async continuation over the settled success payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::prelude_async::*;
    ///
    /// async fn example() {
    ///     let outcome = AsyncOutcome::<&str, &str>::failure("down")
    ///         .and_then_async(|v: &str| async move { Ok::<_, &str>(v.len()) })
    ///         .await;
    ///     // Short-circuits: the continuation never ran.
    ///     assert_eq!(outcome, Failure("down"));
    /// }
    /// ```
    pub fn and_then_async<U, Fut, O, F>(self, f: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        Fut: Future<Output = O> + Send,
        O: IntoOutcome<U, E>,
        F: FnOnce(T) -> Fut + Send + 'static,
    {
        AsyncOutcome {
            inner: Box::pin(async move {
                match self.inner.await {
                    Outcome::Success(value) => f(value).await.into_outcome(),
                    Outcome::Failure(error) => Outcome::Failure(error),
                }
            }),
        }
    }

    /// Runs a validation side-step over the settled success payload,
    /// returning the original `Success` when the side-step succeeds.
    pub fn and_through<U, O, F>(self, f: F) -> AsyncOutcome<T, E>
    where
        O: IntoOutcome<U, E>,
        F: FnOnce(&T) -> O + Send + 'static,
    {
        AsyncOutcome { inner: Box::pin(async move { self.inner.await.and_through(f) }) }
    }

    /// Runs an async validation side-step over the settled success payload.
    ///
    /// The returned future cannot borrow from the payload reference; clone
    /// what the side-step needs to keep.
    pub fn and_through_async<U, Fut, O, F>(self, f: F) -> AsyncOutcome<T, E>
    where
        Fut: Future<Output = O> + Send,
        O: IntoOutcome<U, E>,
        F: FnOnce(&T) -> Fut + Send + 'static,
    {
        AsyncOutcome {
            inner: Box::pin(async move {
                match self.inner.await {
                    Outcome::Success(value) => match f(&value).await.into_outcome() {
                        Outcome::Success(_) => Outcome::Success(value),
                        Outcome::Failure(error) => Outcome::Failure(error),
                    },
                    Outcome::Failure(error) => Outcome::Failure(error),
                }
            }),
        }
    }

    /// Calls a fallible function over the settled success payload, folding
    /// its `Err` into a `Failure`.
    pub fn and_safe<U, F>(self, f: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Result<U, E> + Send + 'static,
    {
        AsyncOutcome { inner: Box::pin(async move { self.inner.await.and_safe(f) }) }
    }

    /// Like [`and_safe`](AsyncOutcome::and_safe), with an explicit error
    /// mapping.
    pub fn and_safe_map<U, X, F, M>(self, f: F, map_err: M) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Result<U, X> + Send + 'static,
        M: FnOnce(X) -> E + Send + 'static,
    {
        AsyncOutcome { inner: Box::pin(async move { self.inner.await.and_safe_map(f, map_err) }) }
    }

    /// Replaces a settled `Failure` with `other`, keeping a `Success`.
    pub fn or<F2, O>(self, other: O) -> AsyncOutcome<T, F2>
    where
        F2: Send + 'static,
        O: IntoOutcome<T, F2> + Send + 'static,
    {
        AsyncOutcome { inner: Box::pin(async move { self.inner.await.or(other) }) }
    }

    /// Replaces a settled `Failure` with the settled value of `other`.
    ///
    /// `other` is not awaited when the computation settles on a `Success`.
    pub fn or_async<F2, Fut, O>(self, other: Fut) -> AsyncOutcome<T, F2>
    where
        F2: Send + 'static,
        Fut: Future<Output = O> + Send + 'static,
        O: IntoOutcome<T, F2>,
    {
        AsyncOutcome {
            inner: Box::pin(async move {
                match self.inner.await {
                    Outcome::Success(value) => Outcome::Success(value),
                    Outcome::Failure(_) => other.await.into_outcome(),
                }
            }),
        }
    }

    /// Chains a recovery over the settled failure payload.
    pub fn or_else<F2, O, F>(self, f: F) -> AsyncOutcome<T, F2>
    where
        F2: Send + 'static,
        O: IntoOutcome<T, F2>,
        F: FnOnce(E) -> O + Send + 'static,
    {
        AsyncOutcome { inner: Box::pin(async move { self.inner.await.or_else(f) }) }
    }

    /// Chains an async recovery over the settled failure payload.
    pub fn or_else_async<F2, Fut, O, F>(self, f: F) -> AsyncOutcome<T, F2>
    where
        F2: Send + 'static,
        Fut: Future<Output = O> + Send,
        O: IntoOutcome<T, F2>,
        F: FnOnce(E) -> Fut + Send + 'static,
    {
        AsyncOutcome {
            inner: Box::pin(async move {
                match self.inner.await {
                    Outcome::Success(value) => Outcome::Success(value),
                    Outcome::Failure(error) => f(error).await.into_outcome(),
                }
            }),
        }
    }

    /// Calls a fallible recovery over the settled failure payload, folding
    /// its `Err` into a `Failure`.
    pub fn or_safe<F2, F>(self, f: F) -> AsyncOutcome<T, F2>
    where
        F2: Send + 'static,
        F: FnOnce(E) -> Result<T, F2> + Send + 'static,
    {
        AsyncOutcome { inner: Box::pin(async move { self.inner.await.or_safe(f) }) }
    }

    /// Like [`or_safe`](AsyncOutcome::or_safe), with an explicit error
    /// mapping.
    pub fn or_safe_map<F2, X, F, M>(self, f: F, map_err: M) -> AsyncOutcome<T, F2>
    where
        F2: Send + 'static,
        F: FnOnce(E) -> Result<T, X> + Send + 'static,
        M: FnOnce(X) -> F2 + Send + 'static,
    {
        AsyncOutcome { inner: Box::pin(async move { self.inner.await.or_safe_map(f, map_err) }) }
    }

    /// Keeps a settled `Success` whose payload matches the predicate,
    /// otherwise settles on the fallback.
    pub fn assert_or<O, P>(self, fallback: O, predicate: P) -> AsyncOutcome<T, E>
    where
        O: IntoOutcome<T, E> + Send + 'static,
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        AsyncOutcome { inner: Box::pin(async move { self.inner.await.assert_or(fallback, predicate) }) }
    }

    /// Keeps a settled `Success` whose payload matches the predicate,
    /// otherwise computes the fallback from the original payload.
    pub fn assert_or_else<O, F, P>(self, fallback: F, predicate: P) -> AsyncOutcome<T, E>
    where
        O: IntoOutcome<T, E>,
        F: FnOnce(T) -> O + Send + 'static,
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        AsyncOutcome {
            inner: Box::pin(async move { self.inner.await.assert_or_else(fallback, predicate) }),
        }
    }

    /// Keeps a settled truthy `Success` payload, otherwise settles on the
    /// fallback.
    pub fn assert_truthy<O>(self, fallback: O) -> AsyncOutcome<T, E>
    where
        T: Truthy,
        O: IntoOutcome<T, E> + Send + 'static,
    {
        AsyncOutcome { inner: Box::pin(async move { self.inner.await.assert_truthy(fallback) }) }
    }

    /// Keeps a settled truthy `Success` payload, otherwise computes the
    /// fallback from the original payload.
    pub fn assert_truthy_or_else<O, F>(self, fallback: F) -> AsyncOutcome<T, E>
    where
        T: Truthy,
        O: IntoOutcome<T, E>,
        F: FnOnce(T) -> O + Send + 'static,
    {
        AsyncOutcome {
            inner: Box::pin(async move { self.inner.await.assert_truthy_or_else(fallback) }),
        }
    }

    /// Invokes `f` with a reference to the settled outcome, regardless of
    /// variant.
    pub fn peek<F>(self, f: F) -> Self
    where
        F: FnOnce(&Outcome<T, E>) + Send + 'static,
    {
        Self { inner: Box::pin(async move { self.inner.await.peek(f) }) }
    }

    /// Invokes `f` with the settled success payload, if any.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        Self { inner: Box::pin(async move { self.inner.await.tap(f) }) }
    }

    /// Invokes `f` with the settled failure payload, if any.
    pub fn tap_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E) + Send + 'static,
    {
        Self { inner: Box::pin(async move { self.inner.await.tap_err(f) }) }
    }

    /// Awaits the computation and returns the success payload or the
    /// provided default.
    pub async fn unwrap_or(self, default: T) -> T {
        self.inner.await.unwrap_or(default)
    }

    /// Awaits the computation and returns the success payload or computes
    /// one from the failure payload.
    pub async fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T + Send,
    {
        self.inner.await.unwrap_or_else(f)
    }

    /// Awaits the computation and converts it into the native two-slot
    /// `(error, value)` pair.
    pub async fn into_pair(self) -> (Option<E>, Option<T>) {
        self.inner.await.into_pair()
    }
}

impl<T, E> AsyncOutcome<Outcome<T, E>, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Removes one level of nesting from a settled success payload that is
    /// itself an `Outcome`.
    pub fn flatten(self) -> AsyncOutcome<T, E> {
        AsyncOutcome { inner: Box::pin(async move { self.inner.await.flatten() }) }
    }
}
