//! Tokio-specific conveniences for the retry driver.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["async-tokio"] }
//! ```

use core::future::{Future, IntoFuture};

use crate::outcome::Outcome;

use super::async_outcome::AsyncOutcome;
use super::retry::Retry;

impl<P, Fut, T, E> Retry<P, Fut, T, E>
where
    P: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    /// Starts the driver on Tokio's clock, returning the pending outcome.
    ///
    /// Equivalent to `run(tokio::time::sleep)` wrapped in an
    /// [`AsyncOutcome`], so the result chains into the combinator surface.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::prelude_async::*;
    ///
    /// async fn example() {
    ///     let outcome = retry_sync(|| Ok::<_, &str>(7))
    ///         .max_attempts(3)
    ///         .start()
    ///         .map(|v| v * 6)
    ///         .await;
    ///     assert_eq!(outcome, Success(42));
    /// }
    /// ```
    pub fn start(self) -> AsyncOutcome<T, E> {
        AsyncOutcome::new(self.run(tokio::time::sleep))
    }
}

impl<P, Fut, T, E> IntoFuture for Retry<P, Fut, T, E>
where
    P: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    type Output = Outcome<T, E>;
    type IntoFuture = AsyncOutcome<T, E>;

    /// Awaiting the driver directly runs it on Tokio's clock.
    fn into_future(self) -> Self::IntoFuture {
        self.start()
    }
}

/// Retries an async producer up to `max_attempts` times using Tokio's sleep.
///
/// Convenience for the common configure-one-thing case; the count is clamped
/// like [`Retry::max_attempts`].
///
/// # Examples
///
/// ```rust,ignore
/// use outcome_rail::async_ext::retry_n;
///
/// let outcome = retry_n(|| fetch_data(), 3).await;
/// ```
pub async fn retry_n<P, Fut, T, E>(producer: P, max_attempts: u32) -> Outcome<T, E>
where
    P: FnMut() -> Fut,
    Fut: Future<Output = Outcome<T, E>>,
{
    Retry::new(producer)
        .max_attempts(max_attempts)
        .run(tokio::time::sleep)
        .await
}
