//! Async counterpart of the `Outcome` combinator surface.
//!
//! [`AsyncOutcome`] threads the synchronous combinator semantics through a
//! pending computation; [`OutcomeFuture`] adapts `Result`-returning futures;
//! the retry driver (behind `async-retry`) produces `AsyncOutcome`s from a
//! bounded attempt loop.
//!
//! # Feature Flag
//!
//! Requires the `async` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["async"] }
//! ```

mod async_outcome;
mod outcome_future;

#[cfg(feature = "async-retry")]
mod retry;

#[cfg(feature = "async-tokio")]
mod tokio_ext;

#[cfg(feature = "tracing")]
mod tracing_ext;

pub use async_outcome::AsyncOutcome;
pub use outcome_future::{FutureOutcomeExt, OutcomeFuture};

#[cfg(feature = "async-retry")]
pub use retry::{
    clamp_attempts, clamp_delay, retry, retry_sync, safe_retry, Abort, Retry, MAX_ATTEMPTS,
    MAX_DELAY,
};

#[cfg(feature = "async-tokio")]
pub use tokio_ext::retry_n;

#[cfg(feature = "tracing")]
pub use tracing_ext::{FutureTraceExt, TracedOutcome};
