//! Async prelude - the sync prelude plus the pending-outcome surface.
//!
//! # Usage
//!
//! ```ignore
//! use outcome_rail::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> Outcome<User, ApiError> {
//!     AsyncOutcome::new(db_lookup(id))
//!         .and_then_async(|row| decode(row))
//!         .await
//! }
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Types**: [`Outcome`], bare [`Success`] / [`Failure`]
//! - **Traits**: [`IntoOutcome`], [`Truthy`]
//! - **Constructors and macros**: everything [`prelude`](crate::prelude) exports
//!
//! ## Async-Specific
//!
//! - **Types**: [`AsyncOutcome`](crate::async_ext::AsyncOutcome),
//!   [`OutcomeFuture`](crate::async_ext::OutcomeFuture)
//! - **Traits**: [`FutureOutcomeExt`](crate::async_ext::FutureOutcomeExt) -
//!   `.into_outcome()` for futures of `Result`
//! - **Retry** (behind `async-retry`): [`retry`](crate::async_ext::retry),
//!   [`retry_sync`](crate::async_ext::retry_sync),
//!   [`safe_retry`](crate::async_ext::safe_retry), [`Retry`](crate::async_ext::Retry)

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{AsyncOutcome, FutureOutcomeExt, OutcomeFuture};

#[cfg(feature = "async-retry")]
pub use crate::async_ext::{retry, retry_sync, safe_retry, Abort, Retry};

#[cfg(feature = "async-tokio")]
pub use crate::async_ext::retry_n;
