//! A two-variant discriminated result container with a full combinator
//! algebra, conversion constructors, an async façade, and a bounded retry
//! driver.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Combinator Chains
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let o: Outcome<u32, &str> = Outcome::Success(10)
//!     .assert_or(Err("too small"), |v| *v >= 10)
//!     .map(|v| v * 2)
//!     .and_then(|v| Ok::<_, &str>(v + 1));
//!
//! assert_eq!(o, Outcome::Success(21));
//! ```
//!
//! ## Classifying Raw Values
//!
//! ```
//! use outcome_rail::convert::{from_option_or_else, from_truthy};
//!
//! let present = from_option_or_else(Some(3), || "missing");
//! assert!(present.is_success());
//!
//! // Falsy values classify as failures.
//! assert!(from_truthy("").is_failure());
//! ```
//!
//! ## Retry with Backoff (requires `async-tokio`)
//!
//! ```ignore
//! use core::time::Duration;
//! use outcome_rail::prelude_async::*;
//!
//! let outcome = retry(|| fetch_data())
//!     .max_attempts(5)
//!     .delay_with(|attempt| Duration::from_millis(100 * u64::from(attempt)))
//!     .await;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Free constructors classifying other shapes into an `Outcome`
pub mod convert;
/// Construction-failure error types
pub mod errors;
/// Convenience macros for constructing outcomes
pub mod macros;
/// The `Outcome` container and its synchronous combinator surface
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits: the conversion protocol and truthiness
pub mod traits;

/// Async counterpart of the combinator surface (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use convert::*;
pub use errors::*;
pub use outcome::{Outcome, OutcomeIter};
pub use traits::*;
