//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`] and its variants as bare names
//! - **Traits**: [`IntoOutcome`], [`Truthy`]
//! - **Constructors**: the `convert` entry points ([`from_option`],
//!   [`from_truthy`], [`from_call`], [`from_pair`], [`from_tagged`], ...)
//! - **Macros**: [`success!`], [`failure!`], [`outcome!`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn lookup(id: u32) -> Outcome<&'static str, String> {
//!     from_option_or_else(
//!         (id == 1).then_some("alice"),
//!         || format!("no user {id}"),
//!     )
//! }
//!
//! assert_eq!(lookup(1), Success("alice"));
//! assert!(lookup(2).is_failure());
//! ```

// Macros
pub use crate::{failure, outcome, success};

// Core type, with variants importable as bare names like Ok/Err
pub use crate::outcome::Outcome::{self, Failure, Success};

// Traits
pub use crate::traits::{IntoOutcome, Truthy};

// Constructors
pub use crate::convert::{
    from_call, from_call_map, from_option, from_option_or_else, from_pair, from_tagged,
    from_truthy, from_truthy_or_else, TaggedOutcome,
};

#[cfg(feature = "std")]
pub use crate::convert::from_catch;
