//! Core traits: the result-like conversion protocol and truthiness.
//!
//! - [`IntoOutcome`]: conversion protocol accepted by every combinator
//!   parameter that takes "another outcome"
//! - [`Truthy`]: truthiness interpretation for value-keyed construction

mod into_outcome;
mod truthy;

pub use into_outcome::IntoOutcome;
pub use truthy::Truthy;
