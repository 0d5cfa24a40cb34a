//! Convenience macros for constructing [`Outcome`](crate::Outcome)s.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{failure, success, Outcome};
//!
//! let ok: Outcome<i32, String> = success!(42);
//! let missing: Outcome<i32, String> = failure!("user {} not found", 7);
//!
//! assert!(ok.is_success());
//! assert_eq!(missing.unwrap_err(), "user 7 not found");
//! ```

/// Constructs a `Success` from an expression.
#[macro_export]
macro_rules! success {
    ($value:expr $(,)?) => {
        $crate::Outcome::Success($value)
    };
}

/// Constructs a `Failure`.
///
/// With a format string and arguments, the failure payload is the formatted
/// `String`; with a single expression, the expression itself.
#[macro_export]
macro_rules! failure {
    ($fmt:literal, $($arg:tt)+) => {
        $crate::Outcome::Failure(format!($fmt, $($arg)+))
    };
    ($error:expr $(,)?) => {
        $crate::Outcome::Failure($error)
    };
}

/// Classifies a `Result`-producing expression into an `Outcome`.
///
/// Shorthand for [`from_call`](crate::convert::from_call) around a block or
/// expression.
///
/// # Examples
///
/// ```
/// use outcome_rail::outcome;
///
/// let parsed = outcome!("42".parse::<i32>());
/// assert_eq!(parsed.unwrap(), 42);
/// ```
#[macro_export]
macro_rules! outcome {
    ($expr:expr $(,)?) => {
        $crate::convert::from_call(|| $expr)
    };
}
