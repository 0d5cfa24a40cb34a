//! Free constructors that build an [`Outcome`] from other shapes.
//!
//! These adapters classify raw values (nullable, truthy), fallible calls,
//! native `(error, value)` pairs, and tagged unions into a concrete
//! `Outcome`, applying one shared policy: when the input cannot determine
//! which variant applies, construction fails loudly instead of guessing.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::{from_option, from_truthy};
//! use outcome_rail::Outcome;
//!
//! assert_eq!(from_option(Some(3)), Outcome::Success(3));
//! assert_eq!(from_truthy(""), Outcome::<_, bool>::Failure(true));
//! ```

use crate::errors::{InvalidPairError, InvalidTagError};
use crate::outcome::Outcome;
use crate::traits::Truthy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classifies an `Option`: `Some` becomes `Success`, `None` becomes
/// `Failure(true)`.
///
/// The `true` failure payload is a bare presence flag; use
/// [`from_option_or_else`] to attach a real error.
#[inline]
pub fn from_option<T>(value: Option<T>) -> Outcome<T, bool> {
    from_option_or_else(value, || true)
}

/// Classifies an `Option`, computing the failure payload lazily for `None`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::from_option_or_else;
/// use outcome_rail::Outcome;
///
/// let missing: Option<i32> = None;
/// let o = from_option_or_else(missing, || "not found");
/// assert_eq!(o, Outcome::Failure("not found"));
/// ```
#[inline]
pub fn from_option_or_else<T, E, F>(value: Option<T>, error: F) -> Outcome<T, E>
where
    F: FnOnce() -> E,
{
    match value {
        Some(value) => Outcome::Success(value),
        None => Outcome::Failure(error()),
    }
}

/// Classifies a value by truthiness: truthy becomes `Success`, falsy becomes
/// `Failure(true)`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::from_truthy;
/// use outcome_rail::Outcome;
///
/// assert_eq!(from_truthy("name"), Outcome::<_, bool>::Success("name"));
/// assert_eq!(from_truthy(0u32), Outcome::<_, bool>::Failure(true));
/// ```
#[inline]
pub fn from_truthy<T: Truthy>(value: T) -> Outcome<T, bool> {
    from_truthy_or_else(value, || true)
}

/// Classifies a value by truthiness, computing the failure payload lazily
/// for falsy input.
#[inline]
pub fn from_truthy_or_else<T, E, F>(value: T, error: F) -> Outcome<T, E>
where
    T: Truthy,
    F: FnOnce() -> E,
{
    if value.is_truthy() {
        Outcome::Success(value)
    } else {
        Outcome::Failure(error())
    }
}

/// Invokes a fallible function, folding its `Err` into a `Failure`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::from_call;
///
/// let o = from_call(|| "42".parse::<i32>());
/// assert!(o.is_success());
/// ```
#[inline]
pub fn from_call<T, E, F>(f: F) -> Outcome<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    from_call_map(f, |e| e)
}

/// Like [`from_call`], with an explicit error mapping.
#[inline]
pub fn from_call_map<T, E, X, F, M>(f: F, map_err: M) -> Outcome<T, E>
where
    F: FnOnce() -> Result<T, X>,
    M: FnOnce(X) -> E,
{
    match f() {
        Ok(value) => Outcome::Success(value),
        Err(caught) => Outcome::Failure(map_err(caught)),
    }
}

/// Invokes a function, catching any panic into a `Failure`.
///
/// This is the raw-exception counterpart of [`from_call`]: a panic unwinding
/// out of `f` becomes a [`CaughtPanicError`](crate::errors::CaughtPanicError)
/// carrying the panic message, instead of propagating.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::from_catch;
///
/// let o = from_catch(|| -> i32 { panic!("boom") });
/// assert_eq!(o.unwrap_err().message(), "boom");
/// ```
#[cfg(feature = "std")]
#[inline]
pub fn from_catch<T, F>(f: F) -> Outcome<T, crate::errors::CaughtPanicError>
where
    F: FnOnce() -> T + std::panic::UnwindSafe,
{
    match std::panic::catch_unwind(f) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(crate::errors::CaughtPanicError::from_payload(payload)),
    }
}

/// Builds an `Outcome` from a native `(error, value)` pair.
///
/// The canonical pair rule: an empty error slot wins the `Success` branch
/// (so `(None, None)` is `Success(None)`), a populated error slot with an
/// empty value slot is a `Failure`, and a pair with both slots populated is
/// ambiguous and rejected.
///
/// # Errors
///
/// Returns [`InvalidPairError`] when both slots are populated.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::from_pair;
/// use outcome_rail::Outcome;
///
/// assert_eq!(from_pair::<i32, &str>((None, Some(1))), Ok(Outcome::Success(Some(1))));
/// assert_eq!(from_pair::<i32, &str>((None, None)), Ok(Outcome::Success(None)));
/// assert_eq!(from_pair::<i32, &str>((Some("x"), None)), Ok(Outcome::Failure("x")));
/// assert!(from_pair((Some("x"), Some(1))).is_err());
/// ```
pub fn from_pair<T, E>(
    pair: (Option<E>, Option<T>),
) -> Result<Outcome<Option<T>, E>, InvalidPairError<T, E>> {
    match pair {
        (None, value) => Ok(Outcome::Success(value)),
        (Some(error), None) => Ok(Outcome::Failure(error)),
        (Some(error), Some(value)) => Err(InvalidPairError { error, value }),
    }
}

/// A tagged discriminated-union wire shape: `{ success, data?, error? }`.
///
/// This is the round-trippable counterpart to `Outcome`'s lossy JSON
/// projection. Deserializing rejects a non-boolean `success` tag outright;
/// [`from_tagged`] rejects a tag whose matching payload is missing.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedOutcome<T, E> {
    /// Discriminant: `true` for a success payload in `data`, `false` for a
    /// failure payload in `error`.
    pub success: bool,
    /// Success payload, present iff `success` is `true`.
    #[cfg_attr(feature = "serde", serde(default = "Option::default"))]
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub data: Option<T>,
    /// Failure payload, present iff `success` is `false`.
    #[cfg_attr(feature = "serde", serde(default = "Option::default"))]
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub error: Option<E>,
}

impl<T, E> From<Outcome<T, E>> for TaggedOutcome<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Self { success: true, data: Some(value), error: None },
            Outcome::Failure(error) => Self { success: false, data: None, error: Some(error) },
        }
    }
}

/// Builds an `Outcome` from a [`TaggedOutcome`].
///
/// # Errors
///
/// Returns [`InvalidTagError`] when the tag claims a variant whose payload
/// is missing; construction never guesses.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::{from_tagged, TaggedOutcome};
/// use outcome_rail::Outcome;
///
/// let tagged = TaggedOutcome::<i32, &str> { success: true, data: Some(9), error: None };
/// assert_eq!(from_tagged(tagged), Ok(Outcome::Success(9)));
///
/// let broken = TaggedOutcome::<i32, &str> { success: true, data: None, error: None };
/// assert!(from_tagged(broken).is_err());
/// ```
pub fn from_tagged<T, E>(tagged: TaggedOutcome<T, E>) -> Result<Outcome<T, E>, InvalidTagError> {
    match tagged {
        TaggedOutcome { success: true, data: Some(value), .. } => Ok(Outcome::Success(value)),
        TaggedOutcome { success: false, error: Some(error), .. } => Ok(Outcome::Failure(error)),
        TaggedOutcome { success, .. } => Err(InvalidTagError { success }),
    }
}
