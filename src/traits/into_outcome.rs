//! The result-like conversion protocol.

use crate::outcome::Outcome;

/// Conversion into an [`Outcome`].
///
/// Every combinator parameter documented as accepting "another outcome"
/// is generic over this trait, so foreign types participate in chains
/// without boxing or explicit wrapping. The conversion is invoked exactly
/// once, synchronously, to normalize the argument before the combinator
/// proceeds.
///
/// The impl for `Outcome` itself is the identity and performs no
/// re-wrapping; the impl for `core::result::Result` maps `Ok`/`Err` onto
/// `Success`/`Failure`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{IntoOutcome, Outcome};
///
/// struct HttpStatus(u16);
///
/// impl IntoOutcome<u16, u16> for HttpStatus {
///     fn into_outcome(self) -> Outcome<u16, u16> {
///         if self.0 < 400 {
///             Outcome::Success(self.0)
///         } else {
///             Outcome::Failure(self.0)
///         }
///     }
/// }
///
/// let o: Outcome<&str, u16> = Outcome::Success("ready");
/// assert_eq!(o.and(HttpStatus(200)), Outcome::Success(200));
/// ```
pub trait IntoOutcome<T, E> {
    /// Converts `self` into an `Outcome<T, E>`.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Outcome<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self.into()
    }
}
