//! The two-variant `Outcome` container and its synchronous combinator surface.

mod iter;
#[cfg(feature = "serde")]
mod serde_impls;

pub use iter::OutcomeIter;

use core::fmt::Debug;

use crate::traits::{IntoOutcome, Truthy};

/// The outcome of a fallible operation: either a `Success` payload or a
/// `Failure` payload, with no third state.
///
/// `Outcome<T, E>` mirrors `core::result::Result` but carries a wider
/// combinator algebra: validation side-steps ([`and_through`](Outcome::and_through)),
/// predicate assertions with fallbacks ([`assert_or`](Outcome::assert_or)),
/// safe-call folding ([`and_safe`](Outcome::and_safe)), and observation hooks
/// ([`peek`](Outcome::peek), [`tap`](Outcome::tap)). Every combinator parameter
/// that takes "another outcome" is generic over [`IntoOutcome`], so plain
/// `Result` values participate without wrapping.
///
/// Values are immutable after construction; every operation consumes `self`
/// and returns a new value.
///
/// # Type Parameters
///
/// * `T` - The success payload type
/// * `E` - The failure payload type
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let o: Outcome<i32, &str> = Outcome::Success(2);
/// let doubled = o.map(|v| v * 2).and_then(|v| Ok::<_, &str>(v + 1));
/// assert_eq!(doubled, Outcome::Success(5));
/// ```
#[must_use]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    /// Contains the success payload.
    Success(T),
    /// Contains the failure payload.
    Failure(E),
}

use Outcome::{Failure, Success};

impl<T, E> Outcome<T, E> {
    /// Creates a success outcome.
    #[must_use]
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failure outcome.
    #[must_use]
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the outcome is a `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::Success(1);
    /// assert!(o.is_success());
    /// assert!(!o.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome is a `Failure`.
    #[must_use]
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns `true` if the outcome is a `Success` and the payload matches
    /// the predicate.
    ///
    /// The predicate is never invoked for a `Failure`; a panicking predicate
    /// propagates its panic.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::Success(4);
    /// assert!(o.is_success_and(|v| v % 2 == 0));
    ///
    /// let o: Outcome<i32, &str> = Outcome::Failure("nope");
    /// assert!(!o.is_success_and(|v| v % 2 == 0));
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success_and<F>(self, f: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Success(value) => f(value),
            Failure(_) => false,
        }
    }

    /// Returns `true` if the outcome is a `Failure` and the error matches
    /// the predicate.
    #[must_use]
    #[inline]
    pub fn is_failure_and<F>(self, f: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Success(_) => false,
            Failure(error) => f(error),
        }
    }

    /// Converts into an `Option` over the success payload.
    #[must_use]
    #[inline]
    pub fn success_value(self) -> Option<T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Converts into an `Option` over the failure payload.
    #[must_use]
    #[inline]
    pub fn failure_value(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Returns the success payload, or panics with `msg` if the outcome is a
    /// `Failure`.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`, with a message that includes the
    /// failure payload.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::Failure("offline");
    /// o.expect("the service must be reachable"); // panics
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: Debug,
    {
        match self {
            Success(value) => value,
            Failure(error) => unwrap_failed(msg, &error),
        }
    }

    /// Returns the success payload, or panics if the outcome is a `Failure`.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`, with a message that includes the
    /// failure payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::Success(7);
    /// assert_eq!(o.unwrap(), 7);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self {
            Success(value) => value,
            Failure(error) => {
                unwrap_failed("called `Outcome::unwrap()` on a `Failure` value", &error)
            }
        }
    }

    /// Returns the failure payload, or panics with `msg` if the outcome is a
    /// `Success`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E
    where
        T: Debug,
    {
        match self {
            Success(value) => unwrap_failed(msg, &value),
            Failure(error) => error,
        }
    }

    /// Returns the failure payload, or panics if the outcome is a `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::Failure("bad input");
    /// assert_eq!(o.unwrap_err(), "bad input");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        match self {
            Success(value) => {
                unwrap_failed("called `Outcome::unwrap_err()` on a `Success` value", &value)
            }
            Failure(error) => error,
        }
    }

    /// Returns the success payload or the provided default.
    ///
    /// The default is evaluated eagerly at the call site; use
    /// [`unwrap_or_else`](Outcome::unwrap_or_else) when it is expensive.
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// Returns the success payload or computes one from the failure payload.
    ///
    /// The closure is invoked exactly zero times on `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<usize, &str> = Outcome::Failure("four");
    /// assert_eq!(o.unwrap_or_else(|e| e.len()), 4);
    /// ```
    #[must_use]
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Success(value) => value,
            Failure(error) => f(error),
        }
    }

    /// Returns the success payload or `T::default()`.
    #[must_use]
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Success(value) => value,
            Failure(_) => T::default(),
        }
    }

    /// Maps the success payload, leaving a `Failure` untouched.
    ///
    /// The closure is never invoked for a `Failure`; a panicking closure
    /// propagates (use [`and_safe`](Outcome::and_safe) for fallible calls).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::Success(21);
    /// assert_eq!(o.map(|v| v * 2), Outcome::Success(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Maps the failure payload, leaving a `Success` untouched.
    #[inline]
    pub fn map_err<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(f(error)),
        }
    }

    /// Maps the success payload, or replaces a failure with `default`.
    ///
    /// Both branches yield a `Success`; this operation re-wraps a plain value
    /// so the chain can continue on the success track.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::Failure("down");
    /// assert_eq!(o.map_or(0, |v| v * 2), Outcome::Success(0));
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => Success(f(value)),
            Failure(_) => Success(default),
        }
    }

    /// Maps the success payload, or computes a replacement from the failure
    /// payload. Both branches yield a `Success`.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> Outcome<U, E>
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Success(default(error)),
        }
    }

    /// Keeps a `Success` whose payload matches the predicate, otherwise
    /// returns the fallback.
    ///
    /// A `Failure` passes through untouched. A panicking predicate propagates
    /// and the fallback is not consulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::Success(5);
    /// let checked = o.assert_or(Outcome::Success(0), |v| *v > 10);
    /// assert_eq!(checked, Outcome::Success(0));
    /// ```
    #[inline]
    pub fn assert_or<O, P>(self, fallback: O, predicate: P) -> Outcome<T, E>
    where
        O: IntoOutcome<T, E>,
        P: FnOnce(&T) -> bool,
    {
        match self {
            Success(value) => {
                if predicate(&value) {
                    Success(value)
                } else {
                    fallback.into_outcome()
                }
            }
            Failure(error) => Failure(error),
        }
    }

    /// Keeps a `Success` whose payload matches the predicate, otherwise
    /// computes the fallback from the original payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::Success(5);
    /// let checked = o.assert_or_else(|v| Outcome::Failure(if v < 0 { "negative" } else { "too small" }), |v| *v > 10);
    /// assert_eq!(checked, Outcome::Failure("too small"));
    /// ```
    #[inline]
    pub fn assert_or_else<O, F, P>(self, fallback: F, predicate: P) -> Outcome<T, E>
    where
        O: IntoOutcome<T, E>,
        F: FnOnce(T) -> O,
        P: FnOnce(&T) -> bool,
    {
        match self {
            Success(value) => {
                if predicate(&value) {
                    Success(value)
                } else {
                    fallback(value).into_outcome()
                }
            }
            Failure(error) => Failure(error),
        }
    }

    /// Keeps a truthy `Success` payload, otherwise returns the fallback.
    ///
    /// This is [`assert_or`](Outcome::assert_or) keyed on the [`Truthy`]
    /// trait instead of an explicit predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<&str, &str> = Outcome::Success("");
    /// let checked = o.assert_truthy(Outcome::Failure("empty name"));
    /// assert_eq!(checked, Outcome::Failure("empty name"));
    /// ```
    #[inline]
    pub fn assert_truthy<O>(self, fallback: O) -> Outcome<T, E>
    where
        T: Truthy,
        O: IntoOutcome<T, E>,
    {
        self.assert_or(fallback, Truthy::is_truthy)
    }

    /// Keeps a truthy `Success` payload, otherwise computes the fallback from
    /// the original payload.
    #[inline]
    pub fn assert_truthy_or_else<O, F>(self, fallback: F) -> Outcome<T, E>
    where
        T: Truthy,
        O: IntoOutcome<T, E>,
        F: FnOnce(T) -> O,
    {
        self.assert_or_else(fallback, Truthy::is_truthy)
    }

    /// Returns `other` if the outcome is a `Success`, otherwise keeps the
    /// `Failure`.
    ///
    /// The argument is evaluated eagerly at the call site; use
    /// [`and_then`](Outcome::and_then) for a lazy continuation.
    #[inline]
    pub fn and<U, O>(self, other: O) -> Outcome<U, E>
    where
        O: IntoOutcome<U, E>,
    {
        match self {
            Success(_) => other.into_outcome(),
            Failure(error) => Failure(error),
        }
    }

    /// Chains a continuation over the success payload, short-circuiting on
    /// `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn checked_double(v: i32) -> Outcome<i32, &'static str> {
    ///     if v < 100 { Outcome::Success(v * 2) } else { Outcome::Failure("too big") }
    /// }
    ///
    /// let o: Outcome<i32, &str> = Outcome::Success(21);
    /// assert_eq!(o.and_then(checked_double), Outcome::Success(42));
    ///
    /// let o: Outcome<i32, &str> = Outcome::Failure("down");
    /// assert_eq!(o.and_then(checked_double), Outcome::Failure("down"));
    /// ```
    #[inline]
    pub fn and_then<U, O, F>(self, f: F) -> Outcome<U, E>
    where
        O: IntoOutcome<U, E>,
        F: FnOnce(T) -> O,
    {
        match self {
            Success(value) => f(value).into_outcome(),
            Failure(error) => Failure(error),
        }
    }

    /// Runs a validation side-step over the success payload.
    ///
    /// If `f` yields a `Failure`, that failure is returned; otherwise the
    /// original `Success` is returned unchanged and `f`'s success value is
    /// discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<&str, &str> = Outcome::Success("a");
    /// let checked = o.and_through(|_| Outcome::<(), _>::Failure("bad"));
    /// assert_eq!(checked, Outcome::Failure("bad"));
    ///
    /// let o: Outcome<&str, &str> = Outcome::Success("a");
    /// let checked = o.and_through(|_| Outcome::<(), _>::Success(()));
    /// assert_eq!(checked, Outcome::Success("a"));
    /// ```
    #[inline]
    pub fn and_through<U, O, F>(self, f: F) -> Outcome<T, E>
    where
        O: IntoOutcome<U, E>,
        F: FnOnce(&T) -> O,
    {
        match self {
            Success(value) => match f(&value).into_outcome() {
                Success(_) => Success(value),
                Failure(error) => Failure(error),
            },
            Failure(error) => Failure(error),
        }
    }

    /// Calls a fallible function over the success payload, folding its `Err`
    /// into a `Failure`.
    ///
    /// The `Err` channel of `f` plays the role of a caught exception; it
    /// becomes a first-class `Failure` instead of propagating. The function is
    /// never invoked for a `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<&str, std::num::ParseIntError> = Outcome::Success("42");
    /// assert_eq!(o.and_safe(|s| s.parse::<i32>()), Outcome::Success(42));
    /// ```
    #[inline]
    pub fn and_safe<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.and_safe_map(f, |e| e)
    }

    /// Like [`and_safe`](Outcome::and_safe), with an explicit error mapping.
    #[inline]
    pub fn and_safe_map<U, X, F, M>(self, f: F, map_err: M) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Result<U, X>,
        M: FnOnce(X) -> E,
    {
        match self {
            Success(value) => match f(value) {
                Ok(next) => Success(next),
                Err(caught) => Failure(map_err(caught)),
            },
            Failure(error) => Failure(error),
        }
    }

    /// Returns `other` if the outcome is a `Failure`, otherwise keeps the
    /// `Success`.
    #[inline]
    pub fn or<F2, O>(self, other: O) -> Outcome<T, F2>
    where
        O: IntoOutcome<T, F2>,
    {
        match self {
            Success(value) => Success(value),
            Failure(_) => other.into_outcome(),
        }
    }

    /// Chains a recovery over the failure payload, short-circuiting on
    /// `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::Failure("cache miss");
    /// let recovered = o.or_else(|_| Outcome::<_, &str>::Success(0));
    /// assert_eq!(recovered, Outcome::Success(0));
    /// ```
    #[inline]
    pub fn or_else<F2, O, F>(self, f: F) -> Outcome<T, F2>
    where
        O: IntoOutcome<T, F2>,
        F: FnOnce(E) -> O,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => f(error).into_outcome(),
        }
    }

    /// Calls a fallible recovery over the failure payload, folding its `Err`
    /// into a `Failure`. The function is never invoked for a `Success`.
    #[inline]
    pub fn or_safe<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> Result<T, F2>,
    {
        self.or_safe_map(f, |e| e)
    }

    /// Like [`or_safe`](Outcome::or_safe), with an explicit error mapping.
    #[inline]
    pub fn or_safe_map<F2, X, F, M>(self, f: F, map_err: M) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> Result<T, X>,
        M: FnOnce(X) -> F2,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => match f(error) {
                Ok(value) => Success(value),
                Err(caught) => Failure(map_err(caught)),
            },
        }
    }

    /// Invokes `f` with a reference to the whole outcome, regardless of
    /// variant, and returns `self` unchanged.
    #[inline]
    pub fn peek<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self),
    {
        f(&self);
        self
    }

    /// Invokes `f` with the success payload, if any, and returns `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = None;
    /// let o: Outcome<i32, &str> = Outcome::Success(3);
    /// let o = o.tap(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(3));
    /// assert_eq!(o, Outcome::Success(3));
    /// ```
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Success(value) = &self {
            f(value);
        }
        self
    }

    /// Invokes `f` with the failure payload, if any, and returns `self`.
    #[inline]
    pub fn tap_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Converts into the native two-slot pair `(error, value)`.
    ///
    /// Exactly one slot is populated. The inverse is
    /// [`from_pair`](crate::convert::from_pair).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::Success(1);
    /// assert_eq!(o.into_pair(), (None, Some(1)));
    ///
    /// let o: Outcome<i32, &str> = Outcome::Failure("x");
    /// assert_eq!(o.into_pair(), (Some("x"), None));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_pair(self) -> (Option<E>, Option<T>) {
        match self {
            Success(value) => (None, Some(value)),
            Failure(error) => (Some(error), None),
        }
    }

    /// Converts into a `core::result::Result`.
    #[must_use]
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    /// Iterates over the elements of an iterable success payload.
    ///
    /// A `Failure` yields an immediately exhausted iterator. Each call
    /// obtains a fresh iterator from the payload, so iteration is
    /// restartable.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<Vec<i32>, &str> = Outcome::Success(vec![1, 2, 3]);
    /// assert_eq!(o.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// // Restartable: a second call starts over.
    /// assert_eq!(o.iter().count(), 3);
    ///
    /// let o: Outcome<Vec<i32>, &str> = Outcome::Failure("x");
    /// assert_eq!(o.iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter<'a>(&'a self) -> OutcomeIter<<&'a T as IntoIterator>::IntoIter>
    where
        &'a T: IntoIterator,
    {
        match self {
            Success(value) => OutcomeIter::new(Some(value.into_iter())),
            Failure(_) => OutcomeIter::new(None),
        }
    }

    /// Lifts this outcome into an already-settled [`AsyncOutcome`].
    ///
    /// [`AsyncOutcome`]: crate::async_ext::AsyncOutcome
    #[cfg(feature = "async")]
    #[inline]
    pub fn into_async(self) -> crate::async_ext::AsyncOutcome<T, E>
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        crate::async_ext::AsyncOutcome::from_outcome(self)
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting from a success payload that is itself an
    /// `Outcome`.
    ///
    /// A `Failure` is returned unchanged without inspecting its payload. The
    /// payload's type guarantees it is an `Outcome`, so flattening cannot
    /// fail at runtime.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Success(Outcome::Failure("inner"));
    /// assert_eq!(nested.flatten(), Outcome::Failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Success(inner) => inner,
            Failure(error) => Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}

#[cold]
#[track_caller]
fn unwrap_failed(msg: &str, payload: &dyn Debug) -> ! {
    panic!("{msg}: {payload:?}")
}
