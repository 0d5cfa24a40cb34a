//! Construction-failure error types.
//!
//! Conversion entry points that cannot determine which variant applies fail
//! loudly with one of these types instead of guessing. Each carries the
//! offending data so callers can discriminate and recover.

use core::fmt;

/// Both slots of a native `(error, value)` pair were populated.
///
/// Returned by [`from_pair`](crate::convert::from_pair); the pair convention
/// admits exactly one populated slot, so this input is ambiguous.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidPairError<T, E> {
    /// The populated error slot.
    pub error: E,
    /// The populated value slot.
    pub value: T,
}

impl<T, E> fmt::Display for InvalidPairError<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ambiguous native pair: both error and value slots are populated")
    }
}

#[cfg(feature = "std")]
impl<T: fmt::Debug, E: fmt::Debug> std::error::Error for InvalidPairError<T, E> {}

/// A tagged union's discriminant did not agree with its payload.
///
/// Returned by [`from_tagged`](crate::convert::from_tagged) when the
/// `success` tag claims a variant whose payload is missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidTagError {
    /// The value of the `success` tag on the rejected input.
    pub success: bool,
}

impl fmt::Display for InvalidTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (claimed, missing) = if self.success {
            ("success", "data")
        } else {
            ("failure", "error")
        };
        write!(f, "tagged union claims {claimed} but its {missing} payload is missing")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidTagError {}

/// A panic payload caught by [`from_catch`](crate::convert::from_catch).
///
/// Carries the panic message when the payload was a string (the common
/// case for `panic!` with a literal or format string); other payload types
/// are recorded as opaque.
#[cfg(feature = "std")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaughtPanicError {
    message: alloc::string::String,
}

#[cfg(feature = "std")]
impl CaughtPanicError {
    pub(crate) fn from_payload(payload: alloc::boxed::Box<dyn core::any::Any + Send>) -> Self {
        use alloc::string::{String, ToString};

        let message = if let Some(msg) = payload.downcast_ref::<&'static str>() {
            msg.to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            String::from("panic payload of non-string type")
        };
        Self { message }
    }

    /// The recorded panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(feature = "std")]
impl fmt::Display for CaughtPanicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "caught panic: {}", self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CaughtPanicError {}
