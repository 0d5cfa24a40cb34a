//! One-way JSON projection for `Outcome`.
//!
//! A `Success` serializes as the projection of its payload; a `Failure`
//! serializes as null. This is deliberately lossy, so `Outcome` itself has no
//! `Deserialize` impl; use [`TaggedOutcome`](crate::convert::TaggedOutcome)
//! for a round-trippable wire shape.

use serde::{Serialize, Serializer};

use super::Outcome;

impl<T: Serialize, E> Serialize for Outcome<T, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Outcome::Success(value) => value.serialize(serializer),
            Outcome::Failure(_) => serializer.serialize_unit(),
        }
    }
}
