//! Tests for the result-like conversion protocol.

use outcome_rail::prelude::*;

#[test]
fn outcome_converts_to_itself() {
    let ok: Outcome<i32, &str> = Success(1);
    assert_eq!(ok.clone().into_outcome(), ok);
}

#[test]
fn results_convert_by_variant() {
    assert_eq!(Ok::<_, &str>(1).into_outcome(), Success(1));
    assert_eq!(Err::<i32, _>("x").into_outcome(), Failure("x"));
}

#[test]
fn custom_types_can_join_the_protocol() {
    struct Status(u16);

    impl IntoOutcome<u16, u16> for Status {
        fn into_outcome(self) -> Outcome<u16, u16> {
            if self.0 < 400 {
                Success(self.0)
            } else {
                Failure(self.0)
            }
        }
    }

    assert_eq!(Status(200).into_outcome(), Success(200));
    assert_eq!(Status(503).into_outcome(), Failure(503));

    // Protocol members slot straight into combinator parameters.
    let ok: Outcome<u16, u16> = Success(1);
    assert_eq!(ok.and(Status(404)), Failure(404));
}
