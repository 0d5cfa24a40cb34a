//! Tests for variant predicates and payload extraction.

use outcome_rail::prelude::*;

#[test]
fn predicates_reflect_variant() {
    let ok: Outcome<i32, &str> = Success(1);
    assert!(ok.is_success());
    assert!(!ok.is_failure());

    let bad: Outcome<i32, &str> = Failure("x");
    assert!(!bad.is_success());
    assert!(bad.is_failure());
}

#[test]
fn predicate_combinators_check_payload() {
    let ok: Outcome<i32, &str> = Success(4);
    assert!(ok.is_success_and(|v| v % 2 == 0));

    let ok: Outcome<i32, &str> = Success(3);
    assert!(!ok.is_success_and(|v| v % 2 == 0));

    let bad: Outcome<i32, &str> = Failure("x");
    assert!(!bad.is_success_and(|_| true));
    let bad: Outcome<i32, &str> = Failure("x");
    assert!(bad.is_failure_and(|e| e == "x"));
}

#[test]
fn option_projections() {
    let ok: Outcome<i32, &str> = Success(5);
    assert_eq!(ok.success_value(), Some(5));
    let ok: Outcome<i32, &str> = Success(5);
    assert_eq!(ok.failure_value(), None);

    let bad: Outcome<i32, &str> = Failure("x");
    assert_eq!(bad.success_value(), None);
    let bad: Outcome<i32, &str> = Failure("x");
    assert_eq!(bad.failure_value(), Some("x"));
}

#[test]
fn unwrap_returns_success_payload() {
    let ok: Outcome<i32, &str> = Success(7);
    assert_eq!(ok.unwrap(), 7);
}

#[test]
#[should_panic(expected = "called `Outcome::unwrap()` on a `Failure` value")]
fn unwrap_panics_on_failure_with_payload() {
    let bad: Outcome<i32, &str> = Failure("offline");
    let _ = bad.unwrap();
}

#[test]
#[should_panic(expected = "service must be up")]
fn expect_panics_with_caller_message() {
    let bad: Outcome<i32, &str> = Failure("offline");
    let _ = bad.expect("service must be up");
}

#[test]
fn unwrap_err_returns_failure_payload() {
    let bad: Outcome<i32, &str> = Failure("offline");
    assert_eq!(bad.unwrap_err(), "offline");
}

#[test]
#[should_panic(expected = "called `Outcome::unwrap_err()` on a `Success` value")]
fn unwrap_err_panics_on_success() {
    let ok: Outcome<i32, &str> = Success(1);
    let _ = ok.unwrap_err();
}

#[test]
fn unwrap_fallbacks() {
    let bad: Outcome<i32, &str> = Failure("four");
    assert_eq!(bad.unwrap_or(9), 9);

    let bad: Outcome<usize, &str> = Failure("four");
    assert_eq!(bad.unwrap_or_else(|e| e.len()), 4);

    let bad: Outcome<i32, &str> = Failure("x");
    assert_eq!(bad.unwrap_or_default(), 0);

    let ok: Outcome<i32, &str> = Success(3);
    assert_eq!(ok.unwrap_or(9), 3);
}

#[test]
fn unwrap_or_else_skips_closure_on_success() {
    let ok: Outcome<i32, &str> = Success(3);
    let value = ok.unwrap_or_else(|_| panic!("must not run"));
    assert_eq!(value, 3);
}

#[test]
fn into_pair_populates_exactly_one_slot() {
    let ok: Outcome<i32, &str> = Success(1);
    assert_eq!(ok.into_pair(), (None, Some(1)));

    let bad: Outcome<i32, &str> = Failure("x");
    assert_eq!(bad.into_pair(), (Some("x"), None));
}

#[test]
fn result_conversions_are_inverse() {
    let ok: Outcome<i32, &str> = Success(1);
    assert_eq!(ok.into_result(), Ok(1));

    let from_err: Outcome<i32, &str> = Err("x").into();
    assert_eq!(from_err, Failure("x"));

    let round: Outcome<i32, &str> = Outcome::from(Ok::<_, &str>(2)).into_result().into();
    assert_eq!(round, Success(2));
}

#[test]
fn as_ref_borrows_both_variants() {
    let ok: Outcome<String, &str> = Success(String::from("v"));
    assert_eq!(ok.as_ref().unwrap(), &String::from("v"));
    // Original is still usable after as_ref.
    assert!(ok.is_success());
}
