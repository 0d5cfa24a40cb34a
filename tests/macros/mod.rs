//! Tests for the constructor macros.

use outcome_rail::{failure, outcome, success, Outcome};

#[test]
fn success_wraps_an_expression() {
    let ok: Outcome<i32, &str> = success!(42);
    assert_eq!(ok, Outcome::Success(42));
}

#[test]
fn failure_wraps_an_expression() {
    let bad: Outcome<i32, &str> = failure!("raw");
    assert_eq!(bad, Outcome::Failure("raw"));
}

#[test]
fn failure_formats_with_arguments() {
    let bad: Outcome<i32, String> = failure!("user {} not found", 7);
    assert_eq!(bad.unwrap_err(), "user 7 not found");
}

#[test]
fn outcome_classifies_a_result_expression() {
    let parsed = outcome!("42".parse::<i32>());
    assert_eq!(parsed.unwrap(), 42);

    let parsed = outcome!("nan".parse::<i32>());
    assert!(parsed.is_failure());
}
