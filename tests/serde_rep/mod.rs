//! Tests for the JSON projection and the tagged wire shape.

use outcome_rail::convert::TaggedOutcome;
use outcome_rail::prelude::*;
use serde_json::json;

#[test]
fn success_serializes_as_bare_payload() {
    let ok: Outcome<i32, &str> = Success(5);
    assert_eq!(serde_json::to_value(&ok).unwrap(), json!(5));
}

#[test]
fn failure_serializes_as_null() {
    // The bare projection is lossy: the failure payload is dropped.
    let bad: Outcome<i32, &str> = Failure("gone");
    assert_eq!(serde_json::to_value(&bad).unwrap(), serde_json::Value::Null);
}

#[test]
fn tagged_success_round_trips() {
    let ok: Outcome<i32, String> = Success(5);
    let wire = serde_json::to_string(&TaggedOutcome::from(ok)).unwrap();
    assert_eq!(wire, r#"{"success":true,"data":5}"#);

    let back: TaggedOutcome<i32, String> = serde_json::from_str(&wire).unwrap();
    assert_eq!(back, TaggedOutcome { success: true, data: Some(5), error: None });
}

#[test]
fn tagged_failure_round_trips() {
    let bad: Outcome<i32, String> = Failure(String::from("gone"));
    let wire = serde_json::to_string(&TaggedOutcome::from(bad)).unwrap();
    assert_eq!(wire, r#"{"success":false,"error":"gone"}"#);

    let back: TaggedOutcome<i32, String> = serde_json::from_str(&wire).unwrap();
    assert_eq!(back.error.as_deref(), Some("gone"));
}

#[test]
fn tagged_missing_payloads_default_to_none() {
    let sparse: TaggedOutcome<i32, String> = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert_eq!(sparse, TaggedOutcome { success: true, data: None, error: None });
}

#[test]
fn tagged_rejects_non_boolean_tag() {
    let bad = serde_json::from_str::<TaggedOutcome<i32, String>>(r#"{"success":"yes"}"#);
    assert!(bad.is_err());
}
