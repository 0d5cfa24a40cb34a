//! Tests for iterating over iterable success payloads.

use outcome_rail::prelude::*;

#[test]
fn success_yields_payload_elements() {
    let ok: Outcome<Vec<i32>, &str> = Success(vec![1, 2, 3]);
    assert_eq!(ok.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn iteration_is_restartable() {
    let ok: Outcome<Vec<i32>, &str> = Success(vec![1, 2, 3]);
    assert_eq!(ok.iter().count(), 3);
    // A fresh iterator starts over from the payload.
    assert_eq!(ok.iter().count(), 3);
}

#[test]
fn failure_yields_nothing() {
    let bad: Outcome<Vec<i32>, &str> = Failure("x");
    assert_eq!(bad.iter().count(), 0);
}

#[test]
fn exhausted_iterator_stays_exhausted() {
    let ok: Outcome<Vec<i32>, &str> = Success(vec![1]);
    let mut iter = ok.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn size_hint_matches_payload() {
    let ok: Outcome<Vec<i32>, &str> = Success(vec![1, 2]);
    assert_eq!(ok.iter().size_hint(), (2, Some(2)));

    let bad: Outcome<Vec<i32>, &str> = Failure("x");
    assert_eq!(bad.iter().size_hint(), (0, Some(0)));
}
