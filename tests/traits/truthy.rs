//! Tests for the truthiness interpretation.

use outcome_rail::traits::Truthy;

#[test]
fn booleans_are_their_own_truth() {
    assert!(true.is_truthy());
    assert!(!false.is_truthy());
}

#[test]
fn numbers_are_falsy_at_zero() {
    assert!(1i32.is_truthy());
    assert!((-1i64).is_truthy());
    assert!(!0u8.is_truthy());
    assert!(!0i128.is_truthy());
}

#[test]
fn floats_are_falsy_at_zero_and_nan() {
    assert!(1.5f64.is_truthy());
    assert!(!0.0f64.is_truthy());
    assert!(!(-0.0f32).is_truthy());
    assert!(!f64::NAN.is_truthy());
    assert!(f64::INFINITY.is_truthy());
}

#[test]
fn strings_are_falsy_when_empty() {
    assert!("a".is_truthy());
    assert!(!"".is_truthy());
    assert!(String::from("a").is_truthy());
    assert!(!String::new().is_truthy());
}

#[test]
fn collections_are_falsy_when_empty() {
    assert!(vec![1].is_truthy());
    assert!(!Vec::<i32>::new().is_truthy());
    assert!([1, 2][..].is_truthy());
    assert!(!<[i32]>::is_truthy(&[]));
}

#[test]
fn options_are_falsy_when_absent_or_falsy_inside() {
    assert!(Some(1).is_truthy());
    assert!(!Some(0).is_truthy());
    assert!(!Option::<i32>::None.is_truthy());
}

#[test]
fn references_delegate_to_the_value() {
    let s = String::from("a");
    assert!((&s).is_truthy());
    assert!((&&s).is_truthy());
}
