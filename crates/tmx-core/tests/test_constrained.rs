//! Tests for the constrained value wrappers.

use std::time::Duration;

use tmx_core::{Error, NonEmptyString, NonNegative, Positive, UnitInterval};

#[test]
fn test_positive_accepts_positive_values() {
    assert_eq!(Positive::new(1).unwrap().get(), 1);
    assert_eq!(Positive::new(16.0).unwrap().get(), 16.0);
}

#[test]
fn test_positive_rejects_zero_and_negative() {
    assert!(matches!(Positive::new(0), Err(Error::InvariantViolation(_))));
    assert!(matches!(Positive::new(-3), Err(Error::InvariantViolation(_))));
}

#[test]
fn test_non_negative_accepts_zero() {
    assert_eq!(NonNegative::new(0).unwrap().get(), 0);
    assert_eq!(
        NonNegative::new(Duration::from_millis(120)).unwrap().get(),
        Duration::from_millis(120)
    );
}

#[test]
fn test_non_negative_rejects_negative() {
    assert!(matches!(
        NonNegative::new(-1),
        Err(Error::InvariantViolation(_))
    ));
}

#[test]
fn test_unit_interval_bounds() {
    assert_eq!(UnitInterval::new(0.0).unwrap().get(), 0.0);
    assert_eq!(UnitInterval::new(1.0).unwrap().get(), 1.0);
    assert_eq!(UnitInterval::ONE.get(), 1.0);

    assert!(UnitInterval::new(1.5).is_err());
    assert!(UnitInterval::new(-0.1).is_err());
    assert!(UnitInterval::new(f32::NAN).is_err());
}

#[test]
fn test_non_empty_string() {
    let name = NonEmptyString::new("spawn").unwrap();
    assert_eq!(name.get(), "spawn");
    assert_eq!(name.to_string(), "spawn");

    assert!(matches!(
        NonEmptyString::new(""),
        Err(Error::InvariantViolation(_))
    ));
}

#[test]
fn test_wrappers_compare_by_primitive() {
    assert_eq!(Positive::new(4).unwrap(), Positive::new(4).unwrap());
    assert!(Positive::new(2).unwrap() < Positive::new(5).unwrap());
    assert!(NonNegative::new(0).unwrap() < NonNegative::new(1).unwrap());
}

#[test]
fn test_invariant_violation_message() {
    let err = Positive::new(0).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invariant violation: expected a positive value, got 0"
    );
}
