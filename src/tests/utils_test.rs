use crate::utils::{convert_amount, round_to_decimals, validate_amount, validate_currency_code};

#[test]
fn test_convert_amount() {
    assert_eq!(convert_amount(1.0, 90.0), 90.0);
    assert_eq!(convert_amount(2.5, 90.0), 225.0);
}

#[test]
fn test_round_to_decimals() {
    assert_eq!(round_to_decimals(225.0, 2).unwrap(), 225.0);
    assert_eq!(round_to_decimals(1.23456, 2).unwrap(), 1.23);
    assert_eq!(round_to_decimals(1.23756, 2).unwrap(), 1.24);
}

#[test]
fn test_round_to_decimals_ties_to_even() {
    assert_eq!(round_to_decimals(90.125, 2).unwrap(), 90.12);
    assert_eq!(round_to_decimals(90.375, 2).unwrap(), 90.38);
    assert_eq!(round_to_decimals(0.125, 2).unwrap(), 0.12);
}

#[test]
fn test_round_to_decimals_uses_stored_value() {
    // Each literal is stored just below the half-way point.
    assert_eq!(round_to_decimals(2.675, 2).unwrap(), 2.67);
    assert_eq!(round_to_decimals(29.575, 2).unwrap(), 29.57);
    assert_eq!(round_to_decimals(763.775, 2).unwrap(), 763.77);
    assert_eq!(round_to_decimals(332.695, 2).unwrap(), 332.69);
}

#[test]
fn test_round_to_decimals_large_and_non_finite() {
    assert_eq!(round_to_decimals(1.7e308, 2).unwrap(), 1.7e308);
    assert_eq!(round_to_decimals(f64::MAX, 2).unwrap(), f64::MAX);
    assert!(round_to_decimals(f64::INFINITY, 2).is_err());
    assert!(round_to_decimals(f64::NAN, 2).is_err());
}

#[test]
fn test_validate_currency_code() {
    assert!(validate_currency_code("from", "USD").is_ok());
    assert!(validate_currency_code("from", "").is_err());
    // Format is left to the provider; only an empty code is rejected.
    assert!(validate_currency_code("to", "   ").is_ok());
}

#[test]
fn test_validate_amount() {
    assert!(validate_amount(0.01).is_ok());
    assert!(validate_amount(0.0).is_err());
    assert!(validate_amount(-1.0).is_err());
    assert!(validate_amount(f64::NAN).is_err());
    assert!(validate_amount(f64::INFINITY).is_err());
}
