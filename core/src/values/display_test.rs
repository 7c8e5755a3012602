//! Tests for the textual form of values.

use crate::values::Value;
use pretty_assertions::assert_eq;

#[test]
fn test_display_integers() {
    assert_eq!(Value::Integer(42).to_string(), "42");
    assert_eq!(Value::Integer(-100).to_string(), "-100");
    assert_eq!(Value::Integer(0).to_string(), "0");
}

#[test]
fn test_display_reals_keep_a_fraction() {
    assert_eq!(Value::Real(0.5).to_string(), "0.5");
    assert_eq!(Value::Real(2.0).to_string(), "2.0");
    assert_eq!(Value::Real(-1.5).to_string(), "-1.5");
    assert_eq!(Value::Real(0.0).to_string(), "0.0");
    assert_eq!(Value::Real(-0.0).to_string(), "0.0");
}

#[test]
fn test_display_reals_drop_float_noise() {
    assert_eq!(Value::Real(30.0 * 0.751).to_string(), "22.53");
    assert_eq!(Value::Real(0.1 + 0.2).to_string(), "0.3");
    assert_eq!(Value::Real(30.0 + 0.751).to_string(), "30.751");
    assert_eq!(
        Value::Real(1000004.012 + 1.84444444).to_string(),
        "1000005.85644444"
    );
}

#[test]
fn test_display_large_reals() {
    assert_eq!(Value::Real(1e20).to_string(), "100000000000000000000.0");
    assert_eq!(Value::Real(10000.1 * 20002.0).to_string(), "200022000.2");
}

#[test]
fn test_display_text() {
    assert_eq!(Value::from("A string.").to_string(), "\"A string.\"");
    assert_eq!(Value::from("").to_string(), "\"\"");
}

#[test]
fn test_display_vectors() {
    let nested = Value::Vector(vec![
        Value::Integer(1),
        Value::Vector(vec![Value::Integer(1), Value::Integer(1)]),
    ]);
    assert_eq!(nested.to_string(), "{1,{1,1}}");
    assert_eq!(Value::Vector(vec![Value::Integer(2)]).to_string(), "{2}");
}

#[test]
fn test_display_unresolvable() {
    assert_eq!(Value::Unresolvable.to_string(), "x");
    assert_eq!(Value::Real(f64::NAN).to_string(), "x");
}
