use crate::syntax::parse_numeral;
use crate::values::{Value, ValueKind};
use pretty_assertions::assert_eq;

#[test]
fn test_from_numeral() {
    assert_eq!(Value::from(parse_numeral("'hFF").unwrap()), Value::Integer(255));
    assert_eq!(Value::from(parse_numeral("0.25").unwrap()), Value::Real(0.25));
    assert_eq!(Value::from(parse_numeral("True").unwrap()), Value::Integer(1));
}

#[test]
fn test_kinds() {
    assert_eq!(Value::Integer(1).kind(), ValueKind::Integer);
    assert_eq!(Value::Real(1.0).kind(), ValueKind::Real);
    assert_eq!(Value::from("a").kind(), ValueKind::Text);
    assert_eq!(Value::Vector(vec![]).kind(), ValueKind::Vector);
    assert_eq!(Value::Unresolvable.kind(), ValueKind::Unresolvable);
    assert_eq!(ValueKind::Vector.to_string(), "aggregate");
}

#[test]
fn test_accessors() {
    assert_eq!(Value::Integer(3).as_int(), Some(3));
    assert_eq!(Value::Real(3.0).as_int(), None);
    assert_eq!(Value::Integer(3).as_real(), Some(3.0));
    assert_eq!(Value::from("s").as_text(), Some("s"));
    assert_eq!(Value::Integer(3).as_text(), None);

    let vector: Value = [1, 2].into_iter().map(Value::Integer).collect();
    assert_eq!(
        vector.as_vector(),
        Some(&[Value::Integer(1), Value::Integer(2)][..])
    );
}

#[test]
fn test_truth() {
    assert_eq!(Value::Integer(0).truth(), Some(false));
    assert_eq!(Value::Integer(-2).truth(), Some(true));
    assert_eq!(Value::Real(0.5).truth(), Some(true));
    assert_eq!(Value::from("1").truth(), None);
    assert_eq!(Value::Unresolvable.truth(), None);
    assert_eq!(Value::from(true), Value::Integer(1));
}
