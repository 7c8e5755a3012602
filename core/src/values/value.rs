use core::fmt;

use crate::syntax::{Magnitude, NumeralLiteral};

/// Result of evaluating an expression.
///
/// `Unresolvable` is absorbing: any operator applied to it yields
/// `Unresolvable` again.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Real(f64),
    Text(String),
    Vector(Vec<Value>),
    Unresolvable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Real,
    Text,
    Vector,
    Unresolvable,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Integer => "integer",
            ValueKind::Real => "real",
            ValueKind::Text => "string",
            ValueKind::Vector => "aggregate",
            ValueKind::Unresolvable => "unresolvable value",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Real(_) => ValueKind::Real,
            Value::Text(_) => ValueKind::Text,
            Value::Vector(_) => ValueKind::Vector,
            Value::Unresolvable => ValueKind::Unresolvable,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric value as a float; integers are widened.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(*v as f64),
            Value::Real(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[Value]> {
        match self {
            Value::Vector(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_unresolvable(&self) -> bool {
        matches!(self, Value::Unresolvable)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Real(_))
    }

    /// Truth value used by conditions and logical operators: any non-zero
    /// number is true. Non-numeric values have no truth value.
    pub fn truth(&self) -> Option<bool> {
        match self {
            Value::Integer(v) => Some(*v != 0),
            Value::Real(v) => Some(*v != 0.0),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<NumeralLiteral> for Value {
    fn from(literal: NumeralLiteral) -> Self {
        match literal.magnitude {
            Magnitude::Integer(v) => Value::Integer(v),
            Magnitude::Real(v) => Value::Real(v),
        }
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Vector(iter.into_iter().collect())
    }
}
