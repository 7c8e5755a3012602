//! Binary, comparison and unary operator implementations.
//!
//! Promotion rules:
//!
//! - integer with integer stays integer (wrapping, truncating division)
//! - any real operand makes the result real, except integer `/` real, which
//!   is truncated back to an integer
//! - strings only support `==` and `!=` against other strings
//! - aggregates support no operators at all
//! - an unresolvable operand makes the result unresolvable

use core::cmp::Ordering;

use crate::{
    evaluator::RuntimeError,
    parser::{BinaryOp, ComparisonOp, UnaryOp},
    values::Value,
};

pub(super) fn eval_binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Unresolvable, _) | (_, Value::Unresolvable) => Ok(Value::Unresolvable),
        (Value::Integer(l), Value::Integer(r)) => eval_binary_int(op, *l, *r).map(Value::Integer),
        (Value::Integer(l), Value::Real(r)) if op == BinaryOp::Div => {
            let quotient = eval_binary_float(op, *l as f64, *r)?;
            Ok(Value::Integer(quotient.trunc() as i64))
        }
        (Value::Integer(_) | Value::Real(_), Value::Integer(_) | Value::Real(_)) => {
            match (left.as_real(), right.as_real()) {
                (Some(l), Some(r)) => eval_binary_float(op, l, r).map(Value::Real),
                _ => Err(mismatch(op.symbol(), left, right)),
            }
        }
        _ => Err(mismatch(op.symbol(), left, right)),
    }
}

/// Evaluate a binary operation on two integers.
///
/// Uses wrapping arithmetic to prevent panics on overflow.
pub(super) fn eval_binary_int(op: BinaryOp, left: i64, right: i64) -> Result<i64, RuntimeError> {
    match op {
        BinaryOp::Add => Ok(left.wrapping_add(right)),
        BinaryOp::Sub => Ok(left.wrapping_sub(right)),
        BinaryOp::Mul => Ok(left.wrapping_mul(right)),
        BinaryOp::Div | BinaryOp::Rem if right == 0 => Err(RuntimeError::DivisionByZero),
        // Wrapping variants handle i64::MIN / -1.
        BinaryOp::Div => Ok(left.wrapping_div(right)),
        BinaryOp::Rem => Ok(left.wrapping_rem(right)),
        BinaryOp::Pow => int_pow(left, right),
        BinaryOp::Shl | BinaryOp::Shr if right < 0 => Err(RuntimeError::Domain {
            message: format!("negative shift amount {}", right),
        }),
        BinaryOp::Shl => Ok(u32::try_from(right)
            .ok()
            .and_then(|amount| left.checked_shl(amount))
            .unwrap_or(0)),
        BinaryOp::Shr => Ok(left >> right.min(63)),
        BinaryOp::BitAnd => Ok(left & right),
        BinaryOp::BitOr => Ok(left | right),
        BinaryOp::BitXor => Ok(left ^ right),
    }
}

fn int_pow(base: i64, exponent: i64) -> Result<i64, RuntimeError> {
    if exponent >= 0 {
        let exponent = u32::try_from(exponent).unwrap_or(u32::MAX);
        return Ok(base.wrapping_pow(exponent));
    }

    // Negative exponents: the exact result is a fraction except for 1 and -1.
    match base {
        0 => Err(RuntimeError::Domain {
            message: "zero raised to a negative power".to_string(),
        }),
        1 => Ok(1),
        -1 if exponent % 2 == 0 => Ok(1),
        -1 => Ok(-1),
        _ => Ok(0),
    }
}

/// Evaluate a binary operation on two reals.
///
/// Results that are not finite numbers are reported as errors.
pub(super) fn eval_binary_float(op: BinaryOp, left: f64, right: f64) -> Result<f64, RuntimeError> {
    let result = match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div if right == 0.0 => return Err(RuntimeError::DivisionByZero),
        BinaryOp::Div => left / right,
        BinaryOp::Pow => left.powf(right),
        BinaryOp::Rem
        | BinaryOp::Shl
        | BinaryOp::Shr
        | BinaryOp::BitAnd
        | BinaryOp::BitOr
        | BinaryOp::BitXor => return Err(RuntimeError::IntegerOnly { op: op.symbol() }),
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(RuntimeError::Domain {
            message: format!("{} {} {} is not a finite number", left, op.symbol(), right),
        })
    }
}

/// Relational and equality operators. The result is always `1` or `0`.
pub(super) fn eval_comparison(
    op: ComparisonOp,
    left: &Value,
    right: &Value,
) -> Result<Value, RuntimeError> {
    let holds = match (left, right) {
        (Value::Unresolvable, _) | (_, Value::Unresolvable) => return Ok(Value::Unresolvable),
        (Value::Integer(l), Value::Integer(r)) => compare(op, l.cmp(r)),
        (Value::Text(l), Value::Text(r)) => match op {
            ComparisonOp::Eq => l == r,
            ComparisonOp::Neq => l != r,
            _ => return Err(mismatch(op.symbol(), left, right)),
        },
        _ => match (left.as_real(), right.as_real()) {
            (Some(l), Some(r)) => match l.partial_cmp(&r) {
                Some(ordering) => compare(op, ordering),
                None => return Err(mismatch(op.symbol(), left, right)),
            },
            _ => return Err(mismatch(op.symbol(), left, right)),
        },
    };
    Ok(Value::from(holds))
}

fn compare(op: ComparisonOp, ordering: Ordering) -> bool {
    match op {
        ComparisonOp::Eq => ordering == Ordering::Equal,
        ComparisonOp::Neq => ordering != Ordering::Equal,
        ComparisonOp::Lt => ordering == Ordering::Less,
        ComparisonOp::Gt => ordering == Ordering::Greater,
        ComparisonOp::Le => ordering != Ordering::Greater,
        ComparisonOp::Ge => ordering != Ordering::Less,
    }
}

pub(super) fn eval_unary(op: UnaryOp, value: &Value) -> Result<Value, RuntimeError> {
    match (op, value) {
        (_, Value::Unresolvable) => Ok(Value::Unresolvable),
        (UnaryOp::Neg, Value::Integer(v)) => Ok(Value::Integer(v.wrapping_neg())),
        (UnaryOp::Neg, Value::Real(v)) => Ok(Value::Real(-v)),
        (UnaryOp::Plus, Value::Integer(_) | Value::Real(_)) => Ok(value.clone()),
        (UnaryOp::BitNot, Value::Integer(v)) => Ok(Value::Integer(!v)),
        (UnaryOp::BitNot, Value::Real(_)) => Err(RuntimeError::IntegerOnly { op: op.symbol() }),
        (UnaryOp::Not, _) => match value.truth() {
            Some(truth) => Ok(Value::from(!truth)),
            None => Err(unary_mismatch(op.symbol(), value)),
        },
        _ => Err(unary_mismatch(op.symbol(), value)),
    }
}

fn mismatch(op: &'static str, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::TypeMismatch {
        op,
        left: left.kind(),
        right: Some(right.kind()),
    }
}

pub(super) fn unary_mismatch(op: &'static str, value: &Value) -> RuntimeError {
    RuntimeError::TypeMismatch {
        op,
        left: value.kind(),
        right: None,
    }
}
