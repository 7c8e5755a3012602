//! System function implementations (`$clog2`, `$pow`, `$sqrt`, `$exp`).

use crate::{
    evaluator::{RuntimeError, operators},
    parser::{BinaryOp, SystemFunction},
    values::Value,
};

/// Largest magnitude below which every integer is exactly representable as f64.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

pub(super) fn call(function: SystemFunction, args: &[Value]) -> Result<Value, RuntimeError> {
    if args.len() != function.arity() {
        return Err(RuntimeError::Arity {
            function,
            expected: function.arity(),
            found: args.len(),
        });
    }
    if args.iter().any(Value::is_unresolvable) {
        return Ok(Value::Unresolvable);
    }

    match (function, args) {
        (SystemFunction::Clog2, [n]) => clog2(n),
        (SystemFunction::Pow, [base, exponent]) => {
            operators::eval_binary(BinaryOp::Pow, base, exponent)
        }
        (SystemFunction::Sqrt, [n]) => {
            let n = numeric_arg(function, n)?;
            if n < 0.0 {
                return Err(RuntimeError::Domain {
                    message: format!("square root of negative number {}", n),
                });
            }
            Ok(integral_or_real(n.sqrt()))
        }
        (SystemFunction::Exp, [n]) => {
            let n = numeric_arg(function, n)?;
            let result = n.exp();
            if !result.is_finite() {
                return Err(RuntimeError::Domain {
                    message: format!("$exp({}) is not a finite number", n),
                });
            }
            Ok(integral_or_real(result))
        }
        // Arity was checked above.
        _ => Err(RuntimeError::Arity {
            function,
            expected: function.arity(),
            found: args.len(),
        }),
    }
}

/// Ceiling of log2, the number of address bits needed for `n` entries.
fn clog2(n: &Value) -> Result<Value, RuntimeError> {
    match n {
        Value::Integer(n) if *n < 0 => Err(RuntimeError::Domain {
            message: format!("$clog2 of negative number {}", n),
        }),
        Value::Integer(n) if *n <= 1 => Ok(Value::Integer(0)),
        Value::Integer(n) => {
            let bits = u64::BITS - ((*n as u64) - 1).leading_zeros();
            Ok(Value::Integer(i64::from(bits)))
        }
        Value::Real(_) => Err(RuntimeError::IntegerOnly { op: "$clog2" }),
        other => Err(operators::unary_mismatch("$clog2", other)),
    }
}

fn numeric_arg(function: SystemFunction, value: &Value) -> Result<f64, RuntimeError> {
    value.as_real().ok_or(RuntimeError::TypeMismatch {
        op: function.name(),
        left: value.kind(),
        right: None,
    })
}

/// `$sqrt(25)` is `5`, not `5.0`.
fn integral_or_real(result: f64) -> Value {
    if result.fract() == 0.0 && result.abs() < EXACT_INTEGER_LIMIT {
        Value::Integer(result as i64)
    } else {
        Value::Real(result)
    }
}
