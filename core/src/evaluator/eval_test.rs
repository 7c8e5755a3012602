//! Unit tests for the evaluator.

use super::*;
use crate::parser;
use bumpalo::Bump;
use pretty_assertions::assert_eq;

fn run(input: &str) -> Result<Value, ExecutionError> {
    run_with_limits(input, DEFAULT_MAX_DEPTH)
}

fn run_with_limits(input: &str, max_depth: usize) -> Result<Value, ExecutionError> {
    let arena = Bump::new();
    let parsed = parser::parse(&arena, input).expect("parsing failed");
    eval_with_limits(&parsed, max_depth)
}

fn runtime_error(input: &str) -> RuntimeError {
    match run(input) {
        Err(ExecutionError {
            kind: ExecutionErrorKind::Runtime(e),
            ..
        }) => e,
        other => panic!("expected runtime error for {:?}, got {:?}", input, other),
    }
}

#[test]
fn test_integer_arithmetic() {
    assert_eq!(run("1 + 2 * 3").unwrap(), Value::Integer(7));
    assert_eq!(run("(1 + 2) * 3").unwrap(), Value::Integer(9));
    assert_eq!(run("7 / 2").unwrap(), Value::Integer(3));
    assert_eq!(run("7 % 4").unwrap(), Value::Integer(3));
    assert_eq!(run("'h10 + 'b11").unwrap(), Value::Integer(19));
    assert_eq!(run("8'hFF & 'o17").unwrap(), Value::Integer(15));
}

#[test]
fn test_power_semantics() {
    assert_eq!(run("2 ** 10").unwrap(), Value::Integer(1024));
    assert_eq!(run("-2 ** 2").unwrap(), Value::Integer(4));
    assert_eq!(run("2 ** -1").unwrap(), Value::Integer(0));
    assert_eq!(run("-1 ** -1").unwrap(), Value::Integer(-1));
    assert_eq!(run("'h02 ** 'b0010 ** 'o2 ** 2").unwrap(), Value::Integer(256));
    assert!(matches!(runtime_error("0 ** -2"), RuntimeError::Domain { .. }));
}

#[test]
fn test_division_asymmetry() {
    assert_eq!(run("3 / 2.0").unwrap(), Value::Integer(1));
    assert_eq!(run("3.0 / 2").unwrap(), Value::Real(1.5));
    assert_eq!(runtime_error("1 / 0"), RuntimeError::DivisionByZero);
    assert_eq!(runtime_error("1.0 / 0"), RuntimeError::DivisionByZero);
}

#[test]
fn test_booleans_are_integers() {
    assert_eq!(run("True + false + true").unwrap(), Value::Integer(2));
    assert_eq!(run("1 < 2").unwrap(), Value::Integer(1));
    assert_eq!(run("!(3 == 3)").unwrap(), Value::Integer(0));
}

#[test]
fn test_logical_short_circuit() {
    // The right-hand side would fail if it were evaluated.
    assert_eq!(run("0 && 1 / 0").unwrap(), Value::Integer(0));
    assert_eq!(run("1 || 1 / 0").unwrap(), Value::Integer(1));
    assert_eq!(run("2 && 3").unwrap(), Value::Integer(1));
    assert_eq!(runtime_error("1 && 1 / 0"), RuntimeError::DivisionByZero);
}

#[test]
fn test_ternary_is_lazy() {
    assert_eq!(run("1 ? 'h10 : 1 / 0").unwrap(), Value::Integer(16));
    assert_eq!(run("0 ? 1 / 0 : 2.5").unwrap(), Value::Real(2.5));
    assert!(matches!(
        runtime_error("\"s\" ? 1 : 2"),
        RuntimeError::TypeMismatch { .. }
    ));
}

#[test]
fn test_system_functions() {
    assert_eq!(run("$clog2(129)").unwrap(), Value::Integer(8));
    assert_eq!(
        run("-$clog2(32)-($sqrt(25)-(-$pow(2,2)))").unwrap(),
        Value::Integer(-14)
    );
    assert!(matches!(
        runtime_error("$pow(1)"),
        RuntimeError::Arity { expected: 2, found: 1, .. }
    ));
}

#[test]
fn test_aggregates() {
    assert_eq!(
        run("{'h10, 'h14}").unwrap(),
        Value::Vector(vec![Value::Integer(16), Value::Integer(20)])
    );
    assert_eq!(
        run("{1, {1, 1}}").unwrap(),
        Value::Vector(vec![
            Value::Integer(1),
            Value::Vector(vec![Value::Integer(1), Value::Integer(1)]),
        ])
    );
    assert!(matches!(
        runtime_error("{1, 1} + 1"),
        RuntimeError::TypeMismatch { .. }
    ));
}

#[test]
fn test_strings() {
    assert_eq!(run("\"abc\"").unwrap(), Value::from("abc"));
    assert_eq!(run("\"a\" == \"a\"").unwrap(), Value::Integer(1));
    assert_eq!(run("\"a\" != \"a\"").unwrap(), Value::Integer(0));
    assert!(matches!(
        runtime_error("\"a\" + 1"),
        RuntimeError::TypeMismatch { .. }
    ));
}

#[test]
fn test_unresolved_identifier() {
    assert_eq!(
        runtime_error("WIDTH + 1"),
        RuntimeError::UnresolvedIdentifier {
            name: "WIDTH".to_string()
        }
    );
}

#[test]
fn test_error_span_points_at_failing_node() {
    let source = "1 + (4 / 0)";
    let err = run(source).unwrap_err();
    assert_eq!(err.span.str_of(source), "4 / 0");
    assert_eq!(err.source, source);
}

#[test]
fn test_depth_limit() {
    let nested = format!("{}1{}", "-(".repeat(20), ")".repeat(20));
    assert_eq!(run_with_limits(&nested, 100).unwrap(), Value::Integer(1));

    let err = run_with_limits(&nested, 10).unwrap_err();
    assert!(err.is_resource_exceeded());
    assert!(matches!(
        err.kind,
        ExecutionErrorKind::ResourceExceeded(ResourceExceededError::StackOverflow {
            max_depth: 10,
            ..
        })
    ));
}

#[test]
fn test_flat_chains_do_not_consume_depth() {
    let sum = vec!["1"; 2_000].join(" + ");
    assert_eq!(run_with_limits(&sum, 4).unwrap(), Value::Integer(2_000));

    let mixed = vec!["2 * 3"; 1_000].join(" - ");
    assert_eq!(run_with_limits(&mixed, 4).unwrap(), Value::Integer(6 - 6 * 999));

    let conjunction = vec!["1 < 2"; 1_000].join(" && ");
    assert_eq!(run_with_limits(&conjunction, 4).unwrap(), Value::Integer(1));
}

#[test]
fn test_chain_short_circuits_and_reports_failing_link() {
    assert_eq!(run("1 && 0 && (1 / 0) && 1").unwrap(), Value::Integer(0));
    assert_eq!(run("0 || 1 || (1 / 0)").unwrap(), Value::Integer(1));

    let source = "1 + 2 + \"a\" + 3";
    let err = run(source).unwrap_err();
    assert_eq!(err.span.str_of(source), "1 + 2 + \"a\"");
}
