use bumpalo::Bump;
use pretty_assertions::assert_eq;

use super::parser::{DEFAULT_MAX_DEPTH, parse, parse_with_max_depth};
use super::*;
use crate::syntax::{Magnitude, NumeralLiteral, Radix};

fn parse_err(source: &str) -> ParseErrorKind {
    let arena = Bump::new();
    match parse(&arena, source) {
        Ok(parsed) => panic!("expected {:?} to fail, got {:?}", source, parsed.expr),
        Err(e) => e.kind,
    }
}

#[test]
fn test_literals() {
    let arena = Bump::new();

    let parsed = parse(&arena, "8'hFF").unwrap();
    assert_eq!(
        parsed.expr,
        &Expr::Literal(Literal::Numeral(NumeralLiteral {
            magnitude: Magnitude::Integer(255),
            radix: Radix::Hexadecimal,
            bit_width: Some(8),
            signed: false,
        }))
    );

    let parsed = parse(&arena, "\"a b\"").unwrap();
    assert_eq!(parsed.expr, &Expr::Literal(Literal::Text("a b")));

    let parsed = parse(&arena, "TRUE").unwrap();
    assert_eq!(
        parsed.expr,
        &Expr::Literal(Literal::Numeral(NumeralLiteral::integer(1)))
    );
}

#[test]
fn test_aggregates() {
    let arena = Bump::new();
    let parsed = parse(&arena, "'{1, {2, 3}}").unwrap();
    let Expr::Aggregate(items) = parsed.expr else {
        panic!("expected aggregate, got {:?}", parsed.expr);
    };
    assert_eq!(items.len(), 2);
    assert!(matches!(items[1], Expr::Aggregate(inner) if inner.len() == 2));
}

#[test]
fn test_system_functions() {
    let arena = Bump::new();
    let parsed = parse(&arena, "$clog2(16)").unwrap();
    let Expr::Call { function, args } = parsed.expr else {
        panic!("expected call, got {:?}", parsed.expr);
    };
    assert_eq!(*function, SystemFunction::Clog2);
    assert_eq!(args.len(), 1);

    assert!(matches!(
        parse_err("$frobnicate(1)"),
        ParseErrorKind::UnknownFunction { name } if name == "$frobnicate"
    ));
}

#[test]
fn test_spans() {
    let arena = Bump::new();
    let source = "1 + (2 * 'h3)";
    let parsed = parse(&arena, source).unwrap();
    assert_eq!(parsed.ann.span_of(parsed.expr), Some(Span::new(0, 12)));

    let Expr::Binary { right, .. } = parsed.expr else {
        panic!("expected binary, got {:?}", parsed.expr);
    };
    let span = parsed.ann.span_of(right).unwrap();
    assert_eq!(span.str_of(source), "2 * 'h3");
}

#[test]
fn test_invalid_numbers() {
    assert!(matches!(
        parse_err("'b102"),
        ParseErrorKind::InvalidNumber { text, .. } if text == "'b102"
    ));
    assert!(matches!(
        parse_err("99999999999999999999"),
        ParseErrorKind::InvalidNumber { .. }
    ));
}

#[test]
fn test_rejected_inputs() {
    assert!(matches!(parse_err("0xff"), ParseErrorKind::UnexpectedToken { .. }));
    assert!(matches!(parse_err("#ff"), ParseErrorKind::UnexpectedToken { .. }));
    assert!(matches!(parse_err(""), ParseErrorKind::UnexpectedToken { .. }));
    assert!(matches!(parse_err("()"), ParseErrorKind::UnexpectedToken { .. }));
    assert!(matches!(parse_err("1 +"), ParseErrorKind::UnexpectedToken { .. }));
    assert!(matches!(parse_err("{}"), ParseErrorKind::UnexpectedToken { .. }));
}

#[test]
fn test_unbalanced_delimiters() {
    assert!(matches!(
        parse_err("(1 + 2"),
        ParseErrorKind::UnclosedDelimiter { delimiter: '(' }
    ));
    assert!(matches!(
        parse_err("{1, 2"),
        ParseErrorKind::UnclosedDelimiter { delimiter: '{' }
    ));
    assert!(matches!(
        parse_err("1 + 2)"),
        ParseErrorKind::UnexpectedToken { .. }
    ));
}

#[test]
fn test_max_depth() {
    let arena = Bump::new();
    let deep = format!("{}1{}", "(".repeat(10), ")".repeat(10));
    assert!(parse_with_max_depth(&arena, &deep, 10).is_ok());

    match parse_with_max_depth(&arena, &deep, 9) {
        Err(ParseError {
            kind: ParseErrorKind::MaxDepthExceeded { depth, max_depth },
            ..
        }) => {
            assert_eq!(depth, 10);
            assert_eq!(max_depth, 9);
        }
        other => panic!("expected MaxDepthExceeded, got {:?}", other.map(|p| p.expr)),
    }
}

#[test]
fn test_prefix_runs_count_as_nesting() {
    let arena = Bump::new();
    assert!(parse_with_max_depth(&arena, "- - ~ !1", 4).is_ok());
    assert!(matches!(
        parse_with_max_depth(&arena, "- - ~ !1", 3),
        Err(ParseError {
            kind: ParseErrorKind::MaxDepthExceeded { depth: 4, .. },
            ..
        })
    ));
    // Binary minus between operands does not nest.
    assert!(parse_with_max_depth(&arena, "-1 - -2 - -3", 1).is_ok());
}

#[test]
fn test_long_unary_chain_is_rejected() {
    let arena = Bump::new();
    for count in [1_000, 100_000] {
        let chain = format!("{}1", "-".repeat(count));
        assert!(matches!(
            parse(&arena, &chain),
            Err(ParseError {
                kind: ParseErrorKind::MaxDepthExceeded { .. },
                ..
            })
        ));
    }
}

#[test]
fn test_long_ternary_chain_is_rejected() {
    let arena = Bump::new();
    let chain = format!("{}0", "1 ? 2 : ".repeat(10_000));
    assert!(matches!(
        parse(&arena, &chain),
        Err(ParseError {
            kind: ParseErrorKind::MaxDepthExceeded { .. },
            ..
        })
    ));

    let short = format!("{}0", "1 ? 2 : ".repeat(DEFAULT_MAX_DEPTH));
    assert!(parse(&arena, &short).is_ok());
}

#[test]
fn test_long_flat_chain_parses() {
    let arena = Bump::new();
    let sum = vec!["1"; 20_000].join(" + ");
    assert!(parse(&arena, &sum).is_ok());
}

#[test]
fn test_very_deep_nesting_does_not_overflow() {
    let arena = Bump::new();
    let deep = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    assert!(matches!(
        parse(&arena, &deep),
        Err(ParseError {
            kind: ParseErrorKind::MaxDepthExceeded { .. },
            ..
        })
    ));
}
