use bumpalo::Bump;
use lazy_static::lazy_static;
use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest_derive::Parser;
use tracing::trace;

use crate::lexer::{self, DelimiterError};
use crate::parser::error::{ParseError, ParseErrorKind, convert_pest_error};
use crate::parser::{
    AnnotatedSource, BinaryOp, BoolOp, ComparisonOp, Expr, Literal, ParsedExpr, Span,
    SystemFunction, UnaryOp,
};
use crate::syntax::{parse_numeral, parse_string};

/// Nesting allowed by [`parse`]: brackets, prefix operator runs and
/// ternary chains.
pub const DEFAULT_MAX_DEPTH: usize = 64;

lazy_static! {
    // Note: precedence is defined lowest to highest.
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        // (lowest precedence)
        .op(Op::infix(Rule::ternary_op, Assoc::Right))   // `c ? a : b`

        // Logical operators.
        .op(Op::infix(Rule::log_or, Assoc::Left))        // `||`
        .op(Op::infix(Rule::log_and, Assoc::Left))       // `&&`

        // Bitwise operators.
        .op(Op::infix(Rule::bit_or, Assoc::Left))        // `|`
        .op(Op::infix(Rule::bit_xor, Assoc::Left))       // `^`
        .op(Op::infix(Rule::bit_and, Assoc::Left))       // `&`

        // Comparisons.
        .op(
            Op::infix(Rule::eq, Assoc::Left) |
            Op::infix(Rule::ne, Assoc::Left)
        )                                                // `==`, `!=`
        .op(
            Op::infix(Rule::lt, Assoc::Left) |
            Op::infix(Rule::gt, Assoc::Left) |
            Op::infix(Rule::le, Assoc::Left) |
            Op::infix(Rule::ge, Assoc::Left)
        )                                                // `<`, `>`, `<=`, `>=`

        // Arithmetic operators.
        .op(
            Op::infix(Rule::shl, Assoc::Left) |
            Op::infix(Rule::shr, Assoc::Left)
        )                                                // `<<`, `>>`
        .op(
            Op::infix(Rule::add, Assoc::Left) |
            Op::infix(Rule::sub, Assoc::Left)
        )                                                // `+`, `-`
        .op(
            Op::infix(Rule::mul, Assoc::Left) |
            Op::infix(Rule::div, Assoc::Left) |
            Op::infix(Rule::rem, Assoc::Left)
        )                                                // `*`, `/`, `%`
        .op(Op::infix(Rule::pow, Assoc::Left))           // `**` (left-assoc)

        // Unary operators bind tighter than `**`: `-2**2` is 4.
        .op(
            Op::prefix(Rule::neg) |
            Op::prefix(Rule::pos) |
            Op::prefix(Rule::bit_not) |
            Op::prefix(Rule::log_not)
        )
        // (highest precedence)
        ;
}

#[derive(Parser)]
#[grammar = "parser/expression.pest"]
pub struct ExpressionGrammar;

pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> Result<ParsedExpr<'a>, ParseError> {
    parse_with_max_depth(arena, source, DEFAULT_MAX_DEPTH)
}

/// Parses `source`, rejecting nesting deeper than `max_depth`.
///
/// Nesting is measured on tokens before the grammar runs, so deeply nested
/// input is refused without recursing into it. See
/// [`lexer::check_delimiters`] for what counts as a level.
pub fn parse_with_max_depth<'a>(
    arena: &'a Bump,
    source: &'a str,
    max_depth: usize,
) -> Result<ParsedExpr<'a>, ParseError> {
    check_nesting(source, max_depth)?;

    let mut pairs =
        ExpressionGrammar::parse(Rule::main, source).map_err(|e| convert_pest_error(e, source))?;
    let main = pairs.next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::Other {
                message: "missing expression".to_string(),
            },
            source.to_string(),
            Span::new(0, source.len()),
        )
    })?;

    let ann = arena.alloc(AnnotatedSource::new(arena, source));
    let builder = Builder { arena, ann, source };
    let expr = builder.build(main)?;
    trace!(source, "Parsed expression");

    Ok(ParsedExpr { expr, ann })
}

fn check_nesting(source: &str, max_depth: usize) -> Result<(), ParseError> {
    let error = |kind, span| ParseError::new(kind, source.to_string(), span);

    let tokens = lexer::tokenize(source).map_err(|e| {
        error(
            ParseErrorKind::UnexpectedToken {
                expected: "expression".to_string(),
                found: format!("'{}'", e.span.str_of(source)),
            },
            e.span,
        )
    })?;

    match lexer::check_delimiters(&tokens) {
        Ok(depth) if depth > max_depth => Err(error(
            ParseErrorKind::MaxDepthExceeded { depth, max_depth },
            Span::new(0, source.len()),
        )),
        Ok(_) => Ok(()),
        Err(DelimiterError::Unclosed { delimiter, span }) => {
            Err(error(ParseErrorKind::UnclosedDelimiter { delimiter }, span))
        }
        Err(DelimiterError::Mismatched {
            expected,
            found,
            span,
        }) => Err(error(
            ParseErrorKind::UnexpectedToken {
                expected: match expected {
                    Some(c) => format!("'{}'", c),
                    None => "end of input".to_string(),
                },
                found: format!("'{}'", found),
            },
            span,
        )),
    }
}

struct Builder<'a> {
    arena: &'a Bump,
    ann: &'a AnnotatedSource<'a, Expr<'a>>,
    source: &'a str,
}

impl<'a> Builder<'a> {
    fn alloc(&self, expr: Expr<'a>, span: Span) -> &'a Expr<'a> {
        let expr = self.arena.alloc(expr);
        self.ann.add_span(expr, span);
        expr
    }

    fn span_of(&self, expr: &Expr<'a>) -> Span {
        self.ann
            .span_of(expr)
            .unwrap_or_else(|| Span::new(0, self.source.len()))
    }

    fn error(&self, kind: ParseErrorKind, span: Span) -> ParseError {
        ParseError::new(kind, self.source.to_string(), span)
    }

    fn first_inner(&self, pair: Pair<'a, Rule>) -> Result<Pair<'a, Rule>, ParseError> {
        let span = Span::from(pair.as_span());
        pair.into_inner().next().ok_or_else(|| {
            self.error(
                ParseErrorKind::Other {
                    message: "missing expected pair in rule".to_string(),
                },
                span,
            )
        })
    }

    fn build(&self, pair: Pair<'a, Rule>) -> Result<&'a Expr<'a>, ParseError> {
        let span = Span::from(pair.as_span());
        match pair.as_rule() {
            Rule::main | Rule::grouped => self.build(self.first_inner(pair)?),

            Rule::expression => self.build_operators(pair.into_inner()),

            Rule::aggregate => {
                let items = self.build_all(pair.into_inner())?;
                Ok(self.alloc(Expr::Aggregate(items), span))
            }

            Rule::function_call => {
                let mut inner = pair.into_inner();
                let name = inner.next().map(|p| p.as_str()).unwrap_or_default();
                let function = SystemFunction::from_name(name).ok_or_else(|| {
                    self.error(
                        ParseErrorKind::UnknownFunction {
                            name: name.to_string(),
                        },
                        span.clone(),
                    )
                })?;
                let args = self.build_all(inner)?;
                Ok(self.alloc(Expr::Call { function, args }, span))
            }

            Rule::real | Rule::based | Rule::decimal | Rule::boolean => {
                let text = pair.as_str();
                let numeral = parse_numeral(text).map_err(|reason| {
                    self.error(
                        ParseErrorKind::InvalidNumber {
                            text: text.to_string(),
                            reason,
                        },
                        span.clone(),
                    )
                })?;
                Ok(self.alloc(Expr::Literal(Literal::Numeral(numeral)), span))
            }

            Rule::string => {
                let content = parse_string(pair.as_str()).ok_or_else(|| {
                    self.error(
                        ParseErrorKind::Other {
                            message: "malformed string literal".to_string(),
                        },
                        span.clone(),
                    )
                })?;
                Ok(self.alloc(Expr::Literal(Literal::Text(content)), span))
            }

            Rule::ident => Ok(self.alloc(Expr::Ident(pair.as_str()), span)),

            rule => Err(self.error(
                ParseErrorKind::Other {
                    message: format!("unexpected rule {:?}", rule),
                },
                span,
            )),
        }
    }

    fn build_all(&self, pairs: Pairs<'a, Rule>) -> Result<&'a [&'a Expr<'a>], ParseError> {
        let items = pairs
            .map(|p| self.build(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.arena.alloc_slice_copy(&items))
    }

    fn build_operators(&self, pairs: Pairs<'a, Rule>) -> Result<&'a Expr<'a>, ParseError> {
        PRATT_PARSER
            .map_primary(|primary| self.build(primary))
            .map_prefix(|op, rhs| {
                let rhs = rhs?;
                let op_span = Span::from(op.as_span());
                let span = Span::combine(&op_span, &self.span_of(rhs));
                let op = match op.as_rule() {
                    Rule::neg => UnaryOp::Neg,
                    Rule::pos => UnaryOp::Plus,
                    Rule::bit_not => UnaryOp::BitNot,
                    Rule::log_not => UnaryOp::Not,
                    rule => {
                        return Err(self.error(
                            ParseErrorKind::Other {
                                message: format!("unknown prefix operator {:?}", rule),
                            },
                            op_span,
                        ));
                    }
                };
                Ok(self.alloc(Expr::Unary { op, expr: rhs }, span))
            })
            .map_infix(|lhs, op, rhs| {
                let left = lhs?;
                let op_span = Span::from(op.as_span());
                let expr = match op.as_rule() {
                    Rule::ternary_op => {
                        let then_branch = self.build(self.first_inner(op)?)?;
                        Expr::Ternary {
                            cond: left,
                            then_branch,
                            else_branch: rhs?,
                        }
                    }
                    Rule::log_or | Rule::log_and => Expr::Boolean {
                        op: if op.as_rule() == Rule::log_or {
                            BoolOp::Or
                        } else {
                            BoolOp::And
                        },
                        left,
                        right: rhs?,
                    },
                    Rule::eq | Rule::ne | Rule::lt | Rule::gt | Rule::le | Rule::ge => {
                        let op = match op.as_rule() {
                            Rule::eq => ComparisonOp::Eq,
                            Rule::ne => ComparisonOp::Neq,
                            Rule::lt => ComparisonOp::Lt,
                            Rule::gt => ComparisonOp::Gt,
                            Rule::le => ComparisonOp::Le,
                            _ => ComparisonOp::Ge,
                        };
                        Expr::Comparison {
                            op,
                            left,
                            right: rhs?,
                        }
                    }
                    rule => {
                        let op = match rule {
                            Rule::add => BinaryOp::Add,
                            Rule::sub => BinaryOp::Sub,
                            Rule::mul => BinaryOp::Mul,
                            Rule::div => BinaryOp::Div,
                            Rule::rem => BinaryOp::Rem,
                            Rule::pow => BinaryOp::Pow,
                            Rule::shl => BinaryOp::Shl,
                            Rule::shr => BinaryOp::Shr,
                            Rule::bit_and => BinaryOp::BitAnd,
                            Rule::bit_or => BinaryOp::BitOr,
                            Rule::bit_xor => BinaryOp::BitXor,
                            _ => {
                                return Err(self.error(
                                    ParseErrorKind::Other {
                                        message: format!("unknown binary operator {:?}", rule),
                                    },
                                    op_span,
                                ));
                            }
                        };
                        Expr::Binary {
                            op,
                            left,
                            right: rhs?,
                        }
                    }
                };
                let span = match &expr {
                    Expr::Ternary { else_branch, .. } => {
                        Span::combine(&self.span_of(left), &self.span_of(else_branch))
                    }
                    Expr::Boolean { right, .. }
                    | Expr::Comparison { right, .. }
                    | Expr::Binary { right, .. } => {
                        Span::combine(&self.span_of(left), &self.span_of(right))
                    }
                    _ => op_span,
                };
                Ok(self.alloc(expr, span))
            })
            .parse(pairs)
    }
}
