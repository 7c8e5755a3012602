pub mod error;
mod parsed_expr;
#[allow(clippy::module_inception)]
pub mod parser;
mod syntax;

// Re-export the parser and rule enum for external use
pub use parser::ExpressionGrammar;
pub use parser::Rule;
pub use parser::{DEFAULT_MAX_DEPTH, parse, parse_with_max_depth};

pub use error::{ParseError, ParseErrorKind};
pub use parsed_expr::{Expr, Literal, ParsedExpr};
pub use syntax::AnnotatedSource;
pub use syntax::{BinaryOp, BoolOp, ComparisonOp, Span, SystemFunction, UnaryOp};

#[cfg(test)]
mod parse_test;

#[cfg(test)]
mod rule_valid_test;
