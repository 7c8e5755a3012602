use crate::parser::{
    BinaryOp, BoolOp, ComparisonOp, SystemFunction, UnaryOp, syntax::AnnotatedSource,
};
use crate::syntax::NumeralLiteral;

#[derive(Debug)]
pub struct ParsedExpr<'a> {
    pub expr: &'a Expr<'a>,
    pub ann: &'a AnnotatedSource<'a, Expr<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    Binary {
        op: BinaryOp,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    },
    Boolean {
        op: BoolOp,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    },
    Comparison {
        op: ComparisonOp,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    },
    Unary {
        op: UnaryOp,
        expr: &'a Expr<'a>,
    },
    Ternary {
        cond: &'a Expr<'a>,
        then_branch: &'a Expr<'a>,
        else_branch: &'a Expr<'a>,
    },
    Call {
        function: SystemFunction,
        args: &'a [&'a Expr<'a>],
    },
    /// `{a, b}` or `'{a, b}`.
    Aggregate(&'a [&'a Expr<'a>]),
    Literal(Literal<'a>),
    /// A reference that was not substituted away before parsing.
    Ident(&'a str),
}

impl<'a> Expr<'a> {
    pub fn as_ptr(&self) -> *const Self {
        self as *const _
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum Literal<'a> {
    Numeral(NumeralLiteral),
    /// String content without the surrounding quotes.
    Text(&'a str),
}

impl<'a> core::fmt::Debug for Literal<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use crate::syntax::Magnitude;

        match self {
            Literal::Numeral(n) => match n.magnitude {
                Magnitude::Integer(v) => write!(f, "Int({v}, radix: {})", n.radix),
                Magnitude::Real(v) => write!(f, "Real({v})"),
            },
            Literal::Text(s) => write!(f, "Text({s:?})"),
        }
    }
}
