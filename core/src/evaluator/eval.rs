//! Core evaluation logic.

use tracing::trace;

use crate::{
    evaluator::{
        EvaluatorOptions, ExecutionError, ExecutionErrorKind,
        ResourceExceededError::*,
        RuntimeError::{self, *},
        functions, operators,
    },
    parser::{BoolOp, Expr, Literal, ParsedExpr, Span},
    values::Value,
};

/// Tree-walking evaluator for parsed expressions.
pub struct Evaluator<'a, 'p> {
    options: EvaluatorOptions,
    /// The parsed expression being evaluated (used for error context).
    parsed: &'p ParsedExpr<'a>,
    depth: usize,
}

impl<'a, 'p> Evaluator<'a, 'p> {
    pub fn new(options: EvaluatorOptions, parsed: &'p ParsedExpr<'a>) -> Self {
        Self {
            options,
            parsed,
            depth: 0,
        }
    }

    fn add_error_context(&self, expr: &Expr<'a>, kind: ExecutionErrorKind) -> ExecutionError {
        let span = self
            .parsed
            .ann
            .span_of(expr)
            .unwrap_or_else(|| Span::new(0, 0));
        let source = self.parsed.ann.source.to_string();
        ExecutionError { kind, source, span }
    }

    fn runtime(&self, expr: &Expr<'a>, error: RuntimeError) -> ExecutionError {
        self.add_error_context(expr, error.into())
    }

    /// Evaluate the whole expression.
    pub fn eval(&mut self) -> Result<Value, ExecutionError> {
        let value = self.eval_expr(self.parsed.expr)?;
        trace!(%value, "Evaluated expression");
        Ok(value)
    }

    fn eval_expr(&mut self, expr: &Expr<'a>) -> Result<Value, ExecutionError> {
        if self.depth >= self.options.max_depth {
            return Err(self.add_error_context(
                expr,
                StackOverflow {
                    depth: self.depth,
                    max_depth: self.options.max_depth,
                }
                .into(),
            ));
        }

        self.depth += 1;
        let result = self.eval_expr_inner(expr);
        self.depth -= 1;

        result
    }

    fn eval_expr_inner(&mut self, expr: &Expr<'a>) -> Result<Value, ExecutionError> {
        match expr {
            Expr::Literal(Literal::Numeral(numeral)) => Ok(Value::from(*numeral)),
            Expr::Literal(Literal::Text(text)) => Ok(Value::from(*text)),

            Expr::Ident(name) => Err(self.runtime(
                expr,
                UnresolvedIdentifier {
                    name: name.to_string(),
                },
            )),

            Expr::Binary { .. } | Expr::Comparison { .. } | Expr::Boolean { .. } => {
                self.eval_chain(expr)
            }

            Expr::Unary { op, expr: operand } => {
                let value = self.eval_expr(operand)?;
                operators::eval_unary(*op, &value).map_err(|e| self.runtime(expr, e))
            }

            Expr::Ternary {
                cond,
                then_branch,
                else_branch,
            } => match self.truth_of("?:", cond)? {
                Some(true) => self.eval_expr(then_branch),
                Some(false) => self.eval_expr(else_branch),
                None => Ok(Value::Unresolvable),
            },

            Expr::Call { function, args } => {
                let mut values = Vec::with_capacity(args.len());
                for arg in args.iter() {
                    values.push(self.eval_expr(arg)?);
                }
                functions::call(*function, &values).map_err(|e| self.runtime(expr, e))
            }

            Expr::Aggregate(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items.iter() {
                    values.push(self.eval_expr(item)?);
                }
                if values.iter().any(Value::is_unresolvable) {
                    return Ok(Value::Unresolvable);
                }
                Ok(Value::Vector(values))
            }
        }
    }

    /// Evaluate a left-associative operator chain such as `a + b - c < d`.
    ///
    /// The left spine is walked with a loop, so a long flat expression costs
    /// one level of depth rather than one per operator.
    fn eval_chain(&mut self, expr: &Expr<'a>) -> Result<Value, ExecutionError> {
        let mut spine = Vec::new();
        let mut leftmost = expr;
        while let Expr::Binary { left, .. }
        | Expr::Comparison { left, .. }
        | Expr::Boolean { left, .. } = leftmost
        {
            spine.push(leftmost);
            leftmost = *left;
        }

        let mut value = self.eval_expr(leftmost)?;
        for node in spine.into_iter().rev() {
            value = match node {
                Expr::Binary { op, right, .. } => {
                    let right = self.eval_expr(right)?;
                    operators::eval_binary(*op, &value, &right)
                        .map_err(|e| self.runtime(node, e))?
                }
                Expr::Comparison { op, right, .. } => {
                    let right = self.eval_expr(right)?;
                    operators::eval_comparison(*op, &value, &right)
                        .map_err(|e| self.runtime(node, e))?
                }
                Expr::Boolean { op, left, right } => {
                    self.eval_boolean(*op, left, &value, right)?
                }
                _ => value,
            };
        }
        Ok(value)
    }

    /// `left_value` is the already evaluated `left` operand.
    fn eval_boolean(
        &mut self,
        op: BoolOp,
        left: &Expr<'a>,
        left_value: &Value,
        right: &Expr<'a>,
    ) -> Result<Value, ExecutionError> {
        let Some(left_truth) = self.truth(op.symbol(), left, left_value)? else {
            return Ok(Value::Unresolvable);
        };

        // Short-circuit evaluation
        match (op, left_truth) {
            (BoolOp::And, false) => return Ok(Value::from(false)),
            (BoolOp::Or, true) => return Ok(Value::from(true)),
            _ => {}
        }

        match self.truth_of(op.symbol(), right)? {
            Some(right_truth) => Ok(Value::from(right_truth)),
            None => Ok(Value::Unresolvable),
        }
    }

    /// Evaluate a condition. `Ok(None)` means the condition is unresolvable.
    fn truth_of(&mut self, op: &'static str, expr: &Expr<'a>) -> Result<Option<bool>, ExecutionError> {
        let value = self.eval_expr(expr)?;
        self.truth(op, expr, &value)
    }

    fn truth(
        &self,
        op: &'static str,
        expr: &Expr<'a>,
        value: &Value,
    ) -> Result<Option<bool>, ExecutionError> {
        if value.is_unresolvable() {
            return Ok(None);
        }
        match value.truth() {
            Some(truth) => Ok(Some(truth)),
            None => Err(self.runtime(expr, operators::unary_mismatch(op, value))),
        }
    }
}
