//! Tree-walking evaluator for parsed expressions.
//!
//! The evaluator interprets a [`ParsedExpr`] and produces a [`Value`].
//! Expressions reaching the evaluator are expected to be fully substituted;
//! any identifier still present is reported as an error.
//!
//! ## Design Principles
//!
//! - **Never panic**: all adversarial inputs are reported as errors
//! - **Stack-safe**: depth tracking stops evaluation of deeply nested
//!   expressions before the native stack is exhausted
//!
//! ## Example
//!
//! ```ignore
//! use svexpr_core::{parser, evaluator};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let parsed = parser::parse(&arena, "'h10 + 1").unwrap();
//! let result = evaluator::eval(&parsed).unwrap();
//! assert_eq!(result.as_int(), Some(17));
//! ```

mod error;
mod eval;
mod functions;
mod operators;

#[cfg(test)]
mod eval_test;

pub use error::{ExecutionError, ExecutionErrorKind, ResourceExceededError, RuntimeError};
pub use eval::Evaluator;

use crate::{parser::ParsedExpr, values::Value};

/// Default maximum evaluation depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum evaluation stack depth (for recursion protection).
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluate a parsed expression with default limits.
pub fn eval(parsed: &ParsedExpr<'_>) -> Result<Value, ExecutionError> {
    eval_with_limits(parsed, DEFAULT_MAX_DEPTH)
}

/// Evaluate a parsed expression with a custom depth limit.
///
/// ```ignore
/// // Allow deeper recursion for a specific use case
/// let result = eval_with_limits(&parsed, 5000)?;
/// ```
pub fn eval_with_limits(parsed: &ParsedExpr<'_>, max_depth: usize) -> Result<Value, ExecutionError> {
    Evaluator::new(EvaluatorOptions { max_depth }, parsed).eval()
}
