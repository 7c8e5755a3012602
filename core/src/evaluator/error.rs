//! Runtime evaluation errors.
//!
//! # Error Categories
//!
//! - **Runtime errors**: operations that have no value, such as division by
//!   zero, arithmetic on strings or aggregates, or `$sqrt` of a negative
//!   number.
//!
//! - **Resource exceeded errors**: evaluation was stopped because it went
//!   deeper than the configured limit.
//!
//! On the fail-soft surface both categories become the unresolvable value.

use core::fmt;

use crate::api::{Diagnostic, Severity};
use crate::parser::{Span, SystemFunction};
use crate::values::ValueKind;

/// Evaluation error with the source location of the failing node.
#[derive(Debug, Clone)]
pub struct ExecutionError {
    pub kind: ExecutionErrorKind,
    pub source: String,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum ExecutionErrorKind {
    Runtime(RuntimeError),
    ResourceExceeded(ResourceExceededError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// Division or remainder by zero (integer or real).
    DivisionByZero,

    /// An operator applied to operands it is not defined for. `right` is
    /// `None` for unary operators.
    TypeMismatch {
        op: &'static str,
        left: ValueKind,
        right: Option<ValueKind>,
    },

    /// A bitwise, shift, remainder or `$clog2` operation on a real.
    IntegerOnly { op: &'static str },

    /// A mathematically undefined result, e.g. `0 ** -1` or `$sqrt(-1)`.
    Domain { message: String },

    /// A system function called with the wrong number of arguments.
    Arity {
        function: SystemFunction,
        expected: usize,
        found: usize,
    },

    /// An identifier that was never substituted with its definition.
    UnresolvedIdentifier { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceExceededError {
    /// Evaluation recursion depth exceeded.
    StackOverflow { depth: usize, max_depth: usize },
}

impl ExecutionError {
    pub fn is_resource_exceeded(&self) -> bool {
        matches!(self.kind, ExecutionErrorKind::ResourceExceeded(_))
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, code, help) = match &self.kind {
            ExecutionErrorKind::Runtime(e) => {
                let (code, help) = match e {
                    RuntimeError::DivisionByZero => ("E001", None),
                    RuntimeError::TypeMismatch { .. } => (
                        "E002",
                        Some("Strings only support == and !=, aggregates support no operators"),
                    ),
                    RuntimeError::IntegerOnly { .. } => ("E003", None),
                    RuntimeError::Domain { .. } => ("E004", None),
                    RuntimeError::Arity { .. } => ("E005", None),
                    RuntimeError::UnresolvedIdentifier { .. } => (
                        "E006",
                        Some("Identifiers must be substituted before evaluation"),
                    ),
                };
                (e.to_string(), code, help)
            }
            ExecutionErrorKind::ResourceExceeded(e) => (
                e.to_string(),
                "E100",
                Some("Reduce nesting or raise the evaluation depth limit"),
            ),
        };

        Diagnostic {
            severity: Severity::Error,
            message,
            span: self.span.clone(),
            related: vec![],
            help: help.into_iter().map(str::to_string).collect(),
            code: Some(code.to_string()),
        }
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExecutionErrorKind::Runtime(e) => write!(f, "{}", e)?,
            ExecutionErrorKind::ResourceExceeded(e) => write!(f, "{}", e)?,
        }
        write!(f, " at {}..{}", self.span.start(), self.span.end())
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::DivisionByZero => write!(f, "Division by zero"),
            RuntimeError::TypeMismatch {
                op,
                left,
                right: Some(right),
            } => write!(f, "Operator '{}' cannot be applied to {} and {}", op, left, right),
            RuntimeError::TypeMismatch {
                op,
                left,
                right: None,
            } => write!(f, "Operator '{}' cannot be applied to {}", op, left),
            RuntimeError::IntegerOnly { op } => {
                write!(f, "Operator '{}' requires integer operands", op)
            }
            RuntimeError::Domain { message } => write!(f, "Undefined result: {}", message),
            RuntimeError::Arity {
                function,
                expected,
                found,
            } => write!(
                f,
                "{} expects {} argument(s), found {}",
                function, expected, found
            ),
            RuntimeError::UnresolvedIdentifier { name } => {
                write!(f, "Unresolved identifier '{}'", name)
            }
        }
    }
}

impl fmt::Display for ResourceExceededError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceExceededError::StackOverflow { depth, max_depth } => {
                write!(
                    f,
                    "Evaluation stack overflow: depth {} exceeds maximum of {}",
                    depth, max_depth
                )
            }
        }
    }
}

impl From<RuntimeError> for ExecutionErrorKind {
    fn from(e: RuntimeError) -> Self {
        ExecutionErrorKind::Runtime(e)
    }
}

impl From<ResourceExceededError> for ExecutionErrorKind {
    fn from(e: ResourceExceededError) -> Self {
        ExecutionErrorKind::ResourceExceeded(e)
    }
}

impl std::error::Error for ExecutionError {}

impl std::error::Error for RuntimeError {}

impl std::error::Error for ResourceExceededError {}
