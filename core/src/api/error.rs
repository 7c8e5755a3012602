//! Public error types for the expression API.
//!
//! Internal errors from substitution, parsing and evaluation are converted to
//! these types at the API boundary. Each variant carries the text its
//! diagnostics point into: the caller's text for resolution errors, the
//! substituted text for the others.

use core::fmt;

use crate::evaluator::ExecutionError;
use crate::parser::{ParseError, ParseErrorKind, Span};
use crate::substitution::SubstitutionError;

/// Why an expression is unresolvable.
#[derive(Debug, Clone)]
pub enum Error {
    /// An identifier could not be expanded: unknown, cyclic, or the text
    /// could not be tokenized.
    Resolution {
        diagnostics: Vec<Diagnostic>,
        source: String,
    },

    /// The substituted text is not a well-formed expression.
    Syntax {
        diagnostics: Vec<Diagnostic>,
        source: String,
    },

    /// The expression is well-formed but has no value (division by zero,
    /// arithmetic on a string, `$sqrt` of a negative number, ...).
    Evaluation {
        diagnostics: Vec<Diagnostic>,
        source: String,
    },

    /// A configured limit was hit (substitution passes, expansion length,
    /// nesting depth, evaluation depth).
    ResourceExceeded {
        diagnostics: Vec<Diagnostic>,
        source: String,
    },
}

impl Error {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Error::Resolution { diagnostics, .. }
            | Error::Syntax { diagnostics, .. }
            | Error::Evaluation { diagnostics, .. }
            | Error::ResourceExceeded { diagnostics, .. } => diagnostics,
        }
    }

    /// The text the diagnostic spans refer to.
    pub fn source_text(&self) -> &str {
        match self {
            Error::Resolution { source, .. }
            | Error::Syntax { source, .. }
            | Error::Evaluation { source, .. }
            | Error::ResourceExceeded { source, .. } => source,
        }
    }

    /// Error for blank input, which has nothing to evaluate.
    pub(crate) fn empty_expression(source: &str) -> Self {
        Error::Syntax {
            diagnostics: vec![Diagnostic {
                severity: Severity::Error,
                message: "Empty expression".to_string(),
                span: Span::new(0, source.len()),
                related: vec![],
                help: vec![],
                code: Some("P000".to_string()),
            }],
            source: source.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = match self {
            Error::Resolution { .. } => "Resolution error",
            Error::Syntax { .. } => "Syntax error",
            Error::Evaluation { .. } => "Evaluation error",
            Error::ResourceExceeded { .. } => "Resource limit exceeded",
        };
        match self.diagnostics().first() {
            Some(diagnostic) => write!(f, "{}: {}", category, diagnostic.message),
            None => f.write_str(category),
        }
    }
}

impl std::error::Error for Error {}

/// A diagnostic message (error, warning, or info) with source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Related locations that provide additional context.
    pub related: Vec<RelatedInfo>,

    /// Suggestions for fixing the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g., "P001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Related information for a diagnostic (e.g., "defined here").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub span: Span,
    pub message: String,
}

// ============================================================================
// Conversion from internal errors
// ============================================================================

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        let diagnostics = vec![err.to_diagnostic()];
        match err.kind {
            ParseErrorKind::MaxDepthExceeded { .. } => Error::ResourceExceeded {
                diagnostics,
                source: err.source,
            },
            _ => Error::Syntax {
                diagnostics,
                source: err.source,
            },
        }
    }
}

impl From<ExecutionError> for Error {
    fn from(err: ExecutionError) -> Self {
        let diagnostics = vec![err.to_diagnostic()];
        if err.is_resource_exceeded() {
            Error::ResourceExceeded {
                diagnostics,
                source: err.source,
            }
        } else {
            Error::Evaluation {
                diagnostics,
                source: err.source,
            }
        }
    }
}

impl Error {
    /// Converts a substitution failure on `source`, the caller's text.
    pub fn from_substitution(err: SubstitutionError, source: &str) -> Self {
        let diagnostics = vec![err.to_diagnostic(source)];
        let source = source.to_string();
        if err.is_resource_exceeded() {
            Error::ResourceExceeded {
                diagnostics,
                source,
            }
        } else {
            Error::Resolution {
                diagnostics,
                source,
            }
        }
    }
}
