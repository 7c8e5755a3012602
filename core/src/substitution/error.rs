use core::fmt;

use crate::api::{Diagnostic, Severity};
use crate::parser::Span;

/// Why an expression could not be expanded to literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionError {
    /// The context has no definition for `name`. `span` locates the
    /// identifier when it appears in the caller's text rather than in a
    /// spliced definition.
    UnknownIdentifier { name: String, span: Option<Span> },

    /// No fixed point within the pass limit, usually a reference cycle.
    PassLimitExceeded { max_passes: usize },

    /// The expanded text grew past the configured limit.
    ExpansionTooLarge { len: usize, max_len: usize },

    /// The text could not be tokenized.
    Malformed { message: String },
}

impl SubstitutionError {
    pub fn is_resource_exceeded(&self) -> bool {
        matches!(
            self,
            SubstitutionError::PassLimitExceeded { .. } | SubstitutionError::ExpansionTooLarge { .. }
        )
    }

    pub fn span(&self) -> Option<&Span> {
        match self {
            SubstitutionError::UnknownIdentifier { span, .. } => span.as_ref(),
            _ => None,
        }
    }

    /// Diagnostic against `source`, the text that was being expanded. Errors
    /// without a location cover the whole text.
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        let (code, help) = match self {
            SubstitutionError::UnknownIdentifier { .. } => {
                ("R001", "Define the parameter or check its spelling")
            }
            SubstitutionError::PassLimitExceeded { .. } => {
                ("R002", "Check the definitions for a circular reference")
            }
            SubstitutionError::ExpansionTooLarge { .. } => {
                ("R003", "Simplify the parameter definitions")
            }
            SubstitutionError::Malformed { .. } => ("R004", "Check for an unterminated string"),
        };

        Diagnostic {
            severity: Severity::Error,
            message: self.to_string(),
            span: self.span().cloned().unwrap_or_else(|| Span::new(0, source.len())),
            related: vec![],
            help: vec![help.to_string()],
            code: Some(code.to_string()),
        }
    }
}

impl fmt::Display for SubstitutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubstitutionError::UnknownIdentifier { name, .. } => {
                write!(f, "Unknown identifier '{}'", name)
            }
            SubstitutionError::PassLimitExceeded { max_passes } => write!(
                f,
                "Substitution did not finish within {} passes (circular reference?)",
                max_passes
            ),
            SubstitutionError::ExpansionTooLarge { len, max_len } => write!(
                f,
                "Expanded expression is {} bytes long, limit is {}",
                len, max_len
            ),
            SubstitutionError::Malformed { message } => {
                write!(f, "Malformed expression: {}", message)
            }
        }
    }
}

impl std::error::Error for SubstitutionError {}
