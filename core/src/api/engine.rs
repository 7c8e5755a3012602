//! The expression engine.

use bumpalo::Bump;
use tracing::debug;

use super::{EngineOptions, Error};
use crate::resolver::ResolutionContext;
use crate::syntax::{self, Radix};
use crate::values::Value;
use crate::{evaluator, parser, radix, substitution};

/// Resolves and evaluates expressions against a [`ResolutionContext`].
///
/// The parser holds no per-call state: every call builds its own arena and
/// discards it before returning. It is `Send + Sync` whenever `C` is.
///
/// There are two surfaces:
/// - the fail-soft one ([`parse_expression`](Self::parse_expression),
///   [`evaluate`](Self::evaluate), [`is_valid_expression`](Self::is_valid_expression)),
///   which never fails and reports problems as the unresolvable value `"x"`;
/// - [`try_evaluate`](Self::try_evaluate), which says why.
///
/// # Example
///
/// ```
/// use svexpr_core::api::ExpressionParser;
/// use svexpr_core::resolver::ParameterTable;
/// use svexpr_core::syntax::Radix;
///
/// let table = ParameterTable::new()
///     .with("first", "'h1")
///     .with("second", "2*first")
///     .with("third", "second**second");
/// let parser = ExpressionParser::new(table);
///
/// assert_eq!(parser.parse_expression("third"), "4");
/// assert_eq!(parser.parse_expression("third + unknown"), "x");
/// assert_eq!(parser.dominant_radix("2*first"), Radix::Hexadecimal);
/// ```
#[derive(Debug, Clone)]
pub struct ExpressionParser<C> {
    context: C,
    options: EngineOptions,
}

impl<C: ResolutionContext> ExpressionParser<C> {
    pub fn new(context: C) -> Self {
        Self::with_options(context, EngineOptions::default())
    }

    pub fn with_options(context: C, options: EngineOptions) -> Self {
        Self { context, options }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Evaluates `expression` and formats the result: a decimal integer, a
    /// real with a fractional part, a quoted string, a brace-delimited
    /// aggregate, or `"x"`.
    pub fn parse_expression(&self, expression: &str) -> String {
        self.evaluate(expression).to_string()
    }

    /// Evaluates `expression`, mapping every failure to [`Value::Unresolvable`].
    pub fn evaluate(&self, expression: &str) -> Value {
        match self.try_evaluate(expression) {
            Ok(value) => value,
            Err(err) => {
                debug!(expression, error = %err, "Expression is unresolvable");
                Value::Unresolvable
            }
        }
    }

    /// Evaluates `expression`, reporting why it has no value.
    pub fn try_evaluate(&self, expression: &str) -> Result<Value, Error> {
        let text = self.substitute(expression)?;
        self.evaluate_literal_text(&text)
    }

    /// Expands every identifier in `expression` to literal text.
    pub fn substitute(&self, expression: &str) -> Result<String, Error> {
        if expression.trim().is_empty() {
            return Err(Error::empty_expression(expression));
        }
        substitution::substitute(expression, &self.context, &self.options.substitution)
            .map_err(|err| Error::from_substitution(err, expression))
    }

    fn evaluate_literal_text(&self, text: &str) -> Result<Value, Error> {
        let limits = &self.options.execution;
        let arena = Bump::new();
        let parsed = parser::parse_with_max_depth(&arena, text, limits.max_nesting_depth)?;
        let value = evaluator::eval_with_limits(&parsed, limits.max_depth)?;
        Ok(value)
    }

    pub fn is_valid_expression(&self, expression: &str) -> bool {
        !self.evaluate(expression).is_unresolvable()
    }

    /// Radix the value of `expression` should be displayed in, according to
    /// the configured [`RadixPolicy`](crate::radix::RadixPolicy).
    /// Unresolvable expressions report decimal.
    pub fn dominant_radix(&self, expression: &str) -> Radix {
        let dominant = self.substitute(expression).and_then(|text| {
            self.evaluate_literal_text(&text)?;
            Ok(radix::dominant_radix(&text, self.options.radix_policy))
        });
        match dominant {
            Ok(radix) => radix,
            Err(err) => {
                debug!(expression, error = %err, "No radix for unresolvable expression");
                Radix::Decimal
            }
        }
    }

    /// Whether `text` is empty, a single numeral literal or a single string
    /// literal.
    pub fn is_plain_value(text: &str) -> bool {
        syntax::is_plain_value(text)
    }

    /// Whether `text` looks like an aggregate.
    pub fn is_array_expression(text: &str) -> bool {
        text.contains('{') && text.contains('}')
    }
}
